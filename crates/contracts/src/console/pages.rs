use serde::{Deserialize, Serialize};

/// Page catalog returned by `GET api/v1/pages`
///
/// `pages[i]` and `names[i]` describe the same page. `main` is the page shown
/// when the location fragment does not name a known page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PagesResponse {
    /// Page ids, in navigation bar order
    pub pages: Vec<String>,
    /// Display names, positionally matching `pages`
    pub names: Vec<String>,
    /// Fallback page id
    pub main: String,
}

impl PagesResponse {
    /// Iterates over `(id, name)` pairs, stopping at the shorter sequence.
    ///
    /// Check [`PagesResponse::is_consistent`] first when a length mismatch
    /// must be detected.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pages
            .iter()
            .zip(self.names.iter())
            .map(|(id, name)| (id.as_str(), name.as_str()))
    }

    pub fn is_consistent(&self) -> bool {
        self.pages.len() == self.names.len()
    }
}
