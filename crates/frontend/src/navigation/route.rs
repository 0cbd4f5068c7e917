/// A location fragment split into page id and sub-path: `#{page_id}/{sub_path}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub page_id: String,
    pub sub_path: String,
}

impl Route {
    /// An empty `sub_path` is replaced by `default_sub_path`.
    pub fn new(page_id: impl Into<String>, sub_path: &str, default_sub_path: &str) -> Self {
        let sub_path = if sub_path.is_empty() {
            default_sub_path
        } else {
            sub_path
        };
        Self {
            page_id: page_id.into(),
            sub_path: sub_path.to_string(),
        }
    }

    /// Parses `page_id[/sub_path]`, splitting on the first `/`.
    ///
    /// A leading `#` is ignored. Returns `None` when no page id is present.
    pub fn parse(fragment: &str, default_sub_path: &str) -> Option<Self> {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let (page_id, sub_path) = fragment.split_once('/').unwrap_or((fragment, ""));
        if page_id.is_empty() {
            return None;
        }
        Some(Self::new(page_id, sub_path, default_sub_path))
    }

    pub fn fragment(&self) -> String {
        format!("#{}/{}", self.page_id, self.sub_path)
    }
}
