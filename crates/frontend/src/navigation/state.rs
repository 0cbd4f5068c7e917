use contracts::console::DEFAULT_SUB_PATH;

use super::page::PageDescriptor;

/// The page the console currently considers active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_page: Option<PageDescriptor>,
    current_sub_path: String,
    /// The load of the current page ended in an error panel
    failed: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_page: None,
            current_sub_path: DEFAULT_SUB_PATH.to_string(),
            failed: false,
        }
    }
}

impl NavigationState {
    pub fn current_page(&self) -> Option<&PageDescriptor> {
        self.current_page.as_ref()
    }

    pub fn current_sub_path(&self) -> &str {
        &self.current_sub_path
    }

    /// Whether `page_id`/`sub_path` is displayed or being loaded. A failed
    /// load does not count.
    pub fn is_showing(&self, page_id: &str, sub_path: &str) -> bool {
        !self.failed
            && self
                .current_page
                .as_ref()
                .map_or(false, |page| page.id() == page_id)
            && self.current_sub_path == sub_path
    }

    pub(crate) fn enter(&mut self, page: PageDescriptor, sub_path: &str) {
        self.current_page = Some(page);
        self.current_sub_path = sub_path.to_string();
        self.failed = false;
    }

    pub(crate) fn mark_failed(&mut self) {
        self.failed = true;
    }
}
