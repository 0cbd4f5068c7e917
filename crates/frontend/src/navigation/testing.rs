//! Test doubles for the routing engine

use contracts::console::PagesResponse;

use super::surface::{ContentSurface, ContentView, HistorySink, NavBarSurface, NavEntry};

/// Surface that records everything the engine does to it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub content: Option<ContentView>,
    pub content_log: Vec<ContentView>,
    pub entries: Vec<NavEntry>,
    pub render_calls: usize,
    /// Nav ids currently carrying the active class
    pub active: Vec<String>,
    pub max_active_seen: usize,
    pub history: Vec<(String, String)>,
}

impl ContentSurface for RecordingSurface {
    fn show_content(&mut self, view: ContentView) {
        self.content_log.push(view.clone());
        self.content = Some(view);
    }
}

impl NavBarSurface for RecordingSurface {
    fn render_entries(&mut self, entries: Vec<NavEntry>) {
        self.entries = entries;
        self.active.clear();
        self.render_calls += 1;
    }

    fn set_active_class(&mut self, nav_id: &str, active: bool) {
        if active {
            if !self.active.iter().any(|id| id == nav_id) {
                self.active.push(nav_id.to_string());
            }
        } else {
            self.active.retain(|id| id != nav_id);
        }
        self.max_active_seen = self.max_active_seen.max(self.active.len());
    }
}

impl HistorySink for RecordingSurface {
    fn push_entry(&mut self, title: &str, fragment: &str) {
        self.history.push((title.to_string(), fragment.to_string()));
    }
}

pub fn catalog(pages: &[(&str, &str)], main: &str) -> PagesResponse {
    PagesResponse {
        pages: pages.iter().map(|(id, _)| id.to_string()).collect(),
        names: pages.iter().map(|(_, name)| name.to_string()).collect(),
        main: main.to_string(),
    }
}

/// The catalog served by a stock console host
pub fn console_catalog() -> PagesResponse {
    catalog(
        &[
            ("overview", "Overview"),
            ("bundles", "Bundles"),
            ("services", "Services"),
        ],
        "overview",
    )
}
