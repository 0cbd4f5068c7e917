use leptos::prelude::*;

use crate::navigation::{ContentSurface, ContentView, HistorySink, NavBarSurface, NavEntry};
use crate::shared::browser;

/// Reactive state rendered by the console layout.
///
/// The routing controller writes here through the surface traits; the
/// components only read.
#[derive(Clone, Copy)]
pub struct ConsoleContext {
    pub content: RwSignal<ContentView>,
    pub nav_entries: RwSignal<Vec<NavEntry>>,
    /// Nav id of the entry carrying the `active` class
    pub active_nav: RwSignal<Option<String>>,
}

impl ConsoleContext {
    pub fn new() -> Self {
        Self {
            content: RwSignal::new(ContentView::Loading),
            nav_entries: RwSignal::new(vec![]),
            active_nav: RwSignal::new(None),
        }
    }
}

impl Default for ConsoleContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSurface for ConsoleContext {
    fn show_content(&mut self, view: ContentView) {
        self.content.set(view);
    }
}

impl NavBarSurface for ConsoleContext {
    fn render_entries(&mut self, entries: Vec<NavEntry>) {
        log::debug!("navigation bar: {} entries", entries.len());
        self.nav_entries.set(entries);
        self.active_nav.set(None);
    }

    fn set_active_class(&mut self, nav_id: &str, active: bool) {
        if active {
            self.active_nav.set(Some(nav_id.to_string()));
        } else {
            self.active_nav.update(|current| {
                if current.as_deref() == Some(nav_id) {
                    *current = None;
                }
            });
        }
    }
}

impl HistorySink for ConsoleContext {
    fn push_entry(&mut self, title: &str, fragment: &str) {
        browser::push_history(title, fragment);
    }
}
