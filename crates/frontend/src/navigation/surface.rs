//! Seams between the routing engine and whatever displays it.
//!
//! In the browser these are backed by Leptos signals and `window.history`;
//! tests use a recording implementation.

use super::page::PageDescriptor;

/// What the content area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    Loading,
    /// Raw payload returned by the server
    Html(String),
    PageError { page_name: String },
    CatalogError { reason: String },
}

/// One entry of the navigation bar. Activating it shows `page_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub page_id: String,
    pub nav_id: String,
    pub label: String,
}

impl From<&PageDescriptor> for NavEntry {
    fn from(page: &PageDescriptor) -> Self {
        Self {
            page_id: page.id().to_string(),
            nav_id: page.nav_element_id().to_string(),
            label: page.display_name().to_string(),
        }
    }
}

pub trait ContentSurface {
    fn show_content(&mut self, view: ContentView);
}

pub trait NavBarSurface {
    /// Replaces the whole bar. Freshly rendered entries carry no active marker.
    fn render_entries(&mut self, entries: Vec<NavEntry>);

    fn set_active_class(&mut self, nav_id: &str, active: bool);
}

pub trait HistorySink {
    fn push_entry(&mut self, title: &str, fragment: &str);
}

/// Everything the routing controller drives.
pub trait ConsoleSurface: ContentSurface + NavBarSurface + HistorySink {}

impl<T: ContentSurface + NavBarSurface + HistorySink> ConsoleSurface for T {}
