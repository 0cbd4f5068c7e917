use super::page::PageDescriptor;
use super::surface::{NavBarSurface, NavEntry};

/// Keeps the navigation bar in sync with the active page.
///
/// Tracks which element holds the `active` marker so that at most one does.
#[derive(Debug, Default)]
pub struct NavigationBarRenderer {
    active: Option<String>,
}

impl NavigationBarRenderer {
    /// Publishes one entry per page. Calling it again replaces the bar.
    pub fn render<S: NavBarSurface + ?Sized>(&mut self, surface: &mut S, pages: &[PageDescriptor]) {
        surface.render_entries(pages.iter().map(NavEntry::from).collect());
        if let Some(active) = &self.active {
            surface.set_active_class(active, true);
        }
    }

    pub fn set_active<S: NavBarSurface + ?Sized>(&mut self, surface: &mut S, page: &PageDescriptor) {
        if self.active.as_deref() == Some(page.nav_element_id()) {
            return;
        }
        if let Some(previous) = self.active.take() {
            surface.set_active_class(&previous, false);
        }
        surface.set_active_class(page.nav_element_id(), true);
        self.active = Some(page.nav_element_id().to_string());
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::testing::RecordingSurface;

    fn pages() -> Vec<PageDescriptor> {
        vec![
            PageDescriptor::new("overview", "Overview"),
            PageDescriptor::new("bundles", "Bundles"),
        ]
    }

    #[test]
    fn test_render_one_entry_per_page() {
        let mut surface = RecordingSurface::default();
        let mut renderer = NavigationBarRenderer::default();
        renderer.render(&mut surface, &pages());

        let nav_ids: Vec<&str> = surface.entries.iter().map(|e| e.nav_id.as_str()).collect();
        assert_eq!(nav_ids, vec!["nav-overview", "nav-bundles"]);
        assert_eq!(surface.entries[1].page_id, "bundles");
        assert_eq!(surface.entries[1].label, "Bundles");
    }

    #[test]
    fn test_render_twice_does_not_duplicate() {
        let mut surface = RecordingSurface::default();
        let mut renderer = NavigationBarRenderer::default();
        let pages = pages();
        renderer.render(&mut surface, &pages);
        renderer.set_active(&mut surface, &pages[1]);
        renderer.render(&mut surface, &pages);

        assert_eq!(surface.entries.len(), 2);
        assert_eq!(surface.active, vec!["nav-bundles".to_string()]);
    }

    #[test]
    fn test_set_active_moves_single_marker() {
        let mut surface = RecordingSurface::default();
        let mut renderer = NavigationBarRenderer::default();
        let pages = pages();
        renderer.render(&mut surface, &pages);

        renderer.set_active(&mut surface, &pages[0]);
        assert_eq!(surface.active, vec!["nav-overview".to_string()]);

        renderer.set_active(&mut surface, &pages[1]);
        renderer.set_active(&mut surface, &pages[1]);
        assert_eq!(surface.active, vec!["nav-bundles".to_string()]);
        assert_eq!(renderer.active(), Some("nav-bundles"));
        assert_eq!(surface.max_active_seen, 1);
    }
}
