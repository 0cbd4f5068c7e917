/// One navigable console page, as announced by the page catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    id: String,
    display_name: String,
    nav_element_id: String,
}

impl PageDescriptor {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        let nav_element_id = nav_element_id(&display_name);
        Self {
            id: id.into(),
            display_name,
            nav_element_id,
        }
    }

    /// Server-assigned id, used in URLs and as registry key
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// DOM id of the page's entry in the navigation bar
    pub fn nav_element_id(&self) -> &str {
        &self.nav_element_id
    }
}

/// Derives the navigation element id from a display name: `"nav-" + lowercase(name)`.
pub fn nav_element_id(display_name: &str) -> String {
    format!("nav-{}", display_name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_element_id_derived_from_name() {
        let page = PageDescriptor::new("bundles", "Bundles");
        assert_eq!(page.id(), "bundles");
        assert_eq!(page.display_name(), "Bundles");
        assert_eq!(page.nav_element_id(), "nav-bundles");
    }

    #[test]
    fn test_nav_element_id_ignores_page_id() {
        let page = PageDescriptor::new("svc", "Services");
        assert_eq!(page.nav_element_id(), "nav-services");
        assert_eq!(nav_element_id("OverView"), "nav-overview");
    }
}
