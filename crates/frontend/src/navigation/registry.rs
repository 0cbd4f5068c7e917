use std::collections::{HashMap, HashSet};

use contracts::console::PagesResponse;

use super::error::NavigationError;
use super::page::PageDescriptor;

/// Pages known to the console, built once from the page catalog.
///
/// Descriptors live in `entries` (server order); `index` maps a page id to its
/// position, so every mapped descriptor is rendered exactly once.
#[derive(Debug, Clone)]
pub struct NavigationRegistry {
    entries: Vec<PageDescriptor>,
    index: HashMap<String, usize>,
    main: usize,
}

impl NavigationRegistry {
    /// Builds the registry, rejecting catalogs that break the positional
    /// `pages`/`names` contract or that would make lookups ambiguous.
    pub fn build(catalog: &PagesResponse) -> Result<Self, NavigationError> {
        if !catalog.is_consistent() {
            return Err(NavigationError::MalformedCatalog(format!(
                "{} page ids for {} names",
                catalog.pages.len(),
                catalog.names.len()
            )));
        }

        let mut entries = Vec::with_capacity(catalog.pages.len());
        let mut index = HashMap::with_capacity(catalog.pages.len());
        let mut nav_ids = HashSet::with_capacity(catalog.pages.len());

        for (position, (id, name)) in catalog.entries().enumerate() {
            if id.is_empty() {
                return Err(NavigationError::MalformedCatalog(format!(
                    "empty page id at position {}",
                    position
                )));
            }
            if index.contains_key(id) {
                return Err(NavigationError::MalformedCatalog(format!(
                    "duplicate page id '{}'",
                    id
                )));
            }

            let page = PageDescriptor::new(id, name);
            if !nav_ids.insert(page.nav_element_id().to_string()) {
                return Err(NavigationError::MalformedCatalog(format!(
                    "page '{}' collides on navigation id '{}'",
                    id,
                    page.nav_element_id()
                )));
            }

            index.insert(id.to_string(), entries.len());
            entries.push(page);
        }

        let main = match index.get(catalog.main.as_str()) {
            Some(position) => *position,
            None => {
                return Err(NavigationError::MalformedCatalog(format!(
                    "main page '{}' is not in the page list",
                    catalog.main
                )))
            }
        };

        Ok(Self {
            entries,
            index,
            main,
        })
    }

    pub fn lookup(&self, id: &str) -> Option<&PageDescriptor> {
        self.index.get(id).map(|position| &self.entries[*position])
    }

    /// Like [`lookup`](Self::lookup), with the miss turned into an error.
    pub fn require(&self, id: &str) -> Result<&PageDescriptor, NavigationError> {
        self.lookup(id)
            .ok_or_else(|| NavigationError::UnknownPageId(id.to_string()))
    }

    /// Pages in catalog order, for rendering the navigation bar
    pub fn ordered_entries(&self) -> &[PageDescriptor] {
        &self.entries
    }

    /// Page shown when the location does not name a known page
    pub fn main_page(&self) -> &PageDescriptor {
        &self.entries[self.main]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::testing::catalog;

    #[test]
    fn test_lookup_matches_catalog() {
        let registry = NavigationRegistry::build(&catalog(
            &[("overview", "Overview"), ("bundles", "Bundles"), ("services", "Services")],
            "overview",
        ))
        .unwrap();

        assert_eq!(registry.len(), 3);
        for (id, name) in [("overview", "Overview"), ("bundles", "Bundles"), ("services", "Services")] {
            let page = registry.lookup(id).unwrap();
            assert_eq!(page.id(), id);
            assert_eq!(page.nav_element_id(), format!("nav-{}", name.to_lowercase()));
        }
        assert!(registry.lookup("missing").is_none());
        assert_eq!(registry.main_page().id(), "overview");
    }

    #[test]
    fn test_ordered_entries_keep_server_order() {
        let registry = NavigationRegistry::build(&catalog(
            &[("services", "Services"), ("overview", "Overview"), ("bundles", "Bundles")],
            "overview",
        ))
        .unwrap();

        let ids: Vec<&str> = registry.ordered_entries().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["services", "overview", "bundles"]);
    }

    #[test]
    fn test_require_unknown_page() {
        let registry =
            NavigationRegistry::build(&catalog(&[("overview", "Overview")], "overview")).unwrap();
        assert_eq!(
            registry.require("nope").unwrap_err(),
            NavigationError::UnknownPageId("nope".to_string())
        );
    }

    #[test]
    fn test_unequal_lengths_rejected() {
        let mut response = catalog(&[("overview", "Overview"), ("bundles", "Bundles")], "overview");
        response.names.pop();
        assert!(matches!(
            NavigationRegistry::build(&response),
            Err(NavigationError::MalformedCatalog(_))
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let response = catalog(&[("overview", "Overview"), ("overview", "Other")], "overview");
        assert!(matches!(
            NavigationRegistry::build(&response),
            Err(NavigationError::MalformedCatalog(_))
        ));
    }

    #[test]
    fn test_colliding_nav_ids_rejected() {
        let response = catalog(&[("a", "Bundles"), ("b", "BUNDLES")], "a");
        assert!(matches!(
            NavigationRegistry::build(&response),
            Err(NavigationError::MalformedCatalog(_))
        ));
    }

    #[test]
    fn test_unknown_main_rejected() {
        let response = catalog(&[("overview", "Overview")], "home");
        assert!(matches!(
            NavigationRegistry::build(&response),
            Err(NavigationError::MalformedCatalog(_))
        ));

        let empty = catalog(&[], "overview");
        assert!(NavigationRegistry::build(&empty).is_err());
    }
}
