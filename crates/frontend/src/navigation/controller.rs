use std::time::Duration;

use contracts::console::{PagesResponse, DEFAULT_SUB_PATH};

use super::error::{FetchError, NavigationError};
use super::loader::{HistoryMode, LoadOutcome, LoadRequest, PageLoader};
use super::navbar::NavigationBarRenderer;
use super::page::PageDescriptor;
use super::registry::NavigationRegistry;
use super::retry::RetryPolicy;
use super::route::Route;
use super::state::NavigationState;
use super::surface::{ConsoleSurface, ContentView};
use crate::shared::config::ConsoleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Bootstrapping,
    AwaitingCatalog,
    Ready,
    /// A page load is in flight
    Navigating,
}

/// What the caller should do after a page catalog response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOutcome {
    /// Catalog accepted; fetch the initial page
    Ready(LoadRequest),
    RetryAfter(Duration),
    /// Bounded retry policy exhausted
    GaveUp,
    /// The catalog was already loaded
    Ignored,
}

/// Owns the navigation state and drives the surfaces.
///
/// The controller never performs I/O itself: it hands out [`LoadRequest`]s
/// and expects the results back through [`content_received`](Self::content_received).
pub struct RoutingController<S> {
    surface: S,
    phase: Phase,
    registry: Option<NavigationRegistry>,
    navbar: NavigationBarRenderer,
    loader: PageLoader,
    state: NavigationState,
    retry: RetryPolicy,
    failed_attempts: u32,
    default_sub_path: String,
}

impl<S: ConsoleSurface> RoutingController<S> {
    pub fn new(surface: S, retry: RetryPolicy, history_title: impl Into<String>) -> Self {
        Self {
            surface,
            phase: Phase::Bootstrapping,
            registry: None,
            navbar: NavigationBarRenderer::default(),
            loader: PageLoader::new(history_title),
            state: NavigationState::default(),
            retry,
            failed_attempts: 0,
            default_sub_path: DEFAULT_SUB_PATH.to_string(),
        }
    }

    pub fn from_config(surface: S, config: &ConsoleConfig) -> Self {
        Self::new(surface, config.retry_policy(), config.history_title.clone())
            .with_default_sub_path(config.default_sub_path.clone())
    }

    /// Sub-path loaded from the navigation bar and when the location names none
    pub fn with_default_sub_path(mut self, default_sub_path: impl Into<String>) -> Self {
        let default_sub_path = default_sub_path.into();
        self.loader = self.loader.with_default_sub_path(default_sub_path.clone());
        self.default_sub_path = default_sub_path;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn registry(&self) -> Option<&NavigationRegistry> {
        self.registry.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Shows the loading placeholder while the page catalog is requested.
    pub fn start(&mut self) {
        if self.phase != Phase::Bootstrapping {
            return;
        }
        self.surface.show_content(ContentView::Loading);
        self.phase = Phase::AwaitingCatalog;
    }

    /// Handles one page catalog response.
    ///
    /// `fragment` is the browser location at the time the catalog arrived.
    pub fn catalog_received(
        &mut self,
        result: Result<PagesResponse, FetchError>,
        fragment: &str,
    ) -> CatalogOutcome {
        match self.phase {
            Phase::Ready | Phase::Navigating => {
                log::warn!("page catalog already loaded, ignoring new response");
                return CatalogOutcome::Ignored;
            }
            Phase::Bootstrapping => self.start(),
            Phase::AwaitingCatalog => {}
        }

        let catalog = match result {
            Ok(catalog) => catalog,
            Err(err) => {
                let err = NavigationError::CatalogFetchFailed(err);
                log::warn!("{}", err);
                return self.catalog_failed(err);
            }
        };

        let registry = match NavigationRegistry::build(&catalog) {
            Ok(registry) => registry,
            Err(err) => {
                log::error!("{}", err);
                self.surface.show_content(ContentView::CatalogError {
                    reason: err.to_string(),
                });
                return self.catalog_failed(err);
            }
        };

        log::info!("page catalog loaded: {} pages", registry.len());
        self.failed_attempts = 0;
        self.navbar.render(&mut self.surface, registry.ordered_entries());
        let (page, sub_path) = resolve(&registry, fragment, &self.default_sub_path);
        self.registry = Some(registry);
        self.phase = Phase::Ready;

        CatalogOutcome::Ready(self.navigate(page, &sub_path, HistoryMode::Push))
    }

    /// Opens a page from the navigation bar. Unknown ids are ignored.
    pub fn show(&mut self, page_id: &str) -> Option<LoadRequest> {
        let page = match self.registry.as_ref().map(|registry| registry.require(page_id)) {
            Some(Ok(page)) => page.clone(),
            Some(Err(err)) => {
                log::debug!("{}", err);
                return None;
            }
            None => {
                log::debug!("page catalog not loaded yet, cannot show '{}'", page_id);
                return None;
            }
        };
        let sub_path = self.default_sub_path.clone();
        Some(self.navigate(page, &sub_path, HistoryMode::Push))
    }

    /// Follows a location change made by the browser (back/forward).
    ///
    /// No history entry is pushed since the browser already holds it. A page
    /// whose last load failed is fetched again.
    pub fn follow_location(&mut self, fragment: &str) -> Option<LoadRequest> {
        let (page, sub_path) = resolve(self.registry.as_ref()?, fragment, &self.default_sub_path);
        if self.state.is_showing(page.id(), &sub_path) {
            return None;
        }
        Some(self.navigate(page, &sub_path, HistoryMode::Keep))
    }

    pub fn content_received(
        &mut self,
        request: &LoadRequest,
        result: Result<String, FetchError>,
    ) -> LoadOutcome {
        let outcome = self.loader.complete(&mut self.surface, request, result);
        match &outcome {
            LoadOutcome::Displayed => self.navbar.set_active(&mut self.surface, request.page()),
            LoadOutcome::Failed(_) => self.state.mark_failed(),
            LoadOutcome::Superseded => {}
        }
        if self.loader.is_current(request.ticket()) {
            self.phase = Phase::Ready;
        }
        outcome
    }

    fn navigate(&mut self, page: PageDescriptor, sub_path: &str, history: HistoryMode) -> LoadRequest {
        self.navbar.set_active(&mut self.surface, &page);
        let request = self.loader.begin(&mut self.surface, &page, sub_path, history);
        self.state.enter(page, request.sub_path());
        self.phase = Phase::Navigating;
        request
    }

    fn catalog_failed(&mut self, err: NavigationError) -> CatalogOutcome {
        self.failed_attempts += 1;
        match self.retry.next_delay(self.failed_attempts) {
            Some(delay) => CatalogOutcome::RetryAfter(delay),
            None => {
                log::error!(
                    "giving up on the page catalog after {} attempts",
                    self.failed_attempts
                );
                self.surface.show_content(ContentView::CatalogError {
                    reason: err.to_string(),
                });
                CatalogOutcome::GaveUp
            }
        }
    }
}

/// Maps a location fragment to a page, falling back to the catalog's main page.
fn resolve(
    registry: &NavigationRegistry,
    fragment: &str,
    default_sub_path: &str,
) -> (PageDescriptor, String) {
    if let Some(route) = Route::parse(fragment, default_sub_path) {
        if let Some(page) = registry.lookup(&route.page_id) {
            return (page.clone(), route.sub_path);
        }
        log::debug!(
            "location names unknown page '{}', showing main page",
            route.page_id
        );
    }
    (registry.main_page().clone(), default_sub_path.to_string())
}
