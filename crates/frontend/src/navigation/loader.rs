use contracts::console::DEFAULT_SUB_PATH;

use super::error::{FetchError, NavigationError};
use super::page::PageDescriptor;
use super::route::Route;
use super::surface::{ContentSurface, ContentView, HistorySink};

/// Sequence number of one page load. Higher tickets supersede lower ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

/// Whether a displayed load records a new browser history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    /// The browser already moved to this location (back/forward)
    Keep,
}

/// A content fetch the caller has to perform and report back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    ticket: LoadTicket,
    page: PageDescriptor,
    route: Route,
    history: HistoryMode,
}

impl LoadRequest {
    pub fn ticket(&self) -> LoadTicket {
        self.ticket
    }

    pub fn page(&self) -> &PageDescriptor {
        &self.page
    }

    pub fn sub_path(&self) -> &str {
        &self.route.sub_path
    }

    pub fn history(&self) -> HistoryMode {
        self.history
    }

    pub fn fragment(&self) -> String {
        self.route.fragment()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Displayed,
    Failed(NavigationError),
    /// A newer load was issued meanwhile; the result was dropped
    Superseded,
}

/// Issues page loads and applies their results to the content area.
///
/// Loads are not cancelled, but only the most recently issued one may touch
/// the content area or history once its response arrives.
#[derive(Debug)]
pub struct PageLoader {
    last_issued: u64,
    history_title: String,
    default_sub_path: String,
}

impl PageLoader {
    pub fn new(history_title: impl Into<String>) -> Self {
        Self {
            last_issued: 0,
            history_title: history_title.into(),
            default_sub_path: DEFAULT_SUB_PATH.to_string(),
        }
    }

    /// Sub-path loaded when a caller passes an empty one
    pub fn with_default_sub_path(mut self, default_sub_path: impl Into<String>) -> Self {
        self.default_sub_path = default_sub_path.into();
        self
    }

    /// Shows the loading placeholder and hands out the request to fetch.
    pub fn begin<S: ContentSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        page: &PageDescriptor,
        sub_path: &str,
        history: HistoryMode,
    ) -> LoadRequest {
        surface.show_content(ContentView::Loading);
        self.last_issued += 1;
        LoadRequest {
            ticket: LoadTicket(self.last_issued),
            page: page.clone(),
            route: Route::new(page.id(), sub_path, &self.default_sub_path),
            history,
        }
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.last_issued
    }

    pub fn complete<S: ContentSurface + HistorySink + ?Sized>(
        &self,
        surface: &mut S,
        request: &LoadRequest,
        result: Result<String, FetchError>,
    ) -> LoadOutcome {
        if !self.is_current(request.ticket) {
            log::debug!(
                "dropping response for '{}', superseded by a newer navigation",
                request.page.id()
            );
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(html) => {
                surface.show_content(ContentView::Html(html));
                if request.history == HistoryMode::Push {
                    surface.push_entry(&self.history_title, &request.fragment());
                }
                LoadOutcome::Displayed
            }
            Err(source) => {
                let err = NavigationError::PageContentFetchFailed {
                    page_id: request.page.id().to_string(),
                    source,
                };
                log::warn!("{}", err);
                surface.show_content(ContentView::PageError {
                    page_name: request.page.display_name().to_string(),
                });
                LoadOutcome::Failed(err)
            }
        }
    }
}
