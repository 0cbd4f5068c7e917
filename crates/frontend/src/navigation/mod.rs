//! Page routing and navigation state
//!
//! Plain Rust with no browser access: the DOM, history and network are
//! reached through the surface traits and [`crate::api::ConsoleApi`], so the
//! whole state machine runs natively under `cargo test`.

mod controller;
mod driver;
mod error;
mod loader;
mod navbar;
mod page;
mod registry;
mod retry;
mod route;
mod state;
mod surface;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{CatalogOutcome, Phase, RoutingController};
pub use driver::ConsoleDriver;
pub use error::{FetchError, NavigationError};
pub use loader::{HistoryMode, LoadOutcome, LoadRequest, LoadTicket, PageLoader};
pub use navbar::NavigationBarRenderer;
pub use page::PageDescriptor;
pub use registry::NavigationRegistry;
pub use retry::{RetryPolicy, DEFAULT_RETRY_INTERVAL};
pub use route::Route;
pub use state::NavigationState;
pub use surface::{
    ConsoleSurface, ContentSurface, ContentView, HistorySink, NavBarSurface, NavEntry,
};
