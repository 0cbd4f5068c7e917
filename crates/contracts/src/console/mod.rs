//! Wire contract between the web console and the host servlet
//!
//! The servlet exposes two REST entries under [`API_ROOT`]:
//!
//! ```text
//! GET {API_ROOT}/pages                  -> PagesResponse (JSON)
//! GET {API_ROOT}/page/{page_id}/{sub}   -> HTML fragment
//! ```

mod pages;

pub use pages::PagesResponse;

/// Default API root, relative to the console's own URL
pub const API_ROOT: &str = "api/v1";

/// Sub-path requested when a page is opened from the navigation bar
pub const DEFAULT_SUB_PATH: &str = "content";

/// Title given to every history entry pushed by the console
pub const HISTORY_TITLE: &str = "Pelix Web Console";
