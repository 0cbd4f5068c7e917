//! REST access to the console servlet

mod http;

use async_trait::async_trait;
use contracts::console::PagesResponse;

use crate::navigation::FetchError;

pub use http::HttpConsoleApi;

/// The two REST entries the console consumes.
#[async_trait(?Send)]
pub trait ConsoleApi {
    /// `GET {api_root}/pages`
    async fn fetch_catalog(&self) -> Result<PagesResponse, FetchError>;

    /// `GET {api_root}/page/{page_id}/{sub_path}`, returns the HTML fragment
    async fn fetch_page(&self, page_id: &str, sub_path: &str) -> Result<String, FetchError>;
}
