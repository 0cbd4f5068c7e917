use async_trait::async_trait;
use contracts::console::PagesResponse;
use gloo_net::http::{Request, Response};

use super::ConsoleApi;
use crate::navigation::FetchError;
use crate::shared::api_utils::{page_url, pages_url};

/// [`ConsoleApi`] over `fetch`, with URLs relative to the console page.
#[derive(Debug, Clone)]
pub struct HttpConsoleApi {
    api_root: String,
}

impl HttpConsoleApi {
    pub fn new(api_root: impl Into<String>) -> Self {
        Self {
            api_root: api_root.into(),
        }
    }

    async fn get(url: &str) -> Result<Response, FetchError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl ConsoleApi for HttpConsoleApi {
    async fn fetch_catalog(&self) -> Result<PagesResponse, FetchError> {
        let response = Self::get(&pages_url(&self.api_root)).await?;
        response
            .json::<PagesResponse>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    async fn fetch_page(&self, page_id: &str, sub_path: &str) -> Result<String, FetchError> {
        let response = Self::get(&page_url(&self.api_root, page_id, sub_path)).await?;
        response
            .text()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
