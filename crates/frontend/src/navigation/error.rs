use thiserror::Error;

/// Failure of a single REST call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("HTTP error {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to parse response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Transient, retried by the controller's retry policy
    #[error("error retrieving the list of pages: {0}")]
    CatalogFetchFailed(#[source] FetchError),

    #[error("malformed page catalog: {0}")]
    MalformedCatalog(String),

    #[error("failed to load page '{page_id}': {source}")]
    PageContentFetchFailed {
        page_id: String,
        #[source]
        source: FetchError,
    },

    #[error("unknown page id '{0}'")]
    UnknownPageId(String),
}
