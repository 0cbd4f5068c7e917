//! URL builders for the console REST API
//!
//! URLs stay relative so the console works under whatever path the servlet
//! is mounted at (`/console` by default).

/// `{api_root}/pages`
pub fn pages_url(api_root: &str) -> String {
    format!("{}/pages", api_root.trim_end_matches('/'))
}

/// `{api_root}/page/{page_id}/{sub_path}`
///
/// Each path segment is percent-encoded; the `/` separators of a nested
/// sub-path are kept.
///
/// # Example
/// ```rust
/// use console_frontend::shared::api_utils::page_url;
/// assert_eq!(page_url("api/v1", "bundles", "details/3"), "api/v1/page/bundles/details/3");
/// ```
pub fn page_url(api_root: &str, page_id: &str, sub_path: &str) -> String {
    let sub_path = sub_path
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    format!(
        "{}/page/{}/{}",
        api_root.trim_end_matches('/'),
        urlencoding::encode(page_id),
        sub_path
    )
}
