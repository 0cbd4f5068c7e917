pub mod api_utils;
pub mod browser;
pub mod config;
pub mod timer;
