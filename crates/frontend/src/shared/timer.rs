use async_trait::async_trait;
use std::time::Duration;

/// Source of delays for the catalog retry loop.
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, delay: Duration);
}

/// `setTimeout`-backed timer
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, delay: Duration) {
        gloo_timers::future::sleep(delay).await;
    }
}
