use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpConsoleApi;
use crate::layout::global_context::ConsoleContext;
use crate::layout::Shell;
use crate::navigation::{ConsoleDriver, RoutingController};
use crate::shared::browser;
use crate::shared::config::ConsoleConfig;
use crate::shared::timer::BrowserTimer;

pub type WebDriver = ConsoleDriver<HttpConsoleApi, BrowserTimer, ConsoleContext>;

/// Context handle to the console driver (which is `!Send`, so kept local).
#[derive(Clone, Copy)]
pub struct DriverHandle(StoredValue<WebDriver, LocalStorage>);

impl DriverHandle {
    pub fn driver(&self) -> WebDriver {
        self.0.get_value()
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = ConsoleConfig::from_location();

    let ctx = ConsoleContext::new();
    provide_context(ctx);

    let controller = RoutingController::from_config(ctx, &config);
    let driver = ConsoleDriver::new(
        HttpConsoleApi::new(config.api_root.clone()),
        BrowserTimer,
        controller,
    );
    let handle = DriverHandle(StoredValue::new_local(driver.clone()));
    provide_context(handle);

    // Back/forward and manual edits of the fragment
    browser::on_popstate(move |fragment| {
        let driver = handle.driver();
        spawn_local(async move {
            driver.follow_location(&fragment).await;
        });
    });

    spawn_local(async move {
        driver.boot(browser::location_fragment).await;
    });

    view! { <Shell /> }
}
