//! TopHeader component - console title and the page navigation bar.

mod navbar;

pub use navbar::Navbar;

use contracts::console::HISTORY_TITLE;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <nav class="navbar navbar-inverse navbar-fixed-top">
            <div class="container">
                <div class="navbar-header">
                    <span class="navbar-brand">{HISTORY_TITLE}</span>
                </div>
                <div id="dynamic-navbar-root" class="collapse navbar-collapse">
                    <Navbar />
                </div>
            </div>
        </nav>
    }
}
