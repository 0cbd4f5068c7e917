pub mod center;
pub mod global_context;
pub mod top_header;

use leptos::prelude::*;

/// Console page layout.
///
/// ```text
/// +------------------------------------------+
/// |  brand  | Overview | Bundles | Services  |   TopHeader
/// +------------------------------------------+
/// |                                          |
/// |          page content (#content)         |   Center
/// |                                          |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <top_header::TopHeader />
            <div class="app-main">
                <center::Center />
            </div>
        </div>
    }
}
