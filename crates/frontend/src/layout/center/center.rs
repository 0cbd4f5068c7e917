use leptos::prelude::*;

use crate::layout::global_context::ConsoleContext;
use crate::navigation::ContentView;

/// Content area. Page payloads are inserted as-is; error texts are escaped.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<ConsoleContext>()
        .expect("ConsoleContext context not found");

    view! {
        <div id="content" data-zone="center" class="container">
            {move || match ctx.content.get() {
                ContentView::Loading => view! {
                    <h2>
                        <img src="imgs/loading.gif" alt="Loading..." />
                        " Loading..."
                    </h2>
                }
                .into_any(),
                ContentView::Html(html) => view! { <div inner_html=html></div> }.into_any(),
                ContentView::PageError { page_name } => view! {
                    <div class="content-error">
                        <h1>"Error"</h1>
                        <p>
                            "Something went wrong when grabbing information for page "
                            <i>{page_name}</i>
                        </p>
                    </div>
                }
                .into_any(),
                ContentView::CatalogError { reason } => view! {
                    <div class="content-error">
                        <h1>"Error"</h1>
                        <p>"The list of pages could not be loaded: " {reason}</p>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
