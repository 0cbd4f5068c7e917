use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::DriverHandle;
use crate::layout::global_context::ConsoleContext;
use crate::navigation::NavEntry;

/// One `<li>` per catalog page; the current page gets `class="active"`.
#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = leptos::context::use_context::<ConsoleContext>()
        .expect("ConsoleContext context not found");
    let handle = leptos::context::use_context::<DriverHandle>()
        .expect("DriverHandle context not found");

    view! {
        <ul id="dynamic-navbar" class="nav navbar-nav">
            {move || {
                ctx.nav_entries
                    .get()
                    .into_iter()
                    .map(|entry| view! { <NavItem entry=entry ctx=ctx handle=handle /> })
                    .collect_view()
            }}
        </ul>
    }
}

#[component]
fn NavItem(entry: NavEntry, ctx: ConsoleContext, handle: DriverHandle) -> impl IntoView {
    let NavEntry {
        page_id,
        nav_id,
        label,
    } = entry;
    let href = format!("#{}", page_id);

    let is_active = {
        let nav_id = nav_id.clone();
        move || ctx.active_nav.get().as_deref() == Some(nav_id.as_str())
    };

    let open_page = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let driver = handle.driver();
        let page_id = page_id.clone();
        spawn_local(async move {
            driver.show(&page_id).await;
        });
    };

    view! {
        <li id=nav_id class:active=is_active>
            <a href=href on:click=open_page>{label}</a>
        </li>
    }
}
