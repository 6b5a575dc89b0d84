//! Console chrome: navigation sidebar and the layout that hosts pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AdminLayout` is rendered inside `ProtectedRoute`, so the sidebar only
//! exists while a session does. Logging out goes through a confirmation
//! modal and then the shared session store.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::dialog::ConfirmDialog;
use crate::state::auth::AuthContext;
use crate::state::ui::{NavGroup, UiState};

/// A navigation entry: route path and label.
type NavLink = (&'static str, &'static str);

const TOP_LINKS: &[NavLink] = &[
    ("/dashboard", "Dashboard"),
    ("/withdraw", "Withdraw"),
    ("/recharge", "Recharge"),
    ("/users", "Users"),
];

const VIDEO_LINKS: &[NavLink] = &[
    ("/video-upload", "Upload Videos"),
    ("/video-approval", "Approval Videos"),
    ("/approved-video", "Approved Videos"),
    ("/reported-videos", "Reported Videos"),
];

const AD_LINKS: &[NavLink] = &[("/ads", "Add Ad"), ("/ads-lists", "Ad Lists")];

/// Page frame with the sidebar on the left.
#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    view! {
        <div class="app">
            <Sidebar/>
            <main class="main">{children()}</main>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let ui = expect_context::<RwSignal<UiState>>();
    // The surrounding ProtectedRoute redirects once the session is gone.
    let on_confirm = Callback::new(move |_| {
        ui.update(|u| u.confirm_logout = false);
        auth.logout();
    });
    let on_cancel = Callback::new(move |_| ui.update(|u| u.confirm_logout = false));

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"EarnKar Admin"</div>
            <nav>
                <ul class="sidebar__links">
                    {links(TOP_LINKS)}
                    <NavGroupToggle group=NavGroup::Videos label="Videos"/>
                    <Show when=move || ui.get().is_group_open(NavGroup::Videos)>
                        <ul class="sidebar__sublinks">{links(VIDEO_LINKS)}</ul>
                    </Show>
                    <NavGroupToggle group=NavGroup::Ads label="Ad System"/>
                    <Show when=move || ui.get().is_group_open(NavGroup::Ads)>
                        <ul class="sidebar__sublinks">{links(AD_LINKS)}</ul>
                    </Show>
                </ul>
            </nav>
            <div class="sidebar__bottom">
                <button class="btn sidebar__logout" on:click=move |_| ui.update(|u| u.confirm_logout = true)>
                    "Logout"
                </button>
            </div>
            <Show when=move || ui.get().confirm_logout>
                <ConfirmDialog
                    title="Logout"
                    message="Are you sure you want to logout?"
                    confirm_label="Yes"
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
        </aside>
    }
}

#[component]
fn NavGroupToggle(group: NavGroup, label: &'static str) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <li class="sidebar__group" on:click=move |_| ui.update(|u| u.toggle_group(group))>
            <span>{label}</span>
            <span class="sidebar__chevron">{move || if ui.get().is_group_open(group) { "▲" } else { "▼" }}</span>
        </li>
    }
}

fn links(entries: &'static [NavLink]) -> impl IntoView {
    entries
        .iter()
        .map(|(href, label)| {
            view! {
                <li>
                    <A href=*href>{*label}</A>
                </li>
            }
        })
        .collect_view()
}
