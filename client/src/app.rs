//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/` is the only public route. Every other screen renders inside
//! `ProtectedRoute`, which owns the redirect and the idle-logout guard for
//! as long as that screen is mounted.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::components::sidebar::AdminLayout;
use crate::config::ConsoleConfig;
use crate::pages::ads::{AdCreatePage, AdEditPage, AdListPage};
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::recharges::RechargesPage;
use crate::pages::reports::ReportedVideosPage;
use crate::pages::users::UsersPage;
use crate::pages::video_upload::VideoUploadPage;
use crate::pages::videos::{ApprovedVideosPage, PendingVideosPage};
use crate::pages::withdrawals::WithdrawalsPage;
use crate::state::auth::AuthContext;
use crate::state::session::{SessionStore, default_token_storage};
use crate::state::ui::UiState;
use crate::util::auth::Backend;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let console_meta = use_context::<ConsoleConfig>().map(|config| config.meta_entries());
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                {console_meta
                    .into_iter()
                    .flatten()
                    .map(|(name, content)| view! { <meta name=name content=content/> })
                    .collect_view()}
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session store once and provides it, the console config, UI
/// state, and the backend handle to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The host provides its env-derived config during SSR; the browser reads
    // it back from the shell's meta tags.
    let config = use_context::<ConsoleConfig>().unwrap_or_else(runtime_config);
    let auth = AuthContext::new(SessionStore::new(default_token_storage()));
    let ui = RwSignal::new(UiState::default());

    provide_context(Backend::new(auth.clone(), config.clone()));
    provide_context(config);
    provide_context(auth);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-console.css"/>
        <Title text="Admin Panel"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=|| guarded(|| view! { <DashboardPage/> }.into_any())/>
                <Route path=StaticSegment("withdraw") view=|| guarded(|| view! { <WithdrawalsPage/> }.into_any())/>
                <Route path=StaticSegment("recharge") view=|| guarded(|| view! { <RechargesPage/> }.into_any())/>
                <Route path=StaticSegment("users") view=|| guarded(|| view! { <UsersPage/> }.into_any())/>
                <Route
                    path=StaticSegment("video-upload")
                    view=|| guarded(|| view! { <VideoUploadPage/> }.into_any())
                />
                <Route
                    path=StaticSegment("video-approval")
                    view=|| guarded(|| view! { <PendingVideosPage/> }.into_any())
                />
                <Route
                    path=StaticSegment("approved-video")
                    view=|| guarded(|| view! { <ApprovedVideosPage/> }.into_any())
                />
                <Route
                    path=StaticSegment("reported-videos")
                    view=|| guarded(|| view! { <ReportedVideosPage/> }.into_any())
                />
                <Route path=StaticSegment("ads") view=|| guarded(|| view! { <AdCreatePage/> }.into_any())/>
                <Route path=StaticSegment("ads-lists") view=|| guarded(|| view! { <AdListPage/> }.into_any())/>
                <Route
                    path=(StaticSegment("ads"), StaticSegment("edit"), ParamSegment("id"))
                    view=|| guarded(|| view! { <AdEditPage/> }.into_any())
                />
            </Routes>
        </Router>
    }
}

fn runtime_config() -> ConsoleConfig {
    #[cfg(feature = "hydrate")]
    if let Some(config) = ConsoleConfig::from_document() {
        return config;
    }
    ConsoleConfig::from_build_env()
}

/// Wrap a page in the session gate and the sidebar layout.
fn guarded(page: fn() -> AnyView) -> impl IntoView {
    view! {
        <ProtectedRoute>
            <AdminLayout>{page()}</AdminLayout>
        </ProtectedRoute>
    }
}
