//! Route wrapper that gates content behind the session and the idle guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route except the login view renders through `ProtectedRoute`. The
//! redirect decision runs before any protected child is built, so pages never
//! issue requests without a session. In the browser build the wrapper also
//! mounts an [`IdleGuard`](crate::guard::IdleGuard) fed by window-level
//! pointer and key events, and tears both down when the route unmounts.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ConsoleConfig;
use crate::state::auth::AuthContext;
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let config = expect_context::<ConsoleConfig>();
    let ui = expect_context::<RwSignal<UiState>>();

    install_unauth_redirect(auth.clone(), use_navigate());

    #[cfg(feature = "hydrate")]
    idle::install(&auth, config.idle_timeout, ui);
    #[cfg(not(feature = "hydrate"))]
    let _ = (config, ui);

    // The server has no session; children appear only after hydration.
    let hydrated = RwSignal::new(false);
    Effect::new(move || hydrated.set(true));

    let authed = auth.clone();
    view! {
        <Show
            when=move || hydrated.get() && authed.is_authenticated()
            fallback=|| view! { <p class="guard__redirect">"Redirecting to login..."</p> }
        >
            {children()}
        </Show>
    }
}

#[cfg(feature = "hydrate")]
mod idle {
    use std::time::Duration;

    use leptos::ev;
    use leptos::prelude::*;

    use crate::guard::{Activity, BrowserScheduler, IdleGuard, RouteDecision};
    use crate::state::auth::AuthContext;
    use crate::state::ui::UiState;

    struct Mounted {
        guard: IdleGuard<BrowserScheduler>,
        listeners: Vec<WindowListenerHandle>,
    }

    /// Mount a guard for the current route and detach it on cleanup.
    pub(super) fn install(auth: &AuthContext, timeout: Duration, ui: RwSignal<UiState>) {
        let guard = IdleGuard::new(BrowserScheduler, auth.store().clone(), timeout, move |notice: &str| {
            let notice = notice.to_owned();
            ui.try_update(|u| u.raise_notice(notice));
        });
        if guard.mount() != RouteDecision::Render {
            return;
        }

        let on_pointer = guard.clone();
        let on_key = guard.clone();
        let listeners = vec![
            window_event_listener(ev::mousemove, move |_| on_pointer.record_activity(Activity::PointerMove)),
            window_event_listener(ev::keydown, move |_| on_key.record_activity(Activity::KeyPress)),
        ];

        let mounted = StoredValue::new_local(Some(Mounted { guard, listeners }));
        on_cleanup(move || {
            let Some(Some(Mounted { guard, listeners })) = mounted.try_update_value(Option::take) else {
                return;
            };
            for listener in listeners {
                listener.remove();
            }
            guard.unmount();
        });
    }
}
