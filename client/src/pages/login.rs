//! Admin login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route reachable without a session. A successful login records the
//! token in the session store and moves to the dashboard; a forced idle logout
//! lands here and shows its notice once.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginResponse;
use crate::state::ui::UiState;
use crate::util::auth::{install_login_redirect, use_backend};

const MISSING_CREDENTIALS: &str = "Enter both email and password.";
const MISSING_TOKEN: &str = "Login failed: the server did not return a session token.";

/// Trim the email and require both fields. The password is kept verbatim.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// A successful reply must carry a token before it can start a session.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn accept_login_response(response: &LoginResponse) -> Result<(), &'static str> {
    if response.token.is_empty() {
        return Err(MISSING_TOKEN);
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let backend = use_backend();
    let ui = expect_context::<RwSignal<UiState>>();

    install_login_redirect(backend.auth().clone(), use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(ui.try_update(UiState::take_notice).flatten());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        notice.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let backend = backend.clone();
            leptos::task::spawn_local(async move {
                match backend.client().admin_login(&email_value, &password_value).await {
                    Ok(response) => match accept_login_response(&response) {
                        Ok(()) => backend.auth().login(&response),
                        Err(message) => {
                            log::warn!("admin login reply had no token");
                            let _ = error.try_set(message.to_owned());
                        }
                    },
                    Err(e) => {
                        log::warn!("admin login failed: {e}");
                        let _ = error.try_set(e.to_string());
                    }
                }
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);
    };

    view! {
        <div class="login-page">
            <Show when=move || busy.get()>
                <div class="login-page__overlay">
                    <div class="spinner"></div>
                    <p>"Logging in..."</p>
                </div>
            </Show>
            <div class="login-page__brand">
                <h2>"Your clips, your stream, your stage."</h2>
            </div>
            <div class="login-card">
                <h1>"Welcome"</h1>
                <p class="login-card__subtitle">"Please login to Admin Dashboard."</p>
                <Show when=move || notice.get().is_some()>
                    <p class="login-message login-message--notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-message login-message--error">{move || error.get()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "LOGIN"
                    </button>
                </form>
            </div>
        </div>
    }
}
