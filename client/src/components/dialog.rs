//! Modal dialogs for destructive confirmations and rejection reasons.

use leptos::prelude::*;

/// Yes/no confirmation. `on_confirm` runs before the dialog closes.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into, default = "Confirm".to_owned())] confirm_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__danger">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Free-text reason prompt used when rejecting financial requests.
///
/// Submitting a blank reason does nothing.
#[component]
pub fn ReasonDialog(#[prop(into)] title: String, on_submit: Callback<String>, on_cancel: Callback<()>) -> impl IntoView {
    let reason = RwSignal::new(String::new());
    let submit = Callback::new(move |_| {
        let value = reason.get_untracked();
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        on_submit.run(value.to_owned());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <label class="dialog__label">
                    "Rejection reason"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || reason.get().trim().is_empty()
                        on:click=move |_| submit.run(())
                    >
                        "Reject"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Success or error line shown above a table.
#[component]
pub fn StatusLine(message: RwSignal<Option<Result<String, String>>>) -> impl IntoView {
    move || {
        message.get().map(|result| match result {
            Ok(text) => view! { <p class="status-line status-line--ok">{text}</p> }.into_any(),
            Err(text) => view! { <p class="status-line status-line--error">{text}</p> }.into_any(),
        })
    }
}
