//! Platform user list with account deletion.

use leptos::prelude::*;

use crate::components::dialog::{ConfirmDialog, StatusLine};
use crate::net::types::User;
use crate::state::records::ListState;
#[cfg(feature = "hydrate")]
use crate::state::records::remove_by_id;
use crate::util::auth::use_backend;
use crate::util::format::format_points;

const AVATAR_PLACEHOLDER: &str = "https://via.placeholder.com/40";

#[component]
pub fn UsersPage() -> impl IntoView {
    let backend = use_backend();
    let users = RwSignal::new(ListState::<User>::default());
    let status = RwSignal::new(None::<Result<String, String>>);
    let pending_delete = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let result = backend
                .client()
                .fetch_users()
                .await
                .map_err(|e| backend.failure("Failed to fetch users", &e));
            users.try_update(|s| s.finish(result));
        });
    }

    let on_confirm = Callback::new(move |_| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "hydrate")]
        {
            let backend = backend.clone();
            leptos::task::spawn_local(async move {
                match backend.client().delete_user(&id).await {
                    Ok(()) => {
                        users.try_update(|s| remove_by_id(&mut s.items, &id));
                        let _ = status.try_set(Some(Ok("User deleted".to_owned())));
                    }
                    Err(e) => {
                        let _ = status.try_set(Some(Err(backend.failure("Failed to delete user", &e))));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, &backend);
    });
    let on_cancel = Callback::new(move |_| pending_delete.set(None));

    view! {
        <div class="page">
            <h1 class="page__heading">"Users List"</h1>
            <StatusLine message=status/>
            {move || {
                let state = users.get();
                if state.loading {
                    return view! { <p>"Loading..."</p> }.into_any();
                }
                if let Some(error) = state.error {
                    return view! { <p class="status-line status-line--error">{error}</p> }.into_any();
                }
                if state.items.is_empty() {
                    return view! { <p>"No users found."</p> }.into_any();
                }
                view! {
                    <div class="table-wrap">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Avatar"</th>
                                    <th>"Username"</th>
                                    <th>"Email"</th>
                                    <th>"Points"</th>
                                    <th>"Verified"</th>
                                    <th>"Provider"</th>
                                    <th>"Action"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {state
                                    .items
                                    .into_iter()
                                    .map(|user| user_row(user, pending_delete))
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                    .into_any()
            }}
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete User"
                    message="Are you sure you want to delete this user?"
                    confirm_label="Delete"
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}

fn user_row(user: User, pending_delete: RwSignal<Option<String>>) -> impl IntoView {
    let provider = user.provider();
    let verified = if user.is_verified { "Yes" } else { "No" };
    let avatar = user.avatar.clone().unwrap_or_else(|| AVATAR_PLACEHOLDER.to_owned());
    let id = user.id;
    view! {
        <tr>
            <td>
                <img class="avatar" src=avatar alt="avatar"/>
            </td>
            <td>{user.username}</td>
            <td>{user.email}</td>
            <td>{format_points(user.points)}</td>
            <td>{verified}</td>
            <td>{provider}</td>
            <td>
                <button class="btn btn--danger" on:click=move |_| pending_delete.set(Some(id.clone()))>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
