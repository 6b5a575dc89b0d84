//! Recharge review: approve or reject requests to buy points.

use leptos::prelude::*;

use crate::components::dialog::{ConfirmDialog, ReasonDialog, StatusLine};
use crate::net::types::{Pagination, Recharge};
use crate::state::records::{ListState, is_actionable, recharge_reference, showing_summary};
#[cfg(feature = "hydrate")]
use crate::{net::types::RequestStatus, state::records::mark_request_status};
use crate::util::auth::use_backend;
use crate::util::format::{capitalize, format_amount, format_points, format_timestamp};

use super::withdrawals::requester_cell;

#[component]
pub fn RechargesPage() -> impl IntoView {
    let backend = use_backend();
    let recharges = RwSignal::new(ListState::<Recharge>::default());
    let pagination = RwSignal::new(Pagination::default());
    let status = RwSignal::new(None::<Result<String, String>>);
    let approving = RwSignal::new(None::<String>);
    let rejecting = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let result = match backend.client().fetch_recharges().await {
                Ok(page) => {
                    let _ = pagination.try_set(page.pagination);
                    Ok(page.items)
                }
                Err(e) => Err(backend.failure("Failed to fetch recharges", &e)),
            };
            recharges.try_update(|s| s.finish(result));
        });
    }

    let approve_backend = backend.clone();
    let on_approve = Callback::new(move |_| {
        let Some(id) = approving.get_untracked() else {
            return;
        };
        approving.set(None);
        #[cfg(feature = "hydrate")]
        {
            let backend = approve_backend.clone();
            leptos::task::spawn_local(async move {
                match backend.client().approve_recharge(&id).await {
                    Ok(_) => {
                        recharges.try_update(|s| mark_request_status(&mut s.items, &id, RequestStatus::Approved));
                        let _ = status.try_set(Some(Ok("Recharge approved successfully".to_owned())));
                    }
                    Err(e) => {
                        let _ = status.try_set(Some(Err(backend.failure("Failed to approve recharge", &e))));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, &approve_backend);
    });

    let on_reject = Callback::new(move |reason: String| {
        let Some(id) = rejecting.get_untracked() else {
            return;
        };
        rejecting.set(None);
        #[cfg(feature = "hydrate")]
        {
            let backend = backend.clone();
            leptos::task::spawn_local(async move {
                match backend.client().reject_recharge(&id, &reason).await {
                    Ok(_) => {
                        recharges.try_update(|s| mark_request_status(&mut s.items, &id, RequestStatus::Rejected));
                        let _ = status.try_set(Some(Ok("Recharge rejected".to_owned())));
                    }
                    Err(e) => {
                        let _ = status.try_set(Some(Err(backend.failure("Failed to reject recharge", &e))));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, reason, &backend);
    });
    let on_cancel_approve = Callback::new(move |_| approving.set(None));
    let on_cancel_reject = Callback::new(move |_| rejecting.set(None));

    view! {
        <div class="page">
            <h1 class="page__heading">"Recharge Requests"</h1>
            <StatusLine message=status/>
            {move || {
                let state = recharges.get();
                if state.loading {
                    return view! { <p>"Loading..."</p> }.into_any();
                }
                if let Some(error) = state.error {
                    return view! { <p class="status-line status-line--error">{error}</p> }.into_any();
                }
                if state.items.is_empty() {
                    return view! { <p>"No recharge requests."</p> }.into_any();
                }
                let footer = showing_summary(state.items.len(), &pagination.get());
                view! {
                    <div class="table-wrap">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"User"</th>
                                    <th>"Method"</th>
                                    <th>"Details"</th>
                                    <th>"Points"</th>
                                    <th>"Amount"</th>
                                    <th>"Status"</th>
                                    <th>"Requested At"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {state
                                    .items
                                    .into_iter()
                                    .map(|recharge| recharge_row(recharge, approving, rejecting))
                                    .collect_view()}
                            </tbody>
                        </table>
                        {footer.map(|text| view! { <p class="table-footer">{text}</p> })}
                    </div>
                }
                    .into_any()
            }}
            <Show when=move || approving.get().is_some()>
                <ConfirmDialog
                    title="Approve Recharge"
                    message="Approve this recharge request?"
                    confirm_label="Approve"
                    on_confirm=on_approve
                    on_cancel=on_cancel_approve
                />
            </Show>
            <Show when=move || rejecting.get().is_some()>
                <ReasonDialog title="Reject Recharge" on_submit=on_reject on_cancel=on_cancel_reject/>
            </Show>
        </div>
    }
}

fn recharge_row(
    recharge: Recharge,
    approving: RwSignal<Option<String>>,
    rejecting: RwSignal<Option<String>>,
) -> impl IntoView {
    let actionable = is_actionable(&recharge);
    let reference = match recharge_reference(&recharge) {
        Some((transaction, screenshot)) => view! {
            <div>
                <strong>"Transaction ID: "</strong>
                {transaction}
            </div>
            <div>
                <strong>"Screenshot: "</strong>
                {match screenshot {
                    Some(url) => {
                        view! {
                            <a href=url target="_blank" rel="noopener noreferrer">
                                "View"
                            </a>
                        }
                            .into_any()
                    }
                    None => view! { "N/A" }.into_any(),
                }}
            </div>
        }
        .into_any(),
        None => view! { <span class="muted">"N/A"</span> }.into_any(),
    };
    let user = requester_cell(recharge.user_id.as_ref());
    let approve_id = recharge.id.clone();
    let reject_id = recharge.id;
    view! {
        <tr>
            {user}
            <td>{capitalize(recharge.method.as_str())}</td>
            <td class="details">{reference}</td>
            <td>{format_points(recharge.points_to_add)}</td>
            <td>{format_amount(recharge.amount)}</td>
            <td>
                <span class=recharge.status.css_class()>{recharge.status.as_str()}</span>
            </td>
            <td>{format_timestamp(recharge.requested_at.as_deref())}</td>
            <td class="actions">
                {if actionable {
                    view! {
                        <button class="btn btn--ok" on:click=move |_| approving.set(Some(approve_id.clone()))>
                            "Approve"
                        </button>
                        <button class="btn btn--danger" on:click=move |_| rejecting.set(Some(reject_id.clone()))>
                            "Reject"
                        </button>
                    }
                        .into_any()
                } else {
                    view! { <span class="muted">"-"</span> }.into_any()
                }}
            </td>
        </tr>
    }
}
