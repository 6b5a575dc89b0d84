//! Withdrawal review: approve or reject requests to cash out points.

#[cfg(test)]
#[path = "withdrawals_test.rs"]
mod withdrawals_test;

use leptos::prelude::*;

use crate::components::dialog::{ConfirmDialog, ReasonDialog, StatusLine};
use crate::net::types::{Pagination, RequestUser, Withdrawal};
use crate::state::records::{
    DetailLine, ListState, is_actionable, payment_summary, showing_summary, withdrawal_limit,
};
#[cfg(feature = "hydrate")]
use crate::{net::types::RequestStatus, state::records::mark_request_status};
use crate::util::auth::use_backend;
use crate::util::format::{capitalize, format_amount, format_points, format_timestamp};

/// Withdrawal awaiting approval confirmation: id and dollar amount.
type PendingApproval = (String, f64);

fn approval_prompt(amount: f64) -> String {
    format!("Approve this withdrawal request of {}?", format_amount(amount))
}

/// Success line after an approval. The backend reports the remaining balance.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn approval_message(amount: f64, new_balance: Option<i64>) -> String {
    let approved = format!("Withdrawal of {} approved successfully", format_amount(amount));
    match new_balance {
        Some(balance) => format!("{approved}. New balance: {} points", format_points(balance)),
        None => approved,
    }
}

#[component]
pub fn WithdrawalsPage() -> impl IntoView {
    let backend = use_backend();
    let withdrawals = RwSignal::new(ListState::<Withdrawal>::default());
    let pagination = RwSignal::new(Pagination::default());
    let status = RwSignal::new(None::<Result<String, String>>);
    let approving = RwSignal::new(None::<PendingApproval>);
    let rejecting = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let result = match backend.client().fetch_withdrawals().await {
                Ok(page) => {
                    let _ = pagination.try_set(page.pagination);
                    Ok(page.items)
                }
                Err(e) => Err(backend.failure("Failed to fetch withdrawals", &e)),
            };
            withdrawals.try_update(|s| s.finish(result));
        });
    }

    let approve_backend = backend.clone();
    let on_approve = Callback::new(move |_| {
        let Some((id, amount)) = approving.get_untracked() else {
            return;
        };
        approving.set(None);
        #[cfg(feature = "hydrate")]
        {
            let backend = approve_backend.clone();
            leptos::task::spawn_local(async move {
                match backend.client().approve_withdrawal(&id).await {
                    Ok(reply) => {
                        withdrawals.try_update(|s| mark_request_status(&mut s.items, &id, RequestStatus::Approved));
                        let _ = status.try_set(Some(Ok(approval_message(amount, reply.new_balance))));
                    }
                    Err(e) => {
                        let _ = status.try_set(Some(Err(backend.failure("Failed to approve withdrawal", &e))));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, amount, &approve_backend);
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
                match backend.client().reject_withdrawal(&id, &reason).await {
                    Ok(_) => {
                        withdrawals.try_update(|s| mark_request_status(&mut s.items, &id, RequestStatus::Rejected));
                        let _ = status.try_set(Some(Ok("Withdrawal rejected".to_owned())));
                    }
                    Err(e) => {
                        let _ = status.try_set(Some(Err(backend.failure("Failed to reject withdrawal", &e))));
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
            <h1 class="page__heading">"Withdrawal Requests"</h1>
            <StatusLine message=status/>
            {move || {
                let state = withdrawals.get();
                if state.loading {
                    return view! { <p>"Loading..."</p> }.into_any();
                }
                if let Some(error) = state.error {
                    return view! { <p class="status-line status-line--error">{error}</p> }.into_any();
                }
                if state.items.is_empty() {
                    return view! { <p>"No withdrawal requests."</p> }.into_any();
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
                                    <th>"Balance"</th>
                                    <th>"Max Withdrawal"</th>
                                    <th>"Status"</th>
                                    <th>"Requested At"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {state
                                    .items
                                    .into_iter()
                                    .map(|withdrawal| withdrawal_row(withdrawal, approving, rejecting))
                                    .collect_view()}
                            </tbody>
                        </table>
                        {footer.map(|text| view! { <p class="table-footer">{text}</p> })}
                    </div>
                }
                    .into_any()
            }}
            {move || {
                approving
                    .get()
                    .map(|(_, amount)| {
                        view! {
                            <ConfirmDialog
                                title="Approve Withdrawal"
                                message=approval_prompt(amount)
                                confirm_label="Approve"
                                on_confirm=on_approve
                                on_cancel=on_cancel_approve
                            />
                        }
                    })
            }}
            <Show when=move || rejecting.get().is_some()>
                <ReasonDialog title="Reject Withdrawal" on_submit=on_reject on_cancel=on_cancel_reject/>
            </Show>
        </div>
    }
}

/// Username over email, shared with the recharge table.
pub(super) fn requester_cell(user: Option<&RequestUser>) -> AnyView {
    let username = user.and_then(|u| u.username.clone()).filter(|u| !u.is_empty());
    let email = user.and_then(|u| u.email.clone());
    view! {
        <td>
            {username.unwrap_or_else(|| "N/A".to_owned())}
            <br/>
            <small>{email}</small>
        </td>
    }
    .into_any()
}

fn detail_lines(lines: Vec<DetailLine>) -> AnyView {
    if lines.is_empty() {
        return view! { <span class="muted">"N/A"</span> }.into_any();
    }
    lines
        .into_iter()
        .map(|line| {
            view! {
                <div class:detail--missing=line.missing>
                    <strong>{line.label} ": "</strong>
                    {line.value}
                </div>
            }
        })
        .collect_view()
        .into_any()
}

fn withdrawal_row(
    withdrawal: Withdrawal,
    approving: RwSignal<Option<PendingApproval>>,
    rejecting: RwSignal<Option<String>>,
) -> impl IntoView {
    let actionable = is_actionable(&withdrawal);
    let details = detail_lines(payment_summary(&withdrawal.method, withdrawal.details.as_ref()));
    let balance = withdrawal.user_balance.unwrap_or_default();
    let limit = format_amount(withdrawal_limit(balance, &withdrawal.method));
    let user = requester_cell(withdrawal.user_id.as_ref());
    let amount = withdrawal.amount;
    let approve_id = withdrawal.id.clone();
    let reject_id = withdrawal.id;
    view! {
        <tr>
            {user}
            <td>{capitalize(withdrawal.method.as_str())}</td>
            <td class="details">{details}</td>
            <td>{format_points(withdrawal.points_to_deduct)}</td>
            <td>{format_amount(amount)}</td>
            <td>{withdrawal.user_balance.map_or_else(|| "N/A".to_owned(), format_points)}</td>
            <td>{limit}</td>
            <td>
                <span class=withdrawal.status.css_class()>{withdrawal.status.as_str()}</span>
            </td>
            <td>{format_timestamp(withdrawal.requested_at.as_deref())}</td>
            <td class="actions">
                {if actionable {
                    view! {
                        <button class="btn btn--ok" on:click=move |_| approving.set(Some((approve_id.clone(), amount)))>
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
