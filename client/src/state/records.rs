//! List updates and display helpers for backend records.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hold fetched records in signals. After a mutation succeeds they patch
//! the local list with these helpers instead of refetching, matching what the
//! backend now stores.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use crate::net::types::{
    Ad, Pagination, PaymentDetails, PaymentMethod, Recharge, RequestStatus, User, Video, VideoReport, Withdrawal,
};

/// Points per US dollar when converting balances.
pub const POINTS_PER_DOLLAR: f64 = 10.0;

/// Description shown for reports without one.
pub const MISSING_DESCRIPTION: &str = "No description available";

/// Records addressed by their backend `_id`.
pub trait Identified {
    fn id(&self) -> &str;
}

macro_rules! identified {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

identified!(User, Video, VideoReport, Ad, Withdrawal, Recharge);

/// Financial requests that move through [`RequestStatus`].
pub trait Reviewable: Identified {
    fn status(&self) -> RequestStatus;
    fn set_status(&mut self, status: RequestStatus);
}

impl Reviewable for Withdrawal {
    fn status(&self) -> RequestStatus {
        self.status
    }

    fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
    }
}

impl Reviewable for Recharge {
    fn status(&self) -> RequestStatus {
        self.status
    }

    fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
    }
}

/// A fetched list plus its loading and error flags.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    /// Lists start loading: pages fetch as soon as they mount.
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl<T> ListState<T> {
    /// Apply a fetch outcome. A failed fetch clears stale rows.
    pub fn finish(&mut self, result: Result<Vec<T>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => {
                self.items.clear();
                self.error = Some(message);
            }
        }
    }

    /// Loaded and nothing to show.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.items.is_empty()
    }
}

/// Drop the record with `id`. Returns whether anything was removed.
pub fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// Flag a video approved in place. It stays listed until the next fetch.
pub fn mark_video_approved(videos: &mut [Video], id: &str) -> bool {
    match videos.iter_mut().find(|video| video.id == id) {
        Some(video) => {
            video.is_approved = true;
            true
        }
        None => false,
    }
}

/// Set the status of the request with `id`, if present.
pub fn mark_request_status<T: Reviewable>(items: &mut [T], id: &str, status: RequestStatus) -> bool {
    match items.iter_mut().find(|item| item.id() == id) {
        Some(item) => {
            item.set_status(status);
            true
        }
        None => false,
    }
}

/// Whether approve/reject actions apply.
pub fn is_actionable<T: Reviewable>(item: &T) -> bool {
    item.status() == RequestStatus::Pending
}

/// Smallest payout each channel accepts, in dollars.
pub fn method_minimum(method: &PaymentMethod) -> Option<f64> {
    match method {
        PaymentMethod::Paypal => Some(10.0),
        PaymentMethod::Bank => Some(25.0),
        PaymentMethod::Card => Some(5.0),
        PaymentMethod::Usdt => Some(20.0),
        PaymentMethod::Other(_) => None,
    }
}

/// Dollar limit shown in the "Max Withdrawal" column.
///
/// The balance converts at [`POINTS_PER_DOLLAR`] and is capped by the
/// channel minimum. Unknown channels are capped by the balance alone.
pub fn withdrawal_limit(balance: i64, method: &PaymentMethod) -> f64 {
    let withdrawable = balance as f64 / POINTS_PER_DOLLAR;
    match method_minimum(method) {
        Some(minimum) => withdrawable.min(minimum),
        None => withdrawable,
    }
}

/// One labelled line of a payment-details cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: String,
    /// Rendered with a warning style.
    pub missing: bool,
}

impl DetailLine {
    fn present(label: &'static str, value: Option<&str>) -> Self {
        Self { label, value: or_na(value).to_owned(), missing: false }
    }
}

/// Payout details for a withdrawal. Empty means the cell shows "N/A".
pub fn payment_summary(method: &PaymentMethod, details: Option<&PaymentDetails>) -> Vec<DetailLine> {
    match method {
        PaymentMethod::Bank => {
            let bank = details.and_then(|d| d.bank_details.as_ref());
            vec![
                DetailLine::present("Account", bank.and_then(|b| b.account_number.as_deref())),
                DetailLine::present("Bank", bank.and_then(|b| b.bank_name.as_deref())),
                DetailLine::present("IFSC", bank.and_then(|b| b.ifsc.as_deref())),
            ]
        }
        PaymentMethod::Paypal => {
            vec![DetailLine::present("PayPal", details.and_then(|d| d.paypal_email.as_deref()))]
        }
        PaymentMethod::Card => {
            let card = details.and_then(|d| d.card_details.as_ref());
            vec![DetailLine::present("Card", card.and_then(|c| c.card_number.as_deref()))]
        }
        PaymentMethod::Usdt => {
            let wallet = details
                .and_then(|d| d.usdt_details.as_ref())
                .and_then(|u| u.wallet_address.as_deref())
                .filter(|w| !w.trim().is_empty());
            match wallet {
                Some(address) => vec![DetailLine::present("USDT Wallet", Some(address))],
                None => {
                    log::warn!("usdt withdrawal is missing its wallet address");
                    vec![DetailLine {
                        label: "USDT Wallet",
                        value: "Missing wallet address".to_owned(),
                        missing: true,
                    }]
                }
            }
        }
        PaymentMethod::Other(_) => Vec::new(),
    }
}

/// Proof-of-payment reference for a recharge: transaction id and screenshot.
///
/// Only bank transfers carry one.
pub fn recharge_reference(recharge: &Recharge) -> Option<(String, Option<String>)> {
    if recharge.method != PaymentMethod::Bank {
        return None;
    }
    let transaction = recharge.details.as_ref().and_then(|d| d.transaction_id.as_deref());
    let screenshot = recharge.screenshot_url.clone().filter(|url| !url.is_empty());
    Some((or_na(transaction).to_owned(), screenshot))
}

/// Badge class for a report reason.
pub fn report_reason_class(reason: Option<&str>) -> &'static str {
    match reason.map(str::to_ascii_lowercase).as_deref() {
        Some("spam") => "badge badge--spam",
        Some("adult") => "badge badge--adult",
        Some("violence") => "badge badge--violence",
        Some("harassment") => "badge badge--harassment",
        Some("inappropriate_content") => "badge badge--inappropriate",
        _ => "badge",
    }
}

/// Human label for a report reason, e.g. `inappropriate_content`.
pub fn report_reason_label(reason: Option<&str>) -> String {
    match reason.filter(|r| !r.is_empty()) {
        Some(reason) => reason.replace('_', " "),
        None => "Unknown".to_owned(),
    }
}

/// Shorten free text for table cells, appending an ellipsis when cut.
pub fn truncate_text(text: Option<&str>, max_chars: usize) -> String {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return MISSING_DESCRIPTION.to_owned();
    };
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

/// Footer under paged listings. Hidden when the total is unknown or zero.
pub fn showing_summary(shown: usize, pagination: &Pagination) -> Option<String> {
    match pagination.total {
        Some(total) if total > 0 => Some(format!("Showing {shown} of {total} requests")),
        _ => None,
    }
}

fn or_na(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("N/A")
}
