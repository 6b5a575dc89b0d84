//! Wire DTOs for the platform backend consumed by the console.
//!
//! DESIGN
//! ======
//! The backend is MongoDB-backed, so records carry `_id` and camelCase field
//! names. Fields the console does not strictly need are optional with serde
//! defaults so partially populated records still render.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Successful response from `POST /admin/admin-login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Platform end user as listed by `GET /auth/getUsers`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub is_verified: bool,
    /// Present when the account was created through Google sign-in.
    #[serde(default)]
    pub google_id: Option<String>,
}

impl User {
    /// Label for the sign-in provider column.
    pub fn provider(&self) -> &'static str {
        if self.google_id.is_some() { "Google" } else { "Local" }
    }
}

/// Uploader summary embedded in a video record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoOwner {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A user-uploaded video awaiting or past moderation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(rename = "_id")]
    pub id: String,
    /// Playback URL. Older records store it as `uri`.
    #[serde(default, alias = "uri")]
    pub url: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub user: Option<VideoOwner>,
    /// The backend sends either a like count or the array of liking users.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub likes: u64,
    #[serde(default)]
    pub comments_count: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub shares: u64,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Video {
    pub fn owner_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.username.as_deref())
            .unwrap_or("Unknown User")
    }
}

/// The reported video: either a bare id or the populated record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportedVideo {
    Id(String),
    Embedded(Box<Video>),
}

impl ReportedVideo {
    pub fn video_id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Embedded(video) => &video.id,
        }
    }
}

/// Reporter summary embedded in a report.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Reporter {
    #[serde(default)]
    pub email: Option<String>,
}

/// A user report against a video, from `GET /auth/getreportVideo`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoReport {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub video_id: Option<ReportedVideo>,
    #[serde(default)]
    pub reporter_id: Option<Reporter>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// An advertisement as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ad_link: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub display_photo: Option<String>,
}

/// Editable ad fields submitted by the create and edit forms.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdDraft {
    pub title: String,
    pub description: String,
    pub ad_link: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl From<&Ad> for AdDraft {
    fn from(ad: &Ad) -> Self {
        Self {
            title: ad.title.clone(),
            description: ad.description.clone(),
            ad_link: ad.ad_link.clone(),
            category: ad.category.clone(),
            photo_url: ad.display_photo.clone(),
        }
    }
}

/// Lifecycle of a withdrawal or recharge request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Completed,
    Rejected,
    /// Any status this console does not know about.
    #[serde(other)]
    Unknown,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        }
    }

    /// CSS modifier for the status cell.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "status status--pending",
            Self::Approved | Self::Completed => "status status--ok",
            Self::Rejected | Self::Unknown => "status status--failed",
        }
    }
}

/// Payout or payment channel of a financial request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Paypal,
    Bank,
    Card,
    Usdt,
    #[serde(untagged)]
    Other(String),
}

impl PaymentMethod {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Paypal => "paypal",
            Self::Bank => "bank",
            Self::Card => "card",
            Self::Usdt => "usdt",
            Self::Other(name) => name,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub ifsc: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    #[serde(default)]
    pub card_number: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdtDetails {
    #[serde(default)]
    pub wallet_address: Option<String>,
}

/// Method-specific payment details. Only the block matching the method is set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    #[serde(default)]
    pub bank_details: Option<BankDetails>,
    #[serde(default)]
    pub paypal_email: Option<String>,
    #[serde(default)]
    pub card_details: Option<CardDetails>,
    #[serde(default)]
    pub usdt_details: Option<UsdtDetails>,
    #[serde(default)]
    pub transaction_id: Option<String>,
}

/// Requesting user as populated into financial requests.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A user's request to cash out points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: Option<RequestUser>,
    pub method: PaymentMethod,
    #[serde(default)]
    pub details: Option<PaymentDetails>,
    #[serde(default)]
    pub points_to_deduct: i64,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub user_balance: Option<i64>,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub requested_at: Option<String>,
}

/// A user's request to buy points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recharge {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: Option<RequestUser>,
    pub method: PaymentMethod,
    #[serde(default)]
    pub details: Option<PaymentDetails>,
    #[serde(default)]
    pub screenshot_url: Option<String>,
    #[serde(default)]
    pub points_to_add: i64,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub requested_at: Option<String>,
}

/// Paging metadata attached to history listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

/// A page of financial requests plus paging metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestPage<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Reply to an approve/reject mutation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionReply {
    #[serde(default, alias = "message")]
    pub msg: Option<String>,
    /// Remaining point balance after an approved withdrawal.
    #[serde(default)]
    pub new_balance: Option<i64>,
}

/// Signed storage URLs returned by `POST /auth/uploadVideo`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTarget {
    /// Pre-signed PUT URL for the object store.
    pub upload_url: String,
    /// Pre-signed GET URL saved with the video record.
    pub file_url: String,
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|v| *v >= 0.0).map(|v| v as u64))
            .ok_or_else(|| D::Error::custom(format!("invalid count: {n}"))),
        serde_json::Value::Array(items) => Ok(items.len() as u64),
        other => Err(D::Error::custom(format!("expected count or array, got {other}"))),
    }
}
