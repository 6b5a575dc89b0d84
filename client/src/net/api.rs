//! REST client for the platform backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: every request resolves to
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser, where the session token lives.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx replies carry the
//! backend's `message`/`msg` text so pages can show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    ActionReply, Ad, AdDraft, LoginResponse, Pagination, Recharge, RequestPage, UploadTarget, User, Video,
    VideoReport, Withdrawal,
};
use crate::config::ConsoleConfig;

/// Display name attached to videos uploaded from the console.
pub const ADMIN_UPLOADER_NAME: &str = "EarnKar Team";
/// Avatar attached to videos uploaded from the console.
pub const ADMIN_UPLOADER_AVATAR: &str = "https://cdn-icons-png.flaticon.com/128/7641/7641727.png";

const APPROVE_NOTE: &str = "Approved by admin";

/// Token-bearing handle to the backend. Cheap to build per request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        let token = token.filter(|t| !t.is_empty());
        Self { base_url, token }
    }

    /// Client for the configured backend carrying the given session token.
    pub fn from_config(config: &ConsoleConfig, token: Option<String>) -> Self {
        Self::new(config.api_base_url.clone(), token)
    }

    /// Absolute URL for a backend path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `Authorization` header value, when a token is held.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// Exchange admin credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns the backend's message on rejected credentials.
    pub async fn admin_login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let payload = serde_json::json!({ "email": email, "password": password });
        let value = self.send_json(Method::Post, "admin/admin-login", Some(&payload)).await?;
        decode(value)
    }

    // =========================================================================
    // USERS
    // =========================================================================

    /// # Errors
    ///
    /// Returns an error if the request fails or the list cannot be decoded.
    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let value = self.send_json(Method::Get, "auth/getUsers", None::<&()>).await?;
        decode_list(value, &["users", "data"])
    }

    /// # Errors
    ///
    /// Returns an error if the backend refuses the deletion.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        let path = user_delete_path(user_id);
        self.send_json(Method::Delete, &path, None::<&()>).await.map(drop)
    }

    // =========================================================================
    // VIDEOS
    // =========================================================================

    /// Videos awaiting moderation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the list cannot be decoded.
    pub async fn fetch_pending_videos(&self) -> Result<Vec<Video>, ApiError> {
        let value = self.send_json(Method::Get, "admin/videos", None::<&()>).await?;
        decode_list(value, &["data", "videos"])
    }

    /// # Errors
    ///
    /// Returns an error if the backend refuses the approval.
    pub async fn approve_video(&self, video_id: &str) -> Result<(), ApiError> {
        let payload = serde_json::json!({ "videoId": video_id });
        self.send_json(Method::Post, "admin/videos/approve", Some(&payload)).await.map(drop)
    }

    /// Reject a pending or reported video by deleting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the deletion.
    pub async fn delete_video(&self, video_id: &str) -> Result<(), ApiError> {
        let path = video_delete_path(video_id);
        self.send_json(Method::Delete, &path, None::<&()>).await.map(drop)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the list cannot be decoded.
    pub async fn fetch_approved_videos(&self) -> Result<Vec<Video>, ApiError> {
        let value = self.send_json(Method::Get, "admin/videos/approved", None::<&()>).await?;
        decode_list(value, &["data", "videos"])
    }

    /// # Errors
    ///
    /// Returns an error if the backend refuses the deletion.
    pub async fn delete_approved_video(&self, video_id: &str) -> Result<(), ApiError> {
        let path = approved_video_delete_path(video_id);
        self.send_json(Method::Delete, &path, None::<&()>).await.map(drop)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the list cannot be decoded.
    pub async fn fetch_reports(&self) -> Result<Vec<VideoReport>, ApiError> {
        let value = self.send_json(Method::Get, "auth/getreportVideo", None::<&()>).await?;
        decode_list(value, &["reports", "data"])
    }

    /// Ask the backend for signed storage URLs for a new upload.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot sign the upload.
    pub async fn request_upload_url(&self, file_name: &str, file_type: &str) -> Result<UploadTarget, ApiError> {
        let payload = serde_json::json!({ "fileName": file_name, "fileType": file_type });
        let value = self.send_json(Method::Post, "auth/uploadVideo", Some(&payload)).await?;
        decode(value)
    }

    /// Record an uploaded video so it appears in the feed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the record.
    pub async fn save_uploaded_video(&self, file_url: &str, description: &str) -> Result<(), ApiError> {
        let payload = serde_json::json!({
            "uri": file_url,
            "user": ADMIN_UPLOADER_NAME,
            "avatar": ADMIN_UPLOADER_AVATAR,
            "description": description,
            "isAdmin": true,
        });
        self.send_json(Method::Post, "auth/addVideo", Some(&payload)).await.map(drop)
    }

    /// PUT the raw file to the pre-signed storage URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the object store rejects the upload.
    #[cfg(feature = "hydrate")]
    pub async fn upload_to_storage(&self, target: &UploadTarget, file: &web_sys::File) -> Result<(), ApiError> {
        let request = gloo_net::http::Request::put(&target.upload_url)
            .header("Content-Type", &file.type_())
            .body(file.clone())
            .map_err(|e| ApiError::Network(e.to_string()))?;
        transport::send(request).await.map(drop)
    }

    // =========================================================================
    // ADS
    // =========================================================================

    /// # Errors
    ///
    /// Returns an error if the request fails or the list cannot be decoded.
    pub async fn fetch_ads(&self) -> Result<Vec<Ad>, ApiError> {
        let value = self.send_json(Method::Get, "admin/auth/getAd", None::<&()>).await?;
        decode_list(value, &["data", "ads"])
    }

    /// Look up one ad. The backend has no single-ad endpoint, so this scans the list.
    ///
    /// # Errors
    ///
    /// Returns an error if the ad list cannot be fetched.
    pub async fn fetch_ad(&self, ad_id: &str) -> Result<Option<Ad>, ApiError> {
        let ads = self.fetch_ads().await?;
        Ok(ads.into_iter().find(|ad| ad.id == ad_id))
    }

    /// Create an ad with an optional display photo (multipart upload).
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the ad.
    #[cfg(feature = "hydrate")]
    pub async fn create_ad(&self, draft: &AdDraft, photo: Option<&web_sys::File>) -> Result<(), ApiError> {
        let form = web_sys::FormData::new().map_err(|_| ApiError::Network("form data unavailable".to_owned()))?;
        for (key, value) in [
            ("title", &draft.title),
            ("description", &draft.description),
            ("adLink", &draft.ad_link),
            ("category", &draft.category),
        ] {
            let _ = form.append_with_str(key, value);
        }
        if let Some(photo) = photo {
            let _ = form.append_with_blob("photo", photo);
        }
        let builder = transport::authorize(gloo_net::http::Request::post(&self.endpoint("admin/auth/ad")), self.bearer());
        let request = builder.body(form).map_err(|e| ApiError::Network(e.to_string()))?;
        transport::send(request).await.map(drop)
    }

    /// # Errors
    ///
    /// Returns an error if the backend rejects the update.
    pub async fn update_ad(&self, ad_id: &str, draft: &AdDraft) -> Result<(), ApiError> {
        let path = ad_path(ad_id);
        self.send_json(Method::Put, &path, Some(draft)).await.map(drop)
    }

    /// # Errors
    ///
    /// Returns an error if the backend refuses the deletion.
    pub async fn delete_ad(&self, ad_id: &str) -> Result<(), ApiError> {
        let path = ad_path(ad_id);
        self.send_json(Method::Delete, &path, None::<&()>).await.map(drop)
    }

    // =========================================================================
    // FINANCE
    // =========================================================================

    /// # Errors
    ///
    /// Returns an error if the request fails or the page cannot be decoded.
    pub async fn fetch_withdrawals(&self) -> Result<RequestPage<Withdrawal>, ApiError> {
        let value = self.send_json(Method::Get, "withdrawals/history", None::<&()>).await?;
        decode_page(value, "withdrawals")
    }

    /// # Errors
    ///
    /// Returns the backend's message if the approval is refused.
    pub async fn approve_withdrawal(&self, id: &str) -> Result<ActionReply, ApiError> {
        let path = finance_action_path("withdrawals", FinanceAction::Approve, id);
        let payload = serde_json::json!({ "notes": APPROVE_NOTE });
        decode(self.send_json(Method::Post, &path, Some(&payload)).await?)
    }

    /// # Errors
    ///
    /// Returns the backend's message if the rejection is refused.
    pub async fn reject_withdrawal(&self, id: &str, reason: &str) -> Result<ActionReply, ApiError> {
        let path = finance_action_path("withdrawals", FinanceAction::Reject, id);
        let payload = serde_json::json!({ "reason": reason });
        decode(self.send_json(Method::Post, &path, Some(&payload)).await?)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the page cannot be decoded.
    pub async fn fetch_recharges(&self) -> Result<RequestPage<Recharge>, ApiError> {
        let value = self.send_json(Method::Get, "recharges/history", None::<&()>).await?;
        decode_page(value, "recharges")
    }

    /// # Errors
    ///
    /// Returns the backend's message if the approval is refused.
    pub async fn approve_recharge(&self, id: &str) -> Result<ActionReply, ApiError> {
        let path = finance_action_path("recharges", FinanceAction::Approve, id);
        let payload = serde_json::json!({ "notes": APPROVE_NOTE });
        decode(self.send_json(Method::Post, &path, Some(&payload)).await?)
    }

    /// # Errors
    ///
    /// Returns the backend's message if the rejection is refused.
    pub async fn reject_recharge(&self, id: &str, reason: &str) -> Result<ActionReply, ApiError> {
        let path = finance_action_path("recharges", FinanceAction::Reject, id);
        let payload = serde_json::json!({ "reason": reason });
        decode(self.send_json(Method::Post, &path, Some(&payload)).await?)
    }

    // =========================================================================
    // TRANSPORT
    // =========================================================================

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<serde_json::Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.endpoint(path);
            let builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            let builder = transport::authorize(builder, self.bearer());
            let request = match body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;
            transport::send(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FinanceAction {
    Approve,
    Reject,
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder};

    use super::ApiError;

    pub(super) fn authorize(builder: RequestBuilder, bearer: Option<String>) -> RequestBuilder {
        match bearer {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    pub(super) async fn send(request: Request) -> Result<serde_json::Value, ApiError> {
        let url = request.url();
        let resp = request.send().await.map_err(|e| {
            log::warn!("request to {url} failed: {e}");
            ApiError::Network(e.to_string())
        })?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let err = ApiError::from_status(status, &body);
            log::warn!("request to {url} returned {status}: {err}");
            return Err(err);
        }
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn user_delete_path(user_id: &str) -> String {
    format!("auth/deleteUser/{user_id}")
}

fn video_delete_path(video_id: &str) -> String {
    format!("auth/deleteVideo/{video_id}")
}

fn approved_video_delete_path(video_id: &str) -> String {
    format!("videos/admin/deleteVideo/{video_id}")
}

fn ad_path(ad_id: &str) -> String {
    format!("admin/auth/getAd/{ad_id}")
}

fn finance_action_path(resource: &str, action: FinanceAction, id: &str) -> String {
    let verb = match action {
        FinanceAction::Approve => "approve",
        FinanceAction::Reject => "reject",
    };
    format!("{resource}/admin/{verb}/{id}")
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a list sent either bare or wrapped under one of `keys`.
fn decode_list<T: DeserializeOwned>(value: serde_json::Value, keys: &[&str]) -> Result<Vec<T>, ApiError> {
    match value {
        serde_json::Value::Array(_) => decode(value),
        serde_json::Value::Object(mut map) => {
            match keys.iter().find_map(|key| map.remove(*key).filter(serde_json::Value::is_array)) {
                Some(list) => decode(list),
                None => Err(ApiError::Decode(format!("missing list field (expected one of {keys:?})"))),
            }
        }
        other => Err(ApiError::Decode(format!("expected list, got {other}"))),
    }
}

/// Decode a history page. A reply without the list key is an empty page.
fn decode_page<T: DeserializeOwned>(value: serde_json::Value, key: &str) -> Result<RequestPage<T>, ApiError> {
    let pagination: Pagination = value
        .get("pagination")
        .cloned()
        .map(decode)
        .transpose()?
        .unwrap_or_default();
    let items = match value.get(key) {
        Some(list) if !list.is_null() => decode(list.clone())?,
        _ => Vec::new(),
    };
    Ok(RequestPage { items, pagination })
}
