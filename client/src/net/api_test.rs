use super::*;
use crate::net::types::RequestStatus;

fn client() -> ApiClient {
    ApiClient::new("https://api.example.test/api/", Some("tok-1".to_owned()))
}

#[test]
fn endpoint_joins_without_double_slash() {
    let api = client();
    assert_eq!(api.endpoint("/auth/getUsers"), "https://api.example.test/api/auth/getUsers");
    assert_eq!(api.endpoint("admin/videos"), "https://api.example.test/api/admin/videos");
}

#[test]
fn bearer_formats_token() {
    assert_eq!(client().bearer().as_deref(), Some("Bearer tok-1"));
}

#[test]
fn empty_token_sends_no_bearer() {
    let api = ApiClient::new("https://api.example.test/api", Some(String::new()));
    assert_eq!(api.bearer(), None);
}

#[test]
fn from_config_uses_configured_base() {
    let config = ConsoleConfig::default();
    let api = ApiClient::from_config(&config, None);
    assert!(api.endpoint("x").starts_with(&config.api_base_url));
}

#[test]
fn resource_paths_match_backend_routes() {
    assert_eq!(user_delete_path("u1"), "auth/deleteUser/u1");
    assert_eq!(video_delete_path("v1"), "auth/deleteVideo/v1");
    assert_eq!(approved_video_delete_path("v1"), "videos/admin/deleteVideo/v1");
    assert_eq!(ad_path("a1"), "admin/auth/getAd/a1");
}

#[test]
fn finance_action_paths() {
    assert_eq!(
        finance_action_path("withdrawals", FinanceAction::Approve, "w1"),
        "withdrawals/admin/approve/w1"
    );
    assert_eq!(
        finance_action_path("recharges", FinanceAction::Reject, "c1"),
        "recharges/admin/reject/c1"
    );
}

#[test]
fn decode_list_accepts_bare_array() {
    let ads: Vec<Ad> = decode_list(serde_json::json!([{ "_id": "a1", "title": "Sale" }]), &["data"]).unwrap();
    assert_eq!(ads.len(), 1);
    assert_eq!(ads[0].title, "Sale");
}

#[test]
fn decode_list_accepts_wrapped_array() {
    let value = serde_json::json!({ "success": true, "data": [{ "_id": "v1" }, { "_id": "v2" }] });
    let videos: Vec<Video> = decode_list(value, &["videos", "data"]).unwrap();
    assert_eq!(videos.iter().map(|v| v.id.as_str()).collect::<Vec<_>>(), vec!["v1", "v2"]);
}

#[test]
fn decode_list_rejects_missing_field() {
    let err = decode_list::<Ad>(serde_json::json!({ "success": false }), &["data"]).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_page_reads_items_and_pagination() {
    let value = serde_json::json!({
        "withdrawals": [{ "_id": "w1", "method": "paypal", "status": "approved" }],
        "pagination": { "total": 12, "page": 1 }
    });
    let page: RequestPage<Withdrawal> = decode_page(value, "withdrawals").unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].status, RequestStatus::Approved);
    assert_eq!(page.pagination.total, Some(12));
}

#[test]
fn decode_page_without_list_is_empty() {
    let page: RequestPage<Recharge> = decode_page(serde_json::json!({ "ok": true }), "recharges").unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.pagination, Pagination::default());
}

#[test]
fn requests_outside_browser_are_unavailable() {
    let api = client();
    assert_eq!(resolve(api.fetch_users()), Err(ApiError::Unavailable));
    assert_eq!(resolve(api.admin_login("a@b.com", "pw")), Err(ApiError::Unavailable));
}

/// Poll a future that must complete without waiting on I/O.
fn resolve<F: std::future::Future>(fut: F) -> F::Output {
    let mut fut = std::pin::pin!(fut);
    let mut cx = std::task::Context::from_waker(std::task::Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        std::task::Poll::Ready(out) => out,
        std::task::Poll::Pending => panic!("future did not resolve immediately"),
    }
}
