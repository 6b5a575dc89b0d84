use super::*;

// =============================================================
// Login / users
// =============================================================

#[test]
fn login_response_requires_token() {
    let ok: LoginResponse = serde_json::from_value(serde_json::json!({ "token": "abc" })).unwrap();
    assert_eq!(ok.token, "abc");
    assert_eq!(ok.message, None);

    let missing = serde_json::from_value::<LoginResponse>(serde_json::json!({ "message": "hi" }));
    assert!(missing.is_err());
}

#[test]
fn user_maps_mongo_id_and_camel_case() {
    let user: User = serde_json::from_value(serde_json::json!({
        "_id": "u1",
        "username": "alice",
        "email": "a@example.com",
        "points": 120,
        "isVerified": true,
        "googleId": "g-1"
    }))
    .unwrap();
    assert_eq!(user.id, "u1");
    assert!(user.is_verified);
    assert_eq!(user.provider(), "Google");
}

#[test]
fn user_without_google_id_is_local() {
    let user: User = serde_json::from_value(serde_json::json!({ "_id": "u2" })).unwrap();
    assert_eq!(user.provider(), "Local");
    assert_eq!(user.points, 0);
}

// =============================================================
// Videos / reports
// =============================================================

#[test]
fn video_likes_accepts_number_or_array() {
    let counted: Video = serde_json::from_value(serde_json::json!({ "_id": "v1", "likes": 7 })).unwrap();
    assert_eq!(counted.likes, 7);

    let listed: Video =
        serde_json::from_value(serde_json::json!({ "_id": "v2", "likes": ["u1", "u2", "u3"] })).unwrap();
    assert_eq!(listed.likes, 3);

    let null: Video = serde_json::from_value(serde_json::json!({ "_id": "v3", "likes": null })).unwrap();
    assert_eq!(null.likes, 0);
}

#[test]
fn video_likes_rejects_strings() {
    let bad = serde_json::from_value::<Video>(serde_json::json!({ "_id": "v1", "likes": "many" }));
    assert!(bad.is_err());
}

#[test]
fn video_url_accepts_uri_alias() {
    let video: Video =
        serde_json::from_value(serde_json::json!({ "_id": "v1", "uri": "https://cdn/v1.mp4" })).unwrap();
    assert_eq!(video.url.as_deref(), Some("https://cdn/v1.mp4"));
}

#[test]
fn video_owner_name_falls_back_to_unknown() {
    let video: Video = serde_json::from_value(serde_json::json!({ "_id": "v1" })).unwrap();
    assert_eq!(video.owner_name(), "Unknown User");

    let owned: Video =
        serde_json::from_value(serde_json::json!({ "_id": "v1", "user": { "username": "bob" } })).unwrap();
    assert_eq!(owned.owner_name(), "bob");
}

#[test]
fn report_video_id_accepts_plain_id() {
    let report: VideoReport =
        serde_json::from_value(serde_json::json!({ "_id": "r1", "videoId": "v9", "reason": "spam" })).unwrap();
    assert_eq!(report.video_id.as_ref().map(ReportedVideo::video_id), Some("v9"));
}

#[test]
fn report_video_id_accepts_embedded_video() {
    let report: VideoReport = serde_json::from_value(serde_json::json!({
        "_id": "r1",
        "videoId": { "_id": "v9", "uri": "https://cdn/v9.mp4", "description": "clip" },
        "reporterId": { "email": "r@example.com" }
    }))
    .unwrap();
    let Some(ReportedVideo::Embedded(video)) = report.video_id else {
        panic!("expected embedded video");
    };
    assert_eq!(video.id, "v9");
    assert_eq!(video.description, "clip");
}

// =============================================================
// Ads
// =============================================================

#[test]
fn ad_draft_serializes_camel_case_and_skips_missing_photo() {
    let draft = AdDraft {
        title: "Sale".to_owned(),
        description: "Half off".to_owned(),
        ad_link: "https://shop.example".to_owned(),
        category: "retail".to_owned(),
        photo_url: None,
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value["adLink"], "https://shop.example");
    assert!(value.get("photoUrl").is_none());
}

#[test]
fn ad_draft_from_ad_copies_display_photo() {
    let ad: Ad = serde_json::from_value(serde_json::json!({
        "_id": "a1",
        "title": "Sale",
        "adLink": "https://shop.example",
        "displayPhoto": "https://cdn/a1.png"
    }))
    .unwrap();
    let draft = AdDraft::from(&ad);
    assert_eq!(draft.photo_url.as_deref(), Some("https://cdn/a1.png"));
    assert_eq!(draft.ad_link, "https://shop.example");
}

// =============================================================
// Financial requests
// =============================================================

#[test]
fn withdrawal_parses_method_and_status() {
    let withdrawal: Withdrawal = serde_json::from_value(serde_json::json!({
        "_id": "w1",
        "userId": { "username": "alice", "email": "a@example.com" },
        "method": "usdt",
        "details": { "usdtDetails": { "walletAddress": "T123" } },
        "pointsToDeduct": 500,
        "amount": 50,
        "userBalance": 2000,
        "status": "pending",
        "requestedAt": "2025-07-01T10:20:30.000Z"
    }))
    .unwrap();
    assert_eq!(withdrawal.method, PaymentMethod::Usdt);
    assert_eq!(withdrawal.status, RequestStatus::Pending);
    assert!((withdrawal.amount - 50.0).abs() < f64::EPSILON);
}

#[test]
fn unknown_method_and_status_are_preserved_or_flagged() {
    let recharge: Recharge = serde_json::from_value(serde_json::json!({
        "_id": "c1",
        "method": "upi",
        "status": "on_hold"
    }))
    .unwrap();
    assert_eq!(recharge.method, PaymentMethod::Other("upi".to_owned()));
    assert_eq!(recharge.method.as_str(), "upi");
    assert_eq!(recharge.status, RequestStatus::Unknown);
}

#[test]
fn request_status_css_groups_approved_and_completed() {
    assert_eq!(RequestStatus::Approved.css_class(), RequestStatus::Completed.css_class());
    assert_ne!(RequestStatus::Pending.css_class(), RequestStatus::Rejected.css_class());
}

#[test]
fn action_reply_accepts_message_alias() {
    let reply: ActionReply =
        serde_json::from_value(serde_json::json!({ "message": "ok", "newBalance": 1500 })).unwrap();
    assert_eq!(reply.msg.as_deref(), Some("ok"));
    assert_eq!(reply.new_balance, Some(1500));
}
