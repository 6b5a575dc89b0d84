use super::*;

fn draft() -> AdDraft {
    AdDraft {
        title: "  Summer Sale ".to_owned(),
        description: "Half off everything".to_owned(),
        ad_link: "https://shop.example.com".to_owned(),
        category: "retail".to_owned(),
        photo_url: Some("https://cdn.example.com/ad.png".to_owned()),
    }
}

#[test]
fn validate_ad_draft_trims_fields() {
    let validated = validate_ad_draft(&draft(), true).unwrap();
    assert_eq!(validated.title, "Summer Sale");
    assert_eq!(validated.photo_url.as_deref(), Some("https://cdn.example.com/ad.png"));
}

#[test]
fn validate_ad_draft_requires_text_fields() {
    let mut missing_title = draft();
    missing_title.title = "   ".to_owned();
    assert_eq!(validate_ad_draft(&missing_title, false), Err("Ad title is required."));

    let mut missing_category = draft();
    missing_category.category.clear();
    assert_eq!(validate_ad_draft(&missing_category, false), Err("Ad category is required."));
}

#[test]
fn validate_ad_draft_requires_http_link() {
    let mut bad_link = draft();
    bad_link.ad_link = "shop.example.com".to_owned();
    assert_eq!(validate_ad_draft(&bad_link, false), Err("Ad link must be an http(s) URL."));
}

#[test]
fn validate_ad_draft_photo_url_only_checked_when_required() {
    let mut no_photo = draft();
    no_photo.photo_url = Some("   ".to_owned());
    let created = validate_ad_draft(&no_photo, false).unwrap();
    assert_eq!(created.photo_url, None);
    assert_eq!(validate_ad_draft(&no_photo, true), Err("Ad photo URL must be an http(s) URL."));
}
