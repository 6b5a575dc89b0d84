use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  admin@example.com  ", "secret"),
        Ok(("admin@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("admin@example.com", " pass "),
        Ok(("admin@example.com".to_owned(), " pass ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login_input("admin@example.com", ""), Err(MISSING_CREDENTIALS));
}

#[test]
fn accept_login_response_requires_a_token() {
    let reply = |token: &str| LoginResponse { token: token.to_owned(), message: None };
    assert_eq!(accept_login_response(&reply("tok-1")), Ok(()));
    assert_eq!(accept_login_response(&reply("")), Err(MISSING_TOKEN));
}
