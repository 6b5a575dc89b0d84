use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = ConsoleConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ConsoleConfig::default());
    assert_eq!(cfg.idle_timeout, Duration::from_secs(300));
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn overrides_are_parsed() {
    let cfg = ConsoleConfig::from_lookup(lookup_from(&[
        (API_BASE_URL_VAR, "http://localhost:5002/api/"),
        (IDLE_TIMEOUT_VAR, " 90 "),
    ]))
    .unwrap();
    assert_eq!(cfg.api_base_url, "http://localhost:5002/api");
    assert_eq!(cfg.idle_timeout, Duration::from_secs(90));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ConsoleConfig::from_lookup(lookup_from(&[(API_BASE_URL_VAR, "  "), (IDLE_TIMEOUT_VAR, "")])).unwrap();
    assert_eq!(cfg, ConsoleConfig::default());
}

#[test]
fn zero_timeout_is_rejected() {
    let err = ConsoleConfig::from_lookup(lookup_from(&[(IDLE_TIMEOUT_VAR, "0")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidTimeout { var: IDLE_TIMEOUT_VAR, value: "0".to_owned() });
}

#[test]
fn non_numeric_timeout_is_rejected() {
    let err = ConsoleConfig::from_lookup(lookup_from(&[(IDLE_TIMEOUT_VAR, "5m")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
}

#[test]
fn base_url_requires_scheme() {
    let err = ConsoleConfig::from_lookup(lookup_from(&[(API_BASE_URL_VAR, "api.example.com")])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "ADMIN_API_BASE_URL must be an http(s) URL, got 'api.example.com'"
    );
}

#[test]
fn build_env_config_is_valid() {
    let cfg = ConsoleConfig::from_build_env();
    assert!(cfg.idle_timeout > Duration::ZERO);
    assert!(cfg.api_base_url.starts_with("http"));
}

#[test]
fn meta_entries_read_back_to_the_same_config() {
    let cfg = ConsoleConfig::from_lookup(lookup_from(&[
        (API_BASE_URL_VAR, "http://localhost:5002/api"),
        (IDLE_TIMEOUT_VAR, "45"),
    ]))
    .unwrap();
    let entries = cfg.meta_entries();
    let pairs: Vec<(&str, &str)> = entries.iter().map(|(k, v)| (*k, v.as_str())).collect();
    let read_back = ConsoleConfig::from_lookup(lookup_from(&pairs)).unwrap();
    assert_eq!(read_back, cfg);
    assert_eq!(read_back.idle_timeout, Duration::from_secs(45));
}
