use super::*;

use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.rate_limit.limit, 100);
    assert_eq!(cfg.rate_limit.window, Duration::from_secs(60));
}

#[test]
fn reads_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "9090"),
        ("RATE_LIMIT_PER_MINUTE", " 20 "),
        ("RATE_LIMIT_WINDOW_SECS", "30"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 9090);
    assert_eq!(cfg.rate_limit.limit, 20);
    assert_eq!(cfg.rate_limit.window, Duration::from_secs(30));
}

#[test]
fn blank_values_use_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn port_out_of_range_is_rejected() {
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn zero_limit_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("RATE_LIMIT_PER_MINUTE", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "RATE_LIMIT_PER_MINUTE", .. }));
}

#[test]
fn zero_window_is_rejected() {
    assert!(ServerConfig::from_lookup(lookup(&[("RATE_LIMIT_WINDOW_SECS", "0")])).is_err());
}
