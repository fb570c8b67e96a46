use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_reads_all_identifiers() {
    let config = ContactConfig::from_lookup(lookup_from(&[
        ("EMAILJS_PUBLIC_KEY", "pk_123"),
        ("EMAILJS_SERVICE_ID", "service_abc"),
        ("EMAILJS_TEMPLATE_ID", "template_xyz"),
    ]));
    assert_eq!(config.public_key.as_deref(), Some("pk_123"));
    assert_eq!(config.service_id.as_deref(), Some("service_abc"));
    assert_eq!(config.template_id.as_deref(), Some("template_xyz"));
    assert_eq!(config.api_url, DEFAULT_EMAILJS_API_URL);
    assert_eq!(config.delivery_target(), Some(("service_abc", "template_xyz")));
}

#[test]
fn from_lookup_treats_empty_values_as_unset() {
    let config = ContactConfig::from_lookup(lookup_from(&[
        ("EMAILJS_PUBLIC_KEY", ""),
        ("EMAILJS_SERVICE_ID", "   "),
        ("EMAILJS_TEMPLATE_ID", "template_xyz"),
    ]));
    assert_eq!(config.public_key, None);
    assert_eq!(config.service_id, None);
    assert_eq!(config.delivery_target(), None);
}

#[test]
fn from_lookup_nothing_set() {
    let config = ContactConfig::from_lookup(|_| None);
    assert_eq!(config.public_key, None);
    assert_eq!(config.service_id, None);
    assert_eq!(config.template_id, None);
    assert_eq!(config.api_url, DEFAULT_EMAILJS_API_URL);
}

#[test]
fn delivery_target_requires_template() {
    let config = ContactConfig::from_lookup(lookup_from(&[("EMAILJS_SERVICE_ID", "service_abc")]));
    assert_eq!(config.delivery_target(), None);
}

#[test]
fn api_url_trailing_slash_trimmed() {
    let config = ContactConfig::from_lookup(lookup_from(&[("EMAILJS_API_URL", "http://localhost:9000/api/")]));
    assert_eq!(config.api_url, "http://localhost:9000/api");
}

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_number() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 8080 ")), Ok(8080));
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("eighty")), Err("eighty".to_string()));
    assert_eq!(parse_port(Some("70000")), Err("70000".to_string()));
}
