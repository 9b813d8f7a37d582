use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.site_dir.ends_with("client/dist"));
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:8080");
}

#[test]
fn explicit_values_override_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", " 3001 "),
        ("SITE_DIR", "/srv/portfolio"),
    ]))
    .unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:3001");
    assert_eq!(cfg.site_dir, PathBuf::from("/srv/portfolio"));
}

#[test]
fn malformed_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "eighty".to_owned() });

    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "70000".to_owned() });
}

#[test]
fn malformed_host_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("HOST", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost { value: "localhost".to_owned() });
}

#[test]
fn ipv6_host_is_accepted() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("HOST", "::1"), ("PORT", "8443")])).unwrap();
    assert_eq!(cfg.addr().to_string(), "[::1]:8443");
}
