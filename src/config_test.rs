use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_env_empty() {
    let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.fleet.url, DEFAULT_FLEET_DATA_URL);
    assert_eq!(
        cfg.fleet.timeouts,
        FleetTimeouts {
            request_secs: DEFAULT_FLEET_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_FLEET_CONNECT_TIMEOUT_SECS
        }
    );
}

#[test]
fn parses_overrides() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("FLEET_DATA_URL", "http://fleet.internal:9000/api/data"),
        ("FLEET_REQUEST_TIMEOUT_SECS", "2"),
        ("FLEET_CONNECT_TIMEOUT_SECS", "1"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.fleet.url, "http://fleet.internal:9000/api/data");
    assert_eq!(cfg.fleet.timeouts, FleetTimeouts { request_secs: 2, connect_secs: 1 });
}

#[test]
fn invalid_port_errors() {
    let err = AppConfig::from_lookup(lookup_from(&[("PORT", "seventy")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "seventy"));
}

#[test]
fn invalid_fleet_url_errors() {
    let err = AppConfig::from_lookup(lookup_from(&[("FLEET_DATA_URL", "not a url")])).unwrap_err();
    assert!(err.to_string().contains("invalid FLEET_DATA_URL"));
}

#[test]
fn bad_timeout_falls_back_to_default() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("FLEET_REQUEST_TIMEOUT_SECS", "soon")])).unwrap();
    assert_eq!(cfg.fleet.timeouts.request_secs, DEFAULT_FLEET_REQUEST_TIMEOUT_SECS);
}

#[test]
fn zero_timeouts_fall_back_to_defaults() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
        ("FLEET_REQUEST_TIMEOUT_SECS", "0"),
        ("FLEET_CONNECT_TIMEOUT_SECS", "0"),
    ]))
    .unwrap();
    assert_eq!(
        cfg.fleet.timeouts,
        FleetTimeouts {
            request_secs: DEFAULT_FLEET_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_FLEET_CONNECT_TIMEOUT_SECS
        }
    );
}
