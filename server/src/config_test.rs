use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(
        cfg,
        ServerConfig { port: DEFAULT_PORT, database_url: None, db_max_connections: DEFAULT_DB_MAX_CONNECTIONS }
    );
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("DATABASE_URL", "postgres://localhost/toolbox"),
        ("DB_MAX_CONNECTIONS", "12"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/toolbox"));
    assert_eq!(cfg.db_max_connections, 12);
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));
    assert_eq!(err.to_string(), "invalid PORT: http");
}

#[test]
fn blank_database_url_means_memory_store() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).unwrap();
    assert!(cfg.database_url.is_none());
}

#[test]
fn bad_pool_size_falls_back_to_default() {
    for raw in ["zero", "0", "-3"] {
        let cfg = ServerConfig::from_lookup(lookup_from(&[("DB_MAX_CONNECTIONS", raw)])).unwrap();
        assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS, "{raw}");
    }
}

#[test]
fn from_env_reads_process_environment() {
    // PORT is the only variable read here that other tests never touch.
    unsafe {
        std::env::set_var("PORT", "4321");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4321);
    unsafe {
        std::env::remove_var("PORT");
    }
}
