use super::*;

/// # Safety
/// Only `from_env_defaults_then_overrides` touches these variables.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }
}

#[test]
fn from_env_defaults_then_overrides() {
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST, port: DEFAULT_PORT });
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");

    unsafe {
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", " 8080 ");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");

    unsafe { clear_server_env() };
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(matches!(parse_port(Some("70000")), Err(ConfigError::InvalidPort(v)) if v == "70000"));
    assert!(matches!(parse_port(Some("http")), Err(ConfigError::InvalidPort(_))));
}

#[test]
fn parse_host_accepts_ipv6_and_rejects_names() {
    assert_eq!(parse_host(Some("::1")).unwrap().to_string(), "::1");
    assert!(matches!(parse_host(Some("localhost")), Err(ConfigError::InvalidHost(_))));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_host(Some("")).unwrap(), DEFAULT_HOST);
}
