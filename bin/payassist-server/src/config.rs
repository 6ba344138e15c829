//! Server configuration, loaded from environment variables at startup.

use std::time::Duration;

/// Runtime configuration for payassist-server.
///
/// Every field has a sensible default so the server works out-of-the-box
/// without any environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:8000"`).
    pub bind_address: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Serve Swagger UI and the OpenAPI document.
    pub enable_swagger: bool,

    /// Simulated "thinking" time before each chat reply. Zero disables it.
    pub think_delay: Duration,

    /// Comma-separated list of allowed CORS origins. `None` mirrors any origin.
    pub cors_allowed_origins: Option<String>,

    /// Largest request body accepted, in bytes. Larger bodies get a 413.
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_owned(),
            log_level: "info".to_owned(),
            log_json: false,
            enable_swagger: true,
            think_delay: Duration::from_millis(1000),
            cors_allowed_origins: None,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_address: lookup("PAYASSIST_BIND").unwrap_or(defaults.bind_address),
            log_level: lookup("PAYASSIST_LOG").unwrap_or(defaults.log_level),
            log_json: lookup("PAYASSIST_LOG_JSON")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.log_json),
            enable_swagger: lookup("PAYASSIST_ENABLE_SWAGGER")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.enable_swagger),
            think_delay: lookup("PAYASSIST_THINK_DELAY_MS")
                .and_then(|v| v.trim().parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.think_delay),
            cors_allowed_origins: lookup("PAYASSIST_CORS_ORIGINS")
                .filter(|v| !v.trim().is_empty()),
            max_body_bytes: lookup("PAYASSIST_MAX_BODY_BYTES")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_body_bytes),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let cfg = config_with(&[]);
        assert_eq!(cfg.bind_address, "0.0.0.0:8000");
        assert_eq!(cfg.think_delay, Duration::from_secs(1));
        assert!(cfg.enable_swagger);
        assert!(!cfg.log_json);
        assert!(cfg.cors_allowed_origins.is_none());
        assert_eq!(cfg.max_body_bytes, 65536);
    }

    #[test]
    fn env_overrides_defaults() {
        let cfg = config_with(&[
            ("PAYASSIST_BIND", "127.0.0.1:9000"),
            ("PAYASSIST_LOG_JSON", "TRUE"),
            ("PAYASSIST_ENABLE_SWAGGER", "0"),
            ("PAYASSIST_THINK_DELAY_MS", "0"),
            ("PAYASSIST_CORS_ORIGINS", "http://localhost:3000"),
            ("PAYASSIST_MAX_BODY_BYTES", "4096"),
        ]);
        assert_eq!(cfg.bind_address, "127.0.0.1:9000");
        assert!(cfg.log_json);
        assert!(!cfg.enable_swagger);
        assert_eq!(cfg.think_delay, Duration::ZERO);
        assert_eq!(cfg.cors_allowed_origins.as_deref(), Some("http://localhost:3000"));
        assert_eq!(cfg.max_body_bytes, 4096);
    }

    #[test]
    fn unparsable_delay_keeps_default() {
        let cfg = config_with(&[("PAYASSIST_THINK_DELAY_MS", "soon")]);
        assert_eq!(cfg.think_delay, Duration::from_millis(1000));
    }
}
