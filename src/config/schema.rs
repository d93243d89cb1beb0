//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub compat: CompatConfig,
}

/// Server configuration for the HTTP API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Service title reported by `GET /`
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_version")]
    pub version: String,

    /// Attach a permissive CORS layer
    #[serde(default = "default_cors")]
    pub cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_title() -> String {
    "User Management API".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_cors() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            title: default_title(),
            version: default_version(),
            cors: default_cors(),
        }
    }
}

/// Authentication settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// Require a bearer session token for `GET /users` and `GET /users/{id}`
    #[serde(default)]
    pub protect_reads: bool,
}

/// Switches for the three known defects of the original service.
///
/// Every flag defaults to `true`, which reproduces the shipped behaviour.
/// Setting a flag to `false` selects the corrected behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatConfig {
    /// Duplicate-email check only scans ids `0..last_id`, so the newest user is never compared
    #[serde(default = "default_true")]
    pub legacy_email_check: bool,

    /// Sessions live 30 hours instead of 30 minutes
    #[serde(default = "default_true")]
    pub legacy_session_ttl: bool,

    /// `DELETE /users/{id}` reports success without deactivating the user
    #[serde(default = "default_true")]
    pub legacy_soft_delete: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CompatConfig {
    fn default() -> Self {
        Self {
            legacy_email_check: true,
            legacy_session_ttl: true,
            legacy_soft_delete: true,
        }
    }
}

impl CompatConfig {
    /// Corrected behaviour for all three defects
    pub fn fixed() -> Self {
        Self {
            legacy_email_check: false,
            legacy_session_ttl: false,
            legacy_soft_delete: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.title, "User Management API");
        assert!(!config.auth.protect_reads);
        assert!(config.compat.legacy_email_check);
        assert!(config.compat.legacy_session_ttl);
        assert!(config.compat.legacy_soft_delete);
    }

    #[test]
    fn test_partial_compat_section() {
        let config: Config = toml::from_str(
            r#"
            [compat]
            legacy_session_ttl = false
            "#,
        )
        .unwrap();
        assert!(config.compat.legacy_email_check);
        assert!(!config.compat.legacy_session_ttl);
        assert!(config.compat.legacy_soft_delete);
    }
}
