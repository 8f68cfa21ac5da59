//! Application configuration.
//!
//! Loaded from a TOML file (`--config` or `<config dir>/vintrack/config.toml`)
//! and then overridden from the environment:
//!
//! ```toml
//! [auth]
//! backend = "supabase"          # or "demo"
//! supabase_url = "https://xyzcompany.supabase.co"
//! anon_key = "eyJhbGciOi..."
//! redirect_port = 47615
//! sign_in_timeout_secs = 180
//!
//! [links]
//! discord_invite = "https://discord.gg/keGmnF6P"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{VintrackError, VintrackResult};

/// Environment variable overriding `auth.supabase_url`
pub const ENV_SUPABASE_URL: &str = "VINTRACK_SUPABASE_URL";
/// Environment variable overriding `auth.anon_key`
pub const ENV_SUPABASE_ANON_KEY: &str = "VINTRACK_SUPABASE_ANON_KEY";

/// Default loopback port for the OAuth redirect
pub const DEFAULT_REDIRECT_PORT: u16 = 47615;
/// Default time the user has to finish signing in
pub const DEFAULT_SIGN_IN_TIMEOUT_SECS: u64 = 180;
/// Community Discord server linked from the sidebar
pub const DEFAULT_DISCORD_INVITE: &str = "https://discord.gg/keGmnF6P";

/// Which identity provider backs the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthBackend {
    Supabase,
    Demo,
}

/// `[auth]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Explicit backend; when unset, Supabase is used iff a URL is configured
    pub backend: Option<AuthBackend>,
    /// Supabase project URL
    pub supabase_url: Option<String>,
    /// Supabase anon (public) API key
    pub anon_key: Option<String>,
    /// Loopback port receiving the OAuth redirect
    pub redirect_port: u16,
    /// Seconds to wait for the browser redirect
    pub sign_in_timeout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            backend: None,
            supabase_url: None,
            anon_key: None,
            redirect_port: DEFAULT_REDIRECT_PORT,
            sign_in_timeout_secs: DEFAULT_SIGN_IN_TIMEOUT_SECS,
        }
    }
}

impl AuthConfig {
    /// Backend actually used after applying the defaulting rule
    pub fn effective_backend(&self) -> AuthBackend {
        match self.backend {
            Some(backend) => backend,
            None if self.supabase_url.is_some() => AuthBackend::Supabase,
            None => AuthBackend::Demo,
        }
    }
}

/// `[links]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub discord_invite: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            discord_invite: DEFAULT_DISCORD_INVITE.to_string(),
        }
    }
}

/// Whole configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub links: LinksConfig,
}

impl AppConfig {
    /// `<config dir>/vintrack/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vintrack").join("config.toml"))
    }

    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> VintrackResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// read when present and defaults are used otherwise. Environment
    /// overrides are applied last.
    pub fn load(path: Option<&Path>) -> VintrackResult<Self> {
        let mut config = match path {
            Some(path) => {
                info!(?path, "Loading config");
                Self::from_toml_str(&std::fs::read_to_string(path)?)?
            }
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => {
                    info!(?path, "Loading config");
                    Self::from_toml_str(&std::fs::read_to_string(&path)?)?
                }
                None => {
                    debug!("No config file, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_overrides(
            std::env::var(ENV_SUPABASE_URL).ok(),
            std::env::var(ENV_SUPABASE_ANON_KEY).ok(),
        );
        Ok(config)
    }

    /// Force the offline demo identity provider
    pub fn force_demo(&mut self) {
        self.auth.backend = Some(AuthBackend::Demo);
    }

    /// Apply Supabase URL / anon key overrides; blank values are ignored.
    pub fn apply_overrides(&mut self, supabase_url: Option<String>, anon_key: Option<String>) {
        if let Some(url) = supabase_url.filter(|s| !s.trim().is_empty()) {
            self.auth.supabase_url = Some(url.trim().to_string());
        }
        if let Some(key) = anon_key.filter(|s| !s.trim().is_empty()) {
            self.auth.anon_key = Some(key.trim().to_string());
        }
    }

    /// Check that the selected backend has what it needs.
    pub fn validate(&self) -> VintrackResult<()> {
        if self.auth.effective_backend() == AuthBackend::Supabase {
            if self.auth.supabase_url.is_none() {
                return Err(VintrackError::Config(format!(
                    "supabase backend needs auth.supabase_url or {}",
                    ENV_SUPABASE_URL
                )));
            }
            if self.auth.anon_key.is_none() {
                return Err(VintrackError::Config(format!(
                    "supabase backend needs auth.anon_key or {}",
                    ENV_SUPABASE_ANON_KEY
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.auth.effective_backend(), AuthBackend::Demo);
        assert_eq!(config.auth.redirect_port, DEFAULT_REDIRECT_PORT);
        assert_eq!(config.links.discord_invite, DEFAULT_DISCORD_INVITE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [auth]
            supabase_url = "https://abc.supabase.co"
            anon_key = "key"
            "#,
        )
        .unwrap();
        assert_eq!(config.auth.effective_backend(), AuthBackend::Supabase);
        assert_eq!(config.auth.sign_in_timeout_secs, DEFAULT_SIGN_IN_TIMEOUT_SECS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_demo_wins_over_url() {
        let config = AppConfig::from_toml_str(
            r#"
            [auth]
            backend = "demo"
            supabase_url = "https://abc.supabase.co"
            "#,
        )
        .unwrap();
        assert_eq!(config.auth.effective_backend(), AuthBackend::Demo);
    }

    #[test]
    fn test_supabase_without_key_is_invalid() {
        let mut config = AppConfig::default();
        config.auth.backend = Some(AuthBackend::Supabase);
        config.apply_overrides(Some("https://abc.supabase.co".to_string()), None);
        assert!(matches!(config.validate(), Err(VintrackError::Config(_))));
    }

    #[test]
    fn test_blank_overrides_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some("  ".to_string()), Some(String::new()));
        assert!(config.auth.supabase_url.is_none());
        assert!(config.auth.anon_key.is_none());
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        assert!(matches!(
            AppConfig::from_toml_str("[auth\nbackend ="),
            Err(VintrackError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[links]\ndiscord_invite = \"https://discord.gg/test\"").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.links.discord_invite, "https://discord.gg/test");
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            AppConfig::load(Some(&missing)),
            Err(VintrackError::Io(_))
        ));
    }

    #[test]
    fn test_force_demo() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some("https://abc.supabase.co".to_string()), None);
        config.force_demo();
        assert_eq!(config.auth.effective_backend(), AuthBackend::Demo);
        assert!(config.validate().is_ok());
    }
}
