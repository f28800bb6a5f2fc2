//! CLI configuration: built-in defaults, an optional TOML file, then
//! `HOSPTRACK_*` environment variables, with command-line flags on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use hosptrack_api::TransportConfig;
use hosptrack_api::transport::DEFAULT_TIMEOUT;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config ─────────────────────────────────────────────────────

/// Everything that can come from the config file or environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default)]
    pub user_agent: Option<String>,

    #[serde(default)]
    pub output: OutputFormat,

    #[serde(default)]
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: None,
            output: OutputFormat::default(),
            color: ColorMode::default(),
        }
    }
}

fn default_base_url() -> String {
    hosptrack_api::DEFAULT_BASE_URL.into()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

/// Default location of the config file.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "hosptrack").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load the layered configuration. A missing file is not an error.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

    if let Some(path) = path.map(Path::to_path_buf).or_else(config_path) {
        tracing::debug!(path = %path.display(), "reading config file");
        figment = figment.merge(Toml::file(path));
    }

    let config: Config = figment.merge(Env::prefixed("HOSPTRACK_")).extract()?;
    Ok(config)
}

// ── Resolution ──────────────────────────────────────────────────────

/// Effective settings after applying command-line overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub transport: TransportConfig,
    pub output: OutputFormat,
    pub color: ColorMode,
}

/// Apply flag overrides (flag > env > file > defaults).
pub fn resolve(config: &Config, global: &GlobalOpts) -> Result<Settings, ConfigError> {
    let base_url = global.base_url.as_deref().unwrap_or(&config.base_url);
    let mut transport =
        TransportConfig::with_base_url(base_url).map_err(|e| ConfigError::Validation {
            field: "base_url".into(),
            reason: format!("{e} ({base_url})"),
        })?;

    let timeout = global.timeout.unwrap_or(config.timeout);
    if timeout == 0 {
        return Err(ConfigError::Validation {
            field: "timeout".into(),
            reason: "must be at least one second".into(),
        });
    }
    transport = transport.timeout(Duration::from_secs(timeout));

    if let Some(ref agent) = config.user_agent {
        transport.user_agent.clone_from(agent);
    }

    Ok(Settings {
        transport,
        output: global.output.unwrap_or(config.output),
        color: global.color.unwrap_or(config.color),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn no_flags() -> GlobalOpts {
        GlobalOpts {
            config: None,
            timeout: None,
            base_url: None,
            output: None,
            color: None,
            verbose: 0,
        }
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "base_url = \"http://127.0.0.1:9999\"\ntimeout = 5\noutput = \"table\""
        )
        .expect("write");

        let config = load_config(Some(file.path())).expect("loads");

        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.output, OutputFormat::Table);
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn flags_override_config() {
        let config = Config::default();
        let mut flags = no_flags();
        flags.timeout = Some(3);
        flags.base_url = Some("http://localhost:1234".into());
        flags.output = Some(OutputFormat::Table);

        let settings = resolve(&config, &flags).expect("resolves");

        assert_eq!(settings.transport.timeout, Duration::from_secs(3));
        assert_eq!(settings.transport.base_url.as_str(), "http://localhost:1234/");
        assert_eq!(settings.output, OutputFormat::Table);
    }

    #[test]
    fn defaults_resolve_to_torn() {
        let settings = resolve(&Config::default(), &no_flags()).expect("resolves");
        assert_eq!(settings.transport.base_url.as_str(), "https://api.torn.com/");
        assert_eq!(settings.transport.timeout, DEFAULT_TIMEOUT);
        assert_eq!(settings.output, OutputFormat::Plain);
    }

    #[test]
    fn rejects_bad_values() {
        let mut flags = no_flags();
        flags.base_url = Some("::nope".into());
        assert!(matches!(
            resolve(&Config::default(), &flags),
            Err(ConfigError::Validation { ref field, .. }) if field == "base_url"
        ));

        let mut flags = no_flags();
        flags.timeout = Some(0);
        assert!(matches!(
            resolve(&Config::default(), &flags),
            Err(ConfigError::Validation { ref field, .. }) if field == "timeout"
        ));
    }
}
