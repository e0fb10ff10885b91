//! CLI-owned configuration: YAML config file, environment overlay, and
//! translation to `orion_api::ClientConfig`.
//!
//! Precedence, highest first: CLI flag > `ORION_*` environment variable
//! > config file > built-in default. The file lives at
//! `~/.orionctl.yaml` unless `--config` points elsewhere; a missing
//! file is tolerated, a malformed one is a hard error.

use std::path::PathBuf;

use directories::BaseDirs;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use orion_api::ClientConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub const DEFAULT_CONFIG_NAME: &str = ".orionctl.yaml";

// ── YAML config struct ───────────────────────────────────────────────

/// Persisted connection settings. Loaded once at startup, immutable
/// thereafter; command handlers receive the resolved `ClientConfig`.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Broker hostname or IP address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Broker port number.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Use https instead of http.
    #[serde(default)]
    pub tls: bool,

    /// Bearer access token.
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            tls: false,
            token: None,
        }
    }
}

fn default_host() -> String {
    "localhost".into()
}
fn default_port() -> u16 {
    1026
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path: explicit `--config`, else a dotfile in
/// the user's home directory.
pub fn config_path(global: &GlobalOpts) -> PathBuf {
    if let Some(ref path) = global.config {
        return path.clone();
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(DEFAULT_CONFIG_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME))
}

// ── Config loading ───────────────────────────────────────────────────

/// Load the file + environment layers. `Yaml::file` silently skips a
/// missing file, so defaults apply on a fresh machine.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let path = config_path(global);

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Yaml::file(&path))
        .merge(Env::prefixed("ORION_").only(&["host", "port", "tls", "token"]));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Resolution to client parameters ──────────────────────────────────

/// Overlay CLI flags onto the loaded config and produce the connection
/// parameters for `OrionClient`.
///
/// This is the single boundary where CLI config crosses into API types.
pub fn resolve(config: &Config, global: &GlobalOpts) -> ClientConfig {
    let token = global
        .token
        .clone()
        .or_else(|| config.token.clone())
        .filter(|t| !t.is_empty())
        .map(SecretString::from);

    ClientConfig {
        host: global.host.clone().unwrap_or_else(|| config.host.clone()),
        port: global.port.unwrap_or(config.port),
        tls: global.tls.unwrap_or(config.tls),
        token,
        ..ClientConfig::default()
    }
}
