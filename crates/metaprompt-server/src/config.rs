//! Configuration management for the Metaprompt server
//!
//! Values come from (lowest to highest precedence):
//! 1. `~/.config/metaprompt/config.toml`, or the file named by `METAPROMPT_CONFIG`
//! 2. A `.env` file in the working directory
//! 3. Process environment variables
//!
//! `CLIPBOARD_COMMAND` from the environment is split on whitespace, so a
//! program path or argument containing spaces has to be given in the config
//! file as an array: `clipboard_command = ["/opt/my tools/copy", "--stdin"]`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use metaprompt::CompletionOptions;

const CONFIG_DIR: &str = "metaprompt";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_PATH_VAR: &str = "METAPROMPT_CONFIG";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:7860";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
const DEFAULT_NOTICE_DELAY_MS: u64 = 2000;
const MAX_TEMPERATURE: f32 = 2.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API_KEY is not set (environment or config file)")]
    MissingApiKey,

    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Optional settings read from the TOML config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub bind_addr: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub notice_delay_ms: Option<u64>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub clipboard_command: Option<CommandLine>,
}

/// A command as written in the config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CommandLine {
    /// Program and arguments separated by whitespace
    Line(String),
    /// Program and arguments as separate items
    Argv(Vec<String>),
}

impl CommandLine {
    fn into_argv(self) -> Vec<String> {
        match self {
            CommandLine::Line(line) => line.split_whitespace().map(str::to_string).collect(),
            CommandLine::Argv(argv) => argv,
        }
    }
}

impl FileConfig {
    /// Default config file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the config file, or an empty config when it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config file {:?}", path))
    }
}

/// Settings for the completion endpoint
#[derive(Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub completion: CompletionConfig,
    pub bind_addr: SocketAddr,
    pub notice_delay: Duration,
    /// Sampling options sent with every completion call
    pub options: CompletionOptions,
    /// Clipboard program and arguments; `None` picks a platform default
    pub clipboard_command: Option<Vec<String>>,
}

impl AppConfig {
    /// Load configuration from the config file, `.env` and the environment
    pub fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {:?}", path);
        }

        let path = std::env::var(CONFIG_PATH_VAR)
            .ok()
            .map(PathBuf::from)
            .or_else(FileConfig::default_path);

        let file = match path {
            Some(path) => FileConfig::load(&path)?,
            None => FileConfig::default(),
        };

        Ok(Self::from_sources(file, |key| std::env::var(key).ok())?)
    }

    /// Merge file settings with variables from `env`; variables win
    pub fn from_sources<F>(file: FileConfig, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let api_key = var("API_KEY")
            .or(file.api_key)
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = var("BASE_URL")
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "BASE_URL",
                value: base_url,
                reason: "must start with http:// or https://".to_string(),
            });
        }

        let model = var("MODEL")
            .or(file.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let bind_addr = var("BIND_ADDR")
            .or(file.bind_addr)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse::<SocketAddr>().map_err(|e| {
            ConfigError::Invalid {
                key: "BIND_ADDR",
                value: bind_addr.clone(),
                reason: e.to_string(),
            }
        })?;

        let timeout_secs = parse_var::<u64>("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS"))?
            .or(file.request_timeout_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        let notice_delay_ms = parse_var::<u64>("NOTICE_DELAY_MS", var("NOTICE_DELAY_MS"))?
            .or(file.notice_delay_ms)
            .unwrap_or(DEFAULT_NOTICE_DELAY_MS);

        let max_tokens = parse_var::<u32>("MAX_TOKENS", var("MAX_TOKENS"))?.or(file.max_tokens);
        if max_tokens == Some(0) {
            return Err(ConfigError::Invalid {
                key: "MAX_TOKENS",
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        let temperature = parse_var::<f32>("TEMPERATURE", var("TEMPERATURE"))?.or(file.temperature);
        if let Some(t) = temperature {
            if !(0.0..=MAX_TEMPERATURE).contains(&t) {
                return Err(ConfigError::Invalid {
                    key: "TEMPERATURE",
                    value: t.to_string(),
                    reason: format!("must be between 0 and {}", MAX_TEMPERATURE),
                });
            }
        }

        let clipboard_command = var("CLIPBOARD_COMMAND")
            .map(CommandLine::Line)
            .or(file.clipboard_command)
            .map(CommandLine::into_argv)
            .filter(|argv| argv.first().is_some_and(|program| !program.is_empty()));

        Ok(Self {
            completion: CompletionConfig {
                api_key,
                base_url,
                model,
                timeout: Duration::from_secs(timeout_secs),
            },
            bind_addr,
            notice_delay: Duration::from_millis(notice_delay_ms),
            options: CompletionOptions {
                max_tokens,
                temperature,
            },
            clipboard_command,
        })
    }
}

fn parse_var<T>(key: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|v| {
            v.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
                key,
                value: v.clone(),
                reason: e.to_string(),
            })
        })
        .transpose()
}
