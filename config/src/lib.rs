//! Configuration loading for Recast.
//!
//! The file is read from `$RECAST_CONFIG` when set, else from
//! `~/.recast/config.toml`:
//!
//! ```toml
//! [date]
//! pattern = "yyyyMMdd"
//!
//! [text]
//! charset = "ISO-8859-1"
//! ```
//!
//! Raw TOML structs stay private; [`RecastConfig::resolve`] validates them
//! into [`CastOptions`] at the parse boundary.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use recast_core::convert::DatePattern;
use recast_types::{CastOptions, Charset};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "RECAST_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid {key} in {}: {message}", path.display())]
    Invalid {
        path: PathBuf,
        key: &'static str,
        message: String,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    date: Option<RawDate>,
    text: Option<RawText>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDate {
    pattern: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawText {
    charset: Option<String>,
}

/// A parsed config file, not yet validated.
#[derive(Debug)]
pub struct RecastConfig {
    path: PathBuf,
    raw: RawConfig,
}

impl RecastConfig {
    /// Load the config file at [`config_path`]. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(path).map(Some)
    }

    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };
        Self::parse(&content, path)
    }

    /// Parse `content` as if it had been read from `path`.
    pub fn parse(content: &str, path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        match toml::from_str(content) {
            Ok(raw) => Ok(Self { path, raw }),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate into options. `${VAR}` references are expanded first.
    pub fn resolve(&self) -> Result<CastOptions, ConfigError> {
        let mut options = CastOptions::new();

        if let Some(pattern) = self.raw.date.as_ref().and_then(|d| d.pattern.as_deref()) {
            let pattern = expand_env_vars(pattern);
            if let Err(err) = DatePattern::compile(&pattern) {
                return Err(self.invalid("date.pattern", err.to_string()));
            }
            options = options.with_date_pattern(pattern);
        }

        if let Some(name) = self.raw.text.as_ref().and_then(|t| t.charset.as_deref()) {
            let name = expand_env_vars(name);
            let charset = Charset::for_name(&name)
                .ok_or_else(|| self.invalid("text.charset", format!("unknown charset {name:?}")))?;
            options = options.with_charset(charset);
        }

        tracing::debug!(
            path = %self.path.display(),
            date_pattern = options.date_pattern(),
            charset = %options.charset(),
            "resolved cast options"
        );
        Ok(options)
    }

    fn invalid(&self, key: &'static str, message: String) -> ConfigError {
        ConfigError::Invalid {
            path: self.path.clone(),
            key,
            message,
        }
    }
}

/// Replace `${VAR}` with the variable's value. Unset variables and `${}`
/// expand to nothing; an unclosed `${` is kept as written.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let var = &after[..end];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    out
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".recast").join("config.toml"))
}
