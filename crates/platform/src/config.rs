//! Session configuration for platform resolution.

use crate::descriptor::PlatformDescriptor;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// How the platform is determined for a session.
///
/// Explicit versions win over whatever the user agent reports.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformConfig {
    pub user_agent: Option<String>,
    pub ie: Option<u8>,
    pub windows_phone: Option<u8>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            ConfigError::Parse(err) => write!(f, "invalid platform config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl PlatformConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn descriptor(&self) -> PlatformDescriptor {
        let detected = self
            .user_agent
            .as_deref()
            .map(PlatformDescriptor::from_user_agent)
            .unwrap_or_default();
        PlatformDescriptor {
            ie: self.ie.or(detected.ie),
            windows_phone: self.windows_phone.or(detected.windows_phone),
        }
    }
}
