use crate::host::{Platform, StaticHost};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;
use useful_version::{Version, VersionError};

/// Environment variable naming a host profile file.
pub const HOST_PROFILE_ENV: &str = "USEFUL_SDK_HOST_PROFILE";

/// Describes a host to simulate: its platform, OS version and dark-mode support.
///
/// ```toml
/// platform = "ios"
/// system_version = "16.4.1"
/// supports_dark_display_mode = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostProfile {
    pub platform: Platform,
    pub system_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_dark_display_mode: Option<bool>,
}

#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported profile format '{0}', expected .toml or .json")]
    UnsupportedFormat(String),
    #[error("invalid system version: {0}")]
    InvalidVersion(#[from] VersionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileFormat {
    Toml,
    Json,
}

impl ProfileFormat {
    fn from_path(path: &Path) -> Result<Self, ProfileError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Ok(ProfileFormat::Toml),
            "json" => Ok(ProfileFormat::Json),
            _ => Err(ProfileError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl HostProfile {
    pub fn new(platform: Platform, system_version: impl Into<String>) -> Self {
        Self {
            platform,
            system_version: system_version.into(),
            supports_dark_display_mode: None,
        }
    }

    /// Reads a profile, choosing the format by file extension.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let format = ProfileFormat::from_path(path)?;
        let data = std::fs::read_to_string(path)?;
        let profile: HostProfile = match format {
            ProfileFormat::Toml => toml::from_str(&data)?,
            ProfileFormat::Json => serde_json::from_str(&data)?,
        };
        profile.validate()?;
        info!(
            "loaded host profile '{}': {} {}",
            path.display(),
            profile.platform,
            profile.system_version
        );
        Ok(profile)
    }

    pub fn save(&self, path: &Path) -> Result<(), ProfileError> {
        let data = match ProfileFormat::from_path(path)? {
            ProfileFormat::Toml => toml::to_string_pretty(self)?,
            ProfileFormat::Json => serde_json::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Loads the profile named by [`HOST_PROFILE_ENV`], if the variable is set.
    pub fn from_env() -> Result<Option<Self>, ProfileError> {
        match std::env::var_os(HOST_PROFILE_ENV) {
            Some(path) => Self::load(Path::new(&path)).map(Some),
            None => Ok(None),
        }
    }

    /// Checks that `system_version` is a well-formed dotted-numeric version.
    pub fn validate(&self) -> Result<Version, ProfileError> {
        Ok(self.system_version.parse::<Version>()?)
    }

    pub fn into_host(self) -> StaticHost {
        let host = StaticHost::new(self.platform, self.system_version);
        match self.supports_dark_display_mode {
            Some(supported) => host.with_dark_display_mode(supported),
            None => host,
        }
    }
}
