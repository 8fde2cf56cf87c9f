use serde::Deserialize;
use thiserror::Error;

use crate::{ArchTag, BuildNumber, EvaluationContext, OsTag};

/// Feed published by JetBrains for the IDE's JDK download dialog.
pub const DEFAULT_FEED_URL: &str = "https://download.jetbrains.com/jdk/feed/v1/jdks.json.xz";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid feed configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid build number in feed configuration: {0}")]
    InvalidBuild(#[from] crate::BuildNumberError),
}

/// Where to load the feed from and which platform to select for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub feed_url: String,
    pub build: BuildNumber,
    pub os: OsTag,
    pub arch: ArchTag,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFeedConfig {
    feed_url: Option<String>,
    build: String,
    os: Option<OsTag>,
    arch: Option<ArchTag>,
}

impl FeedConfig {
    /// Default feed for `build` on the OS and architecture of this process.
    #[must_use]
    pub fn for_current_process(build: BuildNumber) -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_owned(),
            build,
            os: OsTag::current(),
            arch: ArchTag::current(),
        }
    }

    /// Read a configuration from TOML.
    ///
    /// `build` is required; `feed_url`, `os` and `arch` fall back to
    /// [`FeedConfig::for_current_process`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for invalid TOML, unknown keys or an
    /// unparsable build number.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let raw: RawFeedConfig = toml::from_str(input)?;
        let mut config = Self::for_current_process(raw.build.parse()?);
        if let Some(url) = raw.feed_url {
            config.feed_url = url;
        }
        if let Some(os) = raw.os {
            config.os = os;
        }
        if let Some(arch) = raw.arch {
            config.arch = arch;
        }
        Ok(config)
    }

    #[must_use]
    pub fn context(&self) -> EvaluationContext {
        EvaluationContext::new(self.build.clone(), self.os.clone(), self.arch.clone())
    }
}
