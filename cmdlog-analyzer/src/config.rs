use std::path::{Path, PathBuf};

use cmdstat::{Limit, MalformedPolicy, Summary};
use derive_more::From;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SETTINGS_FILE: &str = "settings.toml";
const ENV_PREFIX: &str = "CMDLOG_";

#[derive(Debug, From, Error)]
pub enum ConfigError {
    #[error("Configuration directory '{0}' does not exist")]
    #[from(skip)]
    MissingDirectory(PathBuf),

    #[error("Failed to parse config: {0}")]
    Parse(Box<figment::Error>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Rows of the summary table. Negative means all rows
    pub top_n: i64,
    /// Handling of lines that are not `<command> <key-chord>`
    pub on_malformed: MalformedPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            top_n: Summary::DEFAULT_TOP_N as i64,
            on_malformed: MalformedPolicy::default(),
        }
    }
}

impl Settings {
    pub fn limit(&self) -> Limit {
        Limit::from(self.top_n)
    }

    /// Load the settings: defaults, then `settings.toml`, then `CMDLOG_*` environment variables
    ///
    /// The settings file is looked up in `override_dir` if given, else in the platform
    /// configuration directory. A missing settings file is not an error.
    pub fn get(override_dir: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config_dir = match override_dir {
            Some(dir) if !dir.is_dir() => return Err(ConfigError::MissingDirectory(dir)),
            Some(dir) => Some(dir),
            None => ProjectDirs::from("com", "cmdlog-analyzer", "cmdlog-analyzer")
                .map(|dirs| dirs.config_dir().to_path_buf()),
        };

        let settings: Self = Self::figment(config_dir.as_deref())
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(Box::new)?;

        tracing::debug!(?settings, ?config_dir, "resolved settings");

        Ok(settings)
    }

    /// Defaults merged with the settings file in `config_dir`, if there is one
    fn figment(config_dir: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(settings_toml) = config_dir
            .map(|dir| dir.join(SETTINGS_FILE))
            .filter(|file| file.exists())
        {
            figment = figment.merge(Toml::file(settings_toml));
        }

        figment
    }
}
