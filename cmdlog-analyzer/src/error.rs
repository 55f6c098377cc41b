use cmdstat::{LogError, StatisticsError};
use derive_more::From;
use thiserror::Error;

use crate::config::ConfigError;

/// Everything that can end a run early
#[derive(Debug, From, Error)]
pub enum Error {
    #[error(transparent)]
    Config(ConfigError),

    #[error(transparent)]
    Log(LogError),

    #[error(transparent)]
    Statistics(StatisticsError),
}
