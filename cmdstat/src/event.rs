use std::str::FromStr;

use derive_more::Display;
use thiserror::Error;

use crate::{SELF_INSERT_COMMAND, SELF_INSERT_SHORTHAND};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEventError {
    #[error("expected '<command> <key-chord>', found no separating space")]
    MissingSeparator,
}

/// A single recorded command invocation
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{command} {key}")]
pub struct Event {
    /// The command identifier, e.g. `next-line`
    pub command: String,
    /// The literal key-chord text, e.g. `C-x C-c`. Never parsed further.
    pub key: String,
}

impl Event {
    pub fn new(command: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            key: key.into(),
        }
    }

    /// Replaces the self-insert shorthand with the full command identifier.
    #[must_use]
    pub fn expand_shorthand(mut self) -> Self {
        if self.command == SELF_INSERT_SHORTHAND {
            self.command = SELF_INSERT_COMMAND.to_string();
        }
        self
    }
}

impl FromStr for Event {
    type Err = ParseEventError;

    /// Parses one log line.
    ///
    /// Trailing whitespace is stripped first. The command is everything before the
    /// first space, the key-chord is the verbatim remainder (it may contain spaces).
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (command, key) = line
            .trim_end()
            .split_once(' ')
            .ok_or(ParseEventError::MissingSeparator)?;

        Ok(Self::new(command, key))
    }
}
