use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Event, ParseEventError};

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Failed to read command log '{path}': {error}")]
    Read {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("Malformed line {line} ({content:?}): {error}")]
    MalformedLine {
        line: usize,
        content: String,
        error: ParseEventError,
    },
}

/// What to do with a line that is not a valid event
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Fail the whole run on the first malformed line
    #[default]
    Abort,
    /// Drop the line and log a warning
    Skip,
}

/// Parse every line of a command log
pub fn parse_events(content: &str, policy: MalformedPolicy) -> Result<Vec<Event>, LogError> {
    let mut events = Vec::new();

    for (index, line) in content.lines().enumerate() {
        match line.parse::<Event>() {
            Ok(event) => events.push(event),
            Err(error) => match policy {
                MalformedPolicy::Abort => {
                    return Err(LogError::MalformedLine {
                        line: index + 1,
                        content: line.to_string(),
                        error,
                    });
                }
                MalformedPolicy::Skip => {
                    tracing::warn!(line = index + 1, content = line, "skipping malformed line: {error}");
                }
            },
        }
    }

    Ok(events)
}

/// Read and parse a command log file
///
/// The file is read completely and closed before parsing starts. Bytes that are
/// not valid UTF-8 are replaced with U+FFFD rather than failing the read.
pub fn read_events(path: &Path, policy: MalformedPolicy) -> Result<Vec<Event>, LogError> {
    let bytes = std::fs::read(path).map_err(|error| LogError::Read {
        path: path.to_path_buf(),
        error,
    })?;

    let content = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = content {
        tracing::warn!(path = %path.display(), "replaced invalid UTF-8 in command log");
    }

    let events = parse_events(&content, policy)?;
    tracing::debug!(path = %path.display(), events = events.len(), "read command log");

    Ok(events)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const LOG: &str = "self-insert-command C-a\n\
                       self-insert-command C-a\n\
                       save-buffers-kill-emacs C-x C-c\n\
                       next-line C-n\n";

    fn log_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_events() {
        let file = log_file(LOG);
        let events = read_events(file.path(), MalformedPolicy::Abort).unwrap();

        assert_eq!(events.len(), 4);
        assert_eq!(events[2], Event::new("save-buffers-kill-emacs", "C-x C-c"));
        assert_eq!(events[3], Event::new("next-line", "C-n"));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"self-insert-command \xe9\nnext-line C-n\n").unwrap();

        let events = read_events(file.path(), MalformedPolicy::Abort).unwrap();
        assert_eq!(
            events,
            [
                Event::new("self-insert-command", "\u{FFFD}"),
                Event::new("next-line", "C-n")
            ]
        );
    }

    #[test]
    fn test_crlf_lines() {
        let events = parse_events(". a\r\nnext-line C-n\r\n", MalformedPolicy::Abort).unwrap();
        assert_eq!(events, [Event::new(".", "a"), Event::new("next-line", "C-n")]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.txt");

        let error = read_events(&path, MalformedPolicy::Abort).unwrap_err();
        assert!(matches!(error, LogError::Read { path: ref p, .. } if *p == path));
    }

    #[test]
    fn test_empty_file_has_no_events() {
        let file = log_file("");
        let events = read_events(file.path(), MalformedPolicy::Abort).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_malformed_line_aborts() {
        let error = parse_events("next-line C-n\nundo\nyank C-y\n", MalformedPolicy::Abort)
            .unwrap_err();

        match error {
            LogError::MalformedLine {
                line,
                content,
                error,
            } => {
                assert_eq!(line, 2);
                assert_eq!(content, "undo");
                assert_eq!(error, ParseEventError::MissingSeparator);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_line_skipped() {
        let events = parse_events("next-line C-n\nundo\n\nyank C-y\n", MalformedPolicy::Skip)
            .unwrap();
        assert_eq!(events, [Event::new("next-line", "C-n"), Event::new("yank", "C-y")]);
    }

    #[test]
    fn test_error_messages() {
        let error = parse_events("undo", MalformedPolicy::Abort).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Malformed line 1 (\"undo\"): expected '<command> <key-chord>', found no separating space"
        );
    }
}
