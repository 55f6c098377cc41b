//! # cmdstat
//!
//! Frequency statistics for editor command logs.
//!
//! A command log is a plain text file where every line records one invoked
//! command together with the key-chord that triggered it:
//!
//! ```text
//! self-insert-command a
//! next-line C-n
//! save-buffers-kill-emacs C-x C-c
//! ```
//!
//! The crate parses such lines into [`Event`]s, sorts every command into a
//! [`Category`], tallies commands, keys and categories, and finally turns the
//! raw counts into percentages of all events ([`Statistics`]). Two renderers
//! turn the statistics into fixed-width text tables.
//!
//! ```rust
//! use cmdstat::{Category, Event, Limit, Render, Summary, aggregate};
//!
//! let events = [
//!     "self-insert-command a".parse::<Event>().unwrap(),
//!     ". b".parse().unwrap(),
//!     "save-buffers-kill-emacs C-x C-c".parse().unwrap(),
//!     "next-line C-n".parse().unwrap(),
//! ];
//!
//! let stats = aggregate(events).unwrap();
//! assert_eq!(stats.total_events, 4);
//! assert_eq!(stats.session_count, 1);
//! assert_eq!(stats.commands.get("self-insert-command"), Some(50.0));
//! assert_eq!(stats.categories.get(&Category::Editing), Some(50.0));
//!
//! let table = Summary::new(Limit::First(3)).render(&stats);
//! assert!(table.starts_with("Num Sessions: 1\nNum Commands: 4\n"));
//! ```

pub mod category;
pub mod event;
pub mod frequency;
pub mod log;
pub mod report;
pub mod statistics;

pub use category::Category;
pub use event::{Event, ParseEventError};
pub use frequency::{Frequencies, Share};
pub use log::{LogError, MalformedPolicy, parse_events, read_events};
pub use report::{Groups, Limit, Render, Report, ReportKind, Summary};
pub use statistics::{Statistics, StatisticsError, Tally, aggregate};

/// Share of all events, in the range `0.0..=100.0`
pub type Percentage = f64;

/// The command every plain character insertion is recorded as
pub const SELF_INSERT_COMMAND: &str = "self-insert-command";

/// Shorthand the command logger writes instead of [`SELF_INSERT_COMMAND`] to save space
pub const SELF_INSERT_SHORTHAND: &str = ".";
