//! # Report Module - Text Tables
//!
//! Renders [`Statistics`] as fixed-width text tables. Renderers only read the
//! percentages already computed; they never touch raw counts.
//!
//! - [`Summary`]: top-N commands next to top-N key-chords
//! - [`Groups`]: share of every command category
//!
//! [`ReportKind`] is the closed set of renderer names a user can select.

use strum::{Display, EnumString, IntoStaticStr, VariantNames};

use crate::Statistics;

/// Renders statistics to text
pub trait Render {
    fn render(&self, stats: &Statistics) -> String;
}

/// How many rows a ranked table shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// As many rows as the longest ranked column
    All,
    /// Exactly this many rows, padded with blanks
    First(usize),
}

impl Default for Limit {
    fn default() -> Self {
        Self::First(Summary::DEFAULT_TOP_N)
    }
}

impl From<i64> for Limit {
    /// Negative limits mean "show everything"
    fn from(value: i64) -> Self {
        usize::try_from(value).map_or(Self::All, Self::First)
    }
}

/// Top-N table: commands and key-chords ranked side by side
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub limit: Limit,
}

impl Summary {
    pub const DEFAULT_TOP_N: usize = 20;

    pub const fn new(limit: Limit) -> Self {
        Self { limit }
    }
}

impl Render for Summary {
    fn render(&self, stats: &Statistics) -> String {
        let commands = stats.commands.ranked();
        let keys = stats.keys.ranked();

        let rows = match self.limit {
            Limit::All => commands.len().max(keys.len()),
            Limit::First(rows) => rows,
        };

        let mut out = String::new();
        out.push_str(&format!("Num Sessions: {}\n", stats.session_count));
        out.push_str(&format!("Num Commands: {}\n", stats.total_events));
        out.push_str(&format!(
            "{:>4}  {:>40} {:>6}  {:>20} {:>6}\n",
            "Idx", "Command", "%", "Key", "%"
        ));

        // Both columns are padded independently
        for index in 0..rows {
            let (command, command_pct) = commands.get(index).map_or_else(
                || (String::new(), String::new()),
                |share| (share.key.clone(), format!("{:6.2}", share.percentage)),
            );
            let (key, key_pct) = keys.get(index).map_or_else(
                || (String::new(), String::new()),
                |share| (share.key.clone(), format!("{:6.2}", share.percentage)),
            );
            out.push_str(&format!(
                "{index:>4}. {command:>40} {command_pct:>6}  {key:>20} {key_pct:>6}\n"
            ));
        }

        out
    }
}

/// Category table: share of every command category
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Groups;

impl Render for Groups {
    fn render(&self, stats: &Statistics) -> String {
        let groups = stats.categories.ranked();

        let mut out = String::new();
        out.push_str(&format!("Num Groups: {}\n", groups.len()));
        out.push_str(&format!("{:>3}  {:>10} {:>6}\n", "Idx", "Group", "%"));
        for (index, share) in groups.iter().enumerate() {
            let label: &'static str = share.key.into();
            out.push_str(&format!(
                "{index:>3}. {label:>10} {:6.2}\n",
                share.percentage
            ));
        }

        out
    }
}

/// The selectable renderers, by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, VariantNames)]
pub enum ReportKind {
    /// Top-N commands and key-chords
    Summarizer,
    /// Command categories
    Grouper,
}

impl ReportKind {
    /// Build the renderer for this kind. `limit` only applies to [`ReportKind::Summarizer`].
    pub const fn renderer(self, limit: Limit) -> Report {
        match self {
            Self::Summarizer => Report::Summary(Summary::new(limit)),
            Self::Grouper => Report::Groups(Groups),
        }
    }
}

/// A selected renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Summary(Summary),
    Groups(Groups),
}

impl Render for Report {
    fn render(&self, stats: &Statistics) -> String {
        match self {
            Self::Summary(summary) => summary.render(stats),
            Self::Groups(groups) => groups.render(stats),
        }
    }
}
