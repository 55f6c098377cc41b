use std::path::PathBuf;

use cmdstat::{Render, Report, ReportKind, aggregate, read_events};

use crate::{config::Settings, error::Error};

/// One analyzer run: a log file, the selected report and the resolved settings
pub struct App {
    log: PathBuf,
    kind: ReportKind,
    settings: Settings,
}

impl App {
    /// Creates a new `App`
    pub const fn new(log: PathBuf, kind: ReportKind, settings: Settings) -> Self {
        Self {
            log,
            kind,
            settings,
        }
    }

    /// The selected renderer, configured from the settings
    pub fn report(&self) -> Report {
        self.kind.renderer(self.settings.limit())
    }

    /// Reads the log, aggregates it and renders the selected report.
    ///
    /// Nothing is rendered unless the whole log was read and aggregated.
    pub fn run(&self) -> Result<String, Error> {
        let events = read_events(&self.log, self.settings.on_malformed)?;
        let stats = aggregate(events)?;

        tracing::info!(
            report = %self.kind,
            events = stats.total_events,
            sessions = stats.session_count,
            "rendering report"
        );

        Ok(self.report().render(&stats))
    }
}
