use thiserror::Error;

use crate::{
    Category, Event,
    frequency::{Counter, Frequencies},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatisticsError {
    #[error("no events to aggregate: the command log is empty")]
    EmptyInput,
}

/// Final, percentage based statistics over a whole command log
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Number of events processed
    pub total_events: usize,
    /// Number of events whose command is a [`Category::Quit`] command
    pub session_count: usize,
    /// Share of events per command
    pub commands: Frequencies<String>,
    /// Share of events per key-chord
    pub keys: Frequencies<String>,
    /// Share of events per category
    pub categories: Frequencies<Category>,
}

/// Raw counts, collected while events are being read
#[derive(Debug, Default, Clone)]
pub struct Tally {
    commands: Counter<String>,
    keys: Counter<String>,
    categories: Counter<Category>,
    session_count: usize,
    total_events: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one event
    pub fn record(&mut self, event: Event) {
        let Event { command, key } = event.expand_shorthand();

        let category = Category::classify(&command);
        if category == Category::Quit {
            self.session_count += 1;
        }

        self.commands.increment(command);
        self.keys.increment(key);
        self.categories.increment(category);
        self.total_events += 1;
    }

    pub const fn total_events(&self) -> usize {
        self.total_events
    }

    /// Finalize the tally and return the final [`Statistics`]
    ///
    /// This consumes the tally, so raw counts are converted exactly once.
    pub fn finalize(self) -> Result<Statistics, StatisticsError> {
        let Self {
            commands,
            keys,
            categories,
            session_count,
            total_events,
        } = self;

        if total_events == 0 {
            return Err(StatisticsError::EmptyInput);
        }

        tracing::debug!(
            total_events,
            session_count,
            commands = commands.len(),
            keys = keys.len(),
            "aggregated command log"
        );

        Ok(Statistics {
            total_events,
            session_count,
            commands: commands.into_frequencies(total_events),
            keys: keys.into_frequencies(total_events),
            categories: categories.into_frequencies(total_events),
        })
    }
}

impl Extend<Event> for Tally {
    fn extend<T: IntoIterator<Item = Event>>(&mut self, events: T) {
        for event in events {
            self.record(event);
        }
    }
}

impl FromIterator<Event> for Tally {
    fn from_iter<T: IntoIterator<Item = Event>>(events: T) -> Self {
        let mut tally = Self::new();
        tally.extend(events);
        tally
    }
}

/// Aggregate a complete sequence of events into [`Statistics`]
pub fn aggregate<I>(events: I) -> Result<Statistics, StatisticsError>
where
    I: IntoIterator<Item = Event>,
{
    events.into_iter().collect::<Tally>().finalize()
}
