//! Keyword search over the event store.
//!
//! Matching is a case-insensitive substring test on title and summary. There
//! is no ranking: results keep the store order.

use crate::model::Event;

/// How a settled query relates to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty query; every event is listed.
    All,
    /// At least one event matched.
    Matches(usize),
    /// The query matched nothing. An empty state, not an error.
    NoResults,
}

impl SearchOutcome {
    pub fn classify(query: &str, matches: usize) -> Self {
        if query.trim().is_empty() {
            Self::All
        } else if matches == 0 {
            Self::NoResults
        } else {
            Self::Matches(matches)
        }
    }

    /// Header line above the result list.
    pub fn caption(self) -> String {
        match self {
            Self::All => "Todas las noticias".to_string(),
            Self::Matches(1) => "1 resultado".to_string(),
            Self::Matches(n) => format!("{n} resultados"),
            Self::NoResults => "0 resultados".to_string(),
        }
    }
}

/// Empty-state message shown when a query matches nothing.
pub fn no_results_message(query: &str) -> String {
    format!("No se encontraron resultados para “{}”", query.trim())
}

/// Whether `event` matches an already lowercased, trimmed needle.
fn matches(event: &Event, needle: &str) -> bool {
    event.title.to_lowercase().contains(needle) || event.summary.to_lowercase().contains(needle)
}

/// Store positions of the events matching `query`, in store order.
pub fn search_indices(events: &[Event], query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return (0..events.len()).collect();
    }
    events
        .iter()
        .enumerate()
        .filter(|(_, event)| matches(event, &needle))
        .map(|(index, _)| index)
        .collect()
}

/// Events matching `query`, in store order. A blank query returns everything.
pub fn search<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    search_indices(events, query)
        .into_iter()
        .map(|index| &events[index])
        .collect()
}
