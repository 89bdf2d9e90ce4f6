use punto_core::Event;
use punto_core::search::{SearchOutcome, search_indices};

/// Search tab state.
///
/// `query` is what the user typed; `settled` is the query the results were
/// computed for. They differ while the debounce timer is pending.
#[derive(Debug, Clone)]
pub struct SearchState {
    query: String,
    settled: String,
    results: Vec<usize>,
    selected: usize,
}

impl SearchState {
    pub fn new(len: usize) -> Self {
        Self {
            query: String::new(),
            settled: String::new(),
            results: (0..len).collect(),
            selected: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn settled_query(&self) -> &str {
        &self.settled
    }

    /// Store positions of the current results.
    pub fn results(&self) -> &[usize] {
        &self.results
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Store position of the highlighted result.
    pub fn selected_event(&self) -> Option<usize> {
        self.results.get(self.selected).copied()
    }

    pub fn outcome(&self) -> SearchOutcome {
        SearchOutcome::classify(&self.settled, self.results.len())
    }

    pub fn is_pending(&self) -> bool {
        self.query != self.settled
    }

    pub fn push_char(&mut self, ch: char) {
        self.query.push(ch);
    }

    /// Removes the last character. Returns whether the query changed.
    pub fn backspace(&mut self) -> bool {
        self.query.pop().is_some()
    }

    /// Empties the query. Returns whether it was non-empty.
    pub fn clear(&mut self) -> bool {
        let changed = !self.query.is_empty();
        self.query.clear();
        changed
    }

    /// Applies the typed query.
    pub fn settle(&mut self, events: &[Event]) {
        self.settled.clone_from(&self.query);
        self.results = search_indices(events, &self.settled);
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.results.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select(&mut self, position: usize) {
        if position < self.results.len() {
            self.selected = position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events() -> Vec<Event> {
        vec![
            Event::new("1", "Economía", "Suben los precios"),
            Event::new("2", "Fútbol", "La selección juega el martes"),
        ]
    }

    #[test]
    fn test_results_follow_settled_query_only() {
        let events = events();
        let mut search = SearchState::new(events.len());
        for ch in "precios".chars() {
            search.push_char(ch);
        }
        assert!(search.is_pending());
        assert_eq!(search.results(), [0, 1]);

        search.settle(&events);
        assert!(!search.is_pending());
        assert_eq!(search.results(), [0]);
        assert_eq!(search.outcome(), SearchOutcome::Matches(1));
    }

    #[test]
    fn test_selection_is_clamped() {
        let events = events();
        let mut search = SearchState::new(events.len());
        search.select_previous();
        assert_eq!(search.selected(), 0);
        search.select_next();
        search.select_next();
        assert_eq!(search.selected_event(), Some(1));
    }

    #[test]
    fn test_clear_reports_change() {
        let mut search = SearchState::new(0);
        assert!(!search.clear());
        search.push_char('a');
        assert!(search.clear());
        assert_eq!(search.query(), "");
    }
}
