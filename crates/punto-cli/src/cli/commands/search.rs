use punto_core::EventStore;
use punto_core::search::{SearchOutcome, no_results_message, search};

pub fn run(store: &EventStore, query: &str) {
    let results = search(store.events(), query);
    let outcome = SearchOutcome::classify(query, results.len());
    tracing::debug!(query, results = results.len(), "search");

    if outcome == SearchOutcome::NoResults {
        println!("{}", no_results_message(query));
        return;
    }
    println!("{}", outcome.caption());
    for event in results {
        println!("  {}  {}", event.id, event.title);
    }
}
