//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that return `UiEvent`. The runtime
//! spawns them and sends the result to the inbox. They never touch state.

mod timer;

pub use timer::timer;
