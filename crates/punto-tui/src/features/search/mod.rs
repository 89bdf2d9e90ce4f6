//! Search tab: debounced keyword search over the store.

mod render;
mod state;
mod update;

pub use render::render_search;
pub use state::SearchState;
pub use update::{handle_debounce_elapsed, handle_key, handle_mouse_down, handle_scroll};
