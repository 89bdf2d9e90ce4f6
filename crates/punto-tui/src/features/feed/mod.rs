//! Feed tab: one event card per page, vertical paging, swipe-left to open.

mod render;
mod update;

pub use render::render_feed;
pub use update::{handle_key, handle_mouse};
