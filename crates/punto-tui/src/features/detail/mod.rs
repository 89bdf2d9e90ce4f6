//! Detail overlay: narratives of one event, drag-to-dismiss.

mod render;
mod update;

pub use render::render_detail;
pub use update::{
    DetailOutcome, back, handle_detach_elapsed, handle_key, handle_mouse, is_interactive,
    open_event, open_sources,
};
