//! Feature slices. Each owns its update and render halves; shared state
//! lives in `TuiState`.

pub mod detail;
pub mod feed;
pub mod navbar;
pub mod placeholder;
pub mod search;
