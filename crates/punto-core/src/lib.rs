//! Core Punto Medio library: data model, event store, search and the
//! gesture-driven navigation model.
//!
//! Nothing in this crate touches a terminal. Every transition takes its inputs
//! (touch points, viewport sizes, `Instant`s) explicitly so the front end can
//! drive it from real input and tests can drive it from synthetic input.

pub mod animation;
pub mod config;
pub mod detail;
pub mod disclosure;
pub mod feed;
pub mod gesture;
pub mod model;
pub mod search;
pub mod store;
pub mod tabs;

pub use detail::{DetailCommand, DetailNavigator, DetailPhase};
pub use feed::{FeedCommand, FeedNavigator};
pub use model::{Event, Narrative, Source};
pub use store::{DatasetError, EventStore};
pub use tabs::{Tab, TabRouter};
