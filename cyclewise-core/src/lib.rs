//! Core types for cyclewise.
//!
//! - `projector`: cycle event projection (periods, fertile windows, ovulation)
//! - `entry` and `ics`: handing projections to calendar renderers
//! - `store`: key-value persistence used by the widget state types
//! - `tracker`, `symptoms`, `chat`, `facilities`: per-widget state

pub mod advisory;
pub mod chat;
pub mod config;
pub mod entry;
pub mod error;
pub mod facilities;
pub mod ics;
pub mod projector;
pub mod store;
pub mod symptoms;
pub mod tracker;

pub use error::{CycleWiseError, CycleWiseResult};
pub use projector::{CycleParameters, EventKind, ProjectedEvent, project};
