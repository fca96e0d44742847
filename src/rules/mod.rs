//! Game rules: the state machine and the algorithms it leans on.
//!
//! - `engine`: `GameEngine`, one operation per phase transition
//! - `event`: `Event`, the same operations as data
//! - `turn_order`: sequential and shuffled turn orders
//! - `tally`: vote counting and tie-breaking

pub mod engine;
pub mod event;
pub mod tally;
pub mod turn_order;

pub use engine::GameEngine;
pub use event::Event;
pub use tally::Tally;
