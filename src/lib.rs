//! # insider
//!
//! Engine for a pass-the-device social deduction word game.
//!
//! Every player but one learns a specific word; the insider only learns the
//! general category. Players give clues over two rounds, discuss, vote one
//! player out, and repeat until the insider is caught or survives to the
//! final two.
//!
//! ## Design Principles
//!
//! 1. **State as a value**: `GameState` is plain data. Each engine operation
//!    borrows the current state and returns the next one.
//!
//! 2. **Randomness as a dependency**: the engine draws through the
//!    `Randomness` trait, so tests can script every pick and shuffle.
//!
//! 3. **Front end agnostic**: rendering, input and the wall clock live
//!    outside the engine. The bundled terminal front end is one such caller.
//!
//! ## Modules
//!
//! - `core`: Players, phases, state, RNG, configuration, errors
//! - `words`: Word pairs and the per-language word bank
//! - `rules`: The engine, events, turn orders, vote tally
//! - `clock`: Discussion countdown driven by the caller

pub mod clock;
pub mod core;
pub mod rules;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    Ballot, GameConfig, GameError, GameRng, GameState, Phase, Player, PlayerId, Randomness, Role,
    TurnOrder,
};

pub use crate::clock::{ClockStatus, DiscussionClock};
pub use crate::rules::{Event, GameEngine, Tally};
pub use crate::words::{Language, WordBank, WordPair};
