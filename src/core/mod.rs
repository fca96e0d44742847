//! Core types: players, phases, state, RNG, configuration, errors.
//!
//! Everything here is plain data. The transitions that move a `GameState`
//! from one phase to the next live in `rules`.

pub mod config;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, CLUE_ROUNDS, DISCUSSION_SECONDS, MAX_PLAYERS, MIN_PLAYERS};
pub use error::GameError;
pub use phase::Phase;
pub use player::{Player, PlayerId, Role};
pub use rng::{GameRng, Randomness};
pub use state::{Ballot, GameState, TurnOrder};
