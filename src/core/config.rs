//! Game configuration.
//!
//! The front end builds a `GameConfig` once per session. It only carries
//! policy knobs; none of them change how a transition is computed beyond
//! the value they name.

use serde::{Deserialize, Serialize};

use crate::words::Language;

/// Fewest names a game can start with.
pub const MIN_PLAYERS: usize = 3;

/// `PlayerId` is a `u8`.
pub const MAX_PLAYERS: usize = 255;

/// Clue rounds played before discussion is forced.
pub const CLUE_ROUNDS: u32 = 2;

/// Default length of the discussion countdown.
pub const DISCUSSION_SECONDS: u32 = 120;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Word list sampled when a game starts.
    pub language: Language,

    /// Discussion countdown, in seconds.
    pub discussion_seconds: u32,

    /// Clue rounds per cycle before discussion.
    pub clue_rounds: u32,

    /// Minimum roster size accepted by `start_game`.
    pub min_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            discussion_seconds: DISCUSSION_SECONDS,
            clue_rounds: CLUE_ROUNDS,
            min_players: MIN_PLAYERS,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the word-bank language.
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the discussion countdown length.
    #[must_use]
    pub fn with_discussion_seconds(mut self, seconds: u32) -> Self {
        assert!(seconds > 0, "Discussion must last at least 1 second");
        self.discussion_seconds = seconds;
        self
    }

    /// Set the number of clue rounds per cycle.
    #[must_use]
    pub fn with_clue_rounds(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "Must play at least 1 clue round");
        self.clue_rounds = rounds;
        self
    }

    /// Set the minimum roster size.
    #[must_use]
    pub fn with_min_players(mut self, players: usize) -> Self {
        assert!(players >= MIN_PLAYERS, "A game needs at least 3 players");
        self.min_players = players;
        self
    }
}
