//! Player identification, roles and per-player game data.
//!
//! ## PlayerId
//!
//! Stable identifier derived from the seating position at setup. Supports up
//! to 255 players and prints as `p-<seat>`.
//!
//! ## Player
//!
//! Name, secret role and word, and the elimination flag. Only the flag changes
//! after a game starts, and only from `false` to `true`.

use serde::{Deserialize, Serialize};

/// Player identifier, 0-based seat index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p-{}", self.0)
    }
}

/// Secret role. Exactly one player per game is the insider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Knows the specific word.
    Innocent,
    /// Knows only the general word and must avoid detection.
    Insider,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Innocent => write!(f, "Innocent"),
            Role::Insider => write!(f, "Insider"),
        }
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
    /// Specific word for innocents, general word for the insider.
    pub word: String,
    pub eliminated: bool,
}

impl Player {
    /// Create a new, active player.
    pub fn new(id: PlayerId, name: impl Into<String>, role: Role, word: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            word: word.into(),
            eliminated: false,
        }
    }

    /// Whether this player still takes turns and votes.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.eliminated
    }

    #[must_use]
    pub fn is_insider(&self) -> bool {
        self.role == Role::Insider
    }
}
