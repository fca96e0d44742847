//! Game phases.

use serde::{Deserialize, Serialize};

/// Where the game currently is. `Intro` is initial, `GameOver` is terminal
/// until the players choose to play again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Intro,
    Setup,
    /// Each player privately views their word, in seating order.
    Assignment,
    /// Clue rounds, shuffled order each round.
    Gameplay,
    /// Timed open discussion.
    Discussion,
    /// One ballot per active player, in seating order.
    Voting,
    /// The eliminated player's role is shown.
    Reveal,
    GameOver,
}

impl Phase {
    /// Phases in which `current_player_index` points at someone.
    #[must_use]
    pub fn has_turns(self) -> bool {
        matches!(self, Phase::Assignment | Phase::Gameplay | Phase::Voting)
    }
}
