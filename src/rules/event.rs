//! Events the front end feeds into the engine.
//!
//! One variant per transition trigger. [`GameEngine::apply`] dispatches an
//! event to the matching operation.
//!
//! [`GameEngine::apply`]: super::GameEngine::apply

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::words::Language;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Leave the intro screen.
    Start,
    /// Deal roles and words to a roster, in seating order.
    StartGame { names: Vec<String>, language: Language },
    /// The current player has seen their word.
    ConfirmAssignment,
    /// The current player gave their clue.
    AdvanceTurn,
    /// Discussion timer expired or was skipped.
    BeginVoting,
    /// The current voter picks a candidate.
    CastVote(PlayerId),
    /// Leave the reveal screen.
    ContinueAfterReveal,
    /// Back to setup with an empty roster.
    PlayAgain,
    /// Deal a new game to the same roster and language.
    RestartWithSamePlayers,
}

impl Event {
    /// Name of the engine operation this event dispatches to.
    ///
    /// Matches the `operation` reported by [`GameError::WrongPhase`].
    ///
    /// [`GameError::WrongPhase`]: crate::core::GameError::WrongPhase
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Event::Start => "start",
            Event::StartGame { .. } => "start_game",
            Event::ConfirmAssignment => "confirm_assignment",
            Event::AdvanceTurn => "advance_turn",
            Event::BeginVoting => "begin_voting",
            Event::CastVote(_) => "cast_vote",
            Event::ContinueAfterReveal => "continue_after_reveal",
            Event::PlayAgain => "play_again",
            Event::RestartWithSamePlayers => "restart_with_same_players",
        }
    }
}
