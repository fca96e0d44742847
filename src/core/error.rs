//! Errors returned by engine operations.
//!
//! Every variant is a rejected precondition. The state passed to the failing
//! operation is left exactly as it was.

use thiserror::Error;

use super::{Phase, PlayerId};
use crate::words::Language;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("{operation} is only valid during {expected:?}, current phase is {actual:?}")]
    WrongPhase {
        operation: &'static str,
        expected: Phase,
        actual: Phase,
    },
    #[error("at least {required} players are needed, got {given}")]
    NotEnoughPlayers { required: usize, given: usize },
    #[error("at most {max} players are supported, got {given}")]
    TooManyPlayers { max: usize, given: usize },
    #[error("player names must not be empty")]
    EmptyName,
    #[error("player name {0:?} is used twice")]
    DuplicateName(String),
    #[error("no word pairs available for {0}")]
    EmptyWordBank(Language),
    #[error("unknown language {0:?}")]
    UnknownLanguage(String),
    #[error("could not load word bank: {0}")]
    WordBank(String),
    #[error("no player holds the current turn")]
    NoCurrentPlayer,
    #[error("no player with id {0}")]
    UnknownPlayer(PlayerId),
    #[error("{0} is already eliminated")]
    EliminatedCandidate(PlayerId),
    #[error("{0} cannot vote for themselves")]
    SelfVote(PlayerId),
    #[error("no active players left")]
    NoActivePlayers,
    #[error("nobody has been eliminated yet")]
    NoElimination,
    #[error("no previous roster to restart with")]
    NoRoster,
}
