//! Game state: the single value every transition reads and replaces.
//!
//! ## GameState
//!
//! - Phase, language, roster (seating order), word pair
//! - Turn order for the current phase and the cursor into it
//! - Clue round counter
//! - Ballots of the current vote, in casting order
//! - Last eliminated player and the winner
//!
//! `players` and `votes` are `im` persistent vectors, so a transition clones
//! the previous state in O(1) and edits the copy.
//!
//! ## Indexing
//!
//! `turn_order` holds seat indices into `players`; `current_player_index`
//! is a position in `turn_order`. Resolving the player whose turn it is
//! takes both lookups, see [`GameState::current_player`].

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::phase::Phase;
use super::player::{Player, PlayerId, Role};
use crate::words::{Language, WordPair};

/// Seat indices in the order device control passes for the current phase.
pub type TurnOrder = SmallVec<[usize; 8]>;

/// One recorded vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ballot {
    pub voter: PlayerId,
    pub candidate: PlayerId,
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,

    /// Word list the current roster plays with.
    pub language: Language,

    /// Seating order, fixed once a game starts.
    pub players: Vector<Player>,

    /// Drawn at game start, kept for the end-of-game reveal.
    pub word_pair: Option<WordPair>,

    /// Seat indices for the current phase.
    pub turn_order: TurnOrder,

    /// Position in `turn_order`, not a seat index.
    pub current_player_index: usize,

    /// Clue round within the current cycle (starts at 1).
    pub round_number: u32,

    /// Ballots in casting order, at most one per voter.
    pub votes: Vector<Ballot>,

    /// Most recently eliminated player.
    pub eliminated_player_id: Option<PlayerId>,

    /// Set only on entering `GameOver`.
    pub winner: Option<Role>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            phase: Phase::Intro,
            language: Language::default(),
            players: Vector::new(),
            word_pair: None,
            turn_order: TurnOrder::new(),
            current_player_index: 0,
            round_number: 1,
            votes: Vector::new(),
            eliminated_player_id: None,
            winner: None,
        }
    }
}

impl GameState {
    /// Fresh state at the intro screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state at setup with an empty roster.
    #[must_use]
    pub fn setup(language: Language) -> Self {
        Self {
            phase: Phase::Setup,
            language,
            ..Self::default()
        }
    }

    /// Number of seated players, eliminated or not.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn it is.
    ///
    /// `None` outside the phases with turns, or if the cursor has run past
    /// the turn order.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        if !self.phase.has_turns() {
            return None;
        }
        let seat = *self.turn_order.get(self.current_player_index)?;
        self.players.get(seat)
    }

    /// Seat indices of non-eliminated players, in seating order.
    #[must_use]
    pub fn active_indices(&self) -> TurnOrder {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_active())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of non-eliminated players.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Non-eliminated players, in seating order.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active())
    }

    /// Look up a player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Seat index of a player.
    #[must_use]
    pub fn player_index(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// The most recently eliminated player.
    #[must_use]
    pub fn eliminated_player(&self) -> Option<&Player> {
        self.eliminated_player_id.and_then(|id| self.player(id))
    }

    /// The insider, once roles are assigned.
    #[must_use]
    pub fn insider(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_insider())
    }

    /// The candidate a voter picked this round.
    #[must_use]
    pub fn vote_of(&self, voter: PlayerId) -> Option<PlayerId> {
        self.votes.iter().find(|b| b.voter == voter).map(|b| b.candidate)
    }

    /// Players the current voter may vote for: active, and not the voter.
    ///
    /// Empty outside `Voting`.
    #[must_use]
    pub fn candidates(&self) -> Vec<&Player> {
        if self.phase != Phase::Voting {
            return Vec::new();
        }
        let voter = self.current_player().map(|p| p.id);
        self.active_players().filter(|p| Some(p.id) != voter).collect()
    }

    /// Names in seating order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> GameState {
        let mut state = GameState::setup(Language::English);
        state.players = ["Ann", "Bo", "Cy", "Di"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let role = if i == 2 { Role::Insider } else { Role::Innocent };
                Player::new(PlayerId::new(i as u8), *name, role, "w")
            })
            .collect();
        state
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();

        assert_eq!(state.phase, Phase::Intro);
        assert_eq!(state.round_number, 1);
        assert!(state.players.is_empty());
        assert!(state.word_pair.is_none());
        assert!(state.current_player().is_none());
    }

    #[test]
    fn test_current_player_double_indirection() {
        let mut state = roster();
        state.phase = Phase::Gameplay;
        state.turn_order = TurnOrder::from_slice(&[3, 1, 0, 2]);
        state.current_player_index = 1;

        assert_eq!(state.current_player().unwrap().name, "Bo");

        state.current_player_index = 0;
        assert_eq!(state.current_player().unwrap().name, "Di");

        state.current_player_index = 4;
        assert!(state.current_player().is_none());
    }

    #[test]
    fn test_current_player_needs_turn_phase() {
        let mut state = roster();
        state.phase = Phase::Discussion;
        state.turn_order = TurnOrder::from_slice(&[0, 1, 2, 3]);

        assert!(state.current_player().is_none());
    }

    #[test]
    fn test_active_indices_skip_eliminated() {
        let mut state = roster();
        state.players[1].eliminated = true;

        assert_eq!(state.active_indices().as_slice(), &[0, 2, 3]);
        assert_eq!(state.active_count(), 3);
        assert_eq!(state.player_count(), 4);
    }

    #[test]
    fn test_lookups() {
        let mut state = roster();
        state.eliminated_player_id = Some(PlayerId::new(3));

        assert_eq!(state.player(PlayerId::new(1)).unwrap().name, "Bo");
        assert_eq!(state.player_index(PlayerId::new(2)), Some(2));
        assert!(state.player(PlayerId::new(9)).is_none());
        assert_eq!(state.eliminated_player().unwrap().name, "Di");
        assert_eq!(state.insider().unwrap().name, "Cy");
        assert_eq!(state.names(), vec!["Ann", "Bo", "Cy", "Di"]);
    }

    #[test]
    fn test_candidates_exclude_voter_and_eliminated() {
        let mut state = roster();
        state.players[3].eliminated = true;
        state.phase = Phase::Voting;
        state.turn_order = state.active_indices();
        state.current_player_index = 1;

        let names: Vec<_> = state.candidates().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Cy"]);
    }

    #[test]
    fn test_vote_of() {
        let mut state = roster();
        state.votes.push_back(Ballot {
            voter: PlayerId::new(0),
            candidate: PlayerId::new(2),
        });

        assert_eq!(state.vote_of(PlayerId::new(0)), Some(PlayerId::new(2)));
        assert_eq!(state.vote_of(PlayerId::new(1)), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = roster();
        let mut copy = original.clone();
        copy.players[0].eliminated = true;

        assert!(original.players[0].is_active());
        assert!(!copy.players[0].is_active());
    }

    #[test]
    fn test_state_serde() {
        let mut state = roster();
        state.phase = Phase::Voting;
        state.word_pair = Some(WordPair::new("Fruit", "Mango"));
        state.turn_order = TurnOrder::from_slice(&[0, 1, 2, 3]);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
