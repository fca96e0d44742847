//! The game engine: one operation per phase transition.
//!
//! Every operation borrows the current [`GameState`] and returns the next
//! one. On error the borrowed state is untouched, so a rejected action
//! leaves the game exactly where it was.
//!
//! | From        | Operation                   | To                         |
//! |-------------|-----------------------------|----------------------------|
//! | Intro       | `start`                     | Setup                      |
//! | Setup       | `start_game`                | Assignment                 |
//! | Assignment  | `confirm_assignment`        | Assignment / Gameplay      |
//! | Gameplay    | `advance_turn`              | Gameplay / Discussion      |
//! | Discussion  | `begin_voting`              | Voting                     |
//! | Voting      | `cast_vote`                 | Voting / Reveal            |
//! | Reveal      | `continue_after_reveal`     | Gameplay / GameOver        |
//! | GameOver    | `play_again`                | Setup                      |
//! | GameOver    | `restart_with_same_players` | Assignment                 |

use im::Vector;
use log::{debug, info, warn};
use rustc_hash::FxHashSet;

use super::event::Event;
use super::tally::Tally;
use super::turn_order;
use crate::core::{
    Ballot, GameConfig, GameError, GameRng, GameState, Phase, Player, PlayerId, Randomness, Role,
    MAX_PLAYERS,
};
use crate::words::{Language, WordBank};

/// Drives a [`GameState`] through its phases.
///
/// Owns the configuration, the word bank and the source of randomness.
/// Holds no game state of its own, so one engine can run any number of
/// games in sequence.
///
/// ## Example
///
/// ```
/// use insider::core::{GameState, Phase};
/// use insider::rules::GameEngine;
/// use insider::words::Language;
///
/// let mut engine = GameEngine::seeded(7);
/// let state = engine.start(&GameState::new()).unwrap();
/// let state = engine
///     .start_game(&state, &["Ann", "Bo", "Cy"], Language::English)
///     .unwrap();
///
/// assert_eq!(state.phase, Phase::Assignment);
/// assert_eq!(state.turn_order.as_slice(), &[0, 1, 2]);
/// assert_eq!(state.players.iter().filter(|p| p.is_insider()).count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<R: Randomness = GameRng> {
    config: GameConfig,
    bank: WordBank,
    rng: R,
}

impl GameEngine<GameRng> {
    /// Default configuration, built-in words, seeded RNG.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameConfig::default(), WordBank::builtin(), GameRng::new(seed))
    }
}

impl<R: Randomness> GameEngine<R> {
    /// Create an engine from its configuration, word bank and randomness.
    pub fn new(config: GameConfig, bank: WordBank, rng: R) -> Self {
        Self { config, bank, rng }
    }

    /// Get the game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the word bank pairs are drawn from.
    #[must_use]
    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Get mutable access to the randomness source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Dispatch an event to its operation.
    pub fn apply(&mut self, state: &GameState, event: &Event) -> Result<GameState, GameError> {
        debug!("apply {} in {:?}", event.name(), state.phase);
        match event {
            Event::Start => self.start(state),
            Event::StartGame { names, language } => self.start_game(state, names, *language),
            Event::ConfirmAssignment => self.confirm_assignment(state),
            Event::AdvanceTurn => self.advance_turn(state),
            Event::BeginVoting => self.begin_voting(state),
            Event::CastVote(candidate) => self.cast_vote(state, *candidate),
            Event::ContinueAfterReveal => self.continue_after_reveal(state),
            Event::PlayAgain => self.play_again(state),
            Event::RestartWithSamePlayers => self.restart_with_same_players(state),
        }
    }

    /// Every event `apply` would accept in this state.
    ///
    /// Setup is left out: starting a game needs a roster only the front end has.
    #[must_use]
    pub fn legal_events(&self, state: &GameState) -> Vec<Event> {
        match state.phase {
            Phase::Intro => vec![Event::Start],
            Phase::Setup => Vec::new(),
            Phase::Assignment => vec![Event::ConfirmAssignment],
            Phase::Gameplay => vec![Event::AdvanceTurn],
            Phase::Discussion => vec![Event::BeginVoting],
            Phase::Voting => state.candidates().iter().map(|p| Event::CastVote(p.id)).collect(),
            Phase::Reveal => vec![Event::ContinueAfterReveal],
            Phase::GameOver => vec![Event::PlayAgain, Event::RestartWithSamePlayers],
        }
    }

    /// Intro -> Setup.
    pub fn start(&self, state: &GameState) -> Result<GameState, GameError> {
        expect_phase(state, Phase::Intro, "start")?;
        Ok(GameState::setup(self.config.language))
    }

    /// Setup -> Assignment.
    ///
    /// Names are trimmed, must be non-empty and unique, and there must be at
    /// least `min_players` of them. Seating follows the given order.
    pub fn start_game<S: AsRef<str>>(
        &mut self,
        state: &GameState,
        names: &[S],
        language: Language,
    ) -> Result<GameState, GameError> {
        expect_phase(state, Phase::Setup, "start_game")?;
        self.deal(names, language)
    }

    /// Advance the word-viewing cursor; after the last player, start clue round 1.
    pub fn confirm_assignment(&mut self, state: &GameState) -> Result<GameState, GameError> {
        expect_phase(state, Phase::Assignment, "confirm_assignment")?;
        let mut next = state.clone();

        if state.current_player_index + 1 < state.turn_order.len() {
            next.current_player_index += 1;
            debug!("assignment passes to turn {}", next.current_player_index);
        } else {
            next.phase = Phase::Gameplay;
            next.turn_order = turn_order::shuffled(state, &mut self.rng);
            next.current_player_index = 0;
            next.round_number = 1;
            info!("all words seen, clue round 1 begins");
        }

        Ok(next)
    }

    /// Advance the clue cursor. At the end of a round either reshuffle for
    /// the next round or, after the last round, open discussion.
    pub fn advance_turn(&mut self, state: &GameState) -> Result<GameState, GameError> {
        expect_phase(state, Phase::Gameplay, "advance_turn")?;
        let mut next = state.clone();

        if state.current_player_index + 1 < state.turn_order.len() {
            next.current_player_index += 1;
            debug!(
                "round {} clue passes to turn {}",
                state.round_number, next.current_player_index
            );
        } else if state.round_number + 1 > self.config.clue_rounds {
            next.phase = Phase::Discussion;
            info!("clue rounds finished, discussion begins");
        } else {
            next.round_number = state.round_number + 1;
            next.turn_order = turn_order::shuffled(state, &mut self.rng);
            next.current_player_index = 0;
            info!("clue round {} begins", next.round_number);
        }

        Ok(next)
    }

    /// Discussion -> Voting, in seating order over active players.
    pub fn begin_voting(&self, state: &GameState) -> Result<GameState, GameError> {
        expect_phase(state, Phase::Discussion, "begin_voting")?;

        let order = turn_order::seating(state);
        if order.is_empty() {
            return Err(GameError::NoActivePlayers);
        }

        let mut next = state.clone();
        next.phase = Phase::Voting;
        next.turn_order = order;
        next.current_player_index = 0;
        next.votes = Vector::new();
        info!("voting begins with {} voters", next.turn_order.len());

        Ok(next)
    }

    /// Record the current voter's ballot. The last ballot triggers the tally.
    ///
    /// The candidate must be seated, still active, and not the voter.
    pub fn cast_vote(&mut self, state: &GameState, candidate: PlayerId) -> Result<GameState, GameError> {
        expect_phase(state, Phase::Voting, "cast_vote")?;

        let voter = state.current_player().ok_or(GameError::NoCurrentPlayer)?.id;
        let target = state.player(candidate).ok_or(GameError::UnknownPlayer(candidate))?;
        if !target.is_active() {
            return Err(GameError::EliminatedCandidate(candidate));
        }
        if candidate == voter {
            return Err(GameError::SelfVote(voter));
        }

        let mut next = state.clone();
        next.votes.push_back(Ballot { voter, candidate });
        debug!("{} voted for {}", voter, candidate);

        if state.current_player_index + 1 < state.turn_order.len() {
            next.current_player_index += 1;
        } else {
            self.eliminate(&mut next)?;
        }

        Ok(next)
    }

    /// Reveal -> GameOver or back to clue round 1.
    ///
    /// - Insider eliminated: innocents win.
    /// - Innocent eliminated with two or fewer players left: insider wins.
    /// - Otherwise the remaining players start a fresh clue cycle.
    pub fn continue_after_reveal(&mut self, state: &GameState) -> Result<GameState, GameError> {
        expect_phase(state, Phase::Reveal, "continue_after_reveal")?;

        let eliminated = state.eliminated_player().ok_or(GameError::NoElimination)?;
        let mut next = state.clone();

        if eliminated.is_insider() {
            next.phase = Phase::GameOver;
            next.winner = Some(Role::Innocent);
            info!("insider {} caught, innocents win", eliminated.name);
        } else if state.active_count() <= 2 {
            next.phase = Phase::GameOver;
            next.winner = Some(Role::Insider);
            info!("insider survives to the final two, insider wins");
        } else {
            next.phase = Phase::Gameplay;
            next.round_number = 1;
            next.turn_order = turn_order::shuffled(state, &mut self.rng);
            next.current_player_index = 0;
            info!("{} players remain, clue round 1 begins", state.active_count());
        }

        Ok(next)
    }

    /// GameOver -> Setup with an empty roster.
    pub fn play_again(&self, state: &GameState) -> Result<GameState, GameError> {
        expect_phase(state, Phase::GameOver, "play_again")?;
        Ok(GameState::setup(state.language))
    }

    /// GameOver -> Assignment, dealing a new game to the same names and language.
    pub fn restart_with_same_players(&mut self, state: &GameState) -> Result<GameState, GameError> {
        expect_phase(state, Phase::GameOver, "restart_with_same_players")?;

        let names = state.names();
        if names.is_empty() {
            return Err(GameError::NoRoster);
        }
        self.deal(&names, state.language)
    }

    /// Draw a word pair and an insider, seat the roster, sequential assignment order.
    fn deal<S: AsRef<str>>(&mut self, names: &[S], language: Language) -> Result<GameState, GameError> {
        let names = validate_names(names, self.config.min_players)?;
        let word_pair = self.bank.draw(language, &mut self.rng)?;
        let insider = self.rng.pick(names.len());

        let count = names.len();
        let players = names
            .into_iter()
            .enumerate()
            .map(|(seat, name)| {
                let id = u8::try_from(seat).map_err(|_| GameError::TooManyPlayers {
                    max: MAX_PLAYERS,
                    given: count,
                })?;
                let (role, word) = if seat == insider {
                    (Role::Insider, &word_pair.general)
                } else {
                    (Role::Innocent, &word_pair.specific)
                };
                Ok(Player::new(PlayerId::new(id), name, role, word.clone()))
            })
            .collect::<Result<Vector<Player>, GameError>>()?;
        info!("new {} game with {} players", language, count);

        Ok(GameState {
            phase: Phase::Assignment,
            language,
            players,
            word_pair: Some(word_pair),
            turn_order: turn_order::sequential(count),
            ..GameState::default()
        })
    }

    /// Eliminate the tally leader, or a random active player if nobody voted.
    fn eliminate(&mut self, state: &mut GameState) -> Result<(), GameError> {
        let tally = Tally::from_ballots(&state.votes);

        let chosen = match tally.leader() {
            Some(id) => id,
            None => {
                let active = state.active_indices();
                if active.is_empty() {
                    return Err(GameError::NoActivePlayers);
                }
                warn!("no ballots recorded, eliminating a random active player");
                state.players[active[self.rng.pick(active.len())]].id
            }
        };

        let seat = state.player_index(chosen).ok_or(GameError::UnknownPlayer(chosen))?;
        state.players[seat].eliminated = true;
        state.eliminated_player_id = Some(chosen);
        state.phase = Phase::Reveal;
        info!(
            "{} eliminated with {} of {} votes",
            state.players[seat].name,
            tally.count(chosen),
            tally.total()
        );

        Ok(())
    }
}

fn expect_phase(state: &GameState, expected: Phase, operation: &'static str) -> Result<(), GameError> {
    if state.phase == expected {
        Ok(())
    } else {
        Err(GameError::WrongPhase {
            operation,
            expected,
            actual: state.phase,
        })
    }
}

fn validate_names<S: AsRef<str>>(names: &[S], min_players: usize) -> Result<Vec<String>, GameError> {
    if names.len() < min_players {
        return Err(GameError::NotEnoughPlayers {
            required: min_players,
            given: names.len(),
        });
    }
    if names.len() > MAX_PLAYERS {
        return Err(GameError::TooManyPlayers {
            max: MAX_PLAYERS,
            given: names.len(),
        });
    }

    let mut seen = FxHashSet::default();
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        if !seen.insert(name) {
            return Err(GameError::DuplicateName(name.to_string()));
        }
        out.push(name.to_string());
    }
    Ok(out)
}
