//! Full-game flow tests.
//!
//! These drive the engine from the intro screen to game over the way a
//! front end would, checking turn orders, the vote tally and every way a
//! game can end.

use insider::core::{GameConfig, GameRng, GameState, Phase, PlayerId, Randomness, Role};
use insider::rules::{Event, GameEngine};
use insider::words::{Language, WordBank, WordPair};
use std::collections::VecDeque;

/// Replays queued picks (0 once exhausted). Shuffles reverse the slice so
/// clue orders are predictable but differ from seating order.
#[derive(Default)]
struct Scripted {
    picks: VecDeque<usize>,
}

impl Randomness for Scripted {
    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }

    fn shuffle(&mut self, items: &mut [usize]) {
        items.reverse();
    }
}

fn bank() -> WordBank {
    let mut bank = WordBank::new();
    bank.insert(Language::English, WordPair::new("Fruit", "Mango"));
    bank
}

/// Engine whose first game seats the insider at `insider`.
fn engine(insider: usize) -> GameEngine<Scripted> {
    let rng = Scripted {
        picks: [0, insider].into_iter().collect(),
    };
    GameEngine::new(GameConfig::default(), bank(), rng)
}

fn start(engine: &mut GameEngine<Scripted>, names: &[&str]) -> GameState {
    let state = engine.start(&GameState::new()).unwrap();
    engine.start_game(&state, names, Language::English).unwrap()
}

fn confirm_all(engine: &mut GameEngine<Scripted>, mut state: GameState) -> GameState {
    while state.phase == Phase::Assignment {
        state = engine.confirm_assignment(&state).unwrap();
    }
    state
}

fn clue_rounds(engine: &mut GameEngine<Scripted>, mut state: GameState) -> GameState {
    while state.phase == Phase::Gameplay {
        state = engine.advance_turn(&state).unwrap();
    }
    state
}

/// Cast ballots in voting order; `targets[i]` is the seat the i-th voter picks.
fn vote(engine: &mut GameEngine<Scripted>, state: GameState, targets: &[u8]) -> GameState {
    let mut state = engine.begin_voting(&state).unwrap();
    for &target in targets {
        state = engine.cast_vote(&state, PlayerId::new(target)).unwrap();
    }
    state
}

// =============================================================================
// Turn Orders
// =============================================================================

/// Assignment goes around the table in seating order.
#[test]
fn test_assignment_is_seating_order() {
    let mut engine = engine(0);
    let mut state = start(&mut engine, &["Ann", "Bo", "Cy", "Di", "Ed"]);

    assert_eq!(state.turn_order.as_slice(), &[0, 1, 2, 3, 4]);

    let mut seen = Vec::new();
    while state.phase == Phase::Assignment {
        seen.push(state.current_player().unwrap().name.clone());
        state = engine.confirm_assignment(&state).unwrap();
    }
    assert_eq!(seen, vec!["Ann", "Bo", "Cy", "Di", "Ed"]);
}

/// Clue rounds use the shuffled order, and each round reshuffles.
#[test]
fn test_clue_rounds_reshuffle() {
    let mut engine = engine(0);
    let state = start(&mut engine, &["Ann", "Bo", "Cy"]);
    let mut state = confirm_all(&mut engine, state);

    // Round 1: reverse of seating
    assert_eq!(state.round_number, 1);
    assert_eq!(state.turn_order.as_slice(), &[2, 1, 0]);
    assert_eq!(state.current_player().unwrap().name, "Cy");

    for _ in 0..3 {
        state = engine.advance_turn(&state).unwrap();
    }

    // Round 2: reshuffled from active seats again
    assert_eq!(state.phase, Phase::Gameplay);
    assert_eq!(state.round_number, 2);
    assert_eq!(state.current_player_index, 0);
    assert_eq!(state.turn_order.as_slice(), &[2, 1, 0]);

    for _ in 0..3 {
        state = engine.advance_turn(&state).unwrap();
    }
    assert_eq!(state.phase, Phase::Discussion);
}

/// Exactly two clue rounds happen before discussion at any table size.
#[test]
fn test_two_rounds_for_any_table_size() {
    for count in 3..=10 {
        let names: Vec<String> = (0..count).map(|i| format!("P{}", i)).collect();
        let mut engine = GameEngine::seeded(count as u64);
        let state = engine.start(&GameState::new()).unwrap();
        let mut state = engine.start_game(&state, &names, Language::English).unwrap();
        while state.phase == Phase::Assignment {
            state = engine.confirm_assignment(&state).unwrap();
        }

        let mut turns = 0;
        while state.phase == Phase::Gameplay {
            state = engine.advance_turn(&state).unwrap();
            turns += 1;
        }

        assert_eq!(turns, 2 * count, "{} players", count);
        assert_eq!(state.phase, Phase::Discussion);
    }
}

/// Voting goes around the table in seating order, skipping the eliminated.
#[test]
fn test_voting_order_after_elimination() {
    let mut engine = engine(0);
    let state = start(&mut engine, &["Ann", "Bo", "Cy", "Di", "Ed"]);
    let state = confirm_all(&mut engine, state);
    let state = clue_rounds(&mut engine, state);

    // Bo (seat 1) goes out
    let state = vote(&mut engine, state, &[1, 0, 1, 1, 1]);
    assert_eq!(state.eliminated_player_id, Some(PlayerId::new(1)));

    let state = engine.continue_after_reveal(&state).unwrap();
    assert_eq!(state.phase, Phase::Gameplay);
    assert_eq!(state.turn_order.as_slice(), &[4, 3, 2, 0]);

    let state = clue_rounds(&mut engine, state);
    let state = engine.begin_voting(&state).unwrap();
    assert_eq!(state.turn_order.as_slice(), &[0, 2, 3, 4]);
    assert_eq!(state.current_player().unwrap().name, "Ann");
}

// =============================================================================
// Voting
// =============================================================================

/// N ballots move to reveal on the Nth, never before.
#[test]
fn test_reveal_only_after_last_ballot() {
    let mut engine = engine(0);
    let state = start(&mut engine, &["Ann", "Bo", "Cy", "Di"]);
    let state = confirm_all(&mut engine, state);
    let state = clue_rounds(&mut engine, state);
    let mut state = engine.begin_voting(&state).unwrap();

    for (i, target) in [3u8, 3, 3, 0].into_iter().enumerate() {
        assert_eq!(state.phase, Phase::Voting);
        assert_eq!(state.votes.len(), i);
        state = engine.cast_vote(&state, PlayerId::new(target)).unwrap();
    }

    assert_eq!(state.phase, Phase::Reveal);
    assert_eq!(state.votes.len(), 4);
    for voter in 0..4 {
        assert!(state.vote_of(PlayerId::new(voter)).is_some());
    }
}

/// {A: 2, B: 1, C: 1} eliminates A.
#[test]
fn test_majority_eliminated() {
    let mut engine = engine(3);
    let state = start(&mut engine, &["A", "B", "C", "D"]);
    let state = confirm_all(&mut engine, state);
    let state = clue_rounds(&mut engine, state);

    // A votes B, B votes A, C votes A, D votes C
    let state = vote(&mut engine, state, &[1, 0, 0, 2]);

    assert_eq!(state.phase, Phase::Reveal);
    assert_eq!(state.eliminated_player().unwrap().name, "A");
}

/// B and C tie on 2; B reached 2 first, so B goes.
#[test]
fn test_tie_goes_to_first_to_reach_max() {
    let mut engine = engine(0);
    let state = start(&mut engine, &["A", "B", "C", "D"]);
    let state = confirm_all(&mut engine, state);
    let state = clue_rounds(&mut engine, state);

    // A->B, B->C, C->B, D->C
    let state = vote(&mut engine, state, &[1, 2, 1, 2]);

    assert_eq!(state.eliminated_player().unwrap().name, "B");
    assert!(state.players[1].eliminated);
    assert!(!state.players[2].eliminated);
}

/// Rejected ballots leave the vote where it was.
#[test]
fn test_invalid_ballot_keeps_state() {
    let mut engine = engine(0);
    let state = start(&mut engine, &["A", "B", "C", "D"]);
    let state = confirm_all(&mut engine, state);
    let state = clue_rounds(&mut engine, state);
    let state = engine.begin_voting(&state).unwrap();
    let state = engine.cast_vote(&state, PlayerId::new(2)).unwrap();
    let before = state.clone();

    // B may not vote for themselves
    assert!(engine.apply(&state, &Event::CastVote(PlayerId::new(1))).is_err());
    assert_eq!(state, before);
    assert_eq!(state.current_player().unwrap().name, "B");
}

// =============================================================================
// Endings
// =============================================================================

/// Catching the insider ends the game for the innocents.
#[test]
fn test_innocents_win() {
    let mut engine = engine(2);
    let state = start(&mut engine, &["A", "B", "C", "D"]);
    let state = confirm_all(&mut engine, state);
    let state = clue_rounds(&mut engine, state);
    let state = vote(&mut engine, state, &[2, 2, 0, 2]);

    assert_eq!(state.eliminated_player().unwrap().role, Role::Insider);

    let state = engine.continue_after_reveal(&state).unwrap();
    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.winner, Some(Role::Innocent));
}

/// With three players, one wrong elimination hands the insider the win.
#[test]
fn test_insider_wins_at_final_two() {
    let mut engine = engine(2);
    let state = start(&mut engine, &["A", "B", "C"]);
    let state = confirm_all(&mut engine, state);
    let state = clue_rounds(&mut engine, state);
    let state = vote(&mut engine, state, &[1, 0, 0]);

    assert_eq!(state.eliminated_player().unwrap().name, "A");

    let state = engine.continue_after_reveal(&state).unwrap();
    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.winner, Some(Role::Insider));
    assert_eq!(state.active_count(), 2);
}

/// A wrong elimination with more than two left restarts the clue cycle.
#[test]
fn test_wrong_elimination_loops_back() {
    let mut engine = engine(4);
    let state = start(&mut engine, &["A", "B", "C", "D", "E"]);
    let state = confirm_all(&mut engine, state);
    let state = clue_rounds(&mut engine, state);
    let state = vote(&mut engine, state, &[1, 0, 1, 1, 1]);

    let state = engine.continue_after_reveal(&state).unwrap();
    assert_eq!(state.phase, Phase::Gameplay);
    assert_eq!(state.round_number, 1);
    assert_eq!(state.current_player_index, 0);
    assert_eq!(state.active_count(), 4);

    let mut sorted = state.turn_order.to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 2, 3, 4]);

    // Second cycle: A goes out, three remain, game continues
    let state = clue_rounds(&mut engine, state);
    let state = vote(&mut engine, state, &[2, 0, 0, 0]);
    assert_eq!(state.eliminated_player().unwrap().name, "A");
    let state = engine.continue_after_reveal(&state).unwrap();
    assert_eq!(state.phase, Phase::Gameplay);

    // Third cycle: C goes out, insider E reaches the final two
    let state = clue_rounds(&mut engine, state);
    let state = vote(&mut engine, state, &[3, 2, 2]);
    assert_eq!(state.eliminated_player().unwrap().name, "C");
    let state = engine.continue_after_reveal(&state).unwrap();
    assert_eq!(state.winner, Some(Role::Insider));
    assert!(state.players.iter().filter(|p| p.eliminated).count() == 3);
}

// =============================================================================
// After The Game
// =============================================================================

fn finished_game(engine: &mut GameEngine<Scripted>) -> GameState {
    let state = start(engine, &["A", "B", "C", "D"]);
    let state = confirm_all(engine, state);
    let state = clue_rounds(engine, state);
    let state = vote(engine, state, &[2, 2, 0, 2]);
    engine.continue_after_reveal(&state).unwrap()
}

/// Play again returns to an empty setup.
#[test]
fn test_play_again() {
    let mut engine = engine(2);
    let state = finished_game(&mut engine);

    let state = engine.apply(&state, &Event::PlayAgain).unwrap();

    assert_eq!(state.phase, Phase::Setup);
    assert!(state.players.is_empty());
    assert!(state.votes.is_empty());
    assert!(state.word_pair.is_none());
    assert!(state.eliminated_player_id.is_none());
    assert!(state.winner.is_none());
}

/// Restart deals a fresh game to the same names.
#[test]
fn test_restart_with_same_players() {
    let mut engine = engine(2);
    let state = finished_game(&mut engine);

    // Next deal: word pair 0, insider seat 1
    engine.rng_mut().picks.extend([0, 1]);
    let state = engine.apply(&state, &Event::RestartWithSamePlayers).unwrap();

    assert_eq!(state.phase, Phase::Assignment);
    assert_eq!(state.names(), vec!["A", "B", "C", "D"]);
    assert_eq!(state.insider().unwrap().name, "B");
    assert_eq!(state.turn_order.as_slice(), &[0, 1, 2, 3]);
    assert!(state.players.iter().all(|p| p.is_active()));
    assert!(state.votes.is_empty());
    assert!(state.winner.is_none());
    assert!(state.eliminated_player_id.is_none());
}

// =============================================================================
// Random Play
// =============================================================================

/// Seeded random play always terminates with a winner and keeps invariants.
#[test]
fn test_random_games_terminate() {
    for seed in 0..50 {
        let mut engine = GameEngine::seeded(seed);
        let mut picker = GameRng::new(seed ^ 0xABCD);
        let names: Vec<String> = (0..(3 + seed as usize % 6)).map(|i| format!("P{}", i)).collect();

        let state = engine.start(&GameState::new()).unwrap();
        let mut state = engine.start_game(&state, &names, Language::Malayalam).unwrap();
        let mut steps = 0;

        while !state.is_over() {
            if state.phase.has_turns() {
                assert!(state.current_player_index < state.turn_order.len());
                for &seat in state.turn_order.iter() {
                    if state.phase != Phase::Assignment {
                        assert!(state.players[seat].is_active());
                    }
                }
            }

            let events = engine.legal_events(&state);
            let event = &events[picker.pick(events.len())];
            state = engine.apply(&state, event).unwrap();

            steps += 1;
            assert!(steps < 10_000, "seed {} did not terminate", seed);
        }

        assert!(state.winner.is_some());
        assert_eq!(state.players.iter().filter(|p| p.is_insider()).count(), 1);
    }
}

/// State snapshots survive a binary round trip mid-game.
#[test]
fn test_state_snapshot_bincode() {
    let mut engine = engine(1);
    let state = start(&mut engine, &["A", "B", "C"]);
    let state = confirm_all(&mut engine, state);

    let bytes = bincode::serialize(&state).unwrap();
    let restored: GameState = bincode::deserialize(&bytes).unwrap();

    assert_eq!(state, restored);
    assert_eq!(restored.current_player().unwrap().name, "C");
}
