//! Turn-order generation.
//!
//! - Sequential: seats in seating order. Used for assignment (everyone) and
//!   voting (active players), where the device is passed around the table.
//! - Shuffled: active seats in a fresh random order, used at the start of
//!   every clue round so a different player can lead.

use log::debug;

use crate::core::{GameState, Randomness, TurnOrder};

/// Identity order `[0, 1, .., player_count - 1]`.
#[must_use]
pub fn sequential(player_count: usize) -> TurnOrder {
    (0..player_count).collect()
}

/// Active seats in seating order.
#[must_use]
pub fn seating(state: &GameState) -> TurnOrder {
    state.active_indices()
}

/// Active seats, Fisher-Yates shuffled.
pub fn shuffled(state: &GameState, rng: &mut impl Randomness) -> TurnOrder {
    let mut order = state.active_indices();
    rng.shuffle(&mut order);
    debug!("shuffled clue order {:?}", order.as_slice());
    order
}
