//! Word bank: the static (general, specific) pairs a game draws from.
//!
//! ## Key Types
//!
//! - `WordPair`: General category word plus the specific word
//! - `Language`: Which list is sampled
//! - `WordBank`: Per-language lists, built in or loaded from JSON

pub mod bank;
pub mod pair;

pub use bank::WordBank;
pub use pair::{Language, WordPair};
