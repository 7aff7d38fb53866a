//! Round lifecycle: deck construction and the controller state machine.
//!
//! ## Key Types
//!
//! - `build_deck` / `Deck`: duplicated, independent card instances
//! - `RoundController`: deal, reveal, delayed match evaluation, win/retry
//! - `GameBuilder`: configured entry point (catalog, delay, seed)

pub mod controller;
pub mod deck;

pub use controller::{
    GameBuilder, RoundController, RoundOutcome, RoundPhase, RoundRecord, WonPair, REVEAL_DELAY,
};
pub use deck::{build_deck, Deck};
