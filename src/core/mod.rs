//! Core primitives shared across the engine.
//!
//! Currently just the deterministic RNG; the rest of the engine is built
//! from the `cards`, `surface`, and `round` modules.

pub mod rng;

pub use rng::{GameRng, GameRngState};
