//! # match-pairs
//!
//! Round lifecycle engine for a memory-matching card game.
//!
//! A board of face-down cards is dealt from a catalog of unique card
//! definitions (each appearing exactly twice). The player reveals cards
//! one at a time; once two are revealed, the pair is evaluated after a
//! fixed delay and the round either awards a win or tears the board down
//! and redeals.
//!
//! ## Design Principles
//!
//! 1. **Rendering-Agnostic**: the engine never touches a display. All
//!    visual effects go through the [`RenderSurface`] trait; hosts wire
//!    it to a DOM, a terminal, or the bundled [`RecordingSurface`].
//!
//! 2. **Event-Driven, Single-Threaded**: the host loop feeds clicks and
//!    clock readings in; nothing blocks. The reveal delay is an explicit
//!    deadline checked by [`RoundController::poll`], not a sleep.
//!
//! 3. **Deterministic**: shuffles come from a seeded [`GameRng`], so a
//!    round can be replayed exactly.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG
//! - `cards`: card definitions, instances, and the catalog
//! - `surface`: the rendering seam and a recording reference surface
//! - `round`: deck construction and the round lifecycle state machine

pub mod cards;
pub mod core;
pub mod round;
pub mod surface;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState};

pub use crate::cards::{CardCatalog, CardDefinition, CardId, CardInstance};

pub use crate::surface::{ImageId, RecordingSurface, RenderSurface, SurfaceEvent, TileId};

pub use crate::round::{
    build_deck, Deck, GameBuilder, RoundController, RoundOutcome, RoundPhase, RoundRecord,
    WonPair, REVEAL_DELAY,
};
