//! Round lifecycle state machine.
//!
//! `RoundController` owns everything a round needs: the catalog, the
//! current deck and tile handles, the 2-slot selection, the pending
//! evaluation deadline, and the session bookkeeping (won pairs, round
//! history).
//!
//! ## Control Flow
//!
//! `play` deals the first round. The host reports user activations via
//! `on_tile_clicked` and drives the clock by calling `poll` from its
//! event loop. When the second card of a selection is revealed, the
//! controller arms a deadline `REVEAL_DELAY` in the future; the first
//! `poll` past that deadline evaluates the pair. A match moves the pair
//! into the won list; either way the board is torn down and redealt.
//!
//! Nothing here blocks and nothing is fallible: a click index that does
//! not refer to a live card is a logged no-op.

use std::time::{Duration, Instant};

use im::Vector;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardCatalog, CardInstance};
use crate::core::GameRng;
use crate::surface::{ImageId, RenderSurface, TileId};

use super::deck::{build_deck, Deck};

/// Delay between the second reveal and the match check.
///
/// Exists purely so the player sees both faces before any reset.
pub const REVEAL_DELAY: Duration = Duration::from_millis(900);

/// Where the controller is within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// No board dealt.
    Idle,
    /// Board dealt, fewer than two cards selected.
    Selecting,
    /// Two cards selected, evaluation deadline armed.
    Evaluating,
}

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The selected pair matched.
    Won,
    /// The selected pair did not match; board redealt.
    Retry,
}

/// One completed round in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number.
    pub round: u32,
    pub outcome: RoundOutcome,
}

/// A matched pair, detached from its tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WonPair {
    pub first: CardInstance,
    pub second: CardInstance,
}

/// One entry in the current selection: the deck slot plus the image
/// handle its reveal produced.
#[derive(Clone, Copy, Debug)]
struct Selected {
    index: usize,
    image: ImageId,
}

/// The round lifecycle state machine.
///
/// ## Example
///
/// ```
/// use std::time::Instant;
/// use match_pairs::round::GameBuilder;
/// use match_pairs::surface::RecordingSurface;
///
/// let mut surface = RecordingSurface::new();
/// let mut game = GameBuilder::new().build(42);
///
/// game.play(&mut surface);
/// assert_eq!(surface.live_tiles(), 4); // starter catalog: 2 pairs
///
/// let now = Instant::now();
/// game.on_tile_clicked(0, now, &mut surface);
/// assert_eq!(game.selection_len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct RoundController {
    catalog: CardCatalog,
    rng: GameRng,
    reveal_delay: Duration,

    // Per-round state, replaced wholesale on reset
    deck: Deck,
    tiles: Vec<TileId>,
    selection: SmallVec<[Selected; 2]>,
    eval_due: Option<Instant>,
    phase: RoundPhase,

    // Session state, survives resets
    round_number: u32,
    won_pairs: Vec<WonPair>,
    history: Vector<RoundRecord>,
}

impl RoundController {
    /// Entry point: deal the first round once the surface is ready.
    pub fn play(&mut self, surface: &mut dyn RenderSurface) {
        info!("starting match game with {} card pairs", self.catalog.len());
        self.start_round(surface);
    }

    /// Build, shuffle, and deal a fresh deck.
    ///
    /// One tile is created per card instance, in deck order; the tile's
    /// positional index is what the host reports back on activation.
    pub fn start_round(&mut self, surface: &mut dyn RenderSurface) {
        let mut deck = build_deck(&self.catalog);
        self.rng.shuffle(&mut deck);

        self.tiles = (0..deck.len()).map(|i| surface.create_tile(i)).collect();
        self.deck = deck;
        self.selection.clear();
        self.eval_due = None;
        self.phase = RoundPhase::Selecting;
        self.round_number += 1;

        debug!(
            "round {} dealt: {} tiles",
            self.round_number,
            self.tiles.len()
        );
    }

    /// Handle a tile activation reported by the surface.
    ///
    /// No-ops: a click while an evaluation is pending (no selection slot
    /// is available), an index that refers to no live card, and a click
    /// on an already-revealed card. Otherwise the card is revealed, its
    /// image attached, and the selection extended; the second selection
    /// arms the evaluation deadline at `now + reveal_delay`.
    pub fn on_tile_clicked(&mut self, index: usize, now: Instant, surface: &mut dyn RenderSurface) {
        if self.eval_due.is_some() {
            debug!("click on tile {} ignored: evaluation pending", index);
            return;
        }
        if self.phase != RoundPhase::Selecting {
            debug!("click on tile {} ignored: no round in progress", index);
            return;
        }
        let Some(card) = self.deck.get_mut(index) else {
            // The surface should only report indices for tiles it was
            // asked to create; tolerate a stray one anyway.
            warn!("click on unknown tile index {} ignored", index);
            return;
        };
        if card.revealed {
            debug!("click on tile {} ignored: already revealed", index);
            return;
        }

        card.revealed = true;
        let image = surface.reveal_on_tile(self.tiles[index], &card.image);
        debug!("revealed {:?} ({}) on tile {}", card.card_id, card.name, index);

        self.selection.push(Selected { index, image });

        if self.selection.len() == 2 {
            self.eval_due = Some(now + self.reveal_delay);
            self.phase = RoundPhase::Evaluating;
        }
    }

    /// Fire the pending evaluation if its deadline has passed.
    ///
    /// Returns the round outcome when an evaluation fired, `None`
    /// otherwise. The deadline fires exactly once per completed
    /// selection.
    pub fn poll(&mut self, now: Instant, surface: &mut dyn RenderSurface) -> Option<RoundOutcome> {
        let due = self.eval_due?;
        if now < due {
            return None;
        }
        self.eval_due = None;
        Some(self.evaluate(surface))
    }

    /// Compare the two selected cards and resolve the round.
    fn evaluate(&mut self, surface: &mut dyn RenderSurface) -> RoundOutcome {
        debug_assert_eq!(self.selection.len(), 2);
        let (first, second) = (self.selection[0], self.selection[1]);

        if self.deck[first.index].matches(&self.deck[second.index]) {
            self.award_win(first, second, surface);
            RoundOutcome::Won
        } else {
            self.retry(surface);
            RoundOutcome::Retry
        }
    }

    /// A pair matched: detach its images, bank it, redeal.
    ///
    /// The whole board restarts after a win rather than continuing with
    /// the remaining pairs; the won pair carries over in `won_pairs`.
    fn award_win(&mut self, first: Selected, second: Selected, surface: &mut dyn RenderSurface) {
        info!("round {}: match", self.round_number);

        surface.remove_image(first.image);
        surface.remove_image(second.image);

        self.won_pairs.push(WonPair {
            first: self.deck[first.index].clone(),
            second: self.deck[second.index].clone(),
        });

        self.record(RoundOutcome::Won);
        self.reset(surface);
        self.start_round(surface);
    }

    /// No match: clear the board and redeal.
    fn retry(&mut self, surface: &mut dyn RenderSurface) {
        info!("round {}: no match, try again", self.round_number);

        self.record(RoundOutcome::Retry);
        self.reset(surface);
        self.start_round(surface);
    }

    /// Tear down the current round.
    ///
    /// Clears the selection and the pending deadline and removes every
    /// tile from the surface. Won pairs and history survive. Safe to
    /// call repeatedly.
    pub fn reset(&mut self, surface: &mut dyn RenderSurface) {
        self.selection.clear();
        self.eval_due = None;
        self.deck.clear();
        self.tiles.clear();
        self.phase = RoundPhase::Idle;
        surface.remove_all_tiles();
    }

    fn record(&mut self, outcome: RoundOutcome) {
        self.history.push_back(RoundRecord {
            round: self.round_number,
            outcome,
        });
    }

    // === Accessors ===

    /// Current phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The current deck, in tile order.
    #[must_use]
    pub fn deck(&self) -> &[CardInstance] {
        &self.deck
    }

    /// Number of cards currently selected (0, 1, or 2).
    #[must_use]
    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Whether an evaluation deadline is armed.
    #[must_use]
    pub fn evaluation_pending(&self) -> bool {
        self.eval_due.is_some()
    }

    /// Pairs matched so far this session.
    #[must_use]
    pub fn won_pairs(&self) -> &[WonPair] {
        &self.won_pairs
    }

    /// Completed rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    /// Number of completed rounds.
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    /// Number of rounds that ended in a match.
    #[must_use]
    pub fn wins(&self) -> usize {
        self.history
            .iter()
            .filter(|r| r.outcome == RoundOutcome::Won)
            .count()
    }

    /// 1-based number of the round in progress (0 before `play`).
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }
}

/// Builder for a configured [`RoundController`].
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use match_pairs::cards::CardCatalog;
/// use match_pairs::round::GameBuilder;
///
/// let mut catalog = CardCatalog::new();
/// catalog.register_auto("apple", "/img/apple.png");
///
/// let game = GameBuilder::new()
///     .catalog(catalog)
///     .reveal_delay(Duration::from_millis(100))
///     .build(42);
///
/// assert_eq!(game.round_number(), 0);
/// ```
pub struct GameBuilder {
    catalog: CardCatalog,
    reveal_delay: Duration,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            catalog: CardCatalog::starter(),
            reveal_delay: REVEAL_DELAY,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the starter catalog.
    ///
    /// The catalog must be non-empty by the time the game is dealt.
    pub fn catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Override the delay between the second reveal and evaluation.
    pub fn reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Build the controller with a shuffle seed.
    pub fn build(self, seed: u64) -> RoundController {
        assert!(!self.catalog.is_empty(), "catalog must not be empty");

        RoundController {
            catalog: self.catalog,
            rng: GameRng::new(seed),
            reveal_delay: self.reveal_delay,
            deck: Vec::new(),
            tiles: Vec::new(),
            selection: SmallVec::new(),
            eval_due: None,
            phase: RoundPhase::Idle,
            round_number: 0,
            won_pairs: Vec::new(),
            history: Vector::new(),
        }
    }
}
