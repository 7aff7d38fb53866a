//! Round lifecycle tests.
//!
//! These drive the full public API against the recording surface:
//! dealing, revealing, delayed evaluation, win/retry transitions, and
//! the defensive no-op paths.

use std::time::{Duration, Instant};

use match_pairs::cards::CardCatalog;
use match_pairs::round::{GameBuilder, RoundOutcome, RoundPhase, REVEAL_DELAY};
use match_pairs::surface::{RecordingSurface, SurfaceEvent};

fn two_pair_catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();
    catalog.register_auto("apple", "/img/apple.png");
    catalog.register_auto("orange", "/img/orange.png");
    catalog
}

/// Find two deck indices whose cards share a name (or differ, when
/// `matching` is false). The deck is shuffled, so tests locate their
/// clicks instead of hardcoding positions.
fn find_pair(game: &match_pairs::RoundController, matching: bool) -> (usize, usize) {
    let deck = game.deck();
    for i in 0..deck.len() {
        for j in (i + 1)..deck.len() {
            if (deck[i].name == deck[j].name) == matching {
                return (i, j);
            }
        }
    }
    panic!("no suitable pair in deck");
}

#[test]
fn match_lifecycle_awards_win_and_redeals() {
    let mut surface = RecordingSurface::new();
    let mut game = GameBuilder::new().catalog(two_pair_catalog()).build(42);
    game.play(&mut surface);

    let (a, b) = find_pair(&game, true);
    let now = Instant::now();
    game.on_tile_clicked(a, now, &mut surface);
    game.on_tile_clicked(b, now, &mut surface);

    let outcome = game.poll(now + REVEAL_DELAY, &mut surface);

    assert_eq!(outcome, Some(RoundOutcome::Won));
    assert_eq!(game.won_pairs().len(), 1);
    assert_eq!(game.won_pairs()[0].first.name, game.won_pairs()[0].second.name);

    // Both winning images detached, board cleared, fresh board dealt
    assert_eq!(surface.images_removed(), 2);
    assert_eq!(surface.clear_count(), 1);
    assert_eq!(surface.live_tiles(), 4);
    assert_eq!(game.round_number(), 2);
    assert_eq!(game.phase(), RoundPhase::Selecting);
    assert!(game.deck().iter().all(|c| !c.revealed));
}

#[test]
fn mismatch_lifecycle_retries_without_banking() {
    let mut surface = RecordingSurface::new();
    let mut game = GameBuilder::new().catalog(two_pair_catalog()).build(42);
    game.play(&mut surface);

    let (a, b) = find_pair(&game, false);
    let now = Instant::now();
    game.on_tile_clicked(a, now, &mut surface);
    game.on_tile_clicked(b, now, &mut surface);

    let outcome = game.poll(now + REVEAL_DELAY, &mut surface);

    assert_eq!(outcome, Some(RoundOutcome::Retry));
    assert!(game.won_pairs().is_empty());
    assert_eq!(game.wins(), 0);
    assert_eq!(game.rounds_played(), 1);

    // No individual image removal on retry: the board clear takes it all
    assert_eq!(surface.images_removed(), 0);
    assert_eq!(surface.clear_count(), 1);
    assert_eq!(surface.live_tiles(), 4);
    assert_eq!(game.round_number(), 2);
}

#[test]
fn stray_clicks_during_delay_window_are_noops() {
    let mut surface = RecordingSurface::new();
    let mut game = GameBuilder::new().catalog(two_pair_catalog()).build(42);
    game.play(&mut surface);

    let (a, b) = find_pair(&game, false);
    let now = Instant::now();
    game.on_tile_clicked(a, now, &mut surface);
    game.on_tile_clicked(b, now, &mut surface);

    let reveals_before = surface
        .events()
        .iter()
        .filter(|e| matches!(e, SurfaceEvent::ImageRevealed { .. }))
        .count();

    // A third click while the deadline is armed must not grow the
    // selection or reach the surface.
    let other = (0..game.deck().len()).find(|&i| i != a && i != b).unwrap();
    game.on_tile_clicked(other, now, &mut surface);
    game.on_tile_clicked(a, now, &mut surface);

    assert_eq!(game.selection_len(), 2);
    let reveals_after = surface
        .events()
        .iter()
        .filter(|e| matches!(e, SurfaceEvent::ImageRevealed { .. }))
        .count();
    assert_eq!(reveals_before, reveals_after);

    // The armed evaluation still resolves normally
    assert!(game.poll(now + REVEAL_DELAY, &mut surface).is_some());
}

#[test]
fn session_accumulates_across_rounds() {
    let mut surface = RecordingSurface::new();
    let mut game = GameBuilder::new().catalog(two_pair_catalog()).build(9);
    game.play(&mut surface);

    let mut now = Instant::now();
    for _ in 0..3 {
        let (a, b) = find_pair(&game, true);
        game.on_tile_clicked(a, now, &mut surface);
        game.on_tile_clicked(b, now, &mut surface);
        now += REVEAL_DELAY;
        assert_eq!(game.poll(now, &mut surface), Some(RoundOutcome::Won));
    }

    assert_eq!(game.won_pairs().len(), 3);
    assert_eq!(game.wins(), 3);
    assert_eq!(game.rounds_played(), 3);
    assert_eq!(game.round_number(), 4);

    // History is ordered and 1-based
    let rounds: Vec<_> = game.history().iter().map(|r| r.round).collect();
    assert_eq!(rounds, vec![1, 2, 3]);
}

#[test]
fn tiles_are_created_in_deck_order() {
    let mut surface = RecordingSurface::new();
    let mut game = GameBuilder::new().build(42);
    game.play(&mut surface);

    let indices: Vec<_> = surface
        .events()
        .iter()
        .filter_map(|e| match e {
            SurfaceEvent::TileCreated { index, .. } => Some(*index),
            _ => None,
        })
        .collect();

    assert_eq!(indices, vec![0, 1, 2, 3]);
}

#[test]
fn custom_reveal_delay_is_honored() {
    let delay = Duration::from_millis(100);
    let mut surface = RecordingSurface::new();
    let mut game = GameBuilder::new()
        .catalog(two_pair_catalog())
        .reveal_delay(delay)
        .build(42);
    game.play(&mut surface);

    let (a, b) = find_pair(&game, true);
    let now = Instant::now();
    game.on_tile_clicked(a, now, &mut surface);
    game.on_tile_clicked(b, now, &mut surface);

    assert_eq!(game.poll(now + delay - Duration::from_millis(1), &mut surface), None);
    assert!(game.poll(now + delay, &mut surface).is_some());
}

#[test]
fn revealed_image_source_matches_card() {
    let mut surface = RecordingSurface::new();
    let mut game = GameBuilder::new().catalog(two_pair_catalog()).build(42);
    game.play(&mut surface);

    let now = Instant::now();
    game.on_tile_clicked(0, now, &mut surface);

    let expected = game.deck()[0].image.clone();
    let source = surface.events().iter().find_map(|e| match e {
        SurfaceEvent::ImageRevealed { source, .. } => Some(source.clone()),
        _ => None,
    });

    assert_eq!(source.as_deref(), Some(expected.as_str()));
}
