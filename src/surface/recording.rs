//! Recording surface - headless `RenderSurface` implementation.
//!
//! Allocates handles and records every operation as a [`SurfaceEvent`].
//! The integration tests drive the whole round lifecycle against it, and
//! it doubles as a reference for hosts writing a real surface.

use serde::{Deserialize, Serialize};

use super::{ImageId, RenderSurface, TileId};

/// One recorded surface operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceEvent {
    /// A tile was created for a deck position.
    TileCreated { index: usize, tile: TileId },
    /// An image was attached to a tile.
    ImageRevealed {
        tile: TileId,
        image: ImageId,
        source: String,
    },
    /// An image was detached.
    ImageRemoved { image: ImageId },
    /// The whole board was cleared.
    BoardCleared,
}

/// Headless recording implementation of [`RenderSurface`].
///
/// ## Example
///
/// ```
/// use match_pairs::surface::{RecordingSurface, RenderSurface};
///
/// let mut surface = RecordingSurface::new();
/// let tile = surface.create_tile(0);
/// surface.reveal_on_tile(tile, "/img/apple.png");
///
/// assert_eq!(surface.live_tiles(), 1);
/// assert_eq!(surface.reveal_count(tile), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
    live_tiles: Vec<TileId>,
    next_tile: u32,
    next_image: u32,
}

impl RecordingSurface {
    /// Create a new empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, in order.
    #[must_use]
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Number of tiles currently on the board.
    #[must_use]
    pub fn live_tiles(&self) -> usize {
        self.live_tiles.len()
    }

    /// Total tiles ever created.
    #[must_use]
    pub fn tiles_created(&self) -> usize {
        self.next_tile as usize
    }

    /// How many times an image was revealed on `tile`.
    #[must_use]
    pub fn reveal_count(&self, tile: TileId) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::ImageRevealed { tile: t, .. } if *t == tile))
            .count()
    }

    /// How many times the board was cleared.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::BoardCleared))
            .count()
    }

    /// How many images were individually removed.
    #[must_use]
    pub fn images_removed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::ImageRemoved { .. }))
            .count()
    }
}

impl RenderSurface for RecordingSurface {
    fn create_tile(&mut self, index: usize) -> TileId {
        let tile = TileId(self.next_tile);
        self.next_tile += 1;
        self.live_tiles.push(tile);
        self.events.push(SurfaceEvent::TileCreated { index, tile });
        tile
    }

    fn reveal_on_tile(&mut self, tile: TileId, image: &str) -> ImageId {
        let id = ImageId(self.next_image);
        self.next_image += 1;
        self.events.push(SurfaceEvent::ImageRevealed {
            tile,
            image: id,
            source: image.to_string(),
        });
        id
    }

    fn remove_image(&mut self, image: ImageId) {
        self.events.push(SurfaceEvent::ImageRemoved { image });
    }

    fn remove_all_tiles(&mut self) {
        self.live_tiles.clear();
        self.events.push(SurfaceEvent::BoardCleared);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tile_allocates_handles() {
        let mut surface = RecordingSurface::new();

        let t0 = surface.create_tile(0);
        let t1 = surface.create_tile(1);

        assert_ne!(t0, t1);
        assert_eq!(surface.live_tiles(), 2);
        assert_eq!(surface.tiles_created(), 2);
    }

    #[test]
    fn test_reveal_and_remove() {
        let mut surface = RecordingSurface::new();

        let tile = surface.create_tile(0);
        let image = surface.reveal_on_tile(tile, "/img/apple.png");
        surface.remove_image(image);

        assert_eq!(surface.reveal_count(tile), 1);
        assert_eq!(surface.images_removed(), 1);
    }

    #[test]
    fn test_remove_all_tiles() {
        let mut surface = RecordingSurface::new();

        surface.create_tile(0);
        surface.create_tile(1);
        surface.remove_all_tiles();

        assert_eq!(surface.live_tiles(), 0);
        assert_eq!(surface.clear_count(), 1);
        // Handles keep advancing across clears
        let t = surface.create_tile(0);
        assert_eq!(t, TileId(2));
    }

    #[test]
    fn test_events_in_order() {
        let mut surface = RecordingSurface::new();

        let tile = surface.create_tile(3);
        surface.reveal_on_tile(tile, "x");
        surface.remove_all_tiles();

        assert!(matches!(
            surface.events()[0],
            SurfaceEvent::TileCreated { index: 3, .. }
        ));
        assert!(matches!(
            surface.events()[1],
            SurfaceEvent::ImageRevealed { .. }
        ));
        assert!(matches!(surface.events()[2], SurfaceEvent::BoardCleared));
    }
}
