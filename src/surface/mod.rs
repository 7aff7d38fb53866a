//! Rendering seam: the `RenderSurface` trait and its opaque handles.
//!
//! The engine never creates visual nodes itself. Hosts implement
//! [`RenderSurface`] against whatever display they have (DOM, terminal,
//! canvas) and feed user activations back as tile indices. The bundled
//! [`RecordingSurface`] is a headless implementation used by the tests
//! and as a reference for integrators.

pub mod recording;

use serde::{Deserialize, Serialize};

pub use recording::{RecordingSurface, SurfaceEvent};

/// Opaque handle to a visual tile slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Opaque handle to an image attached to a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(pub u32);

impl ImageId {
    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Rendering surface trait.
///
/// Hosts implement this to materialize the board. The controller calls
/// these methods during a round; the host reports user activations back
/// via `RoundController::on_tile_clicked` with the positional index the
/// tile was created with.
///
/// ## Implementation Notes
///
/// - `create_tile`: the index is the tile's position in the current deck;
///   the host must deliver it unchanged on activation
/// - `reveal_on_tile`: called at most once per tile per round
/// - `remove_all_tiles`: must also drop any images still attached
/// - Handles are only meaningful until the next `remove_all_tiles`
pub trait RenderSurface {
    /// Create a visual slot for the deck position `index`.
    fn create_tile(&mut self, index: usize) -> TileId;

    /// Attach a visual representation of `image` to `tile`.
    fn reveal_on_tile(&mut self, tile: TileId, image: &str) -> ImageId;

    /// Detach a previously attached image.
    fn remove_image(&mut self, image: ImageId);

    /// Clear the entire visual board.
    fn remove_all_tiles(&mut self);
}
