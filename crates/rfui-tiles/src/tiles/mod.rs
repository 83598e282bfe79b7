mod document;
mod folder;

pub use document::{DocumentContent, DocumentTile};
pub use folder::{FolderContent, FolderTile};

use rfui_shape::geom::Edges;
use rfui_shape::path::RenderPaths;

use crate::style::{Color, TileStyle};

/// Tiles never shrink below this width, whatever the host column offers.
pub const MIN_TILE_WIDTH: f32 = 120.0;

/// Left/right, for accents anchored relative to the cut corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Bottom accent bar shown while a tile is selected. Insets keep it clear of
/// the cut corner; `fade` names the end that fades to transparent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorBar {
    pub inset_left: f32,
    pub inset_right: f32,
    pub height: f32,
    pub fade: Side,
}

/// Small riveted-hole accent in the corner opposite the cut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountingHole {
    pub diameter: f32,
    pub top: f32,
    /// Horizontal inset from the `side` edge.
    pub inset: f32,
    pub side: Side,
    pub fill: Color,
    /// 1px ring around the hole.
    pub ring: Color,
}

/// Per-frame render readout for one tile: geometry paths, resolved style,
/// and the layout accents the renderer draws around the content.
#[derive(Debug, Clone, PartialEq)]
pub struct TileFrame {
    pub paths: RenderPaths,
    pub style: TileStyle,
    /// Content padding keeping text clear of the cut/fold region.
    pub content_insets: Edges,
    pub indicator: Option<IndicatorBar>,
    pub mounting_hole: MountingHole,
    /// Geometry revision, for skipping redundant re-renders.
    pub revision: u64,
}
