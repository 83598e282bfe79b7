//! rfui-tiles — folder and document tiles on top of `rfui-shape`.
//!
//! Both tiles are presentation compositions over the same shape engine: they
//! pick a cut size, corner variant and aspect ratio, route interaction
//! events into interaction flags, and hand the host a [`tiles::TileFrame`]
//! with everything needed to mask, stroke and lay out the panel.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use rfui_tiles::prelude::*;
//!
//! let observer = DimensionObserver::new();
//! let mut folder = FolderTile::new("SECTOR_16")
//!     .subtitle("Special Project")
//!     .count(5)
//!     .on_click(|| println!("open"));
//! folder.mount(&observer, SurfaceId::new(1))?;
//!
//! // Each event-loop turn: host records layout sizes, flushes, then reads
//! // the frame when folder.frame().revision changed.
//! let frame = folder.frame();
//! // frame.paths.clip.to_clip_path(), frame.paths.stroke.to_svg_points(), …
//! ```

pub mod event;
pub mod style;
pub mod tiles;

/// Everything a host integration needs in one import.
pub mod prelude {
    pub use crate::event::{EventResult, TileEvent};
    pub use crate::style::{Color, Cursor, TileStyle, palette, tile_style};
    pub use crate::tiles::{
        DocumentContent, DocumentTile, FolderContent, FolderTile, IndicatorBar, MountingHole,
        Side, TileFrame,
    };

    // Re-export the shape-engine types hosts touch directly.
    pub use rfui_shape::controller::InteractionFlags;
    pub use rfui_shape::geom::{Edges, Size, Vec2};
    pub use rfui_shape::observe::{DimensionObserver, ObserveError, SurfaceId};
    pub use rfui_shape::shape::CornerVariant;
}
