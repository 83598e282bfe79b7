//! rfui-shape — reactive cut-corner panel geometry.
//!
//! This crate owns the shape engine shared by the folder and document tiles:
//! content-box dimension observation, the pure silhouette function, and the
//! per-panel controller gluing the two together.
//!
//! ```rust,ignore
//! use rfui_shape::controller::PanelShapeController;
//! use rfui_shape::observe::{DimensionObserver, SurfaceId};
//! use rfui_shape::shape::ShapeParams;
//!
//! let observer = DimensionObserver::new();
//! let panel = PanelShapeController::mount(&observer, SurfaceId::new(1), ShapeParams::default())?;
//!
//! // Host layout reports sizes; one flush per event-loop turn:
//! observer.record(SurfaceId::new(1), Size::new(240.0, 240.0));
//! observer.flush();
//!
//! let paths = panel.shape().paths();
//! // paths.clip.to_clip_path()  → mask the panel content
//! // paths.stroke.to_svg_points() → draw the 1px border overlay
//! ```

pub mod controller;
pub mod geom;
pub mod logging;
pub mod observe;
pub mod path;
pub mod shape;
