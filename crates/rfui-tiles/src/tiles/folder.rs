use rfui_shape::controller::{InteractionFlags, PanelShapeController};
use rfui_shape::geom::{Edges, Size};
use rfui_shape::observe::{DimensionObserver, ObserveError, SurfaceId};
use rfui_shape::shape::{CornerVariant, PanelProfile, ShapeParams};

use crate::event::{EventResult, TileEvent};
use crate::style::{palette, spacing, tile_style};
use crate::tiles::{IndicatorBar, MIN_TILE_WIDTH, MountingHole, Side, TileFrame};

const FALLBACK: (f32, f32) = (200.0, 120.0);

/// Renderer-facing text content of a [`FolderTile`].
#[derive(Debug, Clone, PartialEq)]
pub struct FolderContent<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub count_label: Option<String>,
}

/// A single-layer folder tile with a cut-corner silhouette, square aspect.
///
/// # Example
/// ```rust,ignore
/// let mut folder = FolderTile::new("SECTOR_16")
///     .subtitle("Special Project")
///     .count(5)
///     .on_click(|| println!("open sector 16"));
/// folder.mount(&observer, SurfaceId::new(1))?;
/// ```
pub struct FolderTile {
    title: String,
    subtitle: Option<String>,
    count: Option<u32>,
    corner: CornerVariant,
    cut: f32,
    selected: bool,
    disabled: bool,
    hovered: bool,
    on_click: Option<Box<dyn FnMut()>>,
    controller: Option<PanelShapeController>,
}

impl FolderTile {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            count: None,
            corner: CornerVariant::TopLeft,
            cut: 28.0,
            selected: false,
            disabled: false,
            hovered: false,
            on_click: None,
            controller: None,
        }
    }

    pub fn subtitle(mut self, v: impl Into<String>) -> Self { self.subtitle = Some(v.into()); self }
    pub fn count(mut self, v: u32) -> Self { self.count = Some(v); self }
    pub fn cut_corner(mut self, v: CornerVariant) -> Self { self.corner = v; self }
    pub fn cut_size(mut self, v: f32) -> Self { self.cut = v; self }
    pub fn selected(mut self, v: bool) -> Self { self.selected = v; self }
    pub fn disabled(mut self, v: bool) -> Self { self.disabled = v; self }
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Begins observing `surface`. Geometry is valid immediately, from the
    /// fallback size, and tracks the surface once layout reports in.
    pub fn mount(&mut self, observer: &DimensionObserver, surface: SurfaceId) -> Result<(), ObserveError> {
        let controller = PanelShapeController::mount(observer, surface, self.params())?;
        controller.set_flags(self.flags());
        self.controller = Some(controller);
        log::debug!("folder tile {:?} mounted on {surface}", self.title);
        Ok(())
    }

    /// Releases the surface subscription. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(mut controller) = self.controller.take() {
            controller.unmount();
        }
    }

    // ── runtime state ─────────────────────────────────────────────────────

    pub fn set_selected(&mut self, v: bool) {
        self.selected = v;
        self.sync_flags();
    }

    pub fn set_disabled(&mut self, v: bool) {
        self.disabled = v;
        self.sync_flags();
    }

    /// Changes the cut corner; geometry recomputes from the current
    /// dimensions without waiting for a new observation.
    pub fn set_cut_corner(&mut self, v: CornerVariant) {
        self.corner = v;
        if let Some(controller) = &self.controller {
            controller.set_params(self.params());
        }
    }

    pub fn on_event(&mut self, event: &TileEvent) -> EventResult {
        match event {
            TileEvent::Click => {
                if self.disabled {
                    return EventResult::Ignored;
                }
                if let Some(f) = &mut self.on_click {
                    f();
                }
                EventResult::Consumed
            }
            TileEvent::HoverEnter => {
                if self.disabled {
                    return EventResult::Ignored;
                }
                self.hovered = true;
                self.sync_flags();
                EventResult::Consumed
            }
            TileEvent::HoverLeave => {
                self.hovered = false;
                self.sync_flags();
                EventResult::Consumed
            }
        }
    }

    // ── layout ────────────────────────────────────────────────────────────

    /// Square aspect, applied before measurement.
    pub fn preferred_size(&self, available_width: f32) -> Size {
        let w = available_width.max(MIN_TILE_WIDTH);
        Size::new(w, w)
    }

    /// Content padding; the cut side gets extra room so text clears the
    /// diagonal.
    pub fn content_insets(&self) -> Edges {
        let base = Edges::all(spacing::LG);
        match self.corner {
            CornerVariant::TopLeft => base.with_left(self.cut + spacing::SM),
            CornerVariant::TopRight => base.with_right(self.cut + spacing::SM),
        }
    }

    // ── content ───────────────────────────────────────────────────────────

    /// Text content for the renderer. The count badge is zero-padded to two
    /// digits.
    pub fn content(&self) -> FolderContent<'_> {
        FolderContent {
            title: &self.title,
            subtitle: self.subtitle.as_deref(),
            count_label: self.count.map(|n| format!("{n:02}")),
        }
    }

    // ── render readout ────────────────────────────────────────────────────

    pub fn frame(&self) -> TileFrame {
        let (shape, revision) = match &self.controller {
            Some(controller) => (controller.shape(), controller.revision()),
            None => {
                let params = self.params();
                (params.compute(params.fallback), 0)
            }
        };

        TileFrame {
            paths: shape.paths(),
            style: tile_style(self.flags(), palette::FOLDER_BG, self.on_click.is_some()),
            content_insets: self.content_insets(),
            indicator: self.selected.then(|| match self.corner {
                CornerVariant::TopLeft => IndicatorBar {
                    inset_left: self.cut,
                    inset_right: 0.0,
                    height: 2.0,
                    fade: Side::Left,
                },
                CornerVariant::TopRight => IndicatorBar {
                    inset_left: 0.0,
                    inset_right: self.cut,
                    height: 2.0,
                    fade: Side::Right,
                },
            }),
            mounting_hole: MountingHole {
                diameter: 8.0,
                top: 10.0,
                inset: 14.0,
                side: match self.corner {
                    CornerVariant::TopLeft => Side::Right,
                    CornerVariant::TopRight => Side::Left,
                },
                fill: palette::HOLE_BG,
                ring: palette::DIM,
            },
            revision,
        }
    }

    fn params(&self) -> ShapeParams {
        ShapeParams {
            corner: self.corner,
            cut: self.cut,
            profile: PanelProfile::CutCorner,
            fallback: Size::new(FALLBACK.0, FALLBACK.1),
        }
    }

    fn flags(&self) -> InteractionFlags {
        InteractionFlags {
            selected: self.selected,
            hovered: self.hovered,
            disabled: self.disabled,
        }
    }

    fn sync_flags(&self) {
        if let Some(controller) = &self.controller {
            controller.set_flags(self.flags());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Cursor;
    use rfui_shape::geom::Vec2;
    use std::cell::Cell;
    use std::rc::Rc;

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn preferred_size_is_square_with_min_width() {
        let tile = FolderTile::new("A");
        assert_eq!(tile.preferred_size(200.0), Size::new(200.0, 200.0));
        assert_eq!(tile.preferred_size(40.0), Size::new(120.0, 120.0));
    }

    #[test]
    fn content_insets_clear_the_cut_side() {
        let left = FolderTile::new("A");
        assert_eq!(left.content_insets().left, 36.0); // 28 + 8
        assert_eq!(left.content_insets().right, 16.0);

        let right = FolderTile::new("A").cut_corner(CornerVariant::TopRight).cut_size(40.0);
        assert_eq!(right.content_insets().right, 48.0);
        assert_eq!(right.content_insets().left, 16.0);
    }

    #[test]
    fn count_label_is_zero_padded() {
        assert_eq!(FolderTile::new("A").count(5).content().count_label, Some("05".into()));
        assert_eq!(FolderTile::new("A").count(42).content().count_label, Some("42".into()));
        assert_eq!(FolderTile::new("A").content().count_label, None);
    }

    // ── frame ─────────────────────────────────────────────────────────────

    #[test]
    fn unmounted_frame_uses_fallback_dimensions() {
        let tile = FolderTile::new("A");
        let frame = tile.frame();
        assert_eq!(frame.paths.clip.points()[0], Vec2::new(28.0, 0.0));
        assert_eq!(frame.paths.clip.points()[2], Vec2::new(200.0, 120.0));
        assert!(frame.paths.crease.is_none());
        assert_eq!(frame.revision, 0);
    }

    #[test]
    fn frame_tracks_observed_size_after_mount() {
        let observer = DimensionObserver::new();
        let mut tile = FolderTile::new("A");
        tile.mount(&observer, SurfaceId::new(1)).unwrap();

        observer.record(SurfaceId::new(1), Size::new(240.0, 240.0));
        observer.flush();

        let frame = tile.frame();
        assert_eq!(frame.paths.clip.points()[2], Vec2::new(240.0, 240.0));
        assert!(frame.revision > 0);
        tile.unmount();
    }

    #[test]
    fn indicator_present_only_while_selected() {
        let mut tile = FolderTile::new("A");
        assert!(tile.frame().indicator.is_none());

        tile.set_selected(true);
        let bar = tile.frame().indicator.unwrap();
        assert_eq!(bar.inset_left, 28.0);
        assert_eq!(bar.fade, Side::Left);
    }

    #[test]
    fn mounting_hole_sits_opposite_the_cut() {
        let tile = FolderTile::new("A").cut_corner(CornerVariant::TopRight);
        let hole = tile.frame().mounting_hole;
        assert_eq!(hole.side, Side::Left);
        assert_eq!(hole.fill, palette::HOLE_BG);
        assert_eq!(hole.ring, palette::DIM);
    }

    // ── events ────────────────────────────────────────────────────────────

    #[test]
    fn click_fires_callback_unless_disabled() {
        let clicks = Rc::new(Cell::new(0));
        let seen = Rc::clone(&clicks);
        let mut tile = FolderTile::new("A").on_click(move || seen.set(seen.get() + 1));

        assert!(tile.on_event(&TileEvent::Click).is_consumed());
        assert_eq!(clicks.get(), 1);

        tile.set_disabled(true);
        assert_eq!(tile.on_event(&TileEvent::Click), EventResult::Ignored);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn hover_round_trip_updates_style_and_flags() {
        let observer = DimensionObserver::new();
        let mut tile = FolderTile::new("A").on_click(|| {});
        tile.mount(&observer, SurfaceId::new(1)).unwrap();

        tile.on_event(&TileEvent::HoverEnter);
        assert_eq!(tile.frame().style.background, palette::HOVER_BG);

        tile.on_event(&TileEvent::HoverLeave);
        assert_eq!(tile.frame().style.background, palette::FOLDER_BG);
        tile.unmount();
    }

    #[test]
    fn disabled_tile_ignores_hover_and_shows_blocked_cursor() {
        let mut tile = FolderTile::new("A").disabled(true).on_click(|| {});
        assert_eq!(tile.on_event(&TileEvent::HoverEnter), EventResult::Ignored);
        assert_eq!(tile.frame().style.cursor, Cursor::NotAllowed);
        assert_eq!(tile.frame().style.opacity, 0.45);
    }

    #[test]
    fn unmount_twice_is_harmless() {
        let observer = DimensionObserver::new();
        let mut tile = FolderTile::new("A");
        tile.mount(&observer, SurfaceId::new(1)).unwrap();
        tile.unmount();
        tile.unmount();
        assert!(!observer.is_observed(SurfaceId::new(1)));
    }
}
