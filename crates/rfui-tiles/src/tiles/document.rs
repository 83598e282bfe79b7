use rfui_shape::controller::{InteractionFlags, PanelShapeController};
use rfui_shape::geom::{Edges, Size};
use rfui_shape::observe::{DimensionObserver, ObserveError, SurfaceId};
use rfui_shape::shape::{CornerVariant, PanelProfile, ShapeParams};

use crate::event::{EventResult, TileEvent};
use crate::style::{palette, spacing, tile_style};
use crate::tiles::{IndicatorBar, MIN_TILE_WIDTH, MountingHole, Side, TileFrame};

const FALLBACK: (f32, f32) = (180.0, 120.0);
const DEFAULT_ICON: &str = "◫";

/// Renderer-facing text content of a [`DocumentTile`].
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentContent<'a> {
    pub title: &'a str,
    pub meta: Option<&'a str>,
    pub icon: &'a str,
    pub badge: Option<&'a str>,
}

/// A compact document / file tile with a folded-corner silhouette and a 2:3
/// aspect ratio. Intended as a file-picker tile — icon + title + optional
/// meta/badge, no body preview.
///
/// Unlike [`super::FolderTile`], the shape carries the interior crease
/// polyline, rendered at reduced opacity to suggest folded paper.
///
/// # Example
/// ```rust,ignore
/// let mut doc = DocumentTile::new("MISSION BRIEF")
///     .meta("2026-02-25")
///     .badge("PDF")
///     .on_click(|| println!("open brief"));
/// doc.mount(&observer, SurfaceId::new(2))?;
/// ```
pub struct DocumentTile {
    title: String,
    meta: Option<String>,
    icon: String,
    badge: Option<String>,
    corner: CornerVariant,
    fold: f32,
    selected: bool,
    disabled: bool,
    hovered: bool,
    on_click: Option<Box<dyn FnMut()>>,
    controller: Option<PanelShapeController>,
}

impl DocumentTile {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            meta: None,
            icon: DEFAULT_ICON.to_owned(),
            badge: None,
            corner: CornerVariant::TopRight,
            fold: 20.0,
            selected: false,
            disabled: false,
            hovered: false,
            on_click: None,
            controller: None,
        }
    }

    pub fn meta(mut self, v: impl Into<String>) -> Self { self.meta = Some(v.into()); self }
    pub fn icon(mut self, v: impl Into<String>) -> Self { self.icon = v.into(); self }
    pub fn badge(mut self, v: impl Into<String>) -> Self { self.badge = Some(v.into()); self }
    pub fn fold_corner(mut self, v: CornerVariant) -> Self { self.corner = v; self }
    pub fn fold_size(mut self, v: f32) -> Self { self.fold = v; self }
    pub fn selected(mut self, v: bool) -> Self { self.selected = v; self }
    pub fn disabled(mut self, v: bool) -> Self { self.disabled = v; self }
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    pub fn mount(&mut self, observer: &DimensionObserver, surface: SurfaceId) -> Result<(), ObserveError> {
        let controller = PanelShapeController::mount(observer, surface, self.params())?;
        controller.set_flags(self.flags());
        self.controller = Some(controller);
        log::debug!("document tile {:?} mounted on {surface}", self.title);
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

    pub fn set_fold_corner(&mut self, v: CornerVariant) {
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

    /// Portrait 2:3 aspect (width : height), applied before measurement.
    pub fn preferred_size(&self, available_width: f32) -> Size {
        let w = available_width.max(MIN_TILE_WIDTH);
        Size::new(w, w * 1.5)
    }

    /// Content padding; the fold side gets extra room so the badge and title
    /// clear the crease.
    pub fn content_insets(&self) -> Edges {
        let base = Edges::all(spacing::SM);
        match self.corner {
            CornerVariant::TopLeft => base.with_left(self.fold + spacing::XS),
            CornerVariant::TopRight => base.with_right(self.fold + spacing::XS),
        }
    }

    pub fn content(&self) -> DocumentContent<'_> {
        DocumentContent {
            title: &self.title,
            meta: self.meta.as_deref(),
            icon: &self.icon,
            badge: self.badge.as_deref(),
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
            style: tile_style(self.flags(), palette::DOCUMENT_BG, self.on_click.is_some()),
            content_insets: self.content_insets(),
            indicator: self.selected.then(|| match self.corner {
                CornerVariant::TopLeft => IndicatorBar {
                    inset_left: self.fold,
                    inset_right: 0.0,
                    height: 2.0,
                    fade: Side::Left,
                },
                CornerVariant::TopRight => IndicatorBar {
                    inset_left: 0.0,
                    inset_right: self.fold,
                    height: 2.0,
                    fade: Side::Right,
                },
            }),
            mounting_hole: MountingHole {
                diameter: 6.0,
                top: 8.0,
                inset: 10.0,
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
            cut: self.fold,
            profile: PanelProfile::FoldedCorner,
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
    use rfui_shape::geom::Vec2;

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn preferred_size_keeps_two_to_three_aspect() {
        let tile = DocumentTile::new("A");
        assert_eq!(tile.preferred_size(180.0), Size::new(180.0, 270.0));
        assert_eq!(tile.preferred_size(60.0), Size::new(120.0, 180.0));
    }

    #[test]
    fn content_insets_clear_the_fold_side() {
        let tile = DocumentTile::new("A");
        assert_eq!(tile.content_insets().right, 24.0); // 20 + 4
        assert_eq!(tile.content_insets().left, 8.0);

        let left = DocumentTile::new("A").fold_corner(CornerVariant::TopLeft);
        assert_eq!(left.content_insets().left, 24.0);
        assert_eq!(left.content_insets().right, 8.0);
    }

    // ── frame ─────────────────────────────────────────────────────────────

    #[test]
    fn frame_carries_the_crease_polyline() {
        let observer = DimensionObserver::new();
        let mut tile = DocumentTile::new("A");
        tile.mount(&observer, SurfaceId::new(1)).unwrap();

        observer.record(SurfaceId::new(1), Size::new(180.0, 270.0));
        observer.flush();

        let frame = tile.frame();
        assert_eq!(frame.style.crease_opacity, 0.5);
        let crease = frame.paths.crease.expect("folded profile emits a crease");
        assert_eq!(
            crease.points(),
            &[
                Vec2::new(159.5, 1.5),
                Vec2::new(159.5, 19.5),
                Vec2::new(178.5, 19.5),
            ]
        );
        tile.unmount();
    }

    #[test]
    fn unmounted_frame_uses_fallback_dimensions() {
        let frame = DocumentTile::new("A").frame();
        assert_eq!(frame.paths.clip.points()[3], Vec2::new(180.0, 120.0));
        assert!(frame.paths.crease.is_some());
    }

    #[test]
    fn default_icon_and_badge_pass_through() {
        let tile = DocumentTile::new("BRIEF").meta("2026-02-25").badge("PDF");
        let content = tile.content();
        assert_eq!(content.icon, "◫");
        assert_eq!(content.badge, Some("PDF"));
        assert_eq!(content.meta, Some("2026-02-25"));
    }

    #[test]
    fn indicator_clears_the_fold_corner() {
        let tile = DocumentTile::new("A").selected(true);
        let bar = tile.frame().indicator.unwrap();
        assert_eq!(bar.inset_right, 20.0);
        assert_eq!(bar.inset_left, 0.0);
        assert_eq!(bar.fade, Side::Right);
    }

    #[test]
    fn mounting_hole_sits_opposite_the_fold() {
        assert_eq!(DocumentTile::new("A").frame().mounting_hole.side, Side::Left);
    }

    // ── events ────────────────────────────────────────────────────────────

    #[test]
    fn disabled_click_is_ignored() {
        let mut tile = DocumentTile::new("A").disabled(true).on_click(|| panic!("must not fire"));
        assert_eq!(tile.on_event(&TileEvent::Click), EventResult::Ignored);
    }

    #[test]
    fn hover_updates_forward_to_the_controller() {
        let observer = DimensionObserver::new();
        let mut tile = DocumentTile::new("A");
        tile.mount(&observer, SurfaceId::new(1)).unwrap();

        tile.on_event(&TileEvent::HoverEnter);
        assert_eq!(tile.frame().style.background, palette::HOVER_BG);
        tile.on_event(&TileEvent::HoverLeave);
        assert_eq!(tile.frame().style.background, palette::DOCUMENT_BG);
        tile.unmount();
    }
}
