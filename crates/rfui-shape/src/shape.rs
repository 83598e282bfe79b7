use crate::geom::{Size, Vec2};

/// Inset applied to every stroke vertex so a 1px border renders fully inside
/// the clip mask instead of being half clipped away.
pub const STROKE_INSET: f32 = 0.5;

// ── Parameters ────────────────────────────────────────────────────────────

/// Which top corner carries the diagonal cut (or fold).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerVariant {
    TopLeft,
    TopRight,
}

impl CornerVariant {
    /// Parses the wire-level keyword used in per-instance configuration.
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "top-left" => Some(Self::TopLeft),
            "top-right" => Some(Self::TopRight),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
        }
    }

    /// Anchor and sign of the horizontal mirror map for this variant.
    ///
    /// `TopLeft` is the identity (`x = 0 + u`); `TopRight` reflects across
    /// `x = width` (`x = width − u`). Every vertex goes through this one map,
    /// so the two variants are mirror images by construction.
    #[inline]
    fn x_map(self, width: f32) -> (f32, f32) {
        match self {
            Self::TopLeft => (0.0, 1.0),
            Self::TopRight => (width, -1.0),
        }
    }
}

/// Silhouette family: a plain cut corner, or a cut corner with an interior
/// crease suggesting folded paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelProfile {
    CutCorner,
    FoldedCorner,
}

/// Per-panel shape configuration.
///
/// `fallback` is the size assumed between mount and the first dimension
/// observation, so a freshly mounted panel has a real silhouette immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    pub corner: CornerVariant,
    pub cut: f32,
    pub profile: PanelProfile,
    pub fallback: Size,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            corner: CornerVariant::TopLeft,
            cut: 28.0,
            profile: PanelProfile::CutCorner,
            fallback: Size::new(200.0, 120.0),
        }
    }
}

impl ShapeParams {
    #[inline]
    pub fn compute(&self, size: Size) -> PanelShape {
        panel_shape(size, self.corner, self.cut, self.profile)
    }
}

// ── Output ────────────────────────────────────────────────────────────────

/// Computed panel silhouette: clip pentagon, inset stroke pentagon, and the
/// crease polyline for [`PanelProfile::FoldedCorner`].
///
/// Immutable value object — recomputed wholesale, compared by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelShape {
    /// Mask boundary. Fixed winding, first vertex adjacent to the cut.
    pub clip: [Vec2; 5],
    /// Border path, every vertex moved inward by [`STROKE_INSET`].
    pub stroke: [Vec2; 5],
    /// Interior fold line, `None` for [`PanelProfile::CutCorner`].
    pub crease: Option<[Vec2; 3]>,
}

// ── Geometry ──────────────────────────────────────────────────────────────

/// Maps a panel size and cut configuration to its silhouette polygons.
///
/// Total and pure: a `cut` larger than the shorter side is clamped, and a
/// zero-area `size` collapses every vertex to the origin. Two calls with the
/// same arguments return the same value.
pub fn panel_shape(size: Size, corner: CornerVariant, cut: f32, profile: PanelProfile) -> PanelShape {
    if size.is_empty() {
        return collapsed(profile);
    }

    let w = size.width();
    let h = size.height();
    let c = cut.clamp(0.0, size.min_side());
    let s = STROKE_INSET;

    let (anchor, sign) = corner.x_map(w);
    // `u` is the horizontal distance from the cut-side edge.
    let p = |u: f32, y: f32| Vec2::new(anchor + sign * u, y);

    // Rectangle boundary with the cut corner replaced by two vertices offset
    // by `c` along its adjacent edges. Walk starts next to the cut.
    let clip = [
        p(c, 0.0),
        p(w, 0.0),
        p(w, h),
        p(0.0, h),
        p(0.0, c),
    ];

    let stroke = [
        p(c + s, s),
        p(w - s, s),
        p(w - s, h - s),
        p(s, h - s),
        p(s, c + s),
    ];

    // The crease runs from just under the top edge, down the inner side of
    // the fold, then out to the cut-side edge at the fold's depth.
    let crease = match profile {
        PanelProfile::CutCorner => None,
        PanelProfile::FoldedCorner => Some([
            p(c + s, s + 1.0),
            p(c + s, c - s),
            p(s + 1.0, c - s),
        ]),
    };

    PanelShape { clip, stroke, crease }
}

fn collapsed(profile: PanelProfile) -> PanelShape {
    let z = Vec2::zero();
    PanelShape {
        clip: [z; 5],
        stroke: [z; 5],
        crease: match profile {
            PanelProfile::CutCorner => None,
            PanelProfile::FoldedCorner => Some([z; 3]),
        },
    }
}
