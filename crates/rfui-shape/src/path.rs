use std::fmt::Write as _;

use crate::geom::Vec2;
use crate::shape::PanelShape;

/// A point list formatted on demand for the host's masking and stroking
/// primitives.
///
/// Host tiles consume the same geometry in two syntaxes: a CSS-style
/// `polygon(…)` expression for clip masks, and an SVG `points` attribute for
/// the stroke overlay. Both render from the same vertices, so the mask and
/// border can never drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct PathExpression {
    points: Vec<Vec2>,
}

impl PathExpression {
    pub fn new(points: impl Into<Vec<Vec2>>) -> Self {
        Self { points: points.into() }
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// CSS clip-path syntax: `polygon(28px 0px, 200px 0px, …)`.
    pub fn to_clip_path(&self) -> String {
        let mut out = String::from("polygon(");
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}px {}px", p.x, p.y);
        }
        out.push(')');
        out
    }

    /// SVG `points` attribute syntax: `28.5,0.5 199.5,0.5 …`.
    pub fn to_svg_points(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{},{}", p.x, p.y);
        }
        out
    }
}

/// Render-time readout for one panel: mask path, border path, and the crease
/// overlay for folded-corner panels.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPaths {
    pub clip: PathExpression,
    pub stroke: PathExpression,
    pub crease: Option<PathExpression>,
}

impl PanelShape {
    pub fn paths(&self) -> RenderPaths {
        RenderPaths {
            clip: PathExpression::new(self.clip),
            stroke: PathExpression::new(self.stroke),
            crease: self.crease.map(PathExpression::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::geom::Size;
    use crate::shape::{CornerVariant, PanelProfile, panel_shape};

    #[test]
    fn clip_path_syntax_for_folder_default() {
        let shape = panel_shape(
            Size::new(200.0, 120.0),
            CornerVariant::TopLeft,
            28.0,
            PanelProfile::CutCorner,
        );
        assert_eq!(
            shape.paths().clip.to_clip_path(),
            "polygon(28px 0px, 200px 0px, 200px 120px, 0px 120px, 0px 28px)"
        );
    }

    #[test]
    fn svg_points_keep_half_pixel_insets() {
        let shape = panel_shape(
            Size::new(200.0, 120.0),
            CornerVariant::TopLeft,
            28.0,
            PanelProfile::CutCorner,
        );
        assert_eq!(
            shape.paths().stroke.to_svg_points(),
            "28.5,0.5 199.5,0.5 199.5,119.5 0.5,119.5 0.5,28.5"
        );
    }

    #[test]
    fn crease_path_present_only_for_folded_profile() {
        let size = Size::new(180.0, 270.0);
        let cut_only = panel_shape(size, CornerVariant::TopRight, 20.0, PanelProfile::CutCorner);
        let folded = panel_shape(size, CornerVariant::TopRight, 20.0, PanelProfile::FoldedCorner);
        assert!(cut_only.paths().crease.is_none());
        let crease = folded.paths().crease.unwrap();
        assert_eq!(crease.to_svg_points(), "159.5,1.5 159.5,19.5 178.5,19.5");
    }
}
