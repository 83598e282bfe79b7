//! Interaction-state styling.
//!
//! Style is a pure function of `{selected, hovered, disabled}` evaluated on
//! every relevant event — there is no mutable style state, so selection and
//! hover updates cannot race each other.

use rfui_shape::controller::InteractionFlags;

// ── Color ─────────────────────────────────────────────────────────────────

/// Straight-alpha sRGB color. No premultiplication — these values go to the
/// host's style system, not a GPU blender.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// From sRGB bytes (`0`–`255`) and a straight alpha fraction.
    #[inline]
    pub const fn from_srgb_u8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }
}

// ── Palette ───────────────────────────────────────────────────────────────

/// Steel-blue HUD palette, the slice of the token set the tiles consume.
pub mod palette {
    use super::Color;

    /// High-emphasis text.
    pub const HI: Color = Color::from_srgb_u8(0xb8, 0xda, 0xff, 1.0);
    /// Mid-emphasis text.
    pub const MID: Color = Color::from_srgb_u8(0x6a, 0x9e, 0xc8, 1.0);
    /// Muted / decorative.
    pub const DIM: Color = Color::from_srgb_u8(0x3d, 0x5a, 0x7a, 1.0);
    /// Default body text.
    pub const TEXT: Color = Color::from_srgb_u8(0x8a, 0xbc, 0xd8, 1.0);
    /// Subtle border.
    pub const BORDER: Color = Color::from_srgb_u8(100, 168, 224, 0.28);
    /// Highlighted border.
    pub const BORDER_HI: Color = Color::from_srgb_u8(120, 190, 255, 0.50);

    pub const FOLDER_BG: Color = Color::from_srgb_u8(10, 18, 36, 0.92);
    pub const DOCUMENT_BG: Color = Color::from_srgb_u8(10, 18, 36, 0.90);
    pub const SELECTED_BG: Color = Color::from_srgb_u8(14, 26, 52, 0.95);
    pub const HOVER_BG: Color = Color::from_srgb_u8(18, 32, 60, 0.95);
    /// Faint full-panel wash behind selected content.
    pub const SELECTED_GLOW: Color = Color::from_srgb_u8(120, 160, 200, 0.04);
    /// Fill inside the mounting-hole accent.
    pub const HOLE_BG: Color = Color::from_srgb_u8(8, 16, 32, 0.9);
}

/// Spacing scale shared with the wider token set (px).
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const LG: f32 = 16.0;
}

/// Crease overlay weight relative to the border stroke.
pub const CREASE_OPACITY: f32 = 0.5;

// ── Style ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Pointer,
    NotAllowed,
}

/// Resolved visual state for one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileStyle {
    pub background: Color,
    /// Border / stroke color, shared by outline and crease.
    pub accent: Color,
    pub title: Color,
    pub detail: Color,
    /// Icon glyph color (document tiles).
    pub icon: Color,
    /// Full-panel wash, present while selected.
    pub glow: Option<Color>,
    pub opacity: f32,
    /// Crease stroke opacity relative to the outline.
    pub crease_opacity: f32,
    pub cursor: Cursor,
}

/// Maps interaction flags to a style. Pure; call it on every event.
///
/// Precedence: selected beats hovered; disabled suppresses hover feedback
/// but keeps the selected treatment visible.
pub fn tile_style(flags: InteractionFlags, base_background: Color, clickable: bool) -> TileStyle {
    let background = if flags.selected {
        palette::SELECTED_BG
    } else if flags.hovered && !flags.disabled {
        palette::HOVER_BG
    } else {
        base_background
    };

    TileStyle {
        background,
        accent: if flags.selected { palette::BORDER_HI } else { palette::BORDER },
        title: if flags.selected { palette::HI } else { palette::TEXT },
        detail: palette::DIM,
        icon: if flags.selected { palette::MID } else { palette::DIM },
        glow: flags.selected.then_some(palette::SELECTED_GLOW),
        opacity: if flags.disabled { 0.45 } else { 1.0 },
        crease_opacity: CREASE_OPACITY,
        cursor: if flags.disabled {
            Cursor::NotAllowed
        } else if clickable {
            Cursor::Pointer
        } else {
            Cursor::Default
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(selected: bool, hovered: bool, disabled: bool) -> InteractionFlags {
        InteractionFlags { selected, hovered, disabled }
    }

    #[test]
    fn idle_uses_base_background_and_subtle_border() {
        let s = tile_style(flags(false, false, false), palette::FOLDER_BG, false);
        assert_eq!(s.background, palette::FOLDER_BG);
        assert_eq!(s.accent, palette::BORDER);
        assert_eq!(s.opacity, 1.0);
        assert_eq!(s.cursor, Cursor::Default);
        assert!(s.glow.is_none());
    }

    #[test]
    fn selected_highlights_border_title_and_icon() {
        let s = tile_style(flags(true, false, false), palette::FOLDER_BG, true);
        assert_eq!(s.background, palette::SELECTED_BG);
        assert_eq!(s.accent, palette::BORDER_HI);
        assert_eq!(s.title, palette::HI);
        assert_eq!(s.icon, palette::MID);
        assert_eq!(s.glow, Some(palette::SELECTED_GLOW));
    }

    #[test]
    fn idle_icon_is_muted_and_crease_is_half_weight() {
        let s = tile_style(flags(false, false, false), palette::DOCUMENT_BG, false);
        assert_eq!(s.icon, palette::DIM);
        assert_eq!(s.crease_opacity, CREASE_OPACITY);
    }

    #[test]
    fn hover_changes_background_only_when_not_selected() {
        let hovered = tile_style(flags(false, true, false), palette::FOLDER_BG, true);
        assert_eq!(hovered.background, palette::HOVER_BG);
        assert_eq!(hovered.accent, palette::BORDER);

        let both = tile_style(flags(true, true, false), palette::FOLDER_BG, true);
        assert_eq!(both.background, palette::SELECTED_BG);
    }

    #[test]
    fn disabled_dims_and_blocks_hover_feedback() {
        let s = tile_style(flags(false, true, true), palette::DOCUMENT_BG, true);
        assert_eq!(s.background, palette::DOCUMENT_BG);
        assert_eq!(s.opacity, 0.45);
        assert_eq!(s.cursor, Cursor::NotAllowed);
    }

    #[test]
    fn cursor_reflects_clickability() {
        let s = tile_style(flags(false, false, false), palette::FOLDER_BG, true);
        assert_eq!(s.cursor, Cursor::Pointer);
    }

    #[test]
    fn same_flags_same_style() {
        let a = tile_style(flags(true, true, false), palette::DOCUMENT_BG, true);
        let b = tile_style(flags(true, true, false), palette::DOCUMENT_BG, true);
        assert_eq!(a, b);
    }
}
