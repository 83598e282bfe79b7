/// Observed content-box size in device-independent pixels.
///
/// Never negative: the constructor clamps each side at zero, so a momentarily
/// mis-reported layout readout degrades to an empty size instead of producing
/// inverted geometry downstream.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.height
    }

    /// Length of the shorter side — the upper bound for a corner cut.
    #[inline]
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_sides_clamp_to_zero() {
        let s = Size::new(-4.0, -1.0);
        assert_eq!(s.width(), 0.0);
        assert_eq!(s.height(), 0.0);
        assert!(s.is_empty());
    }

    #[test]
    fn min_side_picks_shorter() {
        assert_eq!(Size::new(200.0, 120.0).min_side(), 120.0);
        assert_eq!(Size::new(80.0, 120.0).min_side(), 80.0);
    }

    #[test]
    fn zero_width_is_empty() {
        assert!(Size::new(0.0, 50.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }
}
