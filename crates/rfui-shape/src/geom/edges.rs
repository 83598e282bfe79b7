/// Insets on all four sides (content padding, accent offsets).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub const fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }

    #[inline]
    #[must_use]
    pub fn with_left(self, v: f32) -> Self {
        Self { left: v, ..self }
    }

    #[inline]
    #[must_use]
    pub fn with_right(self, v: f32) -> Self {
        Self { right: v, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h_and_v_sum_opposite_sides() {
        let e = Edges::all(8.0).with_left(20.0);
        assert_eq!(e.h(), 28.0);
        assert_eq!(e.v(), 16.0);
    }
}
