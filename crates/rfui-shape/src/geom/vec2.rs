use core::ops::{Add, Mul, Sub};

/// 2D point in device-independent pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Reflects the point across the vertical line `x = axis`.
    #[inline]
    pub fn mirrored_x(self, axis: f32) -> Self {
        Self::new(2.0 * axis - self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_x_round_trips() {
        let p = Vec2::new(28.0, 0.0);
        assert_eq!(p.mirrored_x(100.0), Vec2::new(172.0, 0.0));
        assert_eq!(p.mirrored_x(100.0).mirrored_x(100.0), p);
    }

    #[test]
    fn mirrored_x_fixed_point_on_axis() {
        let p = Vec2::new(50.0, 7.0);
        assert_eq!(p.mirrored_x(50.0), p);
    }
}
