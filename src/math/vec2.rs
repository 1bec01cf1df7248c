use std::ops::{Add, Div, Mul, Sub};

/// 2D vector, used for screen points and texture coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of two vectors in the XY plane.
    ///
    /// Equals the signed area of the parallelogram spanned by `self` and `other`.
    pub fn perp_dot(&self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Linearly interpolate between two vectors.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Scalar division. Dividing by zero yields [`Vec2::ZERO`].
impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Self::Output {
        if rhs == 0.0 {
            return Self::ZERO;
        }
        Self::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn division_by_zero_is_zero_vector() {
        assert_eq!(Vec2::new(3.0, -4.0) / 0.0, Vec2::ZERO);
    }

    #[test]
    fn perp_dot_is_signed_area() {
        let a = Vec2::new(2.0, 0.0);
        let b = Vec2::new(0.0, 3.0);
        assert_relative_eq!(a.perp_dot(b), 6.0);
        assert_relative_eq!(b.perp_dot(a), -6.0);
    }

    #[test]
    fn lerp_midpoint() {
        let mid = Vec2::new(0.0, 0.0).lerp(Vec2::new(1.0, 2.0), 0.5);
        assert_eq!(mid, Vec2::new(0.5, 1.0));
    }
}
