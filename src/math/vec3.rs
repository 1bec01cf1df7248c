use std::ops::{Add, Div, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn magnitude(&self) -> f32 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// The result is NaN for a zero-length vector; use [`Vec3::try_normalize`]
    /// when the input may be degenerate.
    pub fn normalize(&self) -> Self {
        let magnitude = self.magnitude();
        Self {
            x: self.x / magnitude,
            y: self.y / magnitude,
            z: self.z / magnitude,
        }
    }

    /// Normalizes the vector, or returns `None` if it is zero or not finite.
    ///
    /// Components are rescaled by the largest one first, so arbitrarily
    /// small non-zero vectors still normalize instead of underflowing.
    pub fn try_normalize(&self) -> Option<Self> {
        if !(self.x.is_finite() && self.y.is_finite() && self.z.is_finite()) {
            return None;
        }
        let largest = self.x.abs().max(self.y.abs()).max(self.z.abs());
        if largest == 0.0 {
            return None;
        }
        let scaled = *self / largest;
        Some(scaled / scaled.magnitude())
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of two vectors.
    /// The resulting vector is perpendicular to both input vectors.
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Linearly interpolate between two vectors.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

/// Component-wise addition of two vectors.
impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// Component-wise subtraction of two vectors.
impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

/// Scalar multiplication of a vector.
impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

/// Scalar division of a vector. Dividing by zero yields [`Vec3::ZERO`].
impl Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f32) -> Self::Output {
        if rhs == 0.0 {
            return Self::ZERO;
        }
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

/// Negation of a vector.
impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cross_follows_axis_order() {
        assert_eq!(Vec3::RIGHT.cross(Vec3::UP), Vec3::FORWARD);
        assert_eq!(Vec3::UP.cross(Vec3::FORWARD), Vec3::RIGHT);
    }

    #[test]
    fn cross_is_perpendicular() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        let c = a.cross(b);
        assert_relative_eq!(c.dot(a), 0.0, epsilon = 1e-5);
        assert_relative_eq!(c.dot(b), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn normalize_has_unit_length() {
        let v = Vec3::new(3.0, 4.0, 12.0).normalize();
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn try_normalize_rejects_zero_vector() {
        assert!(Vec3::ZERO.try_normalize().is_none());
        assert!(Vec3::UP.try_normalize().is_some());
        assert!(Vec3::new(f32::NAN, 0.0, 1.0).try_normalize().is_none());
    }

    #[test]
    fn try_normalize_keeps_tiny_vectors() {
        let n = Vec3::new(0.0, 0.0, -9.0e-8).try_normalize().unwrap();
        assert_eq!(n, Vec3::new(0.0, 0.0, -1.0));

        let n = Vec3::new(3.0e-30, 4.0e-30, 0.0).try_normalize().unwrap();
        assert_relative_eq!(n.x, 0.6, epsilon = 1e-6);
        assert_relative_eq!(n.y, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn division_by_zero_is_zero_vector() {
        assert_eq!(Vec3::new(1.0, 2.0, 3.0) / 0.0, Vec3::ZERO);
    }
}
