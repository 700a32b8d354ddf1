/// 2D Cartesian vector, in meters when used as a position.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Vec2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vec2 {
    /// A vector from its components.
    #[inline(always)]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline(always)]
    pub fn magnitude(self) -> f64 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    /// Squared Euclidean length. Avoids the square root when only the
    /// square is needed, e.g. the r² in Coulomb's law.
    #[inline(always)]
    pub fn magnitude_squared(self) -> f64 {
        self.x.powi(2) + self.y.powi(2)
    }

    /// Dot product.
    #[inline(always)]
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// The unit vector pointing the same way as `self`.
    /// Meaningless for the zero vector (components become NaN).
    #[inline(always)]
    pub fn unit(self) -> Self {
        let m = self.magnitude();
        Self {
            x: self.x / m,
            y: self.y / m,
        }
    }

    /// Are both components finite?
    #[inline(always)]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
