use libm::atan2;

use crate::{COULOMB_CONSTANT, Error, Vec2};

/// Whether the two charges pull together or push apart.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ForceKind {
    /// Opposite-signed charges. The force on the test charge points
    /// toward the origin.
    Attraction,
    /// Like-signed charges. The force on the test charge points away
    /// from the origin.
    Repulsion,
    /// At least one charge is zero, so there is no force at all.
    Neutral,
}

impl std::fmt::Display for ForceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Attraction => "attraction",
            Self::Repulsion => "repulsion",
            Self::Neutral => "neutral",
        };
        write!(f, "{s}")
    }
}

/// The electrostatic force acting on the test charge.
///
/// Fully determined by the two charge values and the test charge's
/// position. Computed fresh on every call, never mutated.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ForceVector {
    /// X component, in newtons.
    pub fx: f64,
    /// Y component, in newtons.
    pub fy: f64,
    /// Length of the vector, in newtons. Never negative.
    pub magnitude: f64,
    /// Direction of the force, degrees counterclockwise from the
    /// positive X axis, in (−180, 180].
    pub angle_degrees: f64,
    /// Attraction, repulsion, or neutral.
    pub kind: ForceKind,
}

impl ForceVector {
    /// The force as a plain vector, dropping the derived fields.
    pub fn components(&self) -> Vec2 {
        Vec2::new(self.fx, self.fy)
    }
}

/// Force exerted on a test charge `q2` at `position` by a fixed charge
/// `q1` at the origin, per Coulomb's law.
///
/// Charges are in coulombs, the position in meters. Fails if the test
/// charge sits at the origin (zero distance) or any input is non-finite.
/// If either charge is zero the result is the zero vector, classified
/// [`ForceKind::Neutral`].
#[allow(clippy::float_cmp)]
pub fn force_on_test_charge(q1: f64, q2: f64, position: Vec2) -> Result<ForceVector, Error> {
    if !q1.is_finite() || !q2.is_finite() || !position.is_finite() {
        return Err(Error::NonFiniteInput);
    }
    if position.x == 0.0 && position.y == 0.0 {
        return Err(Error::InvalidPosition);
    }

    let product = q1 * q2;
    if product == 0.0 {
        // One charge is zero: no force in either direction.
        return Ok(ForceVector {
            fx: 0.0,
            fy: 0.0,
            magnitude: 0.0,
            angle_degrees: 0.0,
            kind: ForceKind::Neutral,
        });
    }

    // F = k |q1 q2| / r²
    let magnitude = COULOMB_CONSTANT * product.abs() / position.magnitude_squared();

    // Unit vector from the fixed charge toward the test charge.
    let radial = position.unit();

    // Like signs repel (force along the radial), opposite signs attract
    // (force back along it).
    let (sign, kind) = if product > 0.0 {
        (1.0, ForceKind::Repulsion)
    } else {
        (-1.0, ForceKind::Attraction)
    };

    let force = radial * (sign * magnitude);
    let angle_degrees = atan2(force.y, force.x).to_degrees();
    // atan2 yields [-180, 180]; it lands on -180 when fy is a negative
    // zero. The contract is the half-open range (-180, 180].
    let angle_degrees = if angle_degrees == -180.0 {
        180.0
    } else {
        angle_degrees
    };

    Ok(ForceVector {
        fx: force.x,
        fy: force.y,
        magnitude,
        angle_degrees,
        kind,
    })
}
