//! Electrostatic force between two point charges.
//!
//! One charge is fixed at the origin, the other sits anywhere else on the
//! plane. [`force_on_test_charge`] evaluates Coulomb's law and returns the
//! force vector acting on the movable charge: components, magnitude,
//! direction angle, and whether the charges attract or repel.

pub use crate::error::Error;
pub use crate::force::{ForceKind, ForceVector, force_on_test_charge};
pub use crate::vector::Vec2;

/// Errors the calculation can report.
mod error;
/// Coulomb's law and the force classification.
mod force;
/// 2D vectors.
mod vector;

/// Coulomb's constant, in N·m²/C².
pub const COULOMB_CONSTANT: f64 = 8.99e9;

/// Force on a charge `q2` at `(x2, y2)` due to a charge `q1` at the origin.
///
/// Scalar-argument convenience wrapper around [`force_on_test_charge`].
/// Charges are in coulombs, coordinates in meters.
pub fn compute(q1: f64, q2: f64, x2: f64, y2: f64) -> Result<ForceVector, Error> {
    force_on_test_charge(q1, q2, Vec2::new(x2, y2))
}
