/// Errors from evaluating the force between the two charges.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The test charge was placed at the origin, on top of the fixed charge.
    /// The distance between them is zero, so the force is undefined.
    #[error("the test charge cannot be at the origin, where the fixed charge already is")]
    InvalidPosition,
    /// A charge or coordinate was NaN or infinite.
    /// `f64` parsing accepts `inf` and `NaN`, so these have to be rejected
    /// here rather than propagated through the arithmetic.
    #[error("charges and coordinates must be finite numbers")]
    NonFiniteInput,
}
