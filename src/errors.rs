use thiserror::Error;

/// The fatal ways constructing a [`Potential`](crate::potential::Potential)
/// from its registry name and parameter vector can fail.
///
/// Projection non-convergence is *not* an error: the marcher keeps the
/// last iterate and reports it through the `log` facade.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PotentialError {
    /// The name does not match any registered potential kind.
    #[error("Unavailable potential.")]
    UnavailablePotential(String),

    /// The parameter vector length does not match the kind's arity.
    #[error("Wrong number of parameters for this type of potential.")]
    WrongParameterCount {
        /// Kind whose arity was violated.
        kind: &'static str,
        /// Number of parameters received.
        got: usize,
    },
}
