use thiserror::Error;

use crate::core::grid::InputError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("Invalid input: {source}")]
    InvalidInput {
        #[from]
        source: InputError,
    },

    #[error("Energy {energy} lies outside the tabulated range [{min}, {max}]")]
    OutOfRangeEnergy { energy: f64, min: f64, max: f64 },

    #[error(
        "Non-positive density {value} prevents log-linear interpolation at mu = {mu}, energy = {energy} (bracket {lower}..{upper})"
    )]
    NonPositiveDensity {
        energy: f64,
        mu: f64,
        lower: usize,
        upper: usize,
        value: f64,
    },

    #[error("No Legendre coefficients at either bracketing energy ({lower_energy}, {upper_energy})")]
    EmptyCoefficients {
        lower_energy: f64,
        upper_energy: f64,
    },
}
