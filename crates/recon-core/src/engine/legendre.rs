use super::config::EvaluationConfig;
use super::energy::{bracket_energy, validate_query};
use super::error::EvaluationError;
use crate::core::legendre::{blend_coefficients, legendre_series};
use crate::core::tables::LegendreTable;
use tracing::instrument;

/// Evaluates the Legendre pipeline at `(mu, energy)`.
///
/// The coefficient lists at the two bracketing energies are blended linearly
/// index by index (zero-padded to the longer list) and the resulting series is
/// summed with the implicit `c_0 = 1`.
#[instrument(level = "trace", skip_all, fields(mu = mu, energy = energy))]
pub fn evaluate(
    mu: f64,
    energy: f64,
    table: &LegendreTable,
    config: &EvaluationConfig,
) -> Result<f64, EvaluationError> {
    validate_query(mu, energy)?;
    let bracket = bracket_energy(table.energies(), energy, config.range_policy)?;

    let lower = table.coefficients(bracket.lower);
    let upper = table.coefficients(bracket.upper);

    if lower.is_empty() && upper.is_empty() {
        return Err(EvaluationError::EmptyCoefficients {
            lower_energy: table.energies()[bracket.lower],
            upper_energy: table.energies()[bracket.upper],
        });
    }

    let value = match bracket.single() {
        Some(index) => legendre_series(table.coefficients(index), mu),
        None => legendre_series(&blend_coefficients(lower, upper, bracket.fraction), mu),
    };
    Ok(value)
}
