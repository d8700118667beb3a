use super::config::EvaluationConfig;
use super::energy::{bracket_energy, validate_query};
use super::error::EvaluationError;
use crate::core::grid::locate;
use crate::core::interpolation::{InterpolationError, log_linear};
use crate::core::tables::{MuDistribution, TabulatedTable};
use tracing::{instrument, trace};

/// Evaluates the tabulated pipeline at `(mu, energy)`.
///
/// Each bracketing energy's density is interpolated log-linearly in `mu`, and
/// the two results are then blended across energy with the configured scheme.
#[instrument(level = "trace", skip_all, fields(mu = mu, energy = energy))]
pub fn evaluate(
    mu: f64,
    energy: f64,
    table: &TabulatedTable,
    config: &EvaluationConfig,
) -> Result<f64, EvaluationError> {
    validate_query(mu, energy)?;
    let bracket = bracket_energy(table.energies(), energy, config.range_policy)?;

    let at_energy = |index: usize| {
        density_at(
            table.distribution(index),
            mu,
            table.energies()[index],
        )
    };

    if let Some(index) = bracket.single() {
        return at_energy(index);
    }

    let lower = at_energy(bracket.lower)?;
    let upper = at_energy(bracket.upper)?;

    config
        .energy_interpolation
        .apply(lower, upper, bracket.fraction)
        .map_err(|InterpolationError::NonPositive(value)| {
            EvaluationError::NonPositiveDensity {
                energy,
                mu,
                lower: bracket.lower,
                upper: bracket.upper,
                value,
            }
        })
}

/// Log-linear interpolation of `f` at `mu` within one energy's distribution.
///
/// Cosines outside the sampled range take the value of the nearest sample.
pub(crate) fn density_at(
    distribution: &MuDistribution,
    mu: f64,
    energy: f64,
) -> Result<f64, EvaluationError> {
    let bracket = locate(distribution.mu(), mu)?;
    let f = distribution.f();

    trace!(
        energy,
        lower = bracket.lower,
        upper = bracket.upper,
        fraction = bracket.fraction,
        "Cosine bracket located."
    );

    if let Some(index) = bracket.single() {
        return Ok(f[index]);
    }

    log_linear(f[bracket.lower], f[bracket.upper], bracket.fraction).map_err(
        |InterpolationError::NonPositive(value)| EvaluationError::NonPositiveDensity {
            energy,
            mu,
            lower: bracket.lower,
            upper: bracket.upper,
            value,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::interpolation::Interpolation;
    use crate::engine::config::{EvaluationConfigBuilder, RangePolicy};

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE * a.abs().max(1.0)
    }

    fn dist(pairs: &[(f64, f64)]) -> MuDistribution {
        MuDistribution::from_pairs(pairs).unwrap()
    }

    fn two_energy_table() -> TabulatedTable {
        TabulatedTable::new(vec![
            (10.0, dist(&[(-1.0, 1.0), (0.0, 2.0), (1.0, 4.0)])),
            (20.0, dist(&[(-1.0, 1.0), (0.0, 3.0), (1.0, 9.0)])),
        ])
        .unwrap()
    }

    #[test]
    fn midpoint_energy_blends_log_linear_cosine_values() {
        let table = two_energy_table();
        let value = evaluate(0.0, 15.0, &table, &EvaluationConfig::default()).unwrap();
        assert!(f64_approx_equal(value, 0.5 * 2.0 + 0.5 * 3.0));
    }

    #[test]
    fn interior_cosine_is_geometric_mean_at_midpoint() {
        let table = two_energy_table();
        let config = EvaluationConfig::default();

        let low = evaluate(0.5, 10.0, &table, &config).unwrap();
        let high = evaluate(0.5, 20.0, &table, &config).unwrap();
        assert!(f64_approx_equal(low, (2.0f64 * 4.0).sqrt()));
        assert!(f64_approx_equal(high, (3.0f64 * 9.0).sqrt()));

        let mid = evaluate(0.5, 12.5, &table, &config).unwrap();
        assert!(f64_approx_equal(mid, 0.75 * low + 0.25 * high));
    }

    #[test]
    fn grid_energy_ignores_the_other_bracket() {
        let table = TabulatedTable::new(vec![
            (1.0, dist(&[(-1.0, 0.5), (1.0, 1.5)])),
            (2.0, dist(&[(-1.0, 0.0), (1.0, 1.0)])),
        ])
        .unwrap();
        let value = evaluate(0.0, 1.0, &table, &EvaluationConfig::default()).unwrap();
        assert!(f64_approx_equal(value, (0.5f64 * 1.5).sqrt()));
    }

    #[test]
    fn log_linear_cosine_interpolation_is_exact_for_exponentials() {
        let shape = |mu: f64| 0.3 * (1.2 * mu).exp();
        let samples: Vec<(f64, f64)> = [-1.0, -0.5, 0.0, 0.5, 1.0]
            .iter()
            .map(|&mu| (mu, shape(mu)))
            .collect();
        let table = TabulatedTable::new(vec![(5.0, dist(&samples))]).unwrap();

        for mu in [-0.9, -0.25, 0.1, 0.77] {
            let value = evaluate(mu, 5.0, &table, &EvaluationConfig::default()).unwrap();
            assert!(f64_approx_equal(value, shape(mu)));
        }
    }

    #[test]
    fn zero_density_in_cosine_bracket_is_an_error_not_nan() {
        let table = TabulatedTable::new(vec![(
            1.0,
            dist(&[(-1.0, 0.0), (0.0, 1.0), (1.0, 2.0)]),
        )])
        .unwrap();
        let result = evaluate(-0.5, 1.0, &table, &EvaluationConfig::default());
        assert_eq!(
            result,
            Err(EvaluationError::NonPositiveDensity {
                energy: 1.0,
                mu: -0.5,
                lower: 0,
                upper: 1,
                value: 0.0
            })
        );
    }

    #[test]
    fn negative_density_in_cosine_bracket_is_an_error() {
        let table = TabulatedTable::new(vec![(
            1.0,
            dist(&[(-1.0, 1.0), (0.0, 1.0), (1.0, -2.0)]),
        )])
        .unwrap();
        let result = evaluate(0.5, 1.0, &table, &EvaluationConfig::default());
        assert!(matches!(
            result,
            Err(EvaluationError::NonPositiveDensity { value, .. }) if value == -2.0
        ));
    }

    #[test]
    fn cosine_outside_sampled_range_takes_edge_value() {
        let table = TabulatedTable::new(vec![(1.0, dist(&[(-0.5, 2.0), (0.5, 3.0)]))]).unwrap();
        let config = EvaluationConfig::default();
        assert_eq!(evaluate(-0.9, 1.0, &table, &config), Ok(2.0));
        assert_eq!(evaluate(0.9, 1.0, &table, &config), Ok(3.0));
    }

    #[test]
    fn out_of_range_energy_is_rejected_by_default() {
        let table = two_energy_table();
        let result = evaluate(0.0, 25.0, &table, &EvaluationConfig::default());
        assert_eq!(
            result,
            Err(EvaluationError::OutOfRangeEnergy {
                energy: 25.0,
                min: 10.0,
                max: 20.0
            })
        );
    }

    #[test]
    fn out_of_range_energy_uses_edge_distribution_when_clamping() {
        let table = two_energy_table();
        let config = EvaluationConfigBuilder::new()
            .range_policy(RangePolicy::Clamp)
            .build();
        assert_eq!(evaluate(0.0, 25.0, &table, &config), Ok(3.0));
        assert_eq!(evaluate(0.0, 5.0, &table, &config), Ok(2.0));
    }

    #[test]
    fn log_linear_energy_scheme_gives_geometric_blend() {
        let table = two_energy_table();
        let config = EvaluationConfigBuilder::new()
            .energy_interpolation(Interpolation::LogLinear)
            .build();
        let value = evaluate(0.0, 15.0, &table, &config).unwrap();
        assert!(f64_approx_equal(value, (2.0f64 * 3.0).sqrt()));
    }
}
