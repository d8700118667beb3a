use super::config::RangePolicy;
use super::error::EvaluationError;
use crate::core::grid::{Bracket, InputError, locate};
use tracing::{trace, warn};

/// Rejects non-finite queries and cosines outside `[-1, 1]`.
pub(crate) fn validate_query(mu: f64, energy: f64) -> Result<(), InputError> {
    if !mu.is_finite() {
        return Err(InputError::NonFiniteQuery {
            name: "mu",
            value: mu,
        });
    }
    if !energy.is_finite() {
        return Err(InputError::NonFiniteQuery {
            name: "energy",
            value: energy,
        });
    }
    if !(-1.0..=1.0).contains(&mu) {
        return Err(InputError::CosineOutOfDomain(mu));
    }
    Ok(())
}

/// Brackets `energy` on an incident-energy grid and applies the range policy
/// to queries that fall outside it.
pub(crate) fn bracket_energy(
    energies: &[f64],
    energy: f64,
    policy: RangePolicy,
) -> Result<Bracket, EvaluationError> {
    let bracket = locate(energies, energy)?;

    if let Some(edge) = bracket.clamped {
        let (min, max) = (energies[0], energies[energies.len() - 1]);
        match policy {
            RangePolicy::Reject => {
                return Err(EvaluationError::OutOfRangeEnergy { energy, min, max });
            }
            RangePolicy::Clamp => {
                warn!(
                    energy,
                    min,
                    max,
                    ?edge,
                    "Energy outside tabulated range, clamping to grid edge."
                );
            }
        }
    }

    trace!(
        lower = bracket.lower,
        upper = bracket.upper,
        fraction = bracket.fraction,
        "Energy bracket located."
    );
    Ok(bracket)
}
