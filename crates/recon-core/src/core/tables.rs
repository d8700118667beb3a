use super::grid::{InputError, validate_ascending};

/// Legendre coefficients `c_1..c_n` keyed by incident energy.
///
/// The energies are held as an explicit ascending sequence; construction
/// fails if the caller's entries are not strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendreTable {
    energies: Vec<f64>,
    coefficients: Vec<Vec<f64>>,
}

impl LegendreTable {
    pub fn new(entries: Vec<(f64, Vec<f64>)>) -> Result<Self, InputError> {
        let (energies, coefficients): (Vec<f64>, Vec<Vec<f64>>) = entries.into_iter().unzip();
        validate_ascending(&energies)?;
        for (energy_index, list) in coefficients.iter().enumerate() {
            if let Some((coefficient_index, &value)) =
                list.iter().enumerate().find(|(_, c)| !c.is_finite())
            {
                return Err(InputError::NonFiniteCoefficient {
                    energy_index,
                    coefficient_index,
                    value,
                });
            }
        }
        Ok(Self {
            energies,
            coefficients,
        })
    }

    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    pub fn coefficients(&self, index: usize) -> &[f64] {
        &self.coefficients[index]
    }
}

/// Sampled angular density `f(mu)` at one incident energy.
#[derive(Debug, Clone, PartialEq)]
pub struct MuDistribution {
    mu: Vec<f64>,
    f: Vec<f64>,
}

impl MuDistribution {
    pub fn new(mu: Vec<f64>, f: Vec<f64>) -> Result<Self, InputError> {
        if mu.len() != f.len() {
            return Err(InputError::LengthMismatch {
                mu: mu.len(),
                values: f.len(),
            });
        }
        validate_ascending(&mu)?;
        if let Some(&out) = mu.iter().find(|m| !(-1.0..=1.0).contains(*m)) {
            return Err(InputError::CosineOutOfDomain(out));
        }
        if let Some((index, &value)) = f.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(InputError::NonFinite { index, value });
        }
        Ok(Self { mu, f })
    }

    /// Builds a distribution from `(mu, f)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, InputError> {
        let (mu, f) = pairs.iter().copied().unzip();
        Self::new(mu, f)
    }

    pub fn mu(&self) -> &[f64] {
        &self.mu
    }

    pub fn f(&self) -> &[f64] {
        &self.f
    }
}

/// Tabulated angular distributions keyed by incident energy.
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedTable {
    energies: Vec<f64>,
    distributions: Vec<MuDistribution>,
}

impl TabulatedTable {
    pub fn new(entries: Vec<(f64, MuDistribution)>) -> Result<Self, InputError> {
        let (energies, distributions): (Vec<f64>, Vec<MuDistribution>) =
            entries.into_iter().unzip();
        validate_ascending(&energies)?;
        Ok(Self {
            energies,
            distributions,
        })
    }

    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    pub fn distribution(&self, index: usize) -> &MuDistribution {
        &self.distributions[index]
    }
}
