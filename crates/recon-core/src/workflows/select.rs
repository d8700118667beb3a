use crate::core::grid::InputError;
use crate::core::tables::{LegendreTable, TabulatedTable};
use crate::engine::config::EvaluationConfig;
use crate::engine::error::EvaluationError;
use crate::engine::{legendre, tabulated};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Mode code that selects the Legendre representation in [`Selection::Mode`].
pub const LEGENDRE_MODE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Legendre,
    Tabulated,
}

/// How a combined evaluation picks its representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    /// Legendre when the code is [`LEGENDRE_MODE`], tabulated for any other code.
    Mode(i32),
    /// Legendre when `energy <= threshold`, tabulated above it.
    Threshold(f64),
}

impl Selection {
    pub fn representation(&self, energy: f64) -> Representation {
        match *self {
            Selection::Mode(LEGENDRE_MODE) => Representation::Legendre,
            Selection::Mode(_) => Representation::Tabulated,
            Selection::Threshold(threshold) if energy <= threshold => Representation::Legendre,
            Selection::Threshold(_) => Representation::Tabulated,
        }
    }
}

/// An angular distribution in one of the representations found in MF4 data.
#[derive(Debug, Clone, PartialEq)]
pub enum AngularDistribution {
    Legendre(LegendreTable),
    Tabulated(TabulatedTable),
    /// Legendre up to and including `threshold`, tabulated above it.
    Mixed {
        legendre: LegendreTable,
        tabulated: TabulatedTable,
        threshold: f64,
    },
}

impl AngularDistribution {
    /// Builds a distribution from an LTT flag and whichever tables were read.
    ///
    /// `1` is Legendre only, `2` is tabulated only, and `3` uses the Legendre
    /// table up to its highest energy and the tabulated table above it.
    pub fn from_ltt(
        ltt: i32,
        legendre: Option<LegendreTable>,
        tabulated: Option<TabulatedTable>,
    ) -> Result<Self, InputError> {
        let missing = |table| InputError::MissingTable { ltt, table };
        match ltt {
            1 => Ok(Self::Legendre(legendre.ok_or_else(|| missing("Legendre"))?)),
            2 => Ok(Self::Tabulated(
                tabulated.ok_or_else(|| missing("tabulated"))?,
            )),
            3 => {
                let legendre = legendre.ok_or_else(|| missing("Legendre"))?;
                let tabulated = tabulated.ok_or_else(|| missing("tabulated"))?;
                let threshold = *legendre
                    .energies()
                    .last()
                    .ok_or(InputError::EmptyGrid)?;
                Ok(Self::Mixed {
                    legendre,
                    tabulated,
                    threshold,
                })
            }
            other => Err(InputError::UnsupportedLtt(other)),
        }
    }
}

/// Evaluates angular densities under a fixed [`EvaluationConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: EvaluationConfig,
}

impl Evaluator {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn legendre(
        &self,
        mu: f64,
        energy: f64,
        table: &LegendreTable,
    ) -> Result<f64, EvaluationError> {
        legendre::evaluate(mu, energy, table, &self.config)
    }

    pub fn tabulated(
        &self,
        mu: f64,
        energy: f64,
        table: &TabulatedTable,
    ) -> Result<f64, EvaluationError> {
        tabulated::evaluate(mu, energy, table, &self.config)
    }

    #[instrument(level = "trace", skip_all, fields(mu = mu, energy = energy, selection = ?selection))]
    pub fn combined(
        &self,
        mu: f64,
        energy: f64,
        legendre_table: &LegendreTable,
        tabulated_table: &TabulatedTable,
        selection: Selection,
    ) -> Result<f64, EvaluationError> {
        if let Selection::Threshold(threshold) = selection {
            if !threshold.is_finite() {
                return Err(InputError::NonFiniteQuery {
                    name: "threshold_energy",
                    value: threshold,
                }
                .into());
            }
        }
        let representation = selection.representation(energy);
        debug!(?representation, "Representation selected.");
        match representation {
            Representation::Legendre => self.legendre(mu, energy, legendre_table),
            Representation::Tabulated => self.tabulated(mu, energy, tabulated_table),
        }
    }

    pub fn evaluate(
        &self,
        distribution: &AngularDistribution,
        mu: f64,
        energy: f64,
    ) -> Result<f64, EvaluationError> {
        match distribution {
            AngularDistribution::Legendre(table) => self.legendre(mu, energy, table),
            AngularDistribution::Tabulated(table) => self.tabulated(mu, energy, table),
            AngularDistribution::Mixed {
                legendre,
                tabulated,
                threshold,
            } => self.combined(
                mu,
                energy,
                legendre,
                tabulated,
                Selection::Threshold(*threshold),
            ),
        }
    }

    /// Evaluates independent `(mu, energy)` queries against one distribution.
    ///
    /// Results keep the order of `queries`; the first failure is returned.
    #[instrument(level = "debug", skip_all, fields(queries = queries.len()))]
    pub fn evaluate_many(
        &self,
        distribution: &AngularDistribution,
        queries: &[(f64, f64)],
    ) -> Result<Vec<f64>, EvaluationError> {
        #[cfg(not(feature = "parallel"))]
        let iterator = queries.iter();

        #[cfg(feature = "parallel")]
        let iterator = queries.par_iter();

        iterator
            .map(|&(mu, energy)| self.evaluate(distribution, mu, energy))
            .collect()
    }
}

pub fn evaluate_legendre(
    mu: f64,
    energy: f64,
    table: &LegendreTable,
) -> Result<f64, EvaluationError> {
    Evaluator::default().legendre(mu, energy, table)
}

pub fn evaluate_tabulated(
    mu: f64,
    energy: f64,
    table: &TabulatedTable,
) -> Result<f64, EvaluationError> {
    Evaluator::default().tabulated(mu, energy, table)
}

/// Legendre at or below `threshold_energy`, tabulated above it.
pub fn evaluate_combined(
    mu: f64,
    energy: f64,
    legendre_table: &LegendreTable,
    tabulated_table: &TabulatedTable,
    threshold_energy: f64,
) -> Result<f64, EvaluationError> {
    Evaluator::default().combined(
        mu,
        energy,
        legendre_table,
        tabulated_table,
        Selection::Threshold(threshold_energy),
    )
}

/// Legendre when `mode == 1`, tabulated otherwise. No threshold is checked.
pub fn evaluate_combined_mode(
    mu: f64,
    energy: f64,
    legendre_table: &LegendreTable,
    tabulated_table: &TabulatedTable,
    mode: i32,
) -> Result<f64, EvaluationError> {
    Evaluator::default().combined(
        mu,
        energy,
        legendre_table,
        tabulated_table,
        Selection::Mode(mode),
    )
}
