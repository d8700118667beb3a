//! # Workflows Module
//!
//! User-facing entry points for evaluating angular distributions.
//!
//! ## Overview
//!
//! A query `(mu, energy)` is routed to the Legendre or the tabulated pipeline by a
//! [`select::Selection`]: either a discrete mode code (`1` selects Legendre, any other
//! code selects tabulated data) or a threshold energy (Legendre at or below it,
//! tabulated above it). Both conventions stay available; callers pick one explicitly.
//!
//! ```ignore
//! use recon::workflows::select::{evaluate_combined, evaluate_combined_mode};
//!
//! let by_threshold = evaluate_combined(mu, energy, &legendre, &tabulated, 2.0e6)?;
//! let by_mode = evaluate_combined_mode(mu, energy, &legendre, &tabulated, 1)?;
//! ```
//!
//! [`select::AngularDistribution`] bundles the tables with their selection rule, and
//! [`select::Evaluator::evaluate_many`] sweeps many independent queries over one
//! distribution, in parallel when the `parallel` feature is enabled.

pub mod select;
