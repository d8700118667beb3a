//! # recon Core Library
//!
//! Reconstruction of the angular scattering density `sigma(mu, energy)` of a nuclear
//! reaction from pre-tabulated angular-distribution data, given either as Legendre
//! coefficients or as sampled `(mu, f)` pairs at a set of incident energies.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Validated table types, bracket search on ascending
//!   grids, the linear/log-linear interpolation primitive and Legendre series evaluation.
//!
//! - **[`engine`]: The Pipelines.** The Legendre and tabulated evaluation pipelines,
//!   the evaluation configuration (range policy, energy interpolation scheme) and the
//!   error type shared by every evaluation.
//!
//! - **[`workflows`]: The Public API.** Representation selection by mode code or
//!   threshold energy, the tagged `AngularDistribution`, and batch evaluation.
//!
//! Parsing of evaluated nuclear data files is left to the caller; every entry point
//! takes already-parsed tables and holds no state between calls.

pub mod core;
pub mod engine;
pub mod workflows;
