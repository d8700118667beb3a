//! # Engine Module
//!
//! The evaluation pipelines that turn a validated table and a `(mu, energy)`
//! query into a single angular density value.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Range policy and energy interpolation scheme,
//!   built in code or loaded from TOML
//! - **Legendre Pipeline** ([`legendre`]) - Coefficient blending and series summation
//! - **Tabulated Pipeline** ([`tabulated`]) - Log-linear cosine interpolation followed
//!   by interpolation across incident energy
//! - **Error Handling** ([`error`]) - `EvaluationError`, one variant per failure kind
//!
//! Every pipeline is a pure function of its arguments. Tables are only borrowed,
//! so a single table can be shared by any number of threads.

pub mod config;
pub(crate) mod energy;
pub mod error;
pub mod legendre;
pub mod tabulated;
