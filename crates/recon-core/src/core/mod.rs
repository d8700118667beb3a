//! # Core Module
//!
//! Stateless building blocks for angular-distribution reconstruction: grid
//! validation and bracketing, the interpolation primitive, Legendre series
//! evaluation, and the validated table types handed in by callers.
//!
//! ## Architecture
//!
//! - **Bracketing** ([`grid`]) - Strict-ascending validation and the lower-bound
//!   bracket search shared by the energy and cosine axes
//! - **Interpolation** ([`interpolation`]) - Linear and log-linear blending over a bracket
//! - **Legendre Series** ([`legendre`]) - Bonnet recursion and coefficient blending
//! - **Tables** ([`tables`]) - `LegendreTable`, `TabulatedTable` and `MuDistribution`
//!
//! Nothing in this module keeps state between calls or mutates its inputs.

pub mod grid;
pub mod interpolation;
pub mod legendre;
pub mod tables;
