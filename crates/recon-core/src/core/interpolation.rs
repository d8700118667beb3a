use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InterpolationError {
    #[error("Log-linear interpolation requires positive values, found {0}")]
    NonPositive(f64),
}

/// Scheme used to blend two dependent values across a bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interpolation {
    /// `y = y0 + t * (y1 - y0)`
    #[default]
    Linear,
    /// `y = exp(ln y0 + t * (ln y1 - ln y0))`, exact for exponential trends.
    LogLinear,
}

impl Interpolation {
    /// Blends `y0` and `y1` at fractional position `t` in `[0, 1]`.
    #[inline]
    pub fn apply(self, y0: f64, y1: f64, t: f64) -> Result<f64, InterpolationError> {
        match self {
            Interpolation::Linear => Ok(linear(y0, y1, t)),
            Interpolation::LogLinear => log_linear(y0, y1, t),
        }
    }
}

#[inline]
pub fn linear(y0: f64, y1: f64, t: f64) -> f64 {
    y0 + t * (y1 - y0)
}

#[inline]
pub fn log_linear(y0: f64, y1: f64, t: f64) -> Result<f64, InterpolationError> {
    if y0 <= 0.0 || y0.is_nan() {
        return Err(InterpolationError::NonPositive(y0));
    }
    if y1 <= 0.0 || y1.is_nan() {
        return Err(InterpolationError::NonPositive(y1));
    }
    Ok((y0.ln() + t * (y1.ln() - y0.ln())).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE * a.abs().max(1.0)
    }

    #[test]
    fn linear_is_exact_for_linear_functions() {
        let f = |x: f64| 3.0 * x - 2.0;
        let (x0, x1) = (-1.0, 5.0);
        for x in [-1.0, 0.0, 0.25, 2.0, 4.9, 5.0] {
            let t = (x - x0) / (x1 - x0);
            assert!(f64_approx_equal(linear(f(x0), f(x1), t), f(x)));
        }
    }

    #[test]
    fn log_linear_is_exact_for_exponential_functions() {
        let f = |x: f64| 2.5 * (0.7 * x).exp();
        let (x0, x1) = (-1.0, 1.0);
        for x in [-1.0, -0.3, 0.0, 0.6, 1.0] {
            let t = (x - x0) / (x1 - x0);
            assert!(f64_approx_equal(log_linear(f(x0), f(x1), t).unwrap(), f(x)));
        }
    }

    #[test]
    fn log_linear_rejects_zero_value() {
        assert_eq!(
            log_linear(0.0, 1.0, 0.5),
            Err(InterpolationError::NonPositive(0.0))
        );
    }

    #[test]
    fn log_linear_rejects_negative_value() {
        assert_eq!(
            log_linear(1.0, -2.0, 0.5),
            Err(InterpolationError::NonPositive(-2.0))
        );
    }

    #[test]
    fn apply_dispatches_on_scheme() {
        assert_eq!(Interpolation::Linear.apply(1.0, 3.0, 0.5), Ok(2.0));
        let value = Interpolation::LogLinear.apply(1.0, 4.0, 0.5).unwrap();
        assert!(f64_approx_equal(value, 2.0));
    }
}
