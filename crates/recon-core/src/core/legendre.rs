/// Evaluates the Legendre polynomial `P_l(x)` with Bonnet's recursion
/// `(k + 1) P_{k+1} = (2k + 1) x P_k - k P_{k-1}`.
pub fn legendre(l: usize, x: f64) -> f64 {
    if l == 0 {
        return 1.0;
    }

    let mut p_prev = 1.0;
    let mut p_curr = x;
    for k in 1..l {
        let p_next = ((2 * k + 1) as f64 * x * p_curr - k as f64 * p_prev) / (k + 1) as f64;
        p_prev = p_curr;
        p_curr = p_next;
    }
    p_curr
}

/// Evaluates `1 + sum_{l=1}^{n} c_l P_l(mu)` for stored coefficients `c_1..c_n`.
///
/// The zeroth coefficient is never stored and is fixed to one. All degrees are
/// produced by a single pass of the recurrence.
pub fn legendre_series(coefficients: &[f64], mu: f64) -> f64 {
    let mut sum = 1.0;
    let mut p_prev = 1.0;
    let mut p_curr = mu;

    for (k, &c) in coefficients.iter().enumerate() {
        let l = k + 1;
        if l > 1 {
            let n = (l - 1) as f64;
            let p_next = ((2.0 * n + 1.0) * mu * p_curr - n * p_prev) / (n + 1.0);
            p_prev = p_curr;
            p_curr = p_next;
        }
        sum += c * p_curr;
    }
    sum
}

/// Linearly blends two coefficient lists term by term, padding the shorter one
/// with zeros.
pub fn blend_coefficients(lower: &[f64], upper: &[f64], t: f64) -> Vec<f64> {
    let len = lower.len().max(upper.len());
    (0..len)
        .map(|i| {
            let a = lower.get(i).copied().unwrap_or(0.0);
            let b = upper.get(i).copied().unwrap_or(0.0);
            super::interpolation::linear(a, b, t)
        })
        .collect()
}
