//! Small numerically-stable math utilities used across the PMF code.

use statrs::function::factorial;

/// `ln(n!)`.
///
/// Exact table up to `170!`, `ln Γ(n + 1)` beyond. `ln_gamma(1.0)` alone is
/// off by an ulp, which would push `exp(logpmf)` above 1 for point masses.
#[inline]
pub fn ln_factorial(n: u64) -> f64 {
    factorial::ln_factorial(n)
}

/// `ln C(n, k)` without forming the factorials.
///
/// Callers guarantee `k <= n`.
#[inline]
pub fn ln_choose(n: u64, k: u64) -> f64 {
    // ln(n choose k) = ln Γ(n+1) - ln Γ(k+1) - ln Γ(n-k+1)
    ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k)
}

/// Compensated (Neumaier) summation.
///
/// Keeps the running error term so long PMF tails of tiny masses still add
/// up to the same total regardless of their magnitude spread.
pub fn neumaier_sum(xs: impl IntoIterator<Item = f64>) -> f64 {
    let mut sum = 0.0_f64;
    let mut comp = 0.0_f64;
    for x in xs {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            comp += (sum - t) + x;
        } else {
            comp += (x - t) + sum;
        }
        sum = t;
    }
    sum + comp
}
