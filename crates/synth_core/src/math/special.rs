//! Log-gamma special functions.
//!
//! The discrete probability mass functions are evaluated in log space to
//! stay finite for large arguments, so the primitives here are `ln Γ`,
//! `ln k!` and `ln C(n, k)`.

/// Lanczos approximation of `ln Γ(x)`.
///
/// Relative error below 2e-10 for x > 0. Negative non-integer arguments
/// are handled through the reflection formula.
///
/// # Examples
/// ```
/// use synth_core::math::special::ln_gamma;
///
/// // Γ(5) = 4! = 24
/// assert!((ln_gamma(5.0) - 24.0_f64.ln()).abs() < 1e-10);
/// ```
pub fn ln_gamma(x: f64) -> f64 {
    const COEFFICIENTS: [f64; 9] = [
        0.999_999_999_999_809_9,
        676.520_368_121_885_1,
        -1_259.139_216_722_402_8,
        771.323_428_777_653_1,
        -176.615_029_162_140_6,
        12.507_343_278_686_905,
        -0.138_571_095_265_720_12,
        9.984_369_578_019_572e-6,
        1.505_632_735_149_311_6e-7,
    ];
    const G: f64 = 7.0;

    let pi = std::f64::consts::PI;

    // Reflection formula for the left half-plane
    if x < 0.5 {
        return (pi / (pi * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let mut sum = COEFFICIENTS[0];
    for (i, &c) in COEFFICIENTS[1..].iter().enumerate() {
        sum += c / (x + i as f64 + 1.0);
    }

    let t = x + G + 0.5;
    0.5 * (2.0 * pi).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}

/// `ln k!` via `ln Γ(k + 1)`.
#[inline]
pub fn ln_factorial(k: f64) -> f64 {
    ln_gamma(k + 1.0)
}

/// Log binomial coefficient `ln C(n, k)`.
///
/// Returns negative infinity for `k` outside `[0, n]`, matching a zero
/// coefficient under exponentiation.
pub fn ln_choose(n: f64, k: f64) -> f64 {
    if k < 0.0 || k > n {
        return f64::NEG_INFINITY;
    }
    ln_gamma(n + 1.0) - ln_gamma(k + 1.0) - ln_gamma(n - k + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ln_gamma_small_integers() {
        // Γ(n) = (n-1)!
        let factorials: [f64; 7] = [1.0, 1.0, 2.0, 6.0, 24.0, 120.0, 720.0];
        for (i, &expected) in factorials.iter().enumerate() {
            let n = (i + 1) as f64;
            assert_relative_eq!(ln_gamma(n), expected.ln(), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_ln_gamma_half() {
        // Γ(1/2) = √π
        assert_relative_eq!(
            ln_gamma(0.5),
            std::f64::consts::PI.sqrt().ln(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_ln_choose_pascal_row() {
        // C(5, k) = 1, 5, 10, 10, 5, 1
        let expected: [f64; 6] = [1.0, 5.0, 10.0, 10.0, 5.0, 1.0];
        for (k, &c) in expected.iter().enumerate() {
            assert_relative_eq!(ln_choose(5.0, k as f64), c.ln(), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_ln_choose_out_of_range() {
        assert_eq!(ln_choose(5.0, 6.0), f64::NEG_INFINITY);
        assert_eq!(ln_choose(5.0, -1.0), f64::NEG_INFINITY);
        assert_eq!(ln_choose(5.0, 6.0).exp(), 0.0);
    }

    #[test]
    fn test_ln_factorial() {
        assert_relative_eq!(ln_factorial(10.0), 3_628_800.0_f64.ln(), epsilon = 1e-10);
    }
}
