//! Series construction and integration helpers.
//!
//! Generic over `T: Float` so the same routines serve `f64` pipelines
//! and any other floating representation.

use num_traits::Float;

/// Generates `count` evenly spaced values across `[min, max]`, endpoints
/// inclusive.
///
/// The final element is set to `max` exactly rather than accumulated, so
/// endpoint coverage holds for any `count >= 2` regardless of rounding.
/// `count == 1` yields `[min]`; `count == 0` yields an empty vector.
///
/// # Examples
/// ```
/// use synth_core::math::series::linspace;
///
/// let xs = linspace(0.0_f64, 5.0, 6);
/// assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn linspace<T: Float>(min: T, max: T, count: usize) -> Vec<T> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / T::from(count - 1).unwrap();
            let mut out: Vec<T> = (0..count)
                .map(|i| min + step * T::from(i).unwrap())
                .collect();
            out[count - 1] = max;
            out
        }
    }
}

/// Generates the distinct integer lattice under an evenly spaced sweep
/// of `[min, max]`.
///
/// Each of the `count` evenly spaced values is floored to its integer
/// part; consecutive duplicates are dropped. Because the sweep is
/// non-decreasing, the result is strictly increasing and unique. When the
/// interval holds fewer distinct integers than `count`, the output is
/// simply shorter, and the caller's effective sample count shrinks to
/// match.
///
/// # Examples
/// ```
/// use synth_core::math::series::integer_lattice;
///
/// // 20 requested samples over (0, 10) collapse onto 11 lattice points
/// let xs = integer_lattice(0.0, 10.0, 20);
/// assert_eq!(xs.len(), 11);
/// assert_eq!(xs[0], 0.0);
/// assert_eq!(xs[10], 10.0);
/// ```
pub fn integer_lattice(min: f64, max: f64, count: usize) -> Vec<f64> {
    let mut out: Vec<f64> = Vec::with_capacity(count);
    for value in linspace(min, max, count) {
        let floored = value.floor();
        if out.last().map_or(true, |&last| floored > last) {
            out.push(floored);
        }
    }
    out
}

/// Running trapezoidal integral of `y` against `x`, anchored at zero.
///
/// `out[0] == 0` and
/// `out[i] = out[i-1] + (y[i] + y[i-1]) * (x[i] - x[i-1]) / 2`.
/// This is the discrete cumulative transform used to turn a density
/// curve into an approximate CDF.
///
/// # Examples
/// ```
/// use synth_core::math::series::cumulative_trapezoid;
///
/// // Integrating y = 2x from 0 gives x^2
/// let x = [0.0_f64, 1.0, 2.0, 3.0];
/// let y = [0.0_f64, 2.0, 4.0, 6.0];
/// assert_eq!(cumulative_trapezoid(&x, &y), vec![0.0, 1.0, 4.0, 9.0]);
/// ```
pub fn cumulative_trapezoid<T: Float>(x: &[T], y: &[T]) -> Vec<T> {
    let len = x.len().min(y.len());
    let half = T::from(0.5).unwrap();

    let mut out = Vec::with_capacity(len);
    let mut acc = T::zero();
    for i in 0..len {
        if i > 0 {
            acc = acc + (y[i] + y[i - 1]) * (x[i] - x[i - 1]) * half;
        }
        out.push(acc);
    }
    out
}
