//! Numerical helpers on `ndarray` arrays.

pub(crate) mod py;

use ndarray::{Array1, ArrayView1, Zip};
use num_traits::Float;
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

/// Divide two arrays element-wise, replacing non-finite results.
///
/// - `0 / 0` and any NaN quotient are replaced by `nan`.
/// - `x / 0` with `x > 0`, or any other positive infinite quotient, is replaced by `posinf`.
/// - `x / 0` with `x < 0`, or any other negative infinite quotient, is replaced by `neginf`.
///
/// The sign of a zero denominator is ignored.
///
/// # Examples
/// ```rust
/// # use detquantlib::utils::divide_with_nan;
/// # use ndarray::arr1;
/// let n = arr1(&[10.0, 10.0, -10.0, 0.0]);
/// let d = arr1(&[4.0, 0.0, 0.0, 0.0]);
/// let result = divide_with_nan(&n.view(), &d.view(), -1.0, 1e9, -1e9).unwrap();
/// assert_eq!(result, arr1(&[2.5, 1e9, -1e9, -1.0]));
/// ```
pub fn divide_with_nan<T: Float>(
    numerator: &ArrayView1<T>,
    denominator: &ArrayView1<T>,
    nan: T,
    posinf: T,
    neginf: T,
) -> Result<Array1<T>, PyErr> {
    if numerator.len() != denominator.len() {
        return Err(PyValueError::new_err(format!(
            "`numerator` and `denominator` must have the same length, got {} and {}.",
            numerator.len(),
            denominator.len()
        )));
    }
    Ok(Zip::from(numerator)
        .and(denominator)
        .map_collect(|&n, &d| {
            let q = if d.is_zero() {
                if n > T::zero() {
                    T::infinity()
                } else if n < T::zero() {
                    T::neg_infinity()
                } else {
                    T::nan()
                }
            } else {
                n / d
            };
            if q.is_nan() {
                nan
            } else if q == T::infinity() {
                posinf
            } else if q == T::neg_infinity() {
                neginf
            } else {
                q
            }
        }))
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    fn assert_nan_eq(result: &Array1<f64>, expected: &Array1<f64>) {
        assert_eq!(result.len(), expected.len());
        for (r, e) in result.iter().zip(expected.iter()) {
            if e.is_nan() {
                assert!(r.is_nan(), "expected NaN, got {}", r);
            } else {
                assert_eq!(r, e);
            }
        }
    }

    fn fixture_arrays() -> (Array1<f64>, Array1<f64>) {
        (
            arr1(&[10.0, 0.0, 10.0, 10.0, -10.0, 0.0, -0.0, 0.0]),
            arr1(&[10.0, 10.0, 0.0, -0.0, 0.0, 0.0, 0.0, -0.0]),
        )
    }

    #[test]
    fn test_divide_with_nan_defaults() {
        let (n, d) = fixture_arrays();
        let result = divide_with_nan(&n.view(), &d.view(), f64::NAN, f64::NAN, f64::NAN).unwrap();
        let nan = f64::NAN;
        assert_nan_eq(&result, &arr1(&[1.0, 0.0, nan, nan, nan, nan, nan, nan]));
    }

    #[test]
    fn test_divide_with_nan_replacements() {
        let (n, d) = fixture_arrays();
        let nan = f64::NAN;

        let result = divide_with_nan(&n.view(), &d.view(), -1.0, nan, nan).unwrap();
        assert_nan_eq(&result, &arr1(&[1.0, 0.0, nan, nan, nan, -1.0, -1.0, -1.0]));

        let result = divide_with_nan(&n.view(), &d.view(), nan, -1.0, nan).unwrap();
        assert_nan_eq(&result, &arr1(&[1.0, 0.0, -1.0, -1.0, nan, nan, nan, nan]));

        let result = divide_with_nan(&n.view(), &d.view(), nan, nan, -1.0).unwrap();
        assert_nan_eq(&result, &arr1(&[1.0, 0.0, nan, nan, -1.0, nan, nan, nan]));
    }

    #[test]
    fn test_divide_with_nan_f32_and_mismatch() {
        let n = arr1(&[1.0_f32, 3.0]);
        let d = arr1(&[2.0_f32, 0.0]);
        let result = divide_with_nan(&n.view(), &d.view(), 0.0, 0.0, 0.0).unwrap();
        assert_eq!(result, arr1(&[0.5_f32, 0.0]));

        let short = arr1(&[1.0_f32]);
        assert!(divide_with_nan(&n.view(), &short.view(), 0.0, 0.0, 0.0).is_err());
    }
}
