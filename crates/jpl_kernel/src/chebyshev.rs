//! Chebyshev series evaluation.
//!
//! Value and first derivative in a single Clenshaw pass:
//!
//! ```text
//! b_k  = 2s·b_{k+1} − b_{k+2} + c_k
//! b'_k = 2·b_{k+1} + 2s·b'_{k+1} − b'_{k+2}
//! f    = c_0 + s·b_1 − b_2
//! f'   = b_1 + s·b'_1 − b'_2
//! ```

/// Evaluate `Σ c_k T_k(s)` and its derivative with respect to `s`.
///
/// `s` is the normalised time in [−1, 1]. Returns `(value, d_value/ds)`.
pub fn evaluate(coeffs: &[f64], s: f64) -> (f64, f64) {
    let Some((&c0, rest)) = coeffs.split_first() else {
        return (0.0, 0.0);
    };

    let two_s = 2.0 * s;
    let (mut b1, mut b2) = (0.0, 0.0);
    let (mut d1, mut d2) = (0.0, 0.0);

    for &c in rest.iter().rev() {
        let b0 = two_s * b1 - b2 + c;
        let d0 = 2.0 * b1 + two_s * d1 - d2;
        b2 = b1;
        b1 = b0;
        d2 = d1;
        d1 = d0;
    }

    (c0 + s * b1 - b2, b1 + s * d1 - d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-13;

    #[test]
    fn empty_series_is_zero() {
        assert_eq!(evaluate(&[], 0.3), (0.0, 0.0));
    }

    #[test]
    fn constant_has_zero_slope() {
        let (v, d) = evaluate(&[4.5], -0.2);
        assert!((v - 4.5).abs() < TOL);
        assert!(d.abs() < TOL);
    }

    #[test]
    fn quadratic_series() {
        // 1·T0 + 2·T1 + 3·T2 = 6s² + 2s − 2, derivative 12s + 2
        let s = 0.5;
        let (v, d) = evaluate(&[1.0, 2.0, 3.0], s);
        assert!((v - 0.5).abs() < TOL);
        assert!((d - 8.0).abs() < TOL);
    }

    #[test]
    fn quartic_against_closed_form() {
        // T4 = 8s⁴ − 8s² + 1, T4' = 32s³ − 16s
        let s: f64 = -0.35;
        let (v, d) = evaluate(&[0.0, 0.0, 0.0, 0.0, 2.0], s);
        let t4 = 8.0 * s.powi(4) - 8.0 * s * s + 1.0;
        let dt4 = 32.0 * s.powi(3) - 16.0 * s;
        assert!((v - 2.0 * t4).abs() < TOL);
        assert!((d - 2.0 * dt4).abs() < TOL);
    }

    #[test]
    fn endpoints() {
        let c = [2.0, 3.0, 5.0, 7.0];
        assert!((evaluate(&c, 1.0).0 - 17.0).abs() < TOL);
        assert!((evaluate(&c, -1.0).0 - (2.0 - 3.0 + 5.0 - 7.0)).abs() < TOL);
    }
}
