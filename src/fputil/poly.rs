//! Horner evaluation of fixed polynomials.

use super::multiply_add::multiply_add;

/// `c[0] + x*(c[1] + x*(c[2] + ...))` with one rounding per step.
///
/// The binary32 kernels evaluate in binary64 with this form, which keeps the
/// results identical on every target.
#[inline(always)]
pub fn polyeval(x: f64, coeffs: &[f64]) -> f64 {
    let Some((&last, rest)) = coeffs.split_last() else {
        return 0.0;
    };
    let mut acc = last;
    for &c in rest.iter().rev() {
        acc = acc * x + c;
    }
    acc
}

/// Same as [`polyeval`] but accumulates through [`multiply_add`].
#[inline(always)]
pub fn polyeval_fma(x: f64, coeffs: &[f64]) -> f64 {
    let Some((&last, rest)) = coeffs.split_last() else {
        return 0.0;
    };
    let mut acc = last;
    for &c in rest.iter().rev() {
        acc = multiply_add(acc, x, c);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyeval_matches_expansion() {
        let c = [1.0, -2.0, 0.5, 3.0];
        for &x in &[0.0, 1.0, -1.5, 0.25, 10.0] {
            let expected = 1.0 - 2.0 * x + 0.5 * x * x + 3.0 * x * x * x;
            assert_eq!(polyeval(x, &c), expected, "x = {x}");
            assert_eq!(polyeval_fma(x, &c), expected, "x = {x}");
        }
    }

    #[test]
    fn test_polyeval_degenerate() {
        assert_eq!(polyeval(3.0, &[]), 0.0);
        assert_eq!(polyeval(3.0, &[7.5]), 7.5);
        assert_eq!(polyeval_fma(-2.0, &[1.0, 1.0]), -1.0);
    }
}
