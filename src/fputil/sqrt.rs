//! Correctly rounded square root by integer digit recurrence.

use super::env::RoundingMode;
use super::fp_bits::{BitStorage, FPBits, FloatFormat};

/// `floor(sqrt(n))` and the remainder `n - root^2`, one result bit per step.
#[inline]
fn isqrt_rem(n: u128) -> (u128, u128) {
    if n == 0 {
        return (0, 0);
    }
    let mut rem = n;
    let mut root = 0u128;
    // Highest power of four not above n.
    let mut bit = 1u128 << ((127 - n.leading_zeros()) & !1);
    while bit != 0 {
        if rem >= root + bit {
            rem -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }
    (root, rem)
}

/// Square root of `x` rounded in direction `mode`, for formats with an
/// implicit leading bit and at most 52 fraction bits.
///
/// IEEE special cases: `sqrt(-0) = -0`, negative or NaN input gives NaN.
pub fn sqrt_round<F: FloatFormat>(x: F, mode: RoundingMode) -> F {
    let bits = FPBits::new(x);
    if bits.is_nan() {
        return FPBits::<F>::build_quiet_nan(bits.mantissa()).get_val();
    }
    if bits.is_zero() {
        return x;
    }
    if bits.sign() {
        return FPBits::<F>::build_quiet_nan(F::Storage::ZERO).get_val();
    }
    if bits.is_inf() {
        return x;
    }

    let mw = F::MANTISSA_WIDTH;
    let mut m = bits.mantissa().into_u128();
    let mut e = bits.unbiased_exponent() - mw as i32;
    if bits.is_subnormal() {
        let shift = m.leading_zeros() - (127 - mw);
        m <<= shift;
        e -= shift as i32;
    } else {
        m |= 1u128 << mw;
    }
    // x = m * 2^e with m in [2^mw, 2^(mw+1)). Scale so the exponent is even
    // and the root has exactly mw + 1 bits.
    let s = mw + (e - mw as i32).rem_euclid(2) as u32;
    let (mut q, rem) = isqrt_rem(m << s);
    let mut res_exp = (e - s as i32) / 2 + mw as i32;

    let round_up = match mode {
        // (q + 1/2)^2 = q^2 + q + 1/4 is never an integer, so no ties.
        RoundingMode::ToNearest => rem > q,
        RoundingMode::Upward => rem != 0,
        RoundingMode::Downward | RoundingMode::TowardZero => false,
    };
    if round_up {
        q += 1;
        if q == 1u128 << (mw + 1) {
            q >>= 1;
            res_exp += 1;
        }
    }
    let biased = (res_exp + F::EXPONENT_BIAS) as u32;
    FPBits::<F>::from_parts(false, biased, F::Storage::from_u128(q)).get_val()
}
