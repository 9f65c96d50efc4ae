//! expm1f(x) implementation.
//!
//! Three regimes:
//! - |x| < 2^-25: x + x^2 with a single rounding.
//! - |x| < 2^-4: x + x^2 * P(x), with x kept exact as the high word.
//! - otherwise: the expf reduction x = hi + mid + lo, then
//!   exp(hi) * exp(mid) * exp(lo) - 1.

use super::common_constants::{EXP_M1, EXP_M2};
use super::{finish_f32, overflow};
use crate::fputil::env::FpEnv;
use crate::fputil::except_table::{ExceptValues, ExceptionalCase};
use crate::fputil::fp_bits::FPBits;
use crate::fputil::poly::polyeval;
use crate::fputil::rounding::{multiply_add_f32, round_sum_to_f32};

/// (expm1(x) - x) / x^2 on |x| <= 2^-4.
const EXPM1_TAIL_POLY: [f64; 7] = [
    0.5,
    f64::from_bits(0x3fc55555555559ab),
    f64::from_bits(0x3fa55555555551a7),
    f64::from_bits(0x3f8111110f70f2a4),
    f64::from_bits(0x3f56c16c17639e82),
    f64::from_bits(0x3f2a02526febbea6),
    f64::from_bits(0x3efa01dc40888fcd),
];

/// exp(lo) on |lo| <= 2^-8.
const EXP_POLY: [f64; 8] = [
    1.0,
    1.0,
    0.5,
    f64::from_bits(0x3fc5555555555555),
    f64::from_bits(0x3fa55555555553a0),
    f64::from_bits(0x3f81111111204dfc),
    f64::from_bits(0x3f56c16cb2da593a),
    f64::from_bits(0x3f29ff1648996d2e),
];

pub(super) const EXPM1F_EXCEPTS: ExceptValues<u32, 2> = ExceptValues::new([
    // x = 0x1.84a5bap-4, expm1f(x) = 0x1.97aed6p-4 (RN)
    ExceptionalCase { input: 0x3dc252dd, toward_zero: 0x3dcbd76b, upward: 1, downward: 0, to_nearest: 0 },
    // x = -0x1.838d96p-4, expm1f(x) = -0x1.71c884p-4 (RN)
    ExceptionalCase { input: 0xbdc1c6cb, toward_zero: 0xbdb8e441, upward: 0, downward: 1, to_nearest: 1 },
]);

/// `expm1(x) - x` for |x| < 2^-4, to about 2^-60 relative to x^2.
#[inline(always)]
pub(super) fn expm1_tail(xd: f64) -> f64 {
    polyeval(xd, &EXPM1_TAIL_POLY) * (xd * xd)
}

#[inline]
pub fn expm1f(x: f32, env: &mut FpEnv) -> f32 {
    let bits = FPBits::new(x);
    let x_u = bits.bits();
    let mode = env.rounding();

    if bits.is_nan() {
        return x + x;
    }

    // x <= log(2^-25), including -inf: the result is -1 rounded.
    if x_u >= 0xc18a_a123 {
        if bits.is_inf() {
            return -1.0;
        }
        return round_sum_to_f32(-1.0, f64::from_bits(0x3c00_0000_0000_0000), mode);
    }
    // x >= 89
    if x_u >= 0x42b2_0000 && !bits.sign() {
        if bits.is_inf() {
            return x;
        }
        return overflow(false, env);
    }

    let exponent = bits.biased_exponent();
    if exponent < 123 {
        if exponent < 102 {
            if x_u == 0x8000_0000 {
                return x;
            }
            // |x| < 2^-25: expm1(x) and x + x^2 round identically.
            return multiply_add_f32(x, x, x, mode);
        }
        let xd = x as f64;
        return finish_f32(xd, expm1_tail(xd), env);
    }

    if let Some(r) = EXPM1F_EXCEPTS.lookup(x_u, mode) {
        return f32::from_bits(r);
    }

    let mut x_hi = (x * 128.0 + if bits.sign() { -0.5 } else { 0.5 }) as i32;
    let lo = (x - x_hi as f32 * 0.0078125) as f64;
    x_hi += 104 << 7;
    let exp_hi_mid =
        f64::from_bits(EXP_M1[(x_hi >> 7) as usize]) * f64::from_bits(EXP_M2[(x_hi & 0x7f) as usize]);

    finish_f32(exp_hi_mid * polyeval(lo, &EXP_POLY) - 1.0, 0.0, env)
}
