//! expf(x) implementation.
//!
//! For -104 < x < 89 the argument is split as x = hi + mid + lo with hi an
//! integer, mid a multiple of 2^-7 and |lo| <= 2^-8:
//! exp(x) = exp(hi) * exp(mid) * exp(lo). exp(hi) and exp(mid) come from
//! tables, exp(lo) from a degree-4 polynomial. Arguments below 2^-4 in
//! magnitude skip the tables and keep 1 + x exact in a double-double sum.

use super::common_constants::{EXP_M1, EXP_M2};
use super::expm1f::expm1_tail;
use super::{finish_f32, overflow, underflow};
use crate::fputil::env::FpEnv;
use crate::fputil::except_table::{ExceptValues, ExceptionalCase};
use crate::fputil::fp_bits::FPBits;
use crate::fputil::poly::polyeval;
use crate::fputil::rounding::multiply_add_f32;

/// exp(lo) on |lo| <= 2^-8.
const EXP_POLY: [f64; 5] = [
    1.0,
    f64::from_bits(0x3feffffffffff777),
    f64::from_bits(0x3fe000000000071c),
    f64::from_bits(0x3fc555566668e5e7),
    f64::from_bits(0x3fa55555555ef243),
];

pub(super) const EXPF_EXCEPTS: ExceptValues<u32, 1> = ExceptValues::new([
    // x = -0x1.6d7b18p+5, expf(x) = 0x1.108a58p-66 (RZ)
    ExceptionalCase { input: 0xc236bd8c, toward_zero: 0x1e88452c, upward: 1, downward: 0, to_nearest: 1 },
]);

#[inline]
pub fn expf(x: f32, env: &mut FpEnv) -> f32 {
    let bits = FPBits::new(x);
    let x_u = bits.bits();
    let x_abs = x_u & 0x7fff_ffff;
    let mode = env.rounding();

    if bits.is_inf_or_nan() {
        if bits.is_nan() {
            return x + x;
        }
        return if bits.sign() { 0.0 } else { x };
    }

    if let Some(r) = EXPF_EXCEPTS.lookup(x_u, mode) {
        return f32::from_bits(r);
    }

    if x_abs < 0x3d80_0000 {
        // |x| < 2^-25: 1 + x, rounded once.
        if bits.biased_exponent() <= 101 {
            return multiply_add_f32(x, 1.0, 1.0, mode);
        }
        // |x| < 2^-4: 1 + x is exact in binary64, the tail carries the rest.
        let xd = x as f64;
        return finish_f32(1.0 + xd, expm1_tail(xd), env);
    }

    // x <= log(2^-150)
    if x_u >= 0xc2cf_f1b5 {
        return underflow(false, env);
    }
    // x >= 89
    if x_u >= 0x42b2_0000 && !bits.sign() {
        return overflow(false, env);
    }

    // x_hi = round(x * 2^7), halfway cases away from zero.
    let mut x_hi = (x * 128.0 + if bits.sign() { -0.5 } else { 0.5 }) as i32;
    let lo = (x - x_hi as f32 * 0.0078125) as f64;
    x_hi += 104 << 7;
    let exp_hi = f64::from_bits(EXP_M1[(x_hi >> 7) as usize]);
    let exp_mid = f64::from_bits(EXP_M2[(x_hi & 0x7f) as usize]);

    finish_f32(exp_hi * exp_mid * polyeval(lo, &EXP_POLY), 0.0, env)
}
