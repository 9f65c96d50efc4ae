//! exp2f(x) implementation.
//!
//! Writes x = hi + mid + lo with hi an integer, mid a multiple of 2^-6 and
//! |lo| <= 2^-7. 2^hi goes straight into the exponent field, 2^mid comes from
//! a 64-entry table and 2^lo from a degree-4 polynomial. Everything is
//! evaluated in binary64 and rounded once in the caller's direction.

use super::common_constants::EXP2_MID;
use super::{finish_f32, overflow, underflow};
use crate::fputil::env::FpEnv;
use crate::fputil::except_table::{ExceptValues, ExceptionalCase};
use crate::fputil::fp_bits::FPBits;
use crate::fputil::poly::polyeval;
use crate::fputil::rounding::multiply_add_f32;

/// 2^lo on |lo| <= 2^-7.
const EXP2_POLY: [f64; 5] = [
    1.0,
    f64::from_bits(0x3fe62e42fefa2417),
    f64::from_bits(0x3fcebfbdff82f809),
    f64::from_bits(0x3fac6b0b92131c47),
    f64::from_bits(0x3f83b2ab6fb568a3),
];

pub(super) const EXP2F_EXCEPTS: ExceptValues<u32, 6> = ExceptValues::new([
    // x = 0x1.853a6ep-9, exp2f(x) = 0x1.00870ap+0 (RN)
    ExceptionalCase { input: 0x3b429d37, toward_zero: 0x3f804384, upward: 1, downward: 0, to_nearest: 1 },
    // x = 0x1.05535ap-7, exp2f(x) = 0x1.016b46p+0 (RN)
    ExceptionalCase { input: 0x3c02a9ad, toward_zero: 0x3f80b5a3, upward: 1, downward: 0, to_nearest: 0 },
    // x = 0x1.4cdc4cp-6, exp2f(x) = 0x1.03a16ap+0 (RN)
    ExceptionalCase { input: 0x3ca66e26, toward_zero: 0x3f81d0b4, upward: 1, downward: 0, to_nearest: 1 },
    // x = 0x1.254504p-4, exp2f(x) = 0x1.0d0686p+0 (RN)
    ExceptionalCase { input: 0x3d92a282, toward_zero: 0x3f868343, upward: 1, downward: 0, to_nearest: 0 },
    // x = -0x1.a7a04cp-14, exp2f(x) = 0x1.fff6d2p-1 (RN)
    ExceptionalCase { input: 0xb8d3d026, toward_zero: 0x3f7ffb69, upward: 1, downward: 0, to_nearest: 0 },
    // x = -0x1.e7526ep-6, exp2f(x) = 0x1.f58d62p-1 (RN)
    ExceptionalCase { input: 0xbcf3a937, toward_zero: 0x3f7ac6b0, upward: 1, downward: 0, to_nearest: 1 },
]);

#[inline]
pub fn exp2f(x: f32, env: &mut FpEnv) -> f32 {
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

    if let Some(r) = EXP2F_EXCEPTS.lookup(x_u, mode) {
        return f32::from_bits(r);
    }

    // |x| <= 2^-26: 1 + x, rounded once.
    if x_abs <= 0x3280_0000 {
        return multiply_add_f32(x, 1.0, 1.0, mode);
    }
    // x >= 128
    if x_u >= 0x4300_0000 && !bits.sign() {
        return overflow(false, env);
    }
    // x <= -150
    if x_u >= 0xc316_0000 {
        return underflow(false, env);
    }

    // x_hi = round(x * 2^6), halfway cases away from zero.
    let x_hi = (x * 64.0 + if bits.sign() { -0.5 } else { 0.5 }) as i32;
    let exp_hi = f64::from_bits((((x_hi >> 6) + 1023) as u64) << 52);
    let exp_hi_mid = exp_hi * f64::from_bits(EXP2_MID[(x_hi & 63) as usize]);
    // Exact: x_hi * 2^-6 and x share their leading bits.
    let lo = (x - x_hi as f32 * 0.015625) as f64;

    finish_f32(exp_hi_mid * polyeval(lo, &EXP2_POLY), 0.0, env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fputil::env::{ExceptionFlags, MathError, RoundingMode};
    use crate::fputil::except_table::is_sorted;

    fn exp2f_in(x: f32, mode: RoundingMode) -> f32 {
        exp2f(x, &mut FpEnv::with_rounding(mode))
    }

    #[test]
    fn test_exp2f_exact_powers() {
        for mode in RoundingMode::ALL {
            for k in -149..=127 {
                let expected = f32::from_bits(if k >= -126 {
                    ((k + 127) as u32) << 23
                } else {
                    1 << (k + 149)
                });
                assert_eq!(exp2f_in(k as f32, mode), expected, "exp2f({k}) {mode:?}");
            }
        }
    }

    #[test]
    fn test_exp2f_documented_case() {
        let x = f32::from_bits(0x3b429d37);
        assert_eq!(exp2f_in(x, RoundingMode::ToNearest).to_bits(), 0x3f804385);
        assert_eq!(exp2f_in(x, RoundingMode::TowardZero).to_bits(), 0x3f804384);
        assert!(is_sorted(EXP2F_EXCEPTS.cases()));
    }

    #[test]
    fn test_exp2f_special_values() {
        let mut env = FpEnv::new();
        assert!(exp2f(f32::NAN, &mut env).is_nan());
        assert_eq!(exp2f(f32::INFINITY, &mut env), f32::INFINITY);
        assert_eq!(exp2f(f32::NEG_INFINITY, &mut env), 0.0);
        assert_eq!(exp2f(0.0, &mut env), 1.0);
        assert_eq!(exp2f(-0.0, &mut env), 1.0);
        assert_eq!(env.errno(), None);
        assert!(env.flags().is_empty());
    }

    #[test]
    fn test_exp2f_tiny_arguments() {
        let x = f32::from_bits(0x3000_0000);
        assert_eq!(exp2f_in(x, RoundingMode::ToNearest), 1.0);
        assert_eq!(exp2f_in(x, RoundingMode::Upward), 1.0 + f32::EPSILON);
        assert_eq!(exp2f_in(-x, RoundingMode::Downward), 1.0 - f32::EPSILON / 2.0);
        assert_eq!(exp2f_in(-x, RoundingMode::Upward), 1.0);
    }

    #[test]
    fn test_exp2f_range_limits() {
        let mut env = FpEnv::new();
        assert_eq!(exp2f(128.0, &mut env), f32::INFINITY);
        assert_eq!(env.take_errno(), Some(MathError::Range));
        assert!(env.test(ExceptionFlags::OVERFLOW));

        let mut env = FpEnv::with_rounding(RoundingMode::TowardZero);
        assert_eq!(exp2f(200.0, &mut env), f32::MAX);
        assert_eq!(env.errno(), None);

        let mut env = FpEnv::new();
        assert_eq!(exp2f(-150.0, &mut env), 0.0);
        assert_eq!(env.errno(), Some(MathError::Range));
        assert_eq!(exp2f_in(-1000.0, RoundingMode::Upward), f32::from_bits(1));

        assert_eq!(exp2f_in(127.99999, RoundingMode::ToNearest).to_bits(), 0x7f7f_ffa7);
    }

    #[test]
    fn test_exp2f_monotone_sweep() {
        let mut prev = 0.0f32;
        let mut x = -149.9f32;
        while x < 127.9 {
            let y = exp2f_in(x, RoundingMode::ToNearest);
            assert!(y >= prev, "exp2f not monotone at {x}");
            prev = y;
            x += 0.0137;
        }
    }
}
