//! sincosf(x) implementation: both results from one range reduction.

use super::finish_f32;
use super::sincosf_utils::{COSF_EXCEPTS, SINF_EXCEPTS, sincos_eval};
use crate::fputil::env::FpEnv;
use crate::fputil::fp_bits::FPBits;
use crate::fputil::rounding::multiply_add_f32;

/// Returns `(sin(x), cos(x))`.
pub fn sincosf(x: f32, env: &mut FpEnv) -> (f32, f32) {
    let bits = FPBits::new(x);
    let x_abs = bits.abs().bits();
    let negative = bits.sign();
    let mode = env.rounding();

    // |x| < 2^-12: sin(x) = x - x^3/6 and cos(x) = 1 - x^2/2 round like
    // x - x*2^-25 and 1 - |x|*2^-25.
    if x_abs < 0x3980_0000 {
        if x_abs == 0 {
            return (x, 1.0);
        }
        let sin = multiply_add_f32(x, -f32::from_bits(0x3300_0000), x, mode);
        let cos = multiply_add_f32(f32::from_bits(x_abs), -f32::from_bits(0x3300_0000), 1.0, mode);
        return (sin, cos);
    }

    if bits.is_inf_or_nan() {
        if bits.is_inf() {
            env.signal_domain();
        }
        return (x - x, x - x);
    }

    // The two tables list different inputs; each result is looked up on its own.
    let sin_case = SINF_EXCEPTS.lookup_odd(x_abs, negative, mode);
    let cos_case = COSF_EXCEPTS.lookup(x_abs, mode);
    if let (Some(s), Some(c)) = (sin_case, cos_case) {
        return (f32::from_bits(s), f32::from_bits(c));
    }

    let (sin, cos) = sincos_eval(x_abs);
    let sin = match sin_case {
        Some(s) => f32::from_bits(s),
        None => finish_f32(if negative { -sin } else { sin }, 0.0, env),
    };
    let cos = match cos_case {
        Some(c) => f32::from_bits(c),
        None => finish_f32(cos, 0.0, env),
    };
    (sin, cos)
}
