//! cosf(x) implementation, sharing the sincosf reduction.

use super::finish_f32;
use super::sincosf_utils::{COSF_EXCEPTS, sincos_eval};
use crate::fputil::env::FpEnv;
use crate::fputil::fp_bits::FPBits;
use crate::fputil::rounding::multiply_add_f32;

pub fn cosf(x: f32, env: &mut FpEnv) -> f32 {
    let bits = FPBits::new(x);
    let x_abs = bits.abs().bits();
    let mode = env.rounding();

    // |x| < 2^-12
    if x_abs < 0x3980_0000 {
        if x_abs == 0 {
            return 1.0;
        }
        return multiply_add_f32(f32::from_bits(x_abs), -f32::from_bits(0x3300_0000), 1.0, mode);
    }

    if bits.is_inf_or_nan() {
        if bits.is_inf() {
            env.signal_domain();
        }
        return x - x;
    }

    if let Some(r) = COSF_EXCEPTS.lookup(x_abs, mode) {
        return f32::from_bits(r);
    }

    let (_, cos) = sincos_eval(x_abs);
    finish_f32(cos, 0.0, env)
}
