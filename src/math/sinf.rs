//! sinf(x) implementation, sharing the sincosf reduction.

use super::finish_f32;
use super::sincosf_utils::{SINF_EXCEPTS, sincos_eval};
use crate::fputil::env::FpEnv;
use crate::fputil::fp_bits::FPBits;
use crate::fputil::rounding::multiply_add_f32;

pub fn sinf(x: f32, env: &mut FpEnv) -> f32 {
    let bits = FPBits::new(x);
    let x_abs = bits.abs().bits();
    let negative = bits.sign();
    let mode = env.rounding();

    // |x| < 2^-12
    if x_abs < 0x3980_0000 {
        if x_abs == 0 {
            return x;
        }
        return multiply_add_f32(x, -f32::from_bits(0x3300_0000), x, mode);
    }

    if bits.is_inf_or_nan() {
        if bits.is_inf() {
            env.signal_domain();
        }
        return x - x;
    }

    if let Some(r) = SINF_EXCEPTS.lookup_odd(x_abs, negative, mode) {
        return f32::from_bits(r);
    }

    let (sin, _) = sincos_eval(x_abs);
    finish_f32(if negative { -sin } else { sin }, 0.0, env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fputil::env::{MathError, RoundingMode};
    use crate::math::sincosf;

    #[test]
    fn test_sinf_matches_sincosf() {
        for mode in RoundingMode::ALL {
            let mut x = -1000.0f32;
            while x < 1000.0 {
                let s = sinf(x, &mut FpEnv::with_rounding(mode));
                let (s2, _) = sincosf(x, &mut FpEnv::with_rounding(mode));
                assert_eq!(s.to_bits(), s2.to_bits(), "sinf({x}) {mode:?}");
                x += 0.739;
            }
        }
    }

    #[test]
    fn test_sinf_is_odd() {
        for &x in &[0.5f32, 1.0, 3.0, 100.0, 1.0e20, f32::from_bits(0x5922aa80)] {
            let mut env = FpEnv::new();
            assert_eq!(sinf(-x, &mut env), -sinf(x, &mut env));
        }
    }

    #[test]
    fn test_sinf_table_inputs_are_odd_in_every_mode() {
        for case in SINF_EXCEPTS.cases() {
            let x = f32::from_bits(case.input);
            for mode in RoundingMode::ALL {
                let mirrored = match mode {
                    RoundingMode::Upward => RoundingMode::Downward,
                    RoundingMode::Downward => RoundingMode::Upward,
                    other => other,
                };
                let pos = sinf(x, &mut FpEnv::with_rounding(mirrored));
                let neg = sinf(-x, &mut FpEnv::with_rounding(mode));
                assert_eq!(neg.to_bits(), (-pos).to_bits(), "sinf(-{:#x}) {mode:?}", case.input);
            }
        }
    }

    #[test]
    fn test_sinf_special_values() {
        let mut env = FpEnv::new();
        assert_eq!(sinf(-0.0, &mut env).to_bits(), 0x8000_0000);
        assert!(sinf(f32::INFINITY, &mut env).is_nan());
        assert_eq!(env.errno(), Some(MathError::Domain));
    }
}
