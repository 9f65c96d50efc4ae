//! log2f(x) implementation.

use super::common_constants::LOG2_C;
use super::finish_f32;
use super::log_utils::{INV_LN2, log1p_eval, log_reduction};
use crate::fputil::env::FpEnv;
use crate::fputil::fp_bits::FPBits;

/// Base-2 logarithm. Exact at powers of two.
#[inline]
pub fn log2f(x: f32, env: &mut FpEnv) -> f32 {
    let bits = FPBits::new(x);
    let x_u = bits.bits();

    if x_u == 0 || x_u == 0x8000_0000 {
        env.signal_pole();
        return f32::NEG_INFINITY;
    }
    if bits.is_nan() {
        return x + x;
    }
    if bits.sign() {
        env.signal_domain();
        return f32::NAN;
    }
    if bits.is_inf() {
        return x;
    }

    let (m, idx, d) = log_reduction(x);
    let r = (m + f64::from_bits(LOG2_C[idx])) + log1p_eval(d) * INV_LN2;
    finish_f32(r, 0.0, env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fputil::env::{MathError, RoundingMode};

    #[test]
    fn test_log2f_powers_of_two() {
        for mode in RoundingMode::ALL {
            let mut env = FpEnv::with_rounding(mode);
            for k in -149..=127 {
                let x = f32::from_bits(if k >= -126 { ((k + 127) as u32) << 23 } else { 1 << (k + 149) });
                assert_eq!(log2f(x, &mut env), k as f32, "log2f(2^{k})");
            }
            assert!(env.flags().is_empty());
        }
    }

    #[test]
    fn test_log2f_values() {
        let mut env = FpEnv::new();
        assert_eq!(log2f(3.0, &mut env).to_bits(), 0x3fcae00d);
        assert_eq!(log2f(0.1, &mut env).to_bits(), 0xc0549a78);
        assert_eq!(log2f(f32::MAX, &mut env), 128.0);
    }

    #[test]
    fn test_log2f_special_values() {
        let mut env = FpEnv::new();
        assert_eq!(log2f(-0.0, &mut env), f32::NEG_INFINITY);
        assert_eq!(env.take_errno(), Some(MathError::Range));
        assert!(log2f(-3.0, &mut env).is_nan());
        assert_eq!(env.take_errno(), Some(MathError::Domain));
        assert_eq!(log2f(f32::INFINITY, &mut env), f32::INFINITY);
    }
}
