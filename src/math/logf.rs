//! logf(x) implementation.

use super::common_constants::LOG_C;
use super::finish_f32;
use super::log_utils::{LN2, log1p_eval, log_reduction};
use crate::fputil::env::FpEnv;
use crate::fputil::except_table::{ExceptValues, ExceptionalCase};
use crate::fputil::fp_bits::FPBits;

pub(super) const LOGF_EXCEPTS: ExceptValues<u32, 7> = ExceptValues::new([
    ExceptionalCase { input: 0x4c5d65a5, toward_zero: 0x418f034a, upward: 1, downward: 0, to_nearest: 1 },
    ExceptionalCase { input: 0x4d003f2c, toward_zero: 0x4195bc35, upward: 1, downward: 0, to_nearest: 1 },
    ExceptionalCase { input: 0x500ffb03, toward_zero: 0x41b7ee9a, upward: 1, downward: 0, to_nearest: 0 },
    ExceptionalCase { input: 0x5cd69e88, toward_zero: 0x4222e0a3, upward: 1, downward: 0, to_nearest: 0 },
    ExceptionalCase { input: 0x65d890d3, toward_zero: 0x4254d1f8, upward: 1, downward: 0, to_nearest: 1 },
    ExceptionalCase { input: 0x6f31a8ec, toward_zero: 0x42845a88, upward: 1, downward: 0, to_nearest: 1 },
    ExceptionalCase { input: 0x7a17f30a, toward_zero: 0x42a28a1b, upward: 1, downward: 0, to_nearest: 0 },
]);

/// Natural logarithm.
#[inline]
pub fn logf(x: f32, env: &mut FpEnv) -> f32 {
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

    if let Some(r) = LOGF_EXCEPTS.lookup(x_u, env.rounding()) {
        return f32::from_bits(r);
    }

    let (m, idx, d) = log_reduction(x);
    let r = (m * LN2 + f64::from_bits(LOG_C[idx])) + log1p_eval(d);
    finish_f32(r, 0.0, env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fputil::env::{ExceptionFlags, MathError, RoundingMode};
    use crate::fputil::except_table::is_sorted;

    #[test]
    fn test_logf_exact_points() {
        for mode in RoundingMode::ALL {
            let mut env = FpEnv::with_rounding(mode);
            assert_eq!(logf(1.0, &mut env).to_bits(), 0);
            assert!(env.flags().is_empty());
        }
    }

    #[test]
    fn test_logf_values() {
        let mut env = FpEnv::new();
        assert_eq!(logf(core::f32::consts::E, &mut env).to_bits(), 0x3f7fffff);
        assert_eq!(logf(2.0, &mut env).to_bits(), 0x3f317218);
        assert_eq!(logf(0.5, &mut env).to_bits(), 0xbf317218);
        assert_eq!(logf(f32::MAX, &mut env).to_bits(), 0x42b17218);
        assert_eq!(logf(f32::from_bits(1), &mut env).to_bits(), 0xc2ce8ed0);
        assert!(is_sorted(LOGF_EXCEPTS.cases()));
    }

    #[test]
    fn test_logf_special_values() {
        let mut env = FpEnv::new();
        assert_eq!(logf(0.0, &mut env), f32::NEG_INFINITY);
        assert_eq!(env.take_errno(), Some(MathError::Range));
        assert!(env.test(ExceptionFlags::DIVIDE_BY_ZERO));
        assert_eq!(logf(-0.0, &mut env), f32::NEG_INFINITY);
        assert!(logf(-1.0, &mut env).is_nan());
        assert_eq!(env.take_errno(), Some(MathError::Domain));
        assert!(logf(f32::NEG_INFINITY, &mut env).is_nan());
        assert_eq!(logf(f32::INFINITY, &mut env), f32::INFINITY);
        assert!(logf(f32::NAN, &mut env).is_nan());
    }

    #[test]
    fn test_logf_directed_bracket() {
        for &x in &[3.0f32, 0.1, 1.0e-40, 12345.678, 1.0001] {
            let lo = logf(x, &mut FpEnv::with_rounding(RoundingMode::Downward));
            let hi = logf(x, &mut FpEnv::with_rounding(RoundingMode::Upward));
            assert_eq!(hi, crate::fputil::manipulation::next_up_f32(lo), "logf({x})");
        }
    }
}
