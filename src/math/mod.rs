#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]

mod common_constants;
mod cosf;
mod exp;
mod exp2;
mod exp2f;
mod expf;
mod expm1f;
mod fmod;
mod log2f;
mod log_utils;
mod logb;
mod logf;
mod sincosf;
mod sincosf_utils;
mod sinf;
mod sqrt;

pub use cosf::cosf;
pub use exp::exp;
pub use exp2::exp2;
pub use exp2f::exp2f;
pub use expf::expf;
pub use expm1f::expm1f;
pub use fmod::{fmod, fmodf};
pub use log2f::log2f;
pub use logb::{logb, logbf};
pub use logf::logf;
pub use sincosf::sincosf;
pub use sinf::sinf;
pub use sqrt::{sqrt, sqrtf};

use crate::fputil::env::{ExceptionFlags, FpEnv};
use crate::fputil::fp_bits::{FPBits, FloatFormat};
use crate::fputil::rounding::{round_sum_to_f32, round_sum_to_f64};

// ========= result finishing =========

/// Largest finite value or infinity, whichever the rounding direction picks
/// for a result too large to represent. Only a result that becomes infinite
/// reports a range error.
#[cold]
#[inline(never)]
pub(crate) fn overflow<F: FloatFormat>(negative: bool, env: &mut FpEnv) -> F {
    if env.rounding().saturates(negative) {
        env.raise(ExceptionFlags::OVERFLOW | ExceptionFlags::INEXACT);
        FPBits::<F>::max_normal(negative).get_val()
    } else {
        env.signal_overflow();
        FPBits::<F>::inf(negative).get_val()
    }
}

/// Zero or the smallest subnormal for a nonzero result below half the
/// smallest subnormal.
#[cold]
#[inline(never)]
pub(crate) fn underflow<F: FloatFormat>(negative: bool, env: &mut FpEnv) -> F {
    if env.rounding().rounds_away(negative) {
        env.raise(ExceptionFlags::UNDERFLOW | ExceptionFlags::INEXACT);
        FPBits::<F>::min_subnormal(negative).get_val()
    } else {
        env.signal_underflow();
        FPBits::<F>::zero(negative).get_val()
    }
}

#[cold]
fn report_tiny(zero: bool, env: &mut FpEnv) {
    if zero {
        env.signal_underflow();
    } else {
        env.raise(ExceptionFlags::UNDERFLOW | ExceptionFlags::INEXACT);
    }
}

/// Round the nonzero finite value `hi + lo` to binary32 in the current
/// direction and report overflow or underflow of the rounded result.
/// `INEXACT` is raised only together with those range events.
#[inline(always)]
pub(crate) fn finish_f32(hi: f64, lo: f64, env: &mut FpEnv) -> f32 {
    let r = round_sum_to_f32(hi, lo, env.rounding());
    let a = r.abs();
    if a < f32::MIN_POSITIVE {
        if r as f64 != hi || lo != 0.0 {
            report_tiny(r == 0.0, env);
        }
    } else if a == f32::INFINITY {
        env.signal_overflow();
    } else if a == f32::MAX && (hi + lo).abs() > f32::MAX as f64 {
        env.raise(ExceptionFlags::OVERFLOW | ExceptionFlags::INEXACT);
    }
    r
}

/// Binary64 counterpart of [`finish_f32`] for finite `hi`. Subnormal results
/// must be finished by the caller, since scaling into that range is inexact.
#[inline(always)]
pub(crate) fn finish_f64(hi: f64, lo: f64, env: &mut FpEnv) -> f64 {
    let r = round_sum_to_f64(hi, lo, env.rounding());
    if r.is_infinite() {
        env.signal_overflow();
    } else if r.abs() == f64::MAX && (hi + lo).is_infinite() {
        env.raise(ExceptionFlags::OVERFLOW | ExceptionFlags::INEXACT);
    }
    r
}

#[cfg(test)]
mod tests {
    use super::exp2f::EXP2F_EXCEPTS;
    use super::expf::EXPF_EXCEPTS;
    use super::expm1f::EXPM1F_EXCEPTS;
    use super::logf::LOGF_EXCEPTS;
    use super::sincosf_utils::{COSF_EXCEPTS, SINF_EXCEPTS};
    use super::*;
    use crate::fputil::env::RoundingMode;
    use crate::fputil::except_table::ExceptionalCase;

    type Kernel = fn(f32, &mut FpEnv) -> f32;

    #[derive(Clone, Copy, PartialEq)]
    enum Symmetry {
        Plain,
        Even,
        Odd,
    }

    type Table = (&'static str, Kernel, &'static [ExceptionalCase<u32>], Symmetry);

    fn tables() -> [Table; 6] {
        [
            ("exp2f", exp2f, (&EXP2F_EXCEPTS).cases(), Symmetry::Plain),
            ("expf", expf, (&EXPF_EXCEPTS).cases(), Symmetry::Plain),
            ("expm1f", expm1f, (&EXPM1F_EXCEPTS).cases(), Symmetry::Plain),
            ("logf", logf, (&LOGF_EXCEPTS).cases(), Symmetry::Plain),
            ("sinf", sinf, (&SINF_EXCEPTS).cases(), Symmetry::Odd),
            ("cosf", cosf, (&COSF_EXCEPTS).cases(), Symmetry::Even),
        ]
    }

    fn listed(case: &ExceptionalCase<u32>, mode: RoundingMode) -> u32 {
        case.toward_zero
            + match mode {
                RoundingMode::TowardZero => 0,
                RoundingMode::Upward => case.upward,
                RoundingMode::Downward => case.downward,
                RoundingMode::ToNearest => case.to_nearest,
            }
    }

    fn mirrored(mode: RoundingMode) -> RoundingMode {
        match mode {
            RoundingMode::Upward => RoundingMode::Downward,
            RoundingMode::Downward => RoundingMode::Upward,
            other => other,
        }
    }

    /// Every listed input, and its negation for sin and cos, with the result
    /// bits each direction must produce.
    fn table_points() -> impl Iterator<Item = (&'static str, Kernel, u32, RoundingMode, u32)> {
        tables().into_iter().flat_map(|(name, f, cases, symmetry)| {
            cases.iter().flat_map(move |case| {
                RoundingMode::ALL.into_iter().flat_map(move |mode| {
                    let positive = (name, f, case.input, mode, listed(case, mode));
                    let negative = match symmetry {
                        Symmetry::Plain => None,
                        Symmetry::Even => Some(listed(case, mode)),
                        Symmetry::Odd => Some(listed(case, mirrored(mode)) ^ 0x8000_0000),
                    }
                    .map(|bits| (name, f, case.input ^ 0x8000_0000, mode, bits));
                    core::iter::once(positive).chain(negative)
                })
            })
        })
    }

    #[test]
    fn test_exceptional_tables_are_reached() {
        for (name, f, input, mode, expected) in table_points() {
            let x = f32::from_bits(input);
            let actual = f(x, &mut FpEnv::with_rounding(mode)).to_bits();
            assert_eq!(actual, expected, "{name}({input:#x}) {mode:?}");
            if name == "sinf" || name == "cosf" {
                let (s, c) = sincosf(x, &mut FpEnv::with_rounding(mode));
                let component = if name == "sinf" { s } else { c };
                assert_eq!(component.to_bits(), expected, "sincosf({input:#x}) {mode:?} {name}");
            }
        }
    }

    #[cfg(feature = "mpfr")]
    #[test]
    fn test_exceptional_tables_match_mpfr() {
        use rug::Float;
        use rug::float::Round;

        for (name, _, input, mode, expected) in table_points() {
            let mut v = Float::with_val(256, f32::from_bits(input));
            match name {
                "exp2f" => v.exp2_mut(),
                "expf" => v.exp_mut(),
                "expm1f" => v.exp_m1_mut(),
                "logf" => v.ln_mut(),
                "sinf" => v.sin_mut(),
                "cosf" => v.cos_mut(),
                _ => unreachable!("no reference for {name}"),
            }
            let round = match mode {
                RoundingMode::ToNearest => Round::Nearest,
                RoundingMode::Upward => Round::Up,
                RoundingMode::Downward => Round::Down,
                RoundingMode::TowardZero => Round::Zero,
            };
            let reference = v.to_f32_round(round).to_bits();
            assert_eq!(expected, reference, "{name}({input:#x}) {mode:?}");
        }
    }
}
