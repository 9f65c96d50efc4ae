//! Rounding to integral values: the portable mask-based routine behind
//! [`Portable`](super::arch::Portable) and the public `floor`/`ceil`/`rint`
//! family on top of the selected [`Native`] primitives.

use super::arch::{IntegralRounding, Native, Primitives};
use super::env::{ExceptionFlags, FpEnv, RoundingMode};
use super::fp_bits::{BitStorage, FPBits, FloatFormat};

/// Round `x` to an integral value of the same format in direction `dir`.
///
/// Exact: no flags are implied. Zeros, infinities and NaNs pass through, and
/// a zero result keeps the sign of `x`. Implicit-bit formats only.
pub fn round_integral<F: FloatFormat>(x: F, dir: IntegralRounding) -> F {
    debug_assert!(!F::EXPLICIT_LEADING_BIT);
    let bits = FPBits::new(x);
    if bits.is_inf_or_nan() || bits.is_zero() {
        return x;
    }
    let sign = bits.sign();
    let e = bits.unbiased_exponent();
    if e >= F::MANTISSA_WIDTH as i32 {
        return x;
    }

    if e < 0 {
        // 0 < |x| < 1: the result is a signed zero or one.
        let half = FPBits::<F>::from_parts(false, (F::EXPONENT_BIAS - 1) as u32, F::Storage::ZERO);
        let abs = bits.abs().bits();
        let to_one = match dir {
            IntegralRounding::Floor => sign,
            IntegralRounding::Ceil => !sign,
            IntegralRounding::Trunc => false,
            IntegralRounding::NearestEven => abs > half.bits(),
            IntegralRounding::NearestAway => abs >= half.bits(),
        };
        return if to_one {
            FPBits::<F>::from_parts(sign, F::EXPONENT_BIAS as u32, F::Storage::ZERO).get_val()
        } else {
            FPBits::<F>::zero(sign).get_val()
        };
    }

    let frac_bits = F::MANTISSA_WIDTH - e as u32;
    let unit = F::Storage::ONE << frac_bits;
    let mask = unit - F::Storage::ONE;
    let frac = bits.bits() & mask;
    if frac == F::Storage::ZERO {
        return x;
    }
    let trunc = bits.bits() & !mask;
    let half = unit >> 1;
    let bump = match dir {
        IntegralRounding::Floor => sign,
        IntegralRounding::Ceil => !sign,
        IntegralRounding::Trunc => false,
        IntegralRounding::NearestAway => frac >= half,
        IntegralRounding::NearestEven => {
            // At e == 0 the integer part is the implicit one.
            let odd = e == 0 || (trunc & unit) != F::Storage::ZERO;
            frac > half || (frac == half && odd)
        }
    };
    // A carry out of the fraction moves into the exponent, which is the
    // correct next binade.
    let out = if bump { trunc + unit } else { trunc };
    FPBits::<F>::from_bits(out).get_val()
}

/// Formats with a native integral-rounding primitive.
pub trait RoundIntegral: FloatFormat + PartialEq {
    fn round_integral_native(self, dir: IntegralRounding) -> Self;
    fn is_finite_value(self) -> bool;
}

impl RoundIntegral for f32 {
    #[inline(always)]
    fn round_integral_native(self, dir: IntegralRounding) -> Self {
        Native::round_integral_f32(self, dir)
    }
    #[inline(always)]
    fn is_finite_value(self) -> bool {
        self.is_finite()
    }
}

impl RoundIntegral for f64 {
    #[inline(always)]
    fn round_integral_native(self, dir: IntegralRounding) -> Self {
        Native::round_integral_f64(self, dir)
    }
    #[inline(always)]
    fn is_finite_value(self) -> bool {
        self.is_finite()
    }
}

#[inline(always)]
pub fn trunc<T: RoundIntegral>(x: T) -> T {
    x.round_integral_native(IntegralRounding::Trunc)
}

#[inline(always)]
pub fn floor<T: RoundIntegral>(x: T) -> T {
    x.round_integral_native(IntegralRounding::Floor)
}

#[inline(always)]
pub fn ceil<T: RoundIntegral>(x: T) -> T {
    x.round_integral_native(IntegralRounding::Ceil)
}

/// Nearest integral value, halfway cases away from zero.
#[inline(always)]
pub fn round<T: RoundIntegral>(x: T) -> T {
    x.round_integral_native(IntegralRounding::NearestAway)
}

/// Nearest integral value, halfway cases to even.
#[inline(always)]
pub fn round_even<T: RoundIntegral>(x: T) -> T {
    x.round_integral_native(IntegralRounding::NearestEven)
}

#[inline(always)]
fn direction_of(mode: RoundingMode) -> IntegralRounding {
    match mode {
        RoundingMode::ToNearest => IntegralRounding::NearestEven,
        RoundingMode::Upward => IntegralRounding::Ceil,
        RoundingMode::Downward => IntegralRounding::Floor,
        RoundingMode::TowardZero => IntegralRounding::Trunc,
    }
}

/// Round in the current rounding direction without touching the flags.
#[inline]
pub fn nearbyint<T: RoundIntegral>(x: T, env: &FpEnv) -> T {
    x.round_integral_native(direction_of(env.rounding()))
}

/// Round in the current rounding direction, raising `INEXACT` when the
/// result differs from `x`.
#[inline]
pub fn rint<T: RoundIntegral>(x: T, env: &mut FpEnv) -> T {
    let r = nearbyint(x, env);
    if x.is_finite_value() && r != x {
        env.raise(ExceptionFlags::INEXACT);
    }
    r
}

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Nearest `i64`, halfway cases away from zero. NaN, infinities and values
/// outside the `i64` range are domain errors and return the bound of the
/// input's sign.
pub fn lround(x: f64, env: &mut FpEnv) -> i64 {
    let r = round(x);
    if r.is_nan() || r >= TWO_POW_63 || r < -TWO_POW_63 {
        env.signal_domain();
        return if x.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        };
    }
    r as i64
}

/// [`lround`] for a binary32 argument. Every binary32 result is exact in
/// binary64, so this widens and defers.
#[inline]
pub fn lroundf(x: f32, env: &mut FpEnv) -> i64 {
    lround(x as f64, env)
}
