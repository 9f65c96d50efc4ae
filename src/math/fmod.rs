//! fmodf(x, y) and fmod(x, y): x - trunc(x / y) * y, always exact.
//!
//! Both operands become integer significands scaled by the exponent of their
//! lowest bit. The dividend's extra exponent is folded in 64 bits at a time
//! modulo the divisor, so the remainder never leaves a `u128`.

use crate::fputil::env::FpEnv;
use crate::fputil::fp_bits::{BitStorage, FPBits, FloatFormat};

/// `(m, e)` with `|x| = m * 2^e` for finite `x`.
#[inline(always)]
fn significand<F: FloatFormat>(bits: FPBits<F>) -> (u128, i32) {
    let min_e = 1 - F::EXPONENT_BIAS - F::MANTISSA_WIDTH as i32;
    let m = bits.mantissa().into_u128();
    if bits.is_subnormal() {
        (m, min_e)
    } else {
        (m | (1 << F::MANTISSA_WIDTH), min_e + bits.biased_exponent() as i32 - 1)
    }
}

/// `m * 2^e` for nonzero `m` whose value is representable.
#[inline(always)]
fn from_significand<F: FloatFormat>(negative: bool, m: u128, e: i32) -> F {
    let min_e = 1 - F::EXPONENT_BIAS - F::MANTISSA_WIDTH as i32;
    let top = 127 - m.leading_zeros() as i32;
    let shift = (F::MANTISSA_WIDTH as i32 - top).min(e - min_e);
    let m = m << shift;
    let e = e - shift;
    let biased = if m >> F::MANTISSA_WIDTH != 0 { e - min_e + 1 } else { 0 };
    let fraction = m & ((1 << F::MANTISSA_WIDTH) - 1);
    FPBits::<F>::from_parts(negative, biased as u32, F::Storage::from_u128(fraction)).get_val()
}

/// `(mx * 2^d) mod my`.
#[inline(always)]
fn shifted_rem(mx: u128, mut d: u32, my: u128) -> u128 {
    let mut r = mx % my;
    while d > 0 && r != 0 {
        let step = d.min(64);
        r = (r << step) % my;
        d -= step;
    }
    r
}

macro_rules! fmod_fn {
    ($name:ident, $ty:ty) => {
        #[inline]
        pub fn $name(x: $ty, y: $ty, env: &mut FpEnv) -> $ty {
            let bx = FPBits::new(x);
            let by = FPBits::new(y);
            if bx.is_nan() || by.is_nan() {
                return x + y;
            }
            if bx.is_inf() || by.is_zero() {
                env.signal_domain();
                return <$ty>::NAN;
            }
            if by.is_inf() || bx.is_zero() || bx.abs().bits() < by.abs().bits() {
                return x;
            }

            let (mx, ex) = significand(bx);
            let (my, ey) = significand(by);
            // |x| >= |y| puts the dividend's lowest bit at or above the divisor's.
            let r = shifted_rem(mx, (ex - ey) as u32, my);
            if r == 0 {
                return FPBits::<$ty>::zero(bx.sign()).get_val();
            }
            from_significand::<$ty>(bx.sign(), r, ey)
        }
    };
}

fmod_fn!(fmodf, f32);
fmod_fn!(fmod, f64);
