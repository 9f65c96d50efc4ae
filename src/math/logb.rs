//! logb(x) and logbf(x): the unbiased exponent as a floating value.
//!
//! Subnormals report the exponent they would have once normalized.

use crate::fputil::env::FpEnv;
use crate::fputil::fp_bits::{BitStorage, FPBits, FloatFormat};

/// Exponent of a finite nonzero value.
#[inline(always)]
fn normalized_exponent<F: FloatFormat>(bits: FPBits<F>) -> i32 {
    if bits.is_subnormal() {
        let lz = bits.mantissa().leading_zeros() - (F::Storage::BITS - F::MANTISSA_WIDTH);
        return bits.unbiased_exponent() - 1 - lz as i32;
    }
    bits.unbiased_exponent()
}

macro_rules! logb_fn {
    ($name:ident, $ty:ty) => {
        #[inline]
        pub fn $name(x: $ty, env: &mut FpEnv) -> $ty {
            let bits = FPBits::new(x);
            if bits.is_zero() {
                env.signal_pole();
                return <$ty>::NEG_INFINITY;
            }
            if bits.is_inf_or_nan() {
                // logb(+-inf) = +inf, NaN propagates.
                return x * x;
            }
            normalized_exponent(bits) as $ty
        }
    };
}

logb_fn!(logbf, f32);
logb_fn!(logb, f64);
