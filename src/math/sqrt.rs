//! sqrtf(x) and sqrt(x), correctly rounded in every direction.
//!
//! Round-to-nearest goes through the target's square root instruction; the
//! directed modes use the integer digit recurrence.

use crate::fputil::arch::{Native, Primitives};
use crate::fputil::env::{FpEnv, RoundingMode};
use crate::fputil::sqrt::sqrt_round;

macro_rules! sqrt_fn {
    ($name:ident, $ty:ty, $native:ident) => {
        #[inline]
        pub fn $name(x: $ty, env: &mut FpEnv) -> $ty {
            if x < 0.0 {
                env.signal_domain();
                return <$ty>::NAN;
            }
            match env.rounding() {
                RoundingMode::ToNearest => Native::$native(x),
                mode => sqrt_round(x, mode),
            }
        }
    };
}

sqrt_fn!(sqrtf, f32, sqrt_f32);
sqrt_fn!(sqrt, f64, sqrt_f64);
