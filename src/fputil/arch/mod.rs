//! Target primitives behind a single interface.
//!
//! [`Portable`] is plain Rust and always available. On x86_64 and aarch64 a
//! `Hardware` implementation maps the same operations to single instructions
//! where the target guarantees them. [`Native`] picks one at build time; the
//! `soft-fma` feature forces the portable set everywhere.

#[cfg(all(target_arch = "aarch64", not(feature = "soft-fma")))]
mod aarch64;
#[cfg(all(target_arch = "x86_64", not(feature = "soft-fma")))]
mod x86_64;

use super::env::RoundingMode;
use super::multiply_add::fma_soft;
use super::nearest_integer::round_integral;
use super::sqrt::sqrt_round;

/// Direction used when rounding to an integral value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntegralRounding {
    Floor,
    Ceil,
    Trunc,
    /// Nearest, ties to even.
    NearestEven,
    /// Nearest, ties away from zero.
    NearestAway,
}

/// Operations with one contract and per-target implementations. Every
/// implementation must return bit-identical results for all inputs; only NaN
/// payloads may differ.
pub trait Primitives {
    fn fma(a: f64, b: f64, c: f64) -> f64;
    /// Square root rounded to nearest.
    fn sqrt_f32(x: f32) -> f32;
    /// Square root rounded to nearest.
    fn sqrt_f64(x: f64) -> f64;
    fn round_integral_f32(x: f32, dir: IntegralRounding) -> f32;
    fn round_integral_f64(x: f64, dir: IntegralRounding) -> f64;
}

/// Pure software primitives.
pub struct Portable;

impl Primitives for Portable {
    #[inline(always)]
    fn fma(a: f64, b: f64, c: f64) -> f64 {
        fma_soft(a, b, c)
    }
    #[inline(always)]
    fn sqrt_f32(x: f32) -> f32 {
        sqrt_round(x, RoundingMode::ToNearest)
    }
    #[inline(always)]
    fn sqrt_f64(x: f64) -> f64 {
        sqrt_round(x, RoundingMode::ToNearest)
    }
    #[inline(always)]
    fn round_integral_f32(x: f32, dir: IntegralRounding) -> f32 {
        round_integral(x, dir)
    }
    #[inline(always)]
    fn round_integral_f64(x: f64, dir: IntegralRounding) -> f64 {
        round_integral(x, dir)
    }
}

#[cfg(all(target_arch = "x86_64", not(feature = "soft-fma")))]
pub use x86_64::Hardware as Native;

#[cfg(all(target_arch = "aarch64", not(feature = "soft-fma")))]
pub use aarch64::Hardware as Native;

#[cfg(any(
    feature = "soft-fma",
    not(any(target_arch = "x86_64", target_arch = "aarch64"))
))]
pub use Portable as Native;

#[cfg(test)]
mod tests {
    use super::*;

    const DIRS: [IntegralRounding; 5] = [
        IntegralRounding::Floor,
        IntegralRounding::Ceil,
        IntegralRounding::Trunc,
        IntegralRounding::NearestEven,
        IntegralRounding::NearestAway,
    ];

    #[test]
    fn test_native_matches_portable() {
        let inputs = [
            0.0, -0.0, 0.5, -0.5, 1.5, -2.5, 2.5, 0.49999997, 1e-40, -7.25, 123456.5, 8388607.5,
            3.4e38, f32::INFINITY, f32::NEG_INFINITY,
        ];
        for &x in &inputs {
            for dir in DIRS {
                let n = Native::round_integral_f32(x, dir);
                let p = Portable::round_integral_f32(x, dir);
                assert_eq!(n.to_bits(), p.to_bits(), "{dir:?}({x})");
                let n = Native::round_integral_f64(x as f64, dir);
                let p = Portable::round_integral_f64(x as f64, dir);
                assert_eq!(n.to_bits(), p.to_bits(), "{dir:?}({x})");
            }
            if x >= 0.0 {
                assert_eq!(Native::sqrt_f32(x).to_bits(), Portable::sqrt_f32(x).to_bits());
                let xd = x as f64 * 1.1;
                assert_eq!(Native::sqrt_f64(xd).to_bits(), Portable::sqrt_f64(xd).to_bits());
            }
        }
        assert!(Native::round_integral_f64(f64::NAN, IntegralRounding::Floor).is_nan());
    }

    #[test]
    fn test_fma_native_matches_portable() {
        assert_eq!(Native::fma(3.0, 5.0, -1.0), 14.0);
        let cases = [
            (0.1, 10.0, -1.0),
            (1.0 + f64::EPSILON, 1.0 - f64::EPSILON, -1.0),
            (
                f64::from_bits(0x3ff0_0000_0000_0001),
                f64::from_bits(0x3ff0_0000_0000_0001),
                f64::from_bits(0x3c9f_ffff_ffff_fffd),
            ),
            (1e-300, 1e-10, 1e-310),
            (f64::MAX, 2.0, -f64::MAX),
            (-3.5, 7.25e200, 1.0),
        ];
        for (a, b, c) in cases {
            assert_eq!(
                Native::fma(a, b, c).to_bits(),
                Portable::fma(a, b, c).to_bits(),
                "fma({a:e}, {b:e}, {c:e})"
            );
        }
    }
}
