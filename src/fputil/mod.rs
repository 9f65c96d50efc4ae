//! Floating-point building blocks shared by the kernels in [`crate::math`].

pub mod arch;
pub mod env;
pub mod except_table;
pub mod fp_bits;
pub mod manipulation;
pub mod multiply_add;
pub mod nearest_integer;
pub mod poly;
pub mod rounding;
pub mod sqrt;

pub use env::{ExceptionFlags, FpEnv, MathError, RoundingMode};
pub use fp_bits::FPBits;
