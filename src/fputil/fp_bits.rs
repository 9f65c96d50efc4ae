//! Bit-level view of IEEE-754 binary formats.
//!
//! `FPBits<F>` splits a value into sign, exponent and mantissa fields and
//! classifies it without touching floating-point arithmetic. It is generic over
//! [`FloatFormat`], which describes one concrete layout: `f32`, `f64`, the x87
//! 80-bit extended format and binary128.
//!
//! Every bit pattern is a valid input; none of the accessors can fail.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, BitAnd, BitOr, BitXor, Not, Shl, Shr, Sub};

/// Unsigned integer wide enough to hold every bit of a format.
pub trait BitStorage:
    Copy
    + Eq
    + Ord
    + fmt::Debug
    + fmt::LowerHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const BITS: u32;

    fn from_u32(v: u32) -> Self;
    fn low_u32(self) -> u32;
    fn into_u128(self) -> u128;
    /// Truncating conversion.
    fn from_u128(v: u128) -> Self;
    fn leading_zeros(self) -> u32;
}

macro_rules! impl_bit_storage {
    ($($ty:ty),*) => {$(
        impl BitStorage for $ty {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const BITS: u32 = <$ty>::BITS;

            #[inline(always)]
            fn from_u32(v: u32) -> Self {
                v as $ty
            }
            #[inline(always)]
            fn low_u32(self) -> u32 {
                self as u32
            }
            #[inline(always)]
            fn into_u128(self) -> u128 {
                self as u128
            }
            #[inline(always)]
            fn from_u128(v: u128) -> Self {
                v as $ty
            }
            #[inline(always)]
            fn leading_zeros(self) -> u32 {
                <$ty>::leading_zeros(self)
            }
        }
    )*};
}

impl_bit_storage!(u32, u64, u128);

/// Static description of a binary interchange (or x87) format.
pub trait FloatFormat: Copy {
    type Storage: BitStorage;

    const EXPONENT_WIDTH: u32;
    /// Stored fraction bits, not counting an explicit integer bit.
    const MANTISSA_WIDTH: u32;
    /// True when the leading significand bit is stored (x87 extended).
    const EXPLICIT_LEADING_BIT: bool;
    const TOTAL_BITS: u32 =
        1 + Self::EXPONENT_WIDTH + Self::MANTISSA_WIDTH + Self::EXPLICIT_LEADING_BIT as u32;
    const EXPONENT_BIAS: i32 = (1 << (Self::EXPONENT_WIDTH - 1)) - 1;
    const MAX_BIASED_EXPONENT: u32 = (1 << Self::EXPONENT_WIDTH) - 1;

    fn to_storage(self) -> Self::Storage;
    fn from_storage(bits: Self::Storage) -> Self;
}

impl FloatFormat for f32 {
    type Storage = u32;
    const EXPONENT_WIDTH: u32 = 8;
    const MANTISSA_WIDTH: u32 = 23;
    const EXPLICIT_LEADING_BIT: bool = false;

    #[inline(always)]
    fn to_storage(self) -> u32 {
        self.to_bits()
    }
    #[inline(always)]
    fn from_storage(bits: u32) -> Self {
        f32::from_bits(bits)
    }
}

impl FloatFormat for f64 {
    type Storage = u64;
    const EXPONENT_WIDTH: u32 = 11;
    const MANTISSA_WIDTH: u32 = 52;
    const EXPLICIT_LEADING_BIT: bool = false;

    #[inline(always)]
    fn to_storage(self) -> u64 {
        self.to_bits()
    }
    #[inline(always)]
    fn from_storage(bits: u64) -> Self {
        f64::from_bits(bits)
    }
}

const X87_MASK: u128 = (1u128 << 80) - 1;

/// x87 80-bit extended precision value, held in the low 80 bits of a `u128`.
///
/// Layout: sign, 15-bit exponent, explicit integer bit, 63-bit fraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct X87Extended(u128);

impl X87Extended {
    pub const fn from_bits(bits: u128) -> Self {
        Self(bits & X87_MASK)
    }

    pub const fn to_bits(self) -> u128 {
        self.0
    }
}

impl FloatFormat for X87Extended {
    type Storage = u128;
    const EXPONENT_WIDTH: u32 = 15;
    const MANTISSA_WIDTH: u32 = 63;
    const EXPLICIT_LEADING_BIT: bool = true;

    #[inline(always)]
    fn to_storage(self) -> u128 {
        self.0
    }
    #[inline(always)]
    fn from_storage(bits: u128) -> Self {
        Self::from_bits(bits)
    }
}

/// IEEE-754 binary128 value as raw bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Binary128(u128);

impl Binary128 {
    pub const fn from_bits(bits: u128) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> u128 {
        self.0
    }
}

impl FloatFormat for Binary128 {
    type Storage = u128;
    const EXPONENT_WIDTH: u32 = 15;
    const MANTISSA_WIDTH: u32 = 112;
    const EXPLICIT_LEADING_BIT: bool = false;

    #[inline(always)]
    fn to_storage(self) -> u128 {
        self.0
    }
    #[inline(always)]
    fn from_storage(bits: u128) -> Self {
        Self(bits)
    }
}

/// Field view over the bits of one value of format `F`.
pub struct FPBits<F: FloatFormat> {
    bits: F::Storage,
    format: PhantomData<F>,
}

impl<F: FloatFormat> Clone for FPBits<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: FloatFormat> Copy for FPBits<F> {}

impl<F: FloatFormat> PartialEq for FPBits<F> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<F: FloatFormat> Eq for FPBits<F> {}

impl<F: FloatFormat> fmt::Debug for FPBits<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FPBits")
            .field("bits", &format_args!("{:#x}", self.bits))
            .field("sign", &self.sign())
            .field("biased_exponent", &self.biased_exponent())
            .field("mantissa", &format_args!("{:#x}", self.mantissa()))
            .finish()
    }
}

impl<F: FloatFormat> FPBits<F> {
    #[inline(always)]
    fn one() -> F::Storage {
        F::Storage::ONE
    }

    #[inline(always)]
    fn exponent_shift() -> u32 {
        F::MANTISSA_WIDTH + F::EXPLICIT_LEADING_BIT as u32
    }

    #[inline(always)]
    pub fn mantissa_mask() -> F::Storage {
        (Self::one() << F::MANTISSA_WIDTH) - Self::one()
    }

    #[inline(always)]
    pub fn exponent_mask() -> F::Storage {
        ((Self::one() << F::EXPONENT_WIDTH) - Self::one()) << Self::exponent_shift()
    }

    #[inline(always)]
    pub fn sign_mask() -> F::Storage {
        Self::one() << (F::TOTAL_BITS - 1)
    }

    #[inline(always)]
    fn explicit_bit_mask() -> F::Storage {
        if F::EXPLICIT_LEADING_BIT {
            Self::one() << F::MANTISSA_WIDTH
        } else {
            F::Storage::ZERO
        }
    }

    #[inline(always)]
    fn quiet_bit_mask() -> F::Storage {
        Self::one() << (F::MANTISSA_WIDTH - 1)
    }

    #[inline(always)]
    pub fn from_bits(bits: F::Storage) -> Self {
        Self {
            bits,
            format: PhantomData,
        }
    }

    #[inline(always)]
    pub fn new(value: F) -> Self {
        Self::from_bits(value.to_storage())
    }

    #[inline(always)]
    pub fn bits(self) -> F::Storage {
        self.bits
    }

    #[inline(always)]
    pub fn get_val(self) -> F {
        F::from_storage(self.bits)
    }

    /// True for a set sign bit, including `-0.0` and negative NaNs.
    #[inline(always)]
    pub fn sign(self) -> bool {
        (self.bits & Self::sign_mask()) != F::Storage::ZERO
    }

    #[inline(always)]
    pub fn set_sign(&mut self, negative: bool) {
        self.bits = if negative {
            self.bits | Self::sign_mask()
        } else {
            self.bits & !Self::sign_mask()
        };
    }

    #[inline(always)]
    pub fn abs(self) -> Self {
        Self::from_bits(self.bits & !Self::sign_mask())
    }

    #[inline(always)]
    pub fn biased_exponent(self) -> u32 {
        ((self.bits & Self::exponent_mask()) >> Self::exponent_shift()).low_u32()
    }

    /// Exponent with the bias removed. Subnormals and zeros report the
    /// minimum normal exponent, matching their scaling.
    #[inline(always)]
    pub fn unbiased_exponent(self) -> i32 {
        let biased = self.biased_exponent();
        if biased == 0 {
            1 - F::EXPONENT_BIAS
        } else {
            biased as i32 - F::EXPONENT_BIAS
        }
    }

    /// Stored fraction bits (never includes an explicit integer bit).
    #[inline(always)]
    pub fn mantissa(self) -> F::Storage {
        self.bits & Self::mantissa_mask()
    }

    /// Leading significand bit: stored for x87, implied by the exponent otherwise.
    #[inline(always)]
    pub fn explicit_bit(self) -> bool {
        if F::EXPLICIT_LEADING_BIT {
            (self.bits & Self::explicit_bit_mask()) != F::Storage::ZERO
        } else {
            self.biased_exponent() != 0
        }
    }

    #[inline(always)]
    pub fn is_zero(self) -> bool {
        (self.bits & !Self::sign_mask()) == F::Storage::ZERO
    }

    #[inline(always)]
    pub fn is_inf_or_nan(self) -> bool {
        self.biased_exponent() == F::MAX_BIASED_EXPONENT
    }

    /// x87 pseudo-infinities (integer bit clear) are reported as NaN, which is
    /// how the FPU treats them.
    #[inline(always)]
    pub fn is_inf(self) -> bool {
        self.is_inf_or_nan() && self.mantissa() == F::Storage::ZERO && self.explicit_bit()
    }

    #[inline(always)]
    pub fn is_nan(self) -> bool {
        self.is_inf_or_nan() && !self.is_inf()
    }

    #[inline(always)]
    pub fn is_quiet_nan(self) -> bool {
        self.is_nan() && (self.bits & Self::quiet_bit_mask()) != F::Storage::ZERO
    }

    #[inline(always)]
    pub fn is_subnormal(self) -> bool {
        self.biased_exponent() == 0 && !self.is_zero()
    }

    #[inline(always)]
    pub fn is_normal(self) -> bool {
        let biased = self.biased_exponent();
        biased != 0 && biased != F::MAX_BIASED_EXPONENT
    }

    #[inline(always)]
    pub fn is_finite(self) -> bool {
        !self.is_inf_or_nan()
    }

    /// Assemble a value from its fields. Out-of-range exponent and mantissa bits
    /// are masked off; for x87 the integer bit is set for every nonzero exponent.
    #[inline(always)]
    pub fn from_parts(sign: bool, biased_exponent: u32, mantissa: F::Storage) -> Self {
        let mut bits = (F::Storage::from_u32(biased_exponent) << Self::exponent_shift())
            & Self::exponent_mask();
        bits = bits | (mantissa & Self::mantissa_mask());
        if biased_exponent != 0 {
            bits = bits | Self::explicit_bit_mask();
        }
        if sign {
            bits = bits | Self::sign_mask();
        }
        Self::from_bits(bits)
    }

    #[inline(always)]
    pub fn zero(sign: bool) -> Self {
        Self::from_parts(sign, 0, F::Storage::ZERO)
    }

    #[inline(always)]
    pub fn inf(sign: bool) -> Self {
        Self::from_parts(sign, F::MAX_BIASED_EXPONENT, F::Storage::ZERO)
    }

    #[inline(always)]
    pub fn min_subnormal(sign: bool) -> Self {
        Self::from_parts(sign, 0, Self::one())
    }

    #[inline(always)]
    pub fn min_normal(sign: bool) -> Self {
        Self::from_parts(sign, 1, F::Storage::ZERO)
    }

    #[inline(always)]
    pub fn max_normal(sign: bool) -> Self {
        Self::from_parts(sign, F::MAX_BIASED_EXPONENT - 1, Self::mantissa_mask())
    }

    /// Positive quiet NaN carrying as much of `payload` as fits below the quiet bit.
    #[inline(always)]
    pub fn build_quiet_nan(payload: F::Storage) -> Self {
        let payload = payload & (Self::quiet_bit_mask() - Self::one());
        Self::from_parts(
            false,
            F::MAX_BIASED_EXPONENT,
            Self::quiet_bit_mask() | payload,
        )
    }
}
