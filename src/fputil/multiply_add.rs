//! Fused multiply-add with a compile-time choice between the hardware
//! instruction and an exact integer emulation.

use super::arch::{Native, Primitives};
use super::fp_bits::FPBits;

const SPLIT: f64 = 134_217_729.0; // 2^27 + 1

/// `true` when [`multiply_add`] maps to a single hardware instruction.
pub const HAS_FMA: bool = !cfg!(feature = "soft-fma")
    && (cfg!(target_arch = "aarch64")
        || cfg!(all(target_arch = "x86_64", target_feature = "fma")));

/// `(m, e)` with `|x| = m * 2^e` and the leading one of `m` at bit 52.
#[inline(always)]
fn unpack(x: f64) -> (u64, i32) {
    let bits = FPBits::new(x);
    let m = bits.mantissa();
    if bits.is_subnormal() {
        let shift = m.leading_zeros() - 11;
        (m << shift, -1074 - shift as i32)
    } else {
        (m | (1 << 52), bits.biased_exponent() as i32 - 1075)
    }
}

/// `v >> d` with every bit shifted out folded into bit 0.
#[inline(always)]
fn shr_sticky(v: u128, d: u32) -> u128 {
    match d {
        0 => v,
        1..=127 => (v >> d) | u128::from(v & ((1 << d) - 1) != 0),
        _ => u128::from(v != 0),
    }
}

/// Correctly rounded `a * b + c`, ties to even.
///
/// The 106-bit product and the addend are aligned in a `u128`. Bits shifted
/// out of the window collapse into a sticky bit at least 70 places below the
/// rounding position, so one rounding step gives the fused result.
pub fn fma_soft(a: f64, b: f64, c: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return a * b + c;
    }
    // The exact product is finite even when `a * b` overflows.
    if !c.is_finite() {
        return c;
    }
    if a == 0.0 || b == 0.0 {
        return a * b + c;
    }
    if c == 0.0 {
        return a * b;
    }
    let (ma, ea) = unpack(a);
    let (mb, eb) = unpack(b);
    let (mc, ec) = unpack(c);
    let prod_negative = a.is_sign_negative() != b.is_sign_negative();
    let c_negative = c.is_sign_negative();

    // Product at bits 124..=125, addend at bit 124.
    let ex = ea + eb - 20;
    let ey = ec - 72;
    let e = ex.max(ey);
    let x = shr_sticky(((ma as u128) * (mb as u128)) << 20, (e - ex) as u32);
    let y = shr_sticky((mc as u128) << 72, (e - ey) as u32);

    let (r, negative) = if prod_negative == c_negative {
        (x + y, prod_negative)
    } else if x >= y {
        (x - y, prod_negative)
    } else {
        (y - x, c_negative)
    };
    if r == 0 {
        return 0.0;
    }

    // Keep 53 bits, or fewer where the result is subnormal. The addend is
    // nonzero, so `e >= -1146` and the shift never leaves the word.
    let top = 127 - r.leading_zeros() as i32;
    let shift = (top - 52).max(-1074 - e);
    let mut q = e + shift;
    let mut m = if shift <= 0 {
        (r << -shift) as u64
    } else {
        let half = 1u128 << (shift - 1);
        let rem = r & ((half << 1) - 1);
        let m = (r >> shift) as u64;
        if rem > half || (rem == half && m & 1 == 1) { m + 1 } else { m }
    };
    if m == 1 << 53 {
        m >>= 1;
        q += 1;
    }

    let sign = u64::from(negative) << 63;
    if m >= 1 << 52 {
        if q + 1075 >= 2047 {
            return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
        }
        // The leading one carries into the exponent field.
        return f64::from_bits(sign | ((((q + 1074) as u64) << 52) + m));
    }
    f64::from_bits(sign | m)
}

/// `a * b - p` for `p = a * b`, exact unless the product underflows.
#[inline(always)]
fn product_error(a: f64, b: f64, p: f64) -> f64 {
    let a_split = a * SPLIT;
    let a_hi = a_split - (a_split - a);
    let a_lo = a - a_hi;
    let b_split = b * SPLIT;
    let b_hi = b_split - (b_split - b);
    let b_lo = b - b_hi;
    ((a_hi * b_hi - p) + a_hi * b_lo + a_lo * b_hi) + a_lo * b_lo
}

/// `a * b + c`, fused when the target allows it.
#[inline(always)]
pub fn multiply_add(a: f64, b: f64, c: f64) -> f64 {
    Native::fma(a, b, c)
}

/// Error-free product: `a * b == hi + lo`.
#[inline(always)]
pub fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let hi = a * b;
    let lo = if HAS_FMA {
        multiply_add(a, b, -hi)
    } else {
        product_error(a, b, hi)
    };
    (hi, lo)
}
