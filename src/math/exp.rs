//! exp(x) implementation.
//!
//! x = k*ln2/128 + r with |r| <= ln2/256, so exp(x) = 2^(k/128) * exp(r).
//! 2^(k/128) is 2^(k>>7) times a double-double table entry. Both r and
//! exp(r) - 1 are carried as double-doubles, with about 2^-78 relative
//! error, and the product is rounded once in the caller's direction.

use super::common_constants::EXP2_MID_DD;
use super::{finish_f64, overflow, underflow};
use crate::fputil::env::{ExceptionFlags, FpEnv, RoundingMode};
use crate::fputil::fp_bits::FPBits;
use crate::fputil::manipulation::{next_down_f64, next_up_f64};
use crate::fputil::multiply_add::two_prod;
use crate::fputil::poly::polyeval_fma;
use crate::fputil::rounding::{fast_two_sum, round_sum_to_f64, two_sum};

pub(super) const EXP_TABLE_BITS: u32 = 7;
pub(super) const N: i64 = 1 << EXP_TABLE_BITS;
/// 0x1.8p52: adding and subtracting it rounds to an integer.
pub(super) const SHIFT: f64 = f64::from_bits(0x4338_0000_0000_0000);

const INV_LN2_N: f64 = f64::from_bits(0x40671547652b82fe);
/// ln2/128 in three parts; k * LN2_N_HI is exact for |k| < 2^20.
const LN2_N_HI: f64 = f64::from_bits(0x3f762e42fef00000);
const LN2_N_MID: f64 = f64::from_bits(0x3d6473de6af278ed);
const LN2_N_LO: f64 = f64::from_bits(0xb9e9ff0342542fc3);

/// 1/3! through 1/8!.
const EXPM1_TAIL: [f64; 6] = [
    f64::from_bits(0x3fc5555555555555),
    f64::from_bits(0x3fa5555555555555),
    f64::from_bits(0x3f81111111111111),
    f64::from_bits(0x3f56c16c16c16c17),
    f64::from_bits(0x3f2a01a01a01a01a),
    f64::from_bits(0x3efa01a01a01a01a),
];

/// Largest x with exp(x) <= f64::MAX.
const EXP_HI: f64 = 709.782712893384;
/// Below this exp(x) < 2^-1075.
const EXP_LO: f64 = -745.1332191019411;

const TWO_POW_M54: f64 = f64::from_bits(0x3c90_0000_0000_0000);
const TWO_POW_M1022: f64 = f64::from_bits(0x0010_0000_0000_0000);
const TWO_POW_1022: f64 = f64::from_bits(0x7fd0_0000_0000_0000);

/// 2^(idx/128) as (hi, lo).
#[inline(always)]
pub(super) fn table_entry(idx: usize) -> (f64, f64) {
    // SAFETY: callers pass idx & 127, and the table holds 128 pairs.
    unsafe {
        (
            f64::from_bits(*EXP2_MID_DD.get_unchecked(2 * idx)),
            f64::from_bits(*EXP2_MID_DD.get_unchecked(2 * idx + 1)),
        )
    }
}

/// exp(r + r_lo) - 1 as a normalized double-double, for |r| <= 2^-8.
#[inline(always)]
pub(super) fn expm1_dd(r: f64, r_lo: f64) -> (f64, f64) {
    let (sq_hi, sq_lo) = two_prod(r, r);
    let tail = r * sq_hi * polyeval_fma(r, &EXPM1_TAIL);
    let (hi, lo) = fast_two_sum(r, 0.5 * sq_hi);
    fast_two_sum(hi, lo + (r_lo + (0.5 * sq_lo + (r * r_lo + tail))))
}

/// 2^(k/128 mod 1) * (1 + e_hi + e_lo) as a normalized double-double.
#[inline(always)]
pub(super) fn scale_by_table(k: i64, e_hi: f64, e_lo: f64) -> (f64, f64) {
    let (t_hi, t_lo) = table_entry((k & (N - 1)) as usize);
    let (m_hi, m_lo) = two_prod(t_hi, e_hi);
    let (hi, lo) = fast_two_sum(t_hi, m_hi);
    fast_two_sum(hi, lo + (m_lo + (t_lo + (t_lo * e_hi + t_hi * e_lo))))
}

/// Round `(hi + lo) * 2^e`, with `hi + lo` in [0.5, 2), to binary64.
#[inline(always)]
pub(super) fn scale_and_round(hi: f64, lo: f64, e: i64, env: &mut FpEnv) -> f64 {
    if e > 1023 {
        let scale = f64::from_bits(((e - 1 + 1023) as u64) << 52);
        let (hi, lo) = (hi * scale * 2.0, lo * scale * 2.0);
        if hi.is_infinite() {
            return overflow(false, env);
        }
        return finish_f64(hi, lo, env);
    }
    if e >= 0 {
        let scale = f64::from_bits(((e + 1023) as u64) << 52);
        return finish_f64(hi * scale, lo * scale, env);
    }
    if e >= -1021 {
        // Round before scaling: `lo * scale` may already be subnormal.
        let scale = f64::from_bits(((e + 1023) as u64) << 52);
        return round_sum_to_f64(hi, lo, env.rounding()) * scale;
    }
    specialcase_subnormal(hi, lo, e, env)
}

/// Result below 2^-1021: round at the fixed subnormal spacing, using `lo`
/// for ties and directed modes.
#[cold]
#[inline(never)]
fn specialcase_subnormal(hi: f64, lo: f64, e: i64, env: &mut FpEnv) -> f64 {
    // Exact: e + 1022 >= -54 keeps both words normal.
    let scale = f64::from_bits(((e + 1022 + 1023) as u64) << 52);
    let y_hi = hi * scale;
    let y_lo = lo * scale;
    let r0 = y_hi * TWO_POW_M1022;
    // Distance from y_hi to the chosen neighbour, in units of 2^-1022; exact.
    let d = y_hi - r0 * TWO_POW_1022;
    let rem = d + y_lo;
    let half_ulp = f64::from_bits(0x3ca0_0000_0000_0000);
    let r = match env.rounding() {
        RoundingMode::ToNearest => {
            if d.abs() == half_ulp && y_lo != 0.0 && (y_lo > 0.0) == (d > 0.0) {
                if d > 0.0 { next_up_f64(r0) } else { next_down_f64(r0) }
            } else {
                r0
            }
        }
        RoundingMode::Upward => {
            if rem > 0.0 { next_up_f64(r0) } else { r0 }
        }
        RoundingMode::Downward | RoundingMode::TowardZero => {
            if rem < 0.0 { next_down_f64(r0) } else { r0 }
        }
    };
    if rem != 0.0 {
        if r == 0.0 {
            env.signal_underflow();
        } else {
            env.raise(ExceptionFlags::UNDERFLOW | ExceptionFlags::INEXACT);
        }
    }
    r
}

#[inline]
pub fn exp(x: f64, env: &mut FpEnv) -> f64 {
    let bits = FPBits::new(x);
    if bits.is_inf_or_nan() {
        if bits.is_nan() {
            return x + x;
        }
        return if bits.sign() { 0.0 } else { x };
    }
    if x.abs() < TWO_POW_M54 {
        return round_sum_to_f64(1.0, x, env.rounding());
    }
    if x > EXP_HI {
        return overflow(false, env);
    }
    if x < EXP_LO {
        return underflow(false, env);
    }

    let kd = (x * INV_LN2_N + SHIFT) - SHIFT;
    let k = kd as i64;
    let r_hi = x - kd * LN2_N_HI;
    let (m_hi, m_lo) = two_prod(kd, LN2_N_MID);
    let (r, r_err) = two_sum(r_hi, -m_hi);
    let r_lo = r_err - (m_lo + kd * LN2_N_LO);

    let (e_hi, e_lo) = expm1_dd(r, r_lo);
    let (hi, lo) = scale_by_table(k, e_hi, e_lo);
    scale_and_round(hi, lo, k >> EXP_TABLE_BITS, env)
}
