//! exp2(x) implementation.
//!
//! x = k/128 + r with |r| <= 1/256 exactly. r*ln2 is formed as a
//! double-double and goes through the same exp(r) - 1 evaluation, table
//! product and scaling as [`exp`](super::exp).

use super::exp::{EXP_TABLE_BITS, N, SHIFT, expm1_dd, scale_and_round, scale_by_table};
use super::{overflow, underflow};
use crate::fputil::env::FpEnv;
use crate::fputil::fp_bits::FPBits;
use crate::fputil::multiply_add::two_prod;
use crate::fputil::rounding::round_sum_to_f64;

const LN2_HI: f64 = f64::from_bits(0x3fe6_2e42_fefa_39ef);
const LN2_LO: f64 = f64::from_bits(0x3c7a_bc9e_3b39_803f);

const TWO_POW_M54: f64 = f64::from_bits(0x3c90_0000_0000_0000);

#[inline]
pub fn exp2(x: f64, env: &mut FpEnv) -> f64 {
    let bits = FPBits::new(x);
    if bits.is_inf_or_nan() {
        if bits.is_nan() {
            return x + x;
        }
        return if bits.sign() { 0.0 } else { x };
    }
    if x.abs() < TWO_POW_M54 {
        return round_sum_to_f64(1.0, x * LN2_HI, env.rounding());
    }
    if x >= 1024.0 {
        return overflow(false, env);
    }
    if x <= -1075.0 {
        return underflow(false, env);
    }

    let kd = (x * N as f64 + SHIFT) - SHIFT;
    let k = kd as i64;
    // Exact.
    let r = x - kd * (1.0 / N as f64);
    let (u_hi, u_lo) = two_prod(r, LN2_HI);
    let (e_hi, e_lo) = expm1_dd(u_hi, u_lo + r * LN2_LO);
    let (hi, lo) = scale_by_table(k, e_hi, e_lo);
    scale_and_round(hi, lo, k >> EXP_TABLE_BITS, env)
}
