//! Argument reduction shared by logf and log2f.
//!
//! x = 2^m * f with f in [0.75, 1.5). f is then split as
//! f = c * (1 + d) with c = 1 + j/128 on a 1/128 grid, so that
//! log(x) = m*log(2) + log(c) + log1p(d) with |d| <= 2^-8.

use super::common_constants::LOG_RCP;
use crate::fputil::poly::polyeval;

/// log1p(d) - d = d^2 * P(d) for |d| <= 2^-8.
const LOG1P_POLY: [f64; 6] = [
    -0.5,
    f64::from_bits(0x3fd5555555555555),
    -0.25,
    f64::from_bits(0x3fc999999999999a),
    f64::from_bits(0xbfc5555555555555),
    f64::from_bits(0x3fc2492492492492),
];

pub(super) const LN2: f64 = f64::from_bits(0x3fe62e42fefa39ef);
pub(super) const INV_LN2: f64 = f64::from_bits(0x3ff71547652b82fe);

/// Exponent `m`, table index `j + 32` and `d` for a positive finite `x`.
#[inline(always)]
pub(super) fn log_reduction(x: f32) -> (f64, usize, f64) {
    let mut bits = x.to_bits();
    let mut m = 0i32;
    if bits < 0x0080_0000 {
        // Subnormal: scale by 2^23 into the normal range.
        bits = (x * 8_388_608.0).to_bits();
        m -= 23;
    }
    m += (bits >> 23) as i32 - 127;
    let mantissa = bits & 0x007f_ffff;
    let f_bits = if mantissa >= 0x0040_0000 {
        m += 1;
        mantissa | (126 << 23)
    } else {
        mantissa | (127 << 23)
    };
    let f = f32::from_bits(f_bits);
    let j = ((f - 1.0) * 128.0 + if f < 1.0 { -0.5 } else { 0.5 }) as i32;
    let c = 1.0 + j as f64 * 0.0078125;
    let idx = (j + 32) as usize;
    let d = (f as f64 - c) * f64::from_bits(LOG_RCP[idx]);
    (m as f64, idx, d)
}

#[inline(always)]
pub(super) fn log1p_eval(d: f64) -> f64 {
    d * d * polyeval(d, &LOG1P_POLY) + d
}
