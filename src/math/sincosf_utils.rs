//! Shared pieces of sinf, cosf and sincosf.
//!
//! x * 16/pi is reduced to k + y with k an integer mod 32 and |y| <= 1/2 by
//! multiplying the 24-bit significand with a 128-bit window of 16/pi in
//! fixed point. The window is picked from a 256-bit expansion by the exponent
//! of x, which keeps the reduction exact enough for every finite binary32.
//! Then
//!   sin(x) = sin(y*pi/16) * cos(k*pi/16) + cos(y*pi/16) * sin(k*pi/16),
//!   cos(x) = cos(y*pi/16) * cos(k*pi/16) - sin(y*pi/16) * sin(k*pi/16).

use crate::fputil::except_table::{ExceptValues, ExceptionalCase};
use crate::fputil::poly::polyeval;

/// floor(16/pi * 2^256), least significant word first.
const SIXTEEN_OVER_PI: [u64; 5] = [
    0xf28b1d5ef5de2b0d,
    0xdb14acc9e21c820f,
    0xe13abe8fa9a6ee06,
    0x17cc1b727220a94f,
    0x0000000000000005,
];

/// sin(k * pi / 16) for k = 0, ..., 31.
const SIN_K_PI_OVER_16: [u64; 32] = [
    0x0000000000000000u64,
    0x3fc8f8b83c69a60bu64,
    0x3fd87de2a6aea963u64,
    0x3fe1c73b39ae68c8u64,
    0x3fe6a09e667f3bcdu64,
    0x3fea9b66290ea1a3u64,
    0x3fed906bcf328d46u64,
    0x3fef6297cff75cb0u64,
    0x3ff0000000000000u64,
    0x3fef6297cff75cb0u64,
    0x3fed906bcf328d46u64,
    0x3fea9b66290ea1a3u64,
    0x3fe6a09e667f3bcdu64,
    0x3fe1c73b39ae68c8u64,
    0x3fd87de2a6aea963u64,
    0x3fc8f8b83c69a60bu64,
    0x0000000000000000u64,
    0xbfc8f8b83c69a60bu64,
    0xbfd87de2a6aea963u64,
    0xbfe1c73b39ae68c8u64,
    0xbfe6a09e667f3bcdu64,
    0xbfea9b66290ea1a3u64,
    0xbfed906bcf328d46u64,
    0xbfef6297cff75cb0u64,
    0xbff0000000000000u64,
    0xbfef6297cff75cb0u64,
    0xbfed906bcf328d46u64,
    0xbfea9b66290ea1a3u64,
    0xbfe6a09e667f3bcdu64,
    0xbfe1c73b39ae68c8u64,
    0xbfd87de2a6aea963u64,
    0xbfc8f8b83c69a60bu64,
];

/// sin(y * pi / 16) / y as a polynomial in y^2, |y| <= 1/2.
const SIN_POLY: [f64; 5] = [
    f64::from_bits(0x3fc921fb54442d18),
    f64::from_bits(0xbf54abbce625be53),
    f64::from_bits(0x3ec466bc6775aae2),
    f64::from_bits(0xbe232d2cce62bd86),
    f64::from_bits(0x3d750783487ee782),
];

/// (cos(y * pi / 16) - 1) / y^2 as a polynomial in y^2, |y| <= 1/2.
const COSM1_POLY: [f64; 5] = [
    f64::from_bits(0xbf93bd3cc9be45de),
    f64::from_bits(0x3f103c1f081b5ac4),
    f64::from_bits(0xbe755d3c7e3cbffa),
    f64::from_bits(0x3dce1f506891babb),
    f64::from_bits(0xbd1a6d1f2a204a8c),
];

const TWO_POW_M123: f64 = f64::from_bits(0x3840_0000_0000_0000);

/// Bits `[shift, shift + 128)` of the 16/pi expansion.
#[inline(always)]
fn window(shift: u32) -> u128 {
    let word = |i: usize| SIXTEEN_OVER_PI.get(i).copied().unwrap_or(0) as u128;
    let q = (shift / 64) as usize;
    let r = shift % 64;
    let mut v = (word(q) | (word(q + 1) << 64)) >> r;
    if r != 0 {
        v |= word(q + 2) << (128 - r);
    }
    v
}

/// Reduce |x|, given by its bits with 2^-12 <= |x| < inf, to (k mod 32, y).
#[inline(always)]
pub(super) fn range_reduction(x_abs: u32) -> (usize, f64) {
    let e = x_abs >> 23;
    let m = ((x_abs & 0x007f_ffff) | 0x0080_0000) as u128;
    // Fixed point with 123 fractional bits, taken mod 2^128 = 32 * 2^123.
    let r = m.wrapping_mul(window(283 - e));
    let k = (r.wrapping_add(1 << 122) >> 123) as usize & 31;
    let y = r.wrapping_sub((k as u128) << 123) as i128;
    (k, y as f64 * TWO_POW_M123)
}

/// sin(|x|) and cos(|x|) in binary64 for the reduction of `x_abs`.
#[inline(always)]
pub(super) fn sincos_eval(x_abs: u32) -> (f64, f64) {
    let (k, y) = range_reduction(x_abs);
    let y2 = y * y;
    let sin_y = y * polyeval(y2, &SIN_POLY);
    let cosm1_y = y2 * polyeval(y2, &COSM1_POLY);
    let sin_k = f64::from_bits(SIN_K_PI_OVER_16[k]);
    let cos_k = f64::from_bits(SIN_K_PI_OVER_16[(k + 8) & 31]);
    let sin = sin_y * cos_k + (cosm1_y * sin_k + sin_k);
    let cos = (cosm1_y * cos_k + cos_k) - sin_y * sin_k;
    (sin, cos)
}

macro_rules! case {
    ($x:expr, $rz:expr, $up:expr, $down:expr, $rn:expr) => {
        ExceptionalCase { input: $x, toward_zero: $rz, upward: $up, downward: $down, to_nearest: $rn }
    };
}

/// sin(|x|) for the listed |x|; negative arguments go through `lookup_odd`.
pub(super) const SINF_EXCEPTS: ExceptValues<u32, 18> = ExceptValues::new([
    case!(0x3b5637f5, 0x3b5637dc, 1, 0, 0), // x = 0x1.ac6feap-9
    case!(0x3fa7832a, 0x3f7741b5, 1, 0, 1), // x = 0x1.4f0654p0
    case!(0x437ce5f1, 0x3f7fffff, 1, 0, 1), // x = 0x1.f9cbe2p7
    case!(0x46199998, 0xbeb1fa5d, 0, 1, 0), // x = 0x1.33333p13
    case!(0x4afdece4, 0xbf7fb6e0, 0, 1, 1), // x = 0x1.fbd9c8p22
    case!(0x50a3e87f, 0x3f7fffff, 1, 0, 1), // x = 0x1.47d0fep34
    case!(0x53b146a6, 0xbf7fffff, 0, 1, 1), // x = 0x1.628d4cp40
    case!(0x55325019, 0xbf171adf, 0, 1, 1), // x = 0x1.64a032p43
    case!(0x55cafb2a, 0xbf7e7a16, 0, 1, 1), // x = 0x1.95f654p44
    case!(0x5922aa80, 0xbf587521, 0, 1, 1), // x = 0x1.4555p51
    case!(0x5aa4542c, 0x3f5f5646, 1, 0, 0), // x = 0x1.48a858p54
    case!(0x5f18b878, 0x3dad60f6, 1, 0, 1), // x = 0x1.3170fp63
    case!(0x6115cb11, 0xbe7cc1e0, 0, 1, 1), // x = 0x1.2b9622p67
    case!(0x65898498, 0x3f7fffff, 1, 0, 1), // x = 0x1.13093p76
    case!(0x6a1976f1, 0x3f7fffff, 1, 0, 1), // x = 0x1.32ede2p85
    case!(0x6f79be45, 0x3f7fffff, 1, 0, 1), // x = 0x1.f37c8ap95
    case!(0x77584625, 0xbf7fffff, 0, 1, 1), // x = 0x1.b08c4ap111
    case!(0x7beef5ef, 0xbf587d1b, 0, 1, 1), // x = 0x1.ddebdep120
]);

/// cos(|x|) for the listed |x|.
pub(super) const COSF_EXCEPTS: ExceptValues<u32, 16> = ExceptValues::new([
    case!(0x3b5637f5, 0x3f7fffa6, 1, 0, 0),
    case!(0x3fa7832a, 0x3e84aabf, 1, 0, 1),
    case!(0x43fce5f1, 0xbf7fffff, 0, 1, 1),
    case!(0x46199998, 0xbf70090b, 0, 1, 0),
    case!(0x491a2430, 0xbf76ff17, 0, 1, 1),
    case!(0x5123e87f, 0xbf7fffff, 0, 1, 1),
    case!(0x51a3e87f, 0x3f7fffff, 1, 0, 1),
    case!(0x55325019, 0x3f4ea5d2, 1, 0, 0),
    case!(0x55cafb2a, 0x3ddf11f3, 1, 0, 1),
    case!(0x5922aa80, 0x3f08aebe, 1, 0, 1),
    case!(0x5aa4542c, 0x3efa40a4, 1, 0, 0),
    case!(0x5f18b878, 0x3f7f14bb, 1, 0, 0),
    case!(0x6115cb11, 0x3f78142e, 1, 0, 1),
    case!(0x6ff9be45, 0xbf7fffff, 0, 1, 1),
    case!(0x7079be45, 0x3f7fffff, 1, 0, 1),
    case!(0x7beef5ef, 0x3f08a21c, 1, 0, 0),
]);
