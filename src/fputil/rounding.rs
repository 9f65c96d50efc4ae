//! Final rounding of binary64 intermediates in the caller's rounding direction.
//!
//! Kernels compute in binary64 under the default round-to-nearest and only
//! honour the requested [`RoundingMode`] at the very last step. The helpers
//! here take an exact or double-double intermediate and produce the correctly
//! rounded binary32 (or binary64) result for that direction, including the
//! saturation to the largest finite value that directed modes require.

use super::env::RoundingMode;
use super::manipulation::{next_down_f32, next_down_f64, next_up_f32, next_up_f64};

/// Error-free sum: `a + b == s + err` exactly.
#[inline(always)]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

/// Error-free sum for `|a| >= |b|` (or `a == 0`).
#[inline(always)]
pub fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let z = s - a;
    (s, b - z)
}

#[inline(always)]
fn toward_positive(mode: RoundingMode, negative: bool) -> bool {
    match mode {
        RoundingMode::Upward => true,
        RoundingMode::TowardZero => negative,
        RoundingMode::Downward | RoundingMode::ToNearest => false,
    }
}

#[inline(always)]
fn saturate_f32(negative: bool, mode: RoundingMode) -> f32 {
    let v = if mode.saturates(negative) {
        f32::MAX
    } else {
        f32::INFINITY
    };
    if negative { -v } else { v }
}

/// Round `r` to binary32 in direction `mode`.
#[inline(always)]
pub fn round_to_f32(r: f64, mode: RoundingMode) -> f32 {
    round_sum_to_f32(r, 0.0, mode)
}

/// Round the exact value `hi + lo` to binary32 in direction `mode`.
///
/// Requires `|lo| <= |hi|` (or `hi == 0`). The low word decides ties and
/// directed roundings that a plain `(hi + lo) as f32` would get wrong.
pub fn round_sum_to_f32(hi: f64, lo: f64, mode: RoundingMode) -> f32 {
    let (s, e) = fast_two_sum(hi, lo);
    let f = s as f32;
    if !s.is_finite() {
        return f;
    }
    if f.is_infinite() {
        return saturate_f32(s < 0.0, mode);
    }
    let back = f as f64;
    // Exact: `back` is the nearest binary32 to `s`.
    let d = s - back;
    if mode == RoundingMode::ToNearest {
        if d == 0.0 || e == 0.0 {
            return f;
        }
        // `s` exactly halfway between `f` and `g`: the low word breaks the tie.
        let g = if d > 0.0 {
            next_up_f32(f)
        } else {
            next_down_f32(f)
        };
        let half = (g as f64 - back) * 0.5;
        if d == half && (e > 0.0) == (d > 0.0) {
            return g;
        }
        return f;
    }
    let r = d + e;
    if r == 0.0 {
        return f;
    }
    let up = toward_positive(mode, s < 0.0);
    if r > 0.0 {
        if up { next_up_f32(f) } else { f }
    } else if up {
        f
    } else {
        next_down_f32(f)
    }
}

/// Round the exact value `hi + lo` to binary64 in direction `mode`.
///
/// Requires `|lo| <= |hi|` (or `hi == 0`).
pub fn round_sum_to_f64(hi: f64, lo: f64, mode: RoundingMode) -> f64 {
    let (s, e) = fast_two_sum(hi, lo);
    if s.is_infinite() && hi.is_finite() {
        let negative = s < 0.0;
        let v = if mode.saturates(negative) {
            f64::MAX
        } else {
            f64::INFINITY
        };
        return if negative { -v } else { v };
    }
    if mode == RoundingMode::ToNearest || e == 0.0 || !s.is_finite() {
        return s;
    }
    let up = toward_positive(mode, s < 0.0);
    if e > 0.0 {
        if up { next_up_f64(s) } else { s }
    } else if up {
        s
    } else {
        next_down_f64(s)
    }
}

/// Correctly rounded binary32 `a * b + c` with a single rounding in direction `mode`.
pub fn multiply_add_f32(a: f32, b: f32, c: f32, mode: RoundingMode) -> f32 {
    // Exact: 24 x 24 bit product.
    let p = a as f64 * b as f64;
    let c = c as f64;
    if !p.is_finite() || !c.is_finite() {
        return (p + c) as f32;
    }
    let (s, e) = two_sum(p, c);
    round_sum_to_f32(s, e, mode)
}
