//! A per-thread floating-point environment for callers that want the C model
//! of a global rounding mode, sticky flags and `errno`.
//!
//! The kernels themselves never touch this state; the wrappers here borrow the
//! current thread's [`FpEnv`] for the duration of one call.
//!
//! ```
//! use corelibm::thread_env;
//! use corelibm::RoundingMode;
//!
//! thread_env::set_rounding(RoundingMode::Upward);
//! assert_eq!(thread_env::expf(0.0), 1.0);
//! assert!(thread_env::logf(-1.0).is_nan());
//! assert!(thread_env::take_errno().is_some());
//! thread_env::clear();
//! ```

use std::cell::RefCell;

use crate::fputil::env::{ExceptionFlags, FpEnv, MathError, RoundingMode};
use crate::fputil::nearest_integer;
use crate::math;

std::thread_local! {
    static ENV: RefCell<FpEnv> = const { RefCell::new(FpEnv::new()) };
}

/// Run `f` with exclusive access to this thread's environment.
///
/// Calls must not nest: a wrapper invoked from inside `f` panics on the
/// second borrow.
pub fn with<R>(f: impl FnOnce(&mut FpEnv) -> R) -> R {
    ENV.with(|env| f(&mut env.borrow_mut()))
}

pub fn rounding() -> RoundingMode {
    with(|env| env.rounding())
}

pub fn set_rounding(mode: RoundingMode) {
    with(|env| env.set_rounding(mode));
}

pub fn flags() -> ExceptionFlags {
    with(|env| env.flags())
}

pub fn take_errno() -> Option<MathError> {
    with(|env| env.take_errno())
}

/// Reset to round-to-nearest with no flags raised and no pending error.
pub fn clear() {
    with(|env| *env = FpEnv::new());
}

macro_rules! thread_wrappers {
    ($($name:ident: $ty:ty => $ret:ty = $path:path;)*) => {
        $(
            #[inline]
            pub fn $name(x: $ty) -> $ret {
                with(|env| $path(x, env))
            }
        )*
    };
}

thread_wrappers! {
    exp2f: f32 => f32 = math::exp2f;
    expf: f32 => f32 = math::expf;
    expm1f: f32 => f32 = math::expm1f;
    sinf: f32 => f32 = math::sinf;
    cosf: f32 => f32 = math::cosf;
    sincosf: f32 => (f32, f32) = math::sincosf;
    logf: f32 => f32 = math::logf;
    log2f: f32 => f32 = math::log2f;
    logbf: f32 => f32 = math::logbf;
    sqrtf: f32 => f32 = math::sqrtf;
    exp: f64 => f64 = math::exp;
    exp2: f64 => f64 = math::exp2;
    logb: f64 => f64 = math::logb;
    sqrt: f64 => f64 = math::sqrt;
    lroundf: f32 => i64 = nearest_integer::lroundf;
    lround: f64 => i64 = nearest_integer::lround;
}

pub fn fmodf(x: f32, y: f32) -> f32 {
    with(|env| math::fmodf(x, y, env))
}

pub fn fmod(x: f64, y: f64) -> f64 {
    with(|env| math::fmod(x, y, env))
}

pub fn rintf(x: f32) -> f32 {
    with(|env| nearest_integer::rint(x, env))
}

pub fn rint(x: f64) -> f64 {
    with(|env| nearest_integer::rint(x, env))
}

pub fn nearbyintf(x: f32) -> f32 {
    with(|env| nearest_integer::nearbyint(x, env))
}

pub fn nearbyint(x: f64) -> f64 {
    with(|env| nearest_integer::nearbyint(x, env))
}
