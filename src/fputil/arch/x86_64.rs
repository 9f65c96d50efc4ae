use core::arch::x86_64::{
    _mm_cvtsd_f64, _mm_cvtss_f32, _mm_set_sd, _mm_set_ss, _mm_sqrt_sd, _mm_sqrt_ss,
};

use super::{IntegralRounding, Portable, Primitives};

/// SSE2 is part of the x86_64 baseline; FMA and SSE4.1 are used only when the
/// build enables them.
pub struct Hardware;

#[cfg(target_feature = "sse4.1")]
#[inline(always)]
fn round_sd(x: f64, dir: IntegralRounding) -> f64 {
    use core::arch::x86_64::{
        _MM_FROUND_NO_EXC, _MM_FROUND_TO_NEAREST_INT, _MM_FROUND_TO_NEG_INF,
        _MM_FROUND_TO_POS_INF, _MM_FROUND_TO_ZERO, _mm_round_sd,
    };
    const FLOOR: i32 = _MM_FROUND_TO_NEG_INF | _MM_FROUND_NO_EXC;
    const CEIL: i32 = _MM_FROUND_TO_POS_INF | _MM_FROUND_NO_EXC;
    const TRUNC: i32 = _MM_FROUND_TO_ZERO | _MM_FROUND_NO_EXC;
    const NEAREST: i32 = _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC;
    // Safety: sse4.1 is enabled for this build.
    unsafe {
        let v = _mm_set_sd(x);
        let r = match dir {
            IntegralRounding::Floor => _mm_round_sd::<FLOOR>(v, v),
            IntegralRounding::Ceil => _mm_round_sd::<CEIL>(v, v),
            IntegralRounding::Trunc => _mm_round_sd::<TRUNC>(v, v),
            IntegralRounding::NearestEven => _mm_round_sd::<NEAREST>(v, v),
            IntegralRounding::NearestAway => return Portable::round_integral_f64(x, dir),
        };
        _mm_cvtsd_f64(r)
    }
}

#[cfg(target_feature = "sse4.1")]
#[inline(always)]
fn round_ss(x: f32, dir: IntegralRounding) -> f32 {
    use core::arch::x86_64::{
        _MM_FROUND_NO_EXC, _MM_FROUND_TO_NEAREST_INT, _MM_FROUND_TO_NEG_INF,
        _MM_FROUND_TO_POS_INF, _MM_FROUND_TO_ZERO, _mm_round_ss,
    };
    const FLOOR: i32 = _MM_FROUND_TO_NEG_INF | _MM_FROUND_NO_EXC;
    const CEIL: i32 = _MM_FROUND_TO_POS_INF | _MM_FROUND_NO_EXC;
    const TRUNC: i32 = _MM_FROUND_TO_ZERO | _MM_FROUND_NO_EXC;
    const NEAREST: i32 = _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC;
    // Safety: sse4.1 is enabled for this build.
    unsafe {
        let v = _mm_set_ss(x);
        let r = match dir {
            IntegralRounding::Floor => _mm_round_ss::<FLOOR>(v, v),
            IntegralRounding::Ceil => _mm_round_ss::<CEIL>(v, v),
            IntegralRounding::Trunc => _mm_round_ss::<TRUNC>(v, v),
            IntegralRounding::NearestEven => _mm_round_ss::<NEAREST>(v, v),
            IntegralRounding::NearestAway => return Portable::round_integral_f32(x, dir),
        };
        _mm_cvtss_f32(r)
    }
}

impl Primitives for Hardware {
    #[inline(always)]
    fn fma(a: f64, b: f64, c: f64) -> f64 {
        #[cfg(target_feature = "fma")]
        {
            use core::arch::x86_64::_mm_fmadd_sd;
            // Safety: fma is enabled for this build.
            unsafe { _mm_cvtsd_f64(_mm_fmadd_sd(_mm_set_sd(a), _mm_set_sd(b), _mm_set_sd(c))) }
        }
        #[cfg(not(target_feature = "fma"))]
        {
            Portable::fma(a, b, c)
        }
    }

    #[inline(always)]
    fn sqrt_f32(x: f32) -> f32 {
        // Safety: SSE is baseline on x86_64.
        unsafe { _mm_cvtss_f32(_mm_sqrt_ss(_mm_set_ss(x))) }
    }

    #[inline(always)]
    fn sqrt_f64(x: f64) -> f64 {
        // Safety: SSE2 is baseline on x86_64.
        unsafe { _mm_cvtsd_f64(_mm_sqrt_sd(_mm_set_sd(0.0), _mm_set_sd(x))) }
    }

    #[inline(always)]
    fn round_integral_f32(x: f32, dir: IntegralRounding) -> f32 {
        #[cfg(target_feature = "sse4.1")]
        {
            round_ss(x, dir)
        }
        #[cfg(not(target_feature = "sse4.1"))]
        {
            Portable::round_integral_f32(x, dir)
        }
    }

    #[inline(always)]
    fn round_integral_f64(x: f64, dir: IntegralRounding) -> f64 {
        #[cfg(target_feature = "sse4.1")]
        {
            round_sd(x, dir)
        }
        #[cfg(not(target_feature = "sse4.1"))]
        {
            Portable::round_integral_f64(x, dir)
        }
    }
}
