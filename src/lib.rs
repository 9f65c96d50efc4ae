#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod fputil;
pub mod math;
#[cfg(feature = "std")]
pub mod thread_env;

pub use fputil::nearest_integer::{lround, lroundf};
pub use fputil::{ExceptionFlags, FPBits, FpEnv, MathError, RoundingMode};
pub use math::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fputil::manipulation;
    use libloading::Library;
    #[cfg(feature = "mpfr")]
    use rug::{Float, float::Round};
    use std::path::Path;
    use std::string::String;
    use std::vec::Vec;
    use std::{eprintln, format};

    const MAX_ULP_TOL: f64 = 1.0;
    // Directed results sit up to one ulp from the exact value; the binary64
    // reference adds its own rounding on top.
    const DIRECTED_ULP_TOL: f64 = 1.001;
    #[cfg(feature = "mpfr")]
    const MPFR_PREC: u32 = 256;

    type Kernel = fn(f32, &mut FpEnv) -> f32;

    /// Spacing of binary32 values in the binade of `r`.
    fn ulp_size_f32(r: f64) -> f64 {
        let e = ((r.abs().to_bits() >> 52) as i32 - 1023).max(-126);
        2f64.powi(e - 23)
    }

    fn ulp_error_f32(actual: f32, expected: f64) -> f64 {
        let diff = (actual as f64 - expected).abs();
        if diff == 0.0 {
            return 0.0;
        }
        diff / ulp_size_f32(expected)
    }

    fn assert_ulp_eq_f32(actual: f32, expected: f64, max_ulps: f64, context: &str) {
        if actual.is_nan() && expected.is_nan() {
            return;
        }
        if actual.is_infinite() || expected.is_infinite() {
            assert_eq!(
                actual as f64, expected,
                "{context}: expected {expected}, got {actual}"
            );
            return;
        }
        let ulps = ulp_error_f32(actual, expected);
        assert!(
            ulps <= max_ulps,
            "{context}: expected {expected}, got {actual} (ulps={ulps})"
        );
    }

    fn mode_name(mode: RoundingMode) -> &'static str {
        match mode {
            RoundingMode::ToNearest => "RN",
            RoundingMode::Upward => "RU",
            RoundingMode::Downward => "RD",
            RoundingMode::TowardZero => "RZ",
        }
    }

    fn run(f: Kernel, x: f32, mode: RoundingMode) -> f32 {
        let mut env = FpEnv::with_rounding(mode);
        f(x, &mut env)
    }

    // ========= references =========

    fn std_reference(name: &str, x: f64) -> f64 {
        match name {
            "exp2f" => x.exp2(),
            "expf" => x.exp(),
            "expm1f" => x.exp_m1(),
            "sinf" => x.sin(),
            "cosf" => x.cos(),
            "logf" => x.ln(),
            "log2f" => x.log2(),
            _ => unreachable!("no reference for {name}"),
        }
    }

    #[cfg(feature = "mpfr")]
    fn mpfr_round(mode: RoundingMode) -> Round {
        match mode {
            RoundingMode::ToNearest => Round::Nearest,
            RoundingMode::Upward => Round::Up,
            RoundingMode::Downward => Round::Down,
            RoundingMode::TowardZero => Round::Zero,
        }
    }

    /// Correctly rounded binary32 value of `name(x)` in direction `mode`.
    #[cfg(feature = "mpfr")]
    fn mpfr_reference(name: &str, x: f32, mode: RoundingMode) -> f32 {
        let mut v = Float::with_val(MPFR_PREC, x);
        match name {
            "exp2f" => v.exp2_mut(),
            "expf" => v.exp_mut(),
            "expm1f" => v.exp_m1_mut(),
            "sinf" => v.sin_mut(),
            "cosf" => v.cos_mut(),
            "logf" => v.ln_mut(),
            "log2f" => v.log2_mut(),
            _ => unreachable!("no reference for {name}"),
        }
        v.to_f32_round(mpfr_round(mode))
    }

    const KERNELS: [(&str, Kernel, f32, f32); 7] = [
        ("exp2f", exp2f, -149.0, 127.9),
        ("expf", expf, -103.0, 88.7),
        ("expm1f", expm1f, -20.0, 88.7),
        ("sinf", sinf, -1.0e6, 1.0e6),
        ("cosf", cosf, -1.0e6, 1.0e6),
        ("logf", logf, 1.0e-30, 1.0e30),
        ("log2f", log2f, 1.0e-30, 1.0e30),
    ];

    // ========= inputs =========

    fn rand_u64(state: &mut u64) -> u64 {
        const A: u64 = 6364136223846793005;
        const C: u64 = 1442695040888963407;
        *state = state.wrapping_mul(A).wrapping_add(C);
        *state
    }

    fn rand_f64_unit(state: &mut u64) -> f64 {
        let bits = rand_u64(state) >> 11;
        (bits as f64) / ((1u64 << 53) as f64)
    }

    fn rand_range_f32(state: &mut u64, min: f32, max: f32) -> f32 {
        let t = rand_f64_unit(state);
        (min as f64 + (max as f64 - min as f64) * t) as f32
    }

    /// A mix of uniform samples and raw bit patterns restricted to `[min, max]`.
    fn sample_inputs(min: f32, max: f32, count: usize, seed: u64) -> Vec<f32> {
        let mut state = seed;
        let mut inputs = Vec::with_capacity(count);
        while inputs.len() < count {
            let x = if inputs.len() % 2 == 0 {
                rand_range_f32(&mut state, min, max)
            } else {
                f32::from_bits((rand_u64(&mut state) >> 32) as u32)
            };
            if x.is_finite() && x >= min && x <= max {
                inputs.push(x);
            }
        }
        inputs
    }

    // ========= accuracy against std =========

    #[test]
    fn kernels_match_std_ulps() {
        for (name, f, min, max) in KERNELS {
            for (i, x) in sample_inputs(min, max, 4000, 0x5eed + min.to_bits() as u64)
                .into_iter()
                .enumerate()
            {
                let mode = RoundingMode::ALL[i % 4];
                let tol = if mode == RoundingMode::ToNearest {
                    MAX_ULP_TOL
                } else {
                    DIRECTED_ULP_TOL
                };
                let actual = run(f, x, mode);
                let expected = std_reference(name, x as f64);
                let context = format!("{name}({x:e}) [{}]", mode_name(mode));
                assert_ulp_eq_f32(actual, expected, tol, &context);
            }
        }
    }

    #[test]
    fn directed_results_bracket_nearest() {
        for (name, f, min, max) in KERNELS {
            for x in sample_inputs(min, max, 2000, 0xb7ac) {
                let up = run(f, x, RoundingMode::Upward);
                let down = run(f, x, RoundingMode::Downward);
                let near = run(f, x, RoundingMode::ToNearest);
                let zero = run(f, x, RoundingMode::TowardZero);
                assert!(down <= near && near <= up, "{name}({x:e})");
                assert!(
                    up == down || up == manipulation::next_up_f32(down),
                    "{name}({x:e}): up={up:e} down={down:e}"
                );
                let toward = if near.is_sign_negative() { up } else { down };
                assert_eq!(zero.to_bits(), toward.to_bits(), "{name}({x:e}) toward zero");
            }
        }
    }

    type Kernel64 = fn(f64, &mut FpEnv) -> f64;

    const KERNELS_F64: [(&str, Kernel64, f64, f64); 2] = [
        ("exp", exp, -745.0, 709.7),
        ("exp2", exp2, -1074.5, 1023.9),
    ];

    fn run64(f: Kernel64, x: f64, mode: RoundingMode) -> f64 {
        f(x, &mut FpEnv::with_rounding(mode))
    }

    /// Inputs over `[min, max]`, half of them within 1 of zero.
    fn sample_inputs_f64(min: f64, max: f64, count: usize, seed: u64) -> Vec<f64> {
        let mut state = seed;
        (0..count)
            .map(|i| {
                let t = rand_f64_unit(&mut state);
                if i % 2 == 0 { min + (max - min) * t } else { 2.0 * t - 1.0 }
            })
            .collect()
    }

    #[test]
    fn f64_kernels_match_std_ulps() {
        for (name, f, min, max) in KERNELS_F64 {
            for x in sample_inputs_f64(min, max, 20_000, 0x64) {
                let down = run64(f, x, RoundingMode::Downward);
                let up = run64(f, x, RoundingMode::Upward);
                let near = run64(f, x, RoundingMode::ToNearest);
                let zero = run64(f, x, RoundingMode::TowardZero);
                assert!(
                    up == down || up == manipulation::next_up_f64(down),
                    "{name}({x:e}): up={up:e} down={down:e}"
                );
                assert!(near == down || near == up, "{name}({x:e}): near={near:e}");
                assert_eq!(zero.to_bits(), down.to_bits(), "{name}({x:e}) toward zero");
                let expected = if name == "exp" { x.exp() } else { x.exp2() };
                assert!(
                    near.to_bits().abs_diff(expected.to_bits()) <= 1,
                    "{name}({x:e}): {near:e} vs {expected:e}"
                );
            }
        }
    }

    // ========= correct rounding against MPFR =========

    #[cfg(feature = "mpfr")]
    #[test]
    fn kernels_are_correctly_rounded_mpfr() {
        for (name, f, min, max) in KERNELS {
            for x in sample_inputs(min, max, 3000, 0x3f3f) {
                for mode in RoundingMode::ALL {
                    let actual = run(f, x, mode);
                    let expected = mpfr_reference(name, x, mode);
                    assert_eq!(
                        actual.to_bits(),
                        expected.to_bits(),
                        "{name}({x:e}) [{}]: expected {expected:e}, got {actual:e}",
                        mode_name(mode)
                    );
                }
            }
        }
    }

    #[cfg(feature = "mpfr")]
    #[test]
    fn f64_kernels_are_faithful_mpfr() {
        for (name, f, min, max) in KERNELS_F64 {
            for x in sample_inputs_f64(min, max, 50_000, 0xfa17) {
                let mut v = Float::with_val(MPFR_PREC, x);
                if name == "exp" {
                    v.exp_mut();
                } else {
                    v.exp2_mut();
                }
                let rd = v.to_f64_round(Round::Down);
                let ru = v.to_f64_round(Round::Up);
                for mode in RoundingMode::ALL {
                    let actual = run64(f, x, mode);
                    assert!(
                        rd <= actual && actual <= ru,
                        "{name}({x:e}) [{}]: {actual:e} outside [{rd:e}, {ru:e}]",
                        mode_name(mode)
                    );
                }
            }
        }
    }

    #[cfg(feature = "mpfr")]
    #[test]
    fn sqrt_is_correctly_rounded_mpfr() {
        let mut env = FpEnv::new();
        for x in sample_inputs(0.0, f32::MAX, 5000, 0x5157) {
            for mode in RoundingMode::ALL {
                env.set_rounding(mode);
                let mut v = Float::with_val(MPFR_PREC, x);
                v.sqrt_mut();
                let expected = v.to_f32_round(mpfr_round(mode));
                assert_eq!(
                    sqrtf(x, &mut env).to_bits(),
                    expected.to_bits(),
                    "sqrtf({x:e}) [{}]",
                    mode_name(mode)
                );
            }
        }
    }

    // ========= glibc differential =========

    fn glibc_libm_path() -> Option<String> {
        if std::env::var("CORELIBM_GLIBC_TEST").is_err() {
            return None;
        }
        let path = std::env::var("CORELIBM_GLIBC_LIBM")
            .unwrap_or_else(|_| String::from("/lib/x86_64-linux-gnu/libm.so.6"));
        if !Path::new(&path).exists() {
            eprintln!("glibc libm not found at {path}");
            return None;
        }
        Some(path)
    }

    #[test]
    fn kernels_match_glibc_ulps() {
        let Some(path) = glibc_libm_path() else {
            return;
        };
        let lib = unsafe { Library::new(&path).expect("load glibc libm") };
        for (name, f, min, max) in KERNELS {
            let sym: libloading::Symbol<unsafe extern "C" fn(f32) -> f32> =
                unsafe { lib.get(name.as_bytes()).expect("load symbol") };
            let mut worst = 0.0f64;
            for x in sample_inputs(min, max, 20_000, 0x61bc) {
                let expected = unsafe { sym(x) };
                let actual = run(f, x, RoundingMode::ToNearest);
                let context = format!("glibc {name}({x:e})");
                assert_ulp_eq_f32(actual, expected as f64, MAX_ULP_TOL, &context);
                worst = worst.max(ulp_error_f32(actual, expected as f64));
            }
            eprintln!("{name}: max distance from glibc {worst} ulp");
        }
    }

    // ========= properties =========

    use proptest::prelude::*;
    proptest! {
        #[test]
        fn ptest_expf_monotone(x in -103.0f32..88.0f32, mode in proptest::sample::select(RoundingMode::ALL.to_vec())) {
            let y = manipulation::next_up_f32(x);
            let a = run(expf, x, mode);
            let b = run(expf, y, mode);
            prop_assert!(a <= b, "expf not monotone at {x:e}: {a:e} > {b:e}");
        }

        #[test]
        fn ptest_exp2f_monotone(x in -149.0f32..127.0f32) {
            let y = manipulation::next_up_f32(x);
            prop_assert!(run(exp2f, x, RoundingMode::ToNearest) <= run(exp2f, y, RoundingMode::ToNearest));
        }

        #[test]
        fn ptest_logf_monotone(x in 1.0e-38f32..3.0e38f32) {
            let y = manipulation::next_up_f32(x);
            prop_assert!(run(logf, x, RoundingMode::ToNearest) <= run(logf, y, RoundingMode::ToNearest));
        }

        #[test]
        fn ptest_sin_cos_pythagoras(x in -1.0e6f32..1.0e6f32) {
            let mut env = FpEnv::new();
            let (s, c) = sincosf(x, &mut env);
            let r = s as f64 * s as f64 + c as f64 * c as f64;
            prop_assert!((r - 1.0).abs() < 1.0e-6, "sin^2 + cos^2 = {r} at {x:e}");
        }

        #[test]
        fn ptest_sincosf_matches_single(x in proptest::num::f32::ANY) {
            let mut env = FpEnv::new();
            let (s, c) = sincosf(x, &mut env);
            let (s1, c1) = (sinf(x, &mut env), cosf(x, &mut env));
            prop_assert!(s.to_bits() == s1.to_bits() || (s.is_nan() && s1.is_nan()));
            prop_assert!(c.to_bits() == c1.to_bits() || (c.is_nan() && c1.is_nan()));
        }

        #[test]
        fn ptest_sign_symmetry(x in -1.0e4f32..1.0e4f32) {
            // sin is odd: flipping the input flips the direction of rounding.
            let up = run(sinf, x, RoundingMode::Upward);
            let down_neg = run(sinf, -x, RoundingMode::Downward);
            prop_assert_eq!(up.to_bits(), (-down_neg).to_bits());
            prop_assert_eq!(run(cosf, x, RoundingMode::Upward).to_bits(), run(cosf, -x, RoundingMode::Upward).to_bits());
        }

        #[test]
        fn ptest_log_exp_round_trip(x in -80.0f32..80.0f32) {
            let mut env = FpEnv::new();
            let back = logf(expf(x, &mut env), &mut env);
            let tol = 1.0e-6 + x.abs() * 1.0e-6;
            prop_assert!((back - x).abs() <= tol, "logf(expf({x:e})) = {back:e}");
            let back2 = log2f(exp2f(x, &mut env), &mut env);
            prop_assert!((back2 - x).abs() <= tol, "log2f(exp2f({x:e})) = {back2:e}");
        }

        #[test]
        fn ptest_expm1_tracks_exp(x in -10.0f32..10.0f32) {
            let mut env = FpEnv::new();
            let a = expm1f(x, &mut env) as f64;
            let b = expf(x, &mut env) as f64 - 1.0;
            prop_assert!((a - b).abs() <= 2.0e-7 * (b.abs() + 1.0));
        }
    }
}
