use core::arch::asm;

use super::{IntegralRounding, Primitives};

/// Every instruction used here is part of the base AArch64 ISA.
pub struct Hardware;

macro_rules! unary_asm {
    ($insn:literal, $x:expr, $reg:ident, $ty:ty) => {{
        let out: $ty;
        // Safety: pure register-to-register instruction.
        unsafe {
            asm!(
                concat!($insn, " {out:", stringify!($reg), "}, {x:", stringify!($reg), "}"),
                out = out(vreg) out,
                x = in(vreg) $x,
                options(pure, nomem, nostack)
            );
        }
        out
    }};
}

impl Primitives for Hardware {
    #[inline(always)]
    fn fma(a: f64, b: f64, c: f64) -> f64 {
        let out: f64;
        // Safety: pure register-to-register instruction.
        unsafe {
            asm!(
                "fmadd {out:d}, {a:d}, {b:d}, {c:d}",
                out = out(vreg) out,
                a = in(vreg) a,
                b = in(vreg) b,
                c = in(vreg) c,
                options(pure, nomem, nostack)
            );
        }
        out
    }

    #[inline(always)]
    fn sqrt_f32(x: f32) -> f32 {
        unary_asm!("fsqrt", x, s, f32)
    }

    #[inline(always)]
    fn sqrt_f64(x: f64) -> f64 {
        unary_asm!("fsqrt", x, d, f64)
    }

    #[inline(always)]
    fn round_integral_f32(x: f32, dir: IntegralRounding) -> f32 {
        match dir {
            IntegralRounding::Floor => unary_asm!("frintm", x, s, f32),
            IntegralRounding::Ceil => unary_asm!("frintp", x, s, f32),
            IntegralRounding::Trunc => unary_asm!("frintz", x, s, f32),
            IntegralRounding::NearestEven => unary_asm!("frintn", x, s, f32),
            IntegralRounding::NearestAway => unary_asm!("frinta", x, s, f32),
        }
    }

    #[inline(always)]
    fn round_integral_f64(x: f64, dir: IntegralRounding) -> f64 {
        match dir {
            IntegralRounding::Floor => unary_asm!("frintm", x, d, f64),
            IntegralRounding::Ceil => unary_asm!("frintp", x, d, f64),
            IntegralRounding::Trunc => unary_asm!("frintz", x, d, f64),
            IntegralRounding::NearestEven => unary_asm!("frintn", x, d, f64),
            IntegralRounding::NearestAway => unary_asm!("frinta", x, d, f64),
        }
    }
}
