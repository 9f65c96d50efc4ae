//! Floating-point environment passed explicitly to every kernel.
//!
//! Rust exposes neither `fenv.h` nor `errno`, so the rounding direction, the
//! sticky exception flags and the error cell live in an [`FpEnv`] value owned
//! by the caller. Kernels read the rounding direction and write flags and the
//! error code; they never change the rounding direction.

use bitflags::bitflags;
use core::fmt;

/// IEEE-754 rounding direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round to nearest, ties to even.
    #[default]
    ToNearest,
    /// Round toward positive infinity.
    Upward,
    /// Round toward negative infinity.
    Downward,
    /// Round toward zero.
    TowardZero,
}

impl RoundingMode {
    pub const ALL: [RoundingMode; 4] = [
        RoundingMode::ToNearest,
        RoundingMode::Upward,
        RoundingMode::Downward,
        RoundingMode::TowardZero,
    ];

    /// Whether a result of the given sign is pushed away from zero when it is
    /// inexact. Meaningless for `ToNearest`, which returns false.
    #[inline(always)]
    pub fn rounds_away(self, negative: bool) -> bool {
        match self {
            RoundingMode::Upward => !negative,
            RoundingMode::Downward => negative,
            RoundingMode::ToNearest | RoundingMode::TowardZero => false,
        }
    }

    /// Whether an overflowing result of the given sign becomes the largest
    /// finite value instead of infinity.
    #[inline(always)]
    pub fn saturates(self, negative: bool) -> bool {
        match self {
            RoundingMode::ToNearest => false,
            mode => !mode.rounds_away(negative),
        }
    }
}

bitflags! {
    /// Sticky IEEE-754 exception flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ExceptionFlags: u8 {
        /// Invalid operation, e.g. `sin(inf)` or `log(-1)`.
        const INVALID = 1;
        /// Exact infinite result from finite operands, e.g. `log(0)`.
        const DIVIDE_BY_ZERO = 1 << 2;
        const OVERFLOW = 1 << 3;
        const UNDERFLOW = 1 << 4;
        /// Raised with overflow and underflow and by `rint`. Other inexact
        /// kernel results leave it clear.
        const INEXACT = 1 << 5;
    }
}

/// `errno` value for a domain error on Linux.
pub const EDOM: i32 = 33;
/// `errno` value for a range error on Linux.
pub const ERANGE: i32 = 34;

/// Error reported through the error cell, mirroring C's `EDOM`/`ERANGE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MathError {
    /// Argument outside the mathematical domain of the function.
    Domain,
    /// Finite argument whose exact result overflows, underflows or is a pole.
    Range,
}

impl MathError {
    #[inline(always)]
    pub const fn errno(self) -> i32 {
        match self {
            MathError::Domain => EDOM,
            MathError::Range => ERANGE,
        }
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::Domain => f.write_str("argument outside the domain of the function"),
            MathError::Range => f.write_str("result not representable"),
        }
    }
}

impl core::error::Error for MathError {}

/// Rounding direction, exception flags and error cell for one thread of
/// computation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FpEnv {
    rounding: RoundingMode,
    flags: ExceptionFlags,
    errno: Option<MathError>,
}

impl FpEnv {
    pub const fn new() -> Self {
        Self::with_rounding(RoundingMode::ToNearest)
    }

    pub const fn with_rounding(rounding: RoundingMode) -> Self {
        Self {
            rounding,
            flags: ExceptionFlags::empty(),
            errno: None,
        }
    }

    #[inline(always)]
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    pub fn set_rounding(&mut self, rounding: RoundingMode) {
        self.rounding = rounding;
    }

    #[inline(always)]
    pub fn raise(&mut self, flags: ExceptionFlags) {
        self.flags |= flags;
    }

    pub fn flags(&self) -> ExceptionFlags {
        self.flags
    }

    /// True when every flag in `flags` is currently raised.
    pub fn test(&self, flags: ExceptionFlags) -> bool {
        self.flags.contains(flags)
    }

    pub fn clear_flags(&mut self) {
        self.flags = ExceptionFlags::empty();
    }

    #[inline(always)]
    pub fn set_errno(&mut self, err: MathError) {
        self.errno = Some(err);
    }

    pub fn errno(&self) -> Option<MathError> {
        self.errno
    }

    pub fn take_errno(&mut self) -> Option<MathError> {
        self.errno.take()
    }

    #[cold]
    pub fn signal_domain(&mut self) {
        self.raise(ExceptionFlags::INVALID);
        self.set_errno(MathError::Domain);
    }

    #[cold]
    pub fn signal_pole(&mut self) {
        self.raise(ExceptionFlags::DIVIDE_BY_ZERO);
        self.set_errno(MathError::Range);
    }

    #[cold]
    pub fn signal_overflow(&mut self) {
        self.raise(ExceptionFlags::OVERFLOW | ExceptionFlags::INEXACT);
        self.set_errno(MathError::Range);
    }

    #[cold]
    pub fn signal_underflow(&mut self) {
        self.raise(ExceptionFlags::UNDERFLOW | ExceptionFlags::INEXACT);
        self.set_errno(MathError::Range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;
    use std::vec::Vec;

    #[test]
    fn test_saturation_rules() {
        assert!(!RoundingMode::ToNearest.saturates(false));
        assert!(!RoundingMode::ToNearest.saturates(true));
        assert!(RoundingMode::TowardZero.saturates(false));
        assert!(RoundingMode::TowardZero.saturates(true));
        assert!(RoundingMode::Downward.saturates(false));
        assert!(!RoundingMode::Downward.saturates(true));
        assert!(!RoundingMode::Upward.saturates(false));
        assert!(RoundingMode::Upward.saturates(true));
    }

    #[test]
    fn test_flags_are_sticky() {
        let mut env = FpEnv::new();
        assert!(env.flags().is_empty());
        env.signal_overflow();
        env.raise(ExceptionFlags::INVALID);
        assert!(env.test(ExceptionFlags::OVERFLOW | ExceptionFlags::INEXACT));
        assert!(env.test(ExceptionFlags::INVALID));
        assert!(!env.test(ExceptionFlags::UNDERFLOW));
        env.clear_flags();
        assert!(env.flags().is_empty());
        assert_eq!(env.take_errno(), Some(MathError::Range));
        assert_eq!(env.errno(), None);
    }

    #[test]
    fn test_errno_codes() {
        let mut env = FpEnv::with_rounding(RoundingMode::Upward);
        env.signal_domain();
        assert_eq!(env.errno().map(MathError::errno), Some(EDOM));
        env.signal_pole();
        assert_eq!(env.errno().map(MathError::errno), Some(ERANGE));
        assert!(env.test(ExceptionFlags::DIVIDE_BY_ZERO));
        assert_eq!(env.rounding(), RoundingMode::Upward);
    }

    #[test]
    fn test_flag_debug_lists_names() {
        let flags = ExceptionFlags::UNDERFLOW | ExceptionFlags::INEXACT;
        let names: Vec<_> = flags.iter_names().map(|(name, _)| name).collect();
        assert_eq!(names, ["UNDERFLOW", "INEXACT"]);
        assert!(format!("{flags:?}").contains("UNDERFLOW | INEXACT"));
    }
}
