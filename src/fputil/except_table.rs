//! Per-function tables of inputs whose correctly rounded result the general
//! path cannot decide.
//!
//! Each case stores the result rounded toward zero plus a 0/1 offset, in ulps
//! of that bit pattern, for the three other directions.

use super::env::RoundingMode;
use super::fp_bits::BitStorage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExceptionalCase<S> {
    pub input: S,
    pub toward_zero: S,
    pub upward: S,
    pub downward: S,
    pub to_nearest: S,
}

impl<S: BitStorage> ExceptionalCase<S> {
    #[inline(always)]
    fn result(&self, mode: RoundingMode) -> S {
        let offset = match mode {
            RoundingMode::TowardZero => S::ZERO,
            RoundingMode::Upward => self.upward,
            RoundingMode::Downward => self.downward,
            RoundingMode::ToNearest => self.to_nearest,
        };
        self.toward_zero + offset
    }
}

/// Cases sorted by `input`.
#[derive(Clone, Copy, Debug)]
pub struct ExceptValues<S, const N: usize> {
    cases: [ExceptionalCase<S>; N],
}

impl<S: BitStorage, const N: usize> ExceptValues<S, N> {
    pub const fn new(cases: [ExceptionalCase<S>; N]) -> Self {
        Self { cases }
    }

    pub fn cases(&self) -> &[ExceptionalCase<S>] {
        &self.cases
    }

    #[inline]
    fn find(&self, input: S) -> Option<&ExceptionalCase<S>> {
        self.cases
            .binary_search_by(|c| c.input.cmp(&input))
            .ok()
            .map(|i| &self.cases[i])
    }

    /// Result bits for input bits `bits` under `mode`, if `bits` is listed.
    #[inline]
    pub fn lookup(&self, bits: S, mode: RoundingMode) -> Option<S> {
        self.find(bits).map(|c| c.result(mode))
    }

    /// Lookup for an odd function whose table lists only positive inputs.
    /// A negative input mirrors the directed offsets and flips the sign.
    #[inline]
    pub fn lookup_odd(&self, abs_bits: S, negative: bool, mode: RoundingMode) -> Option<S> {
        let case = self.find(abs_bits)?;
        if !negative {
            return Some(case.result(mode));
        }
        let mirrored = match mode {
            RoundingMode::Upward => RoundingMode::Downward,
            RoundingMode::Downward => RoundingMode::Upward,
            other => other,
        };
        Some(case.result(mirrored) ^ (S::ONE << (S::BITS - 1)))
    }
}

/// True when the inputs are strictly increasing.
pub fn is_sorted<S: BitStorage>(cases: &[ExceptionalCase<S>]) -> bool {
    cases.windows(2).all(|w| w[0].input < w[1].input)
}
