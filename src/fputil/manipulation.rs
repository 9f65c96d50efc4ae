//! Stepping to adjacent representable values.

macro_rules! next_toward {
    ($up:ident, $down:ident, $ty:ty) => {
        /// Smallest representable value greater than `x`. NaN and `+inf` are returned unchanged.
        #[inline(always)]
        pub fn $up(x: $ty) -> $ty {
            if x.is_nan() || x == <$ty>::INFINITY {
                return x;
            }
            if x == 0.0 {
                return <$ty>::from_bits(1);
            }
            let ux = x.to_bits();
            if x.is_sign_negative() {
                <$ty>::from_bits(ux - 1)
            } else {
                <$ty>::from_bits(ux + 1)
            }
        }

        /// Largest representable value less than `x`. NaN and `-inf` are returned unchanged.
        #[inline(always)]
        pub fn $down(x: $ty) -> $ty {
            -$up(-x)
        }
    };
}

next_toward!(next_up_f32, next_down_f32, f32);
next_toward!(next_up_f64, next_down_f64, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_up_down() {
        assert_eq!(next_up_f32(0.0), f32::from_bits(1));
        assert_eq!(next_up_f32(-0.0), f32::from_bits(1));
        assert_eq!(next_down_f32(0.0), -f32::from_bits(1));
        assert_eq!(next_up_f32(1.0), 1.0 + f32::EPSILON);
        assert_eq!(next_down_f32(1.0), 1.0 - f32::EPSILON / 2.0);
        assert_eq!(next_up_f32(f32::MAX), f32::INFINITY);
        assert_eq!(next_down_f32(f32::MIN), f32::NEG_INFINITY);
        assert_eq!(next_up_f32(-f32::from_bits(1)), -0.0);
        assert!(next_up_f32(f32::NAN).is_nan());
        assert_eq!(next_up_f64(f64::INFINITY), f64::INFINITY);
        assert_eq!(next_down_f64(1.0), 1.0 - f64::EPSILON / 2.0);
    }
}
