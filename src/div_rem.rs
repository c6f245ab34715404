use std::cmp::min;

use num_traits::PrimInt;

/// Remainder that takes the sign of the divisor, so that e.g. `-1.rem_floor(7) == 6`.
pub(crate) trait RemFloor: Sized {
    fn rem_floor(&self, other: Self) -> Self;
}

impl<T: PrimInt> RemFloor for T {
    fn rem_floor(&self, other: Self) -> Self {
        let zero = Self::zero();
        let one = Self::one();
        if *self > zero && other < zero {
            (*self - one) % other + other + one
        } else if *self < zero && other > zero {
            (*self + one) % other + other - one
        } else {
            *self % other
        }
    }
}

/// Division where the quotient is capped at `max_quotient` and whatever is left over ends up in
/// the remainder. Used for calendar periods whose last sub-period is one day longer than the
/// others (the leap day at the end of a quadrennium or cycle).
pub(crate) trait ClampedDivRem<Q: Ord>: Sized {
    type Quotient;
    fn clamped_div_rem(self, divisor: Self, max_quotient: Q) -> (Q, Self);
}

impl<T, Q> ClampedDivRem<Q> for T
where
    T: PrimInt + TryInto<Q>,
    Q: Ord + Into<T> + Copy,
{
    type Quotient = Q;
    fn clamped_div_rem(self, divisor: T, max_quotient: Self::Quotient) -> (Self::Quotient, Self) {
        let quotient = min(self / divisor, max_quotient.into());
        let remainder = self - quotient * divisor;
        // The quotient is at most max_quotient, which came from Q in the first place.
        let quotient: Self::Quotient = match quotient.try_into() {
            Ok(x) => x,
            Err(_) => panic!("quotient is too large"),
        };
        (quotient, remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rem_floor() {
        assert_eq!(10_i32.rem_floor(7), 3);
        assert_eq!(7_i32.rem_floor(7), 0);
        assert_eq!(0_i32.rem_floor(7), 0);
        assert_eq!((-1_i32).rem_floor(7), 6);
        assert_eq!((-7_i32).rem_floor(7), 0);
        assert_eq!((-8_i32).rem_floor(7), 6);
        assert_eq!((-1_i64).rem_floor(400), 399);
        assert_eq!(10_i32.rem_floor(-7), -4);
    }

    #[test]
    fn test_clamped_div_rem() {
        // Three regular years and a trailing leap year.
        assert_eq!(364_u16.clamped_div_rem(365, 3_u8), (0, 364));
        assert_eq!(365_u16.clamped_div_rem(365, 3_u8), (1, 0));
        assert_eq!(1094_u16.clamped_div_rem(365, 3_u8), (2, 364));
        assert_eq!(1095_u16.clamped_div_rem(365, 3_u8), (3, 0));
        // The leap day stays in the last year instead of spilling into a fifth one.
        assert_eq!(1460_u16.clamped_div_rem(365, 3_u8), (3, 365));
    }
}
