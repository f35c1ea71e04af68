use std::fmt::Debug;

/// Arc weight and path cost.
///
/// Path costs are combined with [`checked_add`](Weight::checked_add) rather
/// than `+`. A path whose cost exceeds the upper bound of the type is treated
/// as unreachable. A path whose cost falls below the lower bound is clamped to
/// it with [`saturating_add`](Weight::saturating_add). Either way the stored
/// cost is never lower than the cost of a real path, so a negative cycle is
/// never reported when there is none. Unknown distances are never represented
/// by a numeric value; the graph stores them as `None`.
pub trait Weight: PartialOrd + Clone + Debug + Sized {
    fn zero() -> Self;

    /// Returns `true` if the type cannot hold negative values. Graphs with such
    /// weights can never contain a negative cycle.
    fn is_unsigned() -> bool;

    /// Returns `None` if the sum is not representable.
    fn checked_add(&self, other: &Self) -> Option<Self>;

    fn saturating_add(&self, other: &Self) -> Self;

    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }

            fn checked_add(&self, other: &Self) -> Option<Self> {
                <$ty>::checked_add(*self, *other)
            }

            fn saturating_add(&self, other: &Self) -> Self {
                <$ty>::saturating_add(*self, *other)
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            fn zero() -> Self {
                <$ty>::default()
            }

            fn is_unsigned() -> bool {
                false
            }

            fn checked_add(&self, other: &Self) -> Option<Self> {
                Some(self + other)
            }

            fn saturating_add(&self, other: &Self) -> Self {
                self + other
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_addition_saturates() {
        assert_eq!(Weight::saturating_add(&i8::MAX, &1), i8::MAX);
        assert_eq!(Weight::saturating_add(&i8::MIN, &-1), i8::MIN);
        assert_eq!(Weight::saturating_add(&250u8, &10), u8::MAX);
    }

    #[test]
    fn int_addition_checked() {
        assert_eq!(Weight::checked_add(&i8::MAX, &1), None);
        assert_eq!(Weight::checked_add(&i8::MIN, &-1), None);
        assert_eq!(Weight::checked_add(&120i8, &7), Some(i8::MAX));
        assert_eq!(Weight::checked_add(&127i8, &-128), Some(-1));
    }

    #[test]
    fn float_addition_never_fails() {
        assert_eq!(Weight::checked_add(&f64::MAX, &f64::MAX), Some(f64::INFINITY));
        assert_eq!(Weight::checked_add(&0.5f32, &0.25), Some(0.75));
    }

    #[test]
    fn negative() {
        assert!((-1i32).is_negative());
        assert!(!0i32.is_negative());
        assert!((-0.5f64).is_negative());
        assert!(u32::is_unsigned());
        assert!(!i64::is_unsigned());
    }
}
