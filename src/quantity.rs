pub mod cost;
pub mod energy;
pub mod rate;
pub mod time;

use std::cmp::Ordering;

use ordered_float::OrderedFloat;

/// Physical quantity tagged with its dimensions: energy, time, and cost exponents.
#[derive(Clone, Copy, derive_more::Add, derive_more::From)]
pub struct Quantity<const ENERGY: isize, const TIME: isize, const COST: isize>(pub f64);

impl<const ENERGY: isize, const TIME: isize, const COST: isize> Quantity<ENERGY, TIME, COST> {
    pub const ZERO: Self = Self(0.0);

    /// Replace `NaN` and infinities with zero.
    #[must_use]
    pub const fn finite_or_zero(self) -> Self {
        if self.0.is_finite() { self } else { Self::ZERO }
    }
}

impl<const ENERGY: isize, const TIME: isize, const COST: isize> PartialEq
    for Quantity<ENERGY, TIME, COST>
{
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.0).eq(&OrderedFloat(other.0))
    }
}

impl<const ENERGY: isize, const TIME: isize, const COST: isize> Eq
    for Quantity<ENERGY, TIME, COST>
{
}

impl<const ENERGY: isize, const TIME: isize, const COST: isize> PartialOrd
    for Quantity<ENERGY, TIME, COST>
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const ENERGY: isize, const TIME: isize, const COST: isize> Ord
    for Quantity<ENERGY, TIME, COST>
{
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.0).cmp(&OrderedFloat(other.0))
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::{Debug, Formatter};

    use super::*;

    pub type Bare = Quantity<0, 0, 0>;

    impl Debug for Bare {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }

    #[test]
    fn test_ordering() {
        assert!(Bare::from(1.0) < Bare::from(2.0));
        assert_eq!(Bare::from(2.0).max(Bare::from(1.0)), Bare::from(2.0));
        assert_eq!(Bare::from(2.0).min(Bare::from(1.0)), Bare::from(1.0));
    }

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(Bare::from(f64::NAN).finite_or_zero(), Bare::ZERO);
        assert_eq!(Bare::from(f64::INFINITY).finite_or_zero(), Bare::ZERO);
        assert_eq!(Bare::from(f64::NEG_INFINITY).finite_or_zero(), Bare::ZERO);
        assert_eq!(Bare::from(42.5).finite_or_zero(), Bare::from(42.5));
    }

    #[test]
    fn test_add() {
        assert_eq!(Bare::from(1.5) + Bare::from(2.0), Bare::from(3.5));
    }
}
