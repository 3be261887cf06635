use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, cost::Cost, energy::KilowattHours, time::Days};

/// Euro per kilowatt-hour.
pub type KilowattHourRate = Quantity<-1, 0, 1>;

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} €/kWh", self.0)
    }
}

impl Debug for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}€/kWh", self.0)
    }
}

impl Mul<KilowattHours> for KilowattHourRate {
    type Output = Cost;

    fn mul(self, rhs: KilowattHours) -> Self::Output {
        rhs * self
    }
}

/// Euro per day, the contracted power charge.
pub type DailyRate = Quantity<0, -1, 1>;

impl Display for DailyRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} €/day", self.0)
    }
}

impl Debug for DailyRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}€/day", self.0)
    }
}

impl Mul<Days> for DailyRate {
    type Output = Cost;

    fn mul(self, rhs: Days) -> Self::Output {
        Cost::from(self.0 * rhs.0)
    }
}
