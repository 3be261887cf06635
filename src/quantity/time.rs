use std::fmt::{Debug, Formatter};

use crate::quantity::Quantity;

pub type Days = Quantity<0, 1, 0>;

impl Days {
    /// Billing period the daily power charge is multiplied by.
    pub const BILLING_PERIOD: Self = Self(30.0);
}

impl Debug for Days {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.0)
    }
}
