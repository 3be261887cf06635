use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Euros.
pub type Cost = Quantity<0, 0, 1>;

impl Cost {
    /// Round the cost to whole cents, half away from zero.
    #[must_use]
    pub fn round_to_cents(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} €", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}€", self.0)
    }
}
