use bon::Builder;

use crate::{
    core::{comparison::Comparison, power_tier::PowerTier},
    quantity::energy::KilowattHours,
};

/// Everything needed to present a comparison.
#[derive(Builder)]
pub struct Report {
    pub power_tier: PowerTier,
    pub consumption: KilowattHours,
    pub comparison: Comparison,
}
