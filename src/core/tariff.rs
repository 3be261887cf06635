use icu_collator::{Collator, options::CollatorOptions};
use itertools::Itertools;

use crate::{
    core::{power_tier::PowerTier, table::Row},
    prelude::*,
    quantity::{
        cost::Cost,
        energy::KilowattHours,
        rate::{DailyRate, KilowattHourRate},
        time::Days,
    },
};

/// Name given to rows with an empty name cell.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Electricity pricing plan as published in the price table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TariffRow {
    pub name: String,

    /// Contracted power charge.
    pub power_rate: DailyRate,

    /// Energy charge.
    pub energy_rate: KilowattHourRate,
}

impl TariffRow {
    pub fn new(name: impl Into<String>, power_rate: DailyRate, energy_rate: KilowattHourRate) -> Self {
        Self {
            name: name.into(),
            power_rate: power_rate.finite_or_zero(),
            energy_rate: energy_rate.finite_or_zero(),
        }
    }

    /// Read the tariff from a wide price-table row, taking the prices from the tier columns.
    #[must_use]
    pub fn from_row(row: &Row, power_tier: PowerTier) -> Self {
        Self::new(
            row.cell(0).to_label().unwrap_or_else(|| UNKNOWN_NAME.to_owned()),
            DailyRate::from(row.cell(power_tier.power_column).to_number()),
            KilowattHourRate::from(row.cell(power_tier.energy_column).to_number()),
        )
    }
}

/// Estimated cost of a single tariff for the given consumption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TariffQuote {
    pub name: String,
    pub power_rate: DailyRate,
    pub energy_rate: KilowattHourRate,
    pub estimated_cost: Cost,
}

impl TariffQuote {
    #[must_use]
    pub fn new(row: TariffRow, consumption: KilowattHours) -> Self {
        let power_rate = row.power_rate.finite_or_zero();
        let energy_rate = row.energy_rate.finite_or_zero();
        let consumption = consumption.finite_or_zero();
        let estimated_cost =
            (power_rate * Days::BILLING_PERIOD + energy_rate * consumption).round_to_cents();
        Self { name: row.name, power_rate, energy_rate, estimated_cost }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum SortMode {
    /// Keep the price table order.
    #[default]
    None,

    /// Cheapest first.
    Price,

    /// Alphabetically by the tariff name, using the root collation order.
    Name,
}

/// Quote every tariff for the consumption.
///
/// A non-finite consumption is treated as zero. Both sorts are stable.
#[must_use]
pub fn evaluate(
    rows: impl IntoIterator<Item = TariffRow>,
    consumption: KilowattHours,
    sort_mode: SortMode,
) -> Vec<TariffQuote> {
    let consumption = consumption.finite_or_zero();
    let quotes = rows.into_iter().map(|row| TariffQuote::new(row, consumption));
    match sort_mode {
        SortMode::None => quotes.collect(),
        SortMode::Price => quotes.sorted_by_key(|quote| quote.estimated_cost).collect(),
        SortMode::Name => match Collator::try_new(Default::default(), CollatorOptions::default()) {
            Ok(collator) => quotes
                .sorted_by(|lhs, rhs| {
                    collator.compare(&lhs.name, &rhs.name).then_with(|| lhs.name.cmp(&rhs.name))
                })
                .collect(),
            Err(error) => {
                warn!("failed to load the collation data, sorting by code points: {error}");
                quotes.sorted_by(|lhs, rhs| lhs.name.cmp(&rhs.name)).collect()
            }
        },
    }
}
