use itertools::{Itertools, MinMaxResult};
use ordered_float::OrderedFloat;

use crate::core::{
    gradient::{Gradient, Rgb},
    tariff::TariffQuote,
};

/// Observed range of a single comparison column.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
}

impl Scale {
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        match values.into_iter().map(OrderedFloat).minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(value) => Some(Self { min: value.0, max: value.0 }),
            MinMaxResult::MinMax(min, max) => Some(Self { min: min.0, max: max.0 }),
        }
    }

    #[must_use]
    pub fn shade(&self, gradient: &Gradient, value: f64) -> Shade {
        Shade {
            color: gradient.color_for(value, self.min, self.max),
            is_minimum: OrderedFloat(value) == OrderedFloat(self.min),
        }
    }
}

/// How a single cell is highlighted.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Shade {
    pub color: Rgb,

    /// The value is the cheapest in its column.
    pub is_minimum: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShadedQuote {
    pub quote: TariffQuote,
    pub power_rate: Shade,
    pub energy_rate: Shade,
    pub estimated_cost: Shade,
}

/// Quotes with every column shaded against its own range.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Comparison(pub Vec<ShadedQuote>);

impl Comparison {
    #[must_use]
    pub fn new(quotes: Vec<TariffQuote>, gradient: &Gradient) -> Self {
        let (Some(power_scale), Some(energy_scale), Some(cost_scale)) = (
            Scale::from_values(quotes.iter().map(|quote| quote.power_rate.0)),
            Scale::from_values(quotes.iter().map(|quote| quote.energy_rate.0)),
            Scale::from_values(quotes.iter().map(|quote| quote.estimated_cost.0)),
        ) else {
            return Self::default();
        };
        Self(
            quotes
                .into_iter()
                .map(|quote| ShadedQuote {
                    power_rate: power_scale.shade(gradient, quote.power_rate.0),
                    energy_rate: energy_scale.shade(gradient, quote.energy_rate.0),
                    estimated_cost: cost_scale.shade(gradient, quote.estimated_cost.0),
                    quote,
                })
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShadedQuote> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::tariff::{SortMode, TariffRow, evaluate},
        quantity::{
            energy::KilowattHours,
            rate::{DailyRate, KilowattHourRate},
        },
    };

    #[test]
    fn test_scale() {
        assert_eq!(Scale::from_values([]), None);
        assert_eq!(Scale::from_values([2.0]), Some(Scale { min: 2.0, max: 2.0 }));
        assert_eq!(Scale::from_values([3.0, 1.0, 2.0]), Some(Scale { min: 1.0, max: 3.0 }));
    }

    #[test]
    fn test_columns_are_shaded_independently() {
        let rows = vec![
            TariffRow::new("A", DailyRate::from(0.10), KilowattHourRate::from(0.15)),
            TariffRow::new("B", DailyRate::from(0.20), KilowattHourRate::from(0.10)),
        ];
        let quotes = evaluate(rows, KilowattHours::from(100.0), SortMode::Price);
        let comparison = Comparison::new(quotes, &Gradient::COST);
        let [b, a] = comparison.0.as_slice() else { panic!("expected two quotes") };

        assert_eq!(b.quote.name, "B");
        assert_eq!(b.estimated_cost.color, Gradient::COST.low);
        assert!(b.estimated_cost.is_minimum);
        assert_eq!(b.power_rate.color, Gradient::COST.high);
        assert!(!b.power_rate.is_minimum);
        assert_eq!(b.energy_rate.color, Gradient::COST.low);
        assert!(b.energy_rate.is_minimum);

        assert_eq!(a.quote.name, "A");
        assert_eq!(a.estimated_cost.color, Gradient::COST.high);
        assert!(!a.estimated_cost.is_minimum);
        assert_eq!(a.power_rate.color, Gradient::COST.low);
        assert!(a.power_rate.is_minimum);
        assert_eq!(a.energy_rate.color, Gradient::COST.high);
    }

    #[test]
    fn test_single_quote() {
        let quotes = evaluate(
            [TariffRow::new("only", DailyRate::from(0.3), KilowattHourRate::from(0.2))],
            KilowattHours::from(10.0),
            SortMode::None,
        );
        let comparison = Comparison::new(quotes, &Gradient::COST);
        let shaded = &comparison.0[0];
        assert_eq!(shaded.estimated_cost.color, Gradient::COST.low);
        assert!(shaded.estimated_cost.is_minimum);
    }

    #[test]
    fn test_empty() {
        assert!(Comparison::new(Vec::new(), &Gradient::COST).is_empty());
    }
}
