//! Contracted power tiers and where their prices live in the price table.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown power tier `{label}`, expected one of: {}", PowerTier::labels().join("; "))]
pub struct InvalidColumnSelection {
    #[error(not(source))]
    pub label: String,
}

/// Contracted power class, in kVA.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PowerTier {
    pub label: &'static str,

    /// Column with the daily power charge.
    pub power_column: usize,

    /// Column with the simple (single-period) energy charge.
    pub energy_column: usize,
}

impl PowerTier {
    pub const ALL: [Self; 10] = [
        Self::new("1,15 kVA", 1),
        Self::new("2,3 kVA", 3),
        Self::new("3,45 kVA", 5),
        Self::new("4,6 kVA", 7),
        Self::new("5,75 kVA", 9),
        Self::new("6,9 kVA", 11),
        Self::new("10,35 kVA", 13),
        Self::new("13,8 kVA", 15),
        Self::new("17,25 kVA", 17),
        Self::new("20,7 kVA", 19),
    ];

    pub const DEFAULT: Self = Self::ALL[5];

    const fn new(label: &'static str, power_column: usize) -> Self {
        Self { label, power_column, energy_column: power_column + 1 }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|tier| tier.label).collect()
    }

    /// Find the tier by its label.
    ///
    /// The `kVA` suffix is optional, and both `,` and `.` are accepted as the decimal separator.
    pub fn try_from_label(label: &str) -> Result<Self, InvalidColumnSelection> {
        let wanted = Self::normalize(label);
        Self::ALL
            .into_iter()
            .find(|tier| Self::normalize(tier.label) == wanted)
            .ok_or_else(|| InvalidColumnSelection { label: label.to_owned() })
    }

    fn normalize(label: &str) -> String {
        let label = label.trim();
        let label = match label.len().checked_sub(3).and_then(|at| label.split_at_checked(at)) {
            Some((number, suffix)) if suffix.eq_ignore_ascii_case("kva") => number,
            _ => label,
        };
        label.trim().replace('.', ",")
    }
}

impl Default for PowerTier {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for PowerTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label)
    }
}

impl FromStr for PowerTier {
    type Err = InvalidColumnSelection;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::try_from_label(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns() {
        assert_eq!(PowerTier::ALL[0].power_column, 1);
        assert_eq!(PowerTier::ALL[0].energy_column, 2);
        assert_eq!(PowerTier::ALL[9].power_column, 19);
        assert_eq!(PowerTier::ALL[9].energy_column, 20);
        for (index, tier) in PowerTier::ALL.iter().enumerate() {
            assert_eq!(tier.power_column, 1 + index * 2);
            assert_eq!(tier.energy_column, tier.power_column + 1);
        }
    }

    #[test]
    fn test_default() {
        assert_eq!(PowerTier::default().label, "6,9 kVA");
    }

    #[test]
    fn test_try_from_label_ok() {
        for label in ["6,9 kVA", "6,9", "6.9", " 6.9kva ", "6,9 KVA"] {
            assert_eq!(PowerTier::try_from_label(label).unwrap(), PowerTier::DEFAULT, "{label}");
        }
        assert_eq!("20,7 kVA".parse::<PowerTier>().unwrap().power_column, 19);
    }

    #[test]
    fn test_try_from_label_unknown() {
        let error = PowerTier::try_from_label("7 kVA").unwrap_err();
        assert_eq!(error.label, "7 kVA");
        assert!(error.to_string().starts_with("unknown power tier `7 kVA`"));
        assert!(PowerTier::try_from_label("").is_err());
    }
}
