pub mod comparison;
pub mod gradient;
pub mod power_tier;
pub mod table;
pub mod tariff;
