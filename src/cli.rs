mod compare;

use clap::{Parser, Subcommand};

pub use self::compare::{CompareArgs, compare};

/// Published tariff price table.
pub const DEFAULT_SHEET_ID: &str = "15jAgyfFzlSXTxqMNG-7TD-f-ZAWa5tZQwUQ8E-I8BsE";

/// Tariff names in the first column followed by a power-energy column pair per power tier.
pub const DEFAULT_RANGE: &str = "B2:V25";

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: fetch the prices, quote every tariff, and print the comparison.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// List the known contracted power tiers.
    #[clap(name = "tiers")]
    Tiers,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }
}
