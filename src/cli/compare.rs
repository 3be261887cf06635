use std::{convert::Infallible, path::PathBuf, str::FromStr};

use clap::Parser;

use crate::{
    api::sheets,
    cli::{DEFAULT_RANGE, DEFAULT_SHEET_ID},
    core::{
        comparison::Comparison,
        gradient::Gradient,
        power_tier::PowerTier,
        table::Table,
        tariff::{SortMode, TariffRow, evaluate},
    },
    html::render_comparison,
    prelude::*,
    quantity::energy::KilowattHours,
    report::Report,
    tables::build_comparison_table,
};

#[derive(Parser)]
pub struct CompareArgs {
    /// Consumption over the billing period, in kilowatt-hours.
    ///
    /// Unparsable values are treated as zero.
    #[clap(long = "consumption", env = "CONSUMPTION_KWH", default_value = "0")]
    pub consumption: Consumption,

    /// Contracted power tier, for example: `6,9 kVA`.
    #[clap(long = "power-tier", env = "POWER_TIER", default_value = PowerTier::DEFAULT.label)]
    pub power_tier: PowerTier,

    #[clap(long = "sort", env = "SORT_BY", value_enum, default_value_t)]
    pub sort_mode: SortMode,

    #[clap(long = "format", env = "OUTPUT_FORMAT", value_enum, default_value_t)]
    pub format: OutputFormat,

    #[clap(flatten)]
    pub sheet: SheetArgs,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Terminal table.
    #[default]
    Table,

    /// HTML `<table>` fragment.
    Html,
}

/// User-entered consumption, leniently parsed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Consumption(pub KilowattHours);

impl FromStr for Consumption {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().replace(',', ".").parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self(KilowattHours::from(value))),
            _ => {
                warn!(text, "unparsable consumption, using zero");
                Ok(Self(KilowattHours::ZERO))
            }
        }
    }
}

#[derive(Parser)]
pub struct SheetArgs {
    /// Google Sheets document ID, the document must be published.
    #[clap(long = "sheet-id", env = "SHEET_ID", default_value = DEFAULT_SHEET_ID)]
    pub id: String,

    /// Cell range holding the price table.
    #[clap(long = "range", env = "SHEET_RANGE", default_value = DEFAULT_RANGE)]
    pub range: String,

    /// Read a saved `gviz` response instead of calling the spreadsheet.
    #[clap(long = "sheet-file", env = "SHEET_FILE")]
    pub file: Option<PathBuf>,

    /// Number of leading rows that hold tariffs.
    #[clap(long = "max-rows", env = "MAX_ROWS", default_value = "23")]
    pub max_rows: usize,
}

impl SheetArgs {
    pub async fn fetch_table(&self) -> Result<Table> {
        match &self.file {
            Some(path) => sheets::read_table(path).await,
            None => sheets::Api::new(&self.id)?.get_table(&self.range).await,
        }
    }
}

#[instrument(skip_all, fields(power_tier = %args.power_tier, consumption = ?args.consumption.0))]
pub async fn compare(args: &CompareArgs) -> Result {
    let table = args.sheet.fetch_table().await?;
    let rows = table
        .rows
        .iter()
        .take(args.sheet.max_rows)
        .map(|row| TariffRow::from_row(row, args.power_tier));
    let quotes = evaluate(rows, args.consumption.0, args.sort_mode);
    info!(n_quotes = quotes.len(), "quoted");
    if let Some(cheapest) = quotes.iter().min_by_key(|quote| quote.estimated_cost) {
        info!(name = cheapest.name.as_str(), cost = %cheapest.estimated_cost, "cheapest");
    }

    let comparison = Comparison::new(quotes, &Gradient::COST);
    if comparison.is_empty() {
        warn!("nothing to compare");
    }
    let report = Report::builder()
        .power_tier(args.power_tier)
        .consumption(args.consumption.0)
        .comparison(comparison)
        .build();
    match args.format {
        OutputFormat::Table => println!("{}", build_comparison_table(&report)),
        OutputFormat::Html => print!("{}", render_comparison(&report)),
    }
    Ok(())
}
