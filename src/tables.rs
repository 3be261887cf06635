use std::fmt::Display;

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{comparison::Shade, gradient::Rgb, power_tier::PowerTier},
    report::Report,
};

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb { r: rgb.r, g: rgb.g, b: rgb.b }
    }
}

#[must_use]
pub fn build_comparison_table(report: &Report) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec![
        "Tariff".to_owned(),
        format!("Power @ {}", report.power_tier),
        "Energy".to_owned(),
        format!("Cost @ {}", report.consumption),
    ]);
    for shaded in report.comparison.iter() {
        table.add_row(vec![
            Cell::new(&shaded.quote.name),
            build_shaded_cell(shaded.quote.power_rate, shaded.power_rate),
            build_shaded_cell(shaded.quote.energy_rate, shaded.energy_rate),
            build_shaded_cell(shaded.quote.estimated_cost, shaded.estimated_cost),
        ]);
    }
    table
}

fn build_shaded_cell(content: impl Display, shade: Shade) -> Cell {
    let cell = Cell::new(content)
        .set_alignment(CellAlignment::Right)
        .fg(Color::Black)
        .bg(shade.color.into());
    if shade.is_minimum { cell.add_attribute(Attribute::Bold) } else { cell }
}

#[must_use]
pub fn build_power_tiers_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Power tier", "Power column", "Energy column"]);
    for tier in PowerTier::ALL {
        table.add_row(vec![
            Cell::new(tier.label).fg(if tier == PowerTier::DEFAULT {
                Color::Green
            } else {
                Color::Reset
            }),
            Cell::new(tier.power_column).set_alignment(CellAlignment::Right),
            Cell::new(tier.energy_column).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
