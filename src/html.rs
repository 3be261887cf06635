//! Standalone HTML rendering of the comparison, mirroring the spreadsheet layout.

use std::fmt::Write;

use crate::{core::comparison::Shade, report::Report};

const HEADER_STYLE: &str = "background-color:#375623; color:white;";
const COLUMN_STYLE: &str = "background-color:#00B050; font-weight:bold; color:white;";
const CONSUMPTION_STYLE: &str =
    "background-color:#FFC000; font-weight:bold; color:black; text-align:center;";

#[must_use]
pub fn render_comparison(report: &Report) -> String {
    let mut html = format!(
        r#"<table>
    <tr>
        <th colspan="3" rowspan="2" style="{HEADER_STYLE} text-align:center; vertical-align:middle;">Contracted power {power_tier}</th>
        <th style="{HEADER_STYLE}">Consumption (kWh)</th>
    </tr>
    <tr>
        <td style="{CONSUMPTION_STYLE}">{consumption}</td>
    </tr>
    <tr>
        <td style="{COLUMN_STYLE}">Tariff</td>
        <td style="{COLUMN_STYLE}">Power (€/day)</td>
        <td style="{COLUMN_STYLE}">Simple (€/kWh)</td>
        <td style="{COLUMN_STYLE}">Price (€)</td>
    </tr>
"#,
        power_tier = escape(report.power_tier.label),
        consumption = report.consumption.0,
    );
    for shaded in report.comparison.iter() {
        // Writing into a `String` is infallible.
        let _ = write!(
            html,
            r"    <tr>
        <td>{name}</td>
        <td style='{power_style}'>{power:.4}</td>
        <td style='{energy_style}'>{energy:.4}</td>
        <td style='{cost_style}'>{cost:.2}</td>
    </tr>
",
            name = escape(&shaded.quote.name),
            power_style = cell_style(shaded.power_rate),
            power = shaded.quote.power_rate.0,
            energy_style = cell_style(shaded.energy_rate),
            energy = shaded.quote.energy_rate.0,
            cost_style = cell_style(shaded.estimated_cost),
            cost = shaded.quote.estimated_cost.0,
        );
    }
    html.push_str("</table>\n");
    html
}

fn cell_style(shade: Shade) -> String {
    let weight = if shade.is_minimum { "font-weight:bold; " } else { "" };
    format!("{weight}background-color:{}; color:black;", shade.color)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
