//! Decoded tabular feed, independent of where the rows came from.

/// Single spreadsheet cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cell {
    #[default]
    Empty,

    Number(f64),

    Text(String),
}

impl Cell {
    /// Interpret the cell as a number.
    ///
    /// Text cells are read up to the first character that cannot continue the number,
    /// so `0.15 €` is `0.15`. Empty, non-numeric, and non-finite cells are read as zero.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        let value = match self {
            Self::Empty => 0.0,
            Self::Number(value) => *value,
            Self::Text(text) => parse_leading_number(text).unwrap_or(0.0),
        };
        if value.is_finite() { value } else { 0.0 }
    }

    /// Interpret the cell as a non-empty label.
    #[must_use]
    pub fn to_label(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Text(text) if text.trim().is_empty() => None,
            Self::Text(text) => Some(text.trim().to_owned()),
            Self::Number(value) if *value == 0.0 || value.is_nan() => None,
            Self::Number(value) => Some(value.to_string()),
        }
    }
}

/// Longest numeric prefix of the text, ignoring leading whitespace.
fn parse_leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let end = text
        .find(|character: char| {
            !(character.is_ascii_digit() || matches!(character, '.' | '-' | '+' | 'e' | 'E'))
        })
        .unwrap_or(text.len());
    (1..=end).rev().find_map(|length| text[..length].parse().ok())
}

#[derive(Clone, Debug, Default, PartialEq, derive_more::From)]
pub struct Row(pub Vec<Cell>);

impl Row {
    /// Get the cell at the column index, missing cells are empty.
    #[must_use]
    pub fn cell(&self, column: usize) -> &Cell {
        const EMPTY: &Cell = &Cell::Empty;
        self.0.get(column).unwrap_or(EMPTY)
    }
}

#[derive(Clone, Debug, Default, PartialEq, derive_more::From)]
pub struct Table {
    pub rows: Vec<Row>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_number() {
        assert_eq!(Cell::Number(0.1234).to_number(), 0.1234);
        assert_eq!(Cell::Text(" 0.5 ".to_owned()).to_number(), 0.5);
        assert_eq!(Cell::Text("n/a".to_owned()).to_number(), 0.0);
        assert_eq!(Cell::Text("0.15 €".to_owned()).to_number(), 0.15);
        assert_eq!(Cell::Text("12.5kWh".to_owned()).to_number(), 12.5);
        assert_eq!(Cell::Text("3e".to_owned()).to_number(), 3.0);
        assert_eq!(Cell::Text("-".to_owned()).to_number(), 0.0);
        assert_eq!(Cell::Number(f64::NAN).to_number(), 0.0);
        assert_eq!(Cell::Empty.to_number(), 0.0);
    }

    #[test]
    fn test_to_label() {
        assert_eq!(Cell::Text("EDP".to_owned()).to_label().as_deref(), Some("EDP"));
        assert_eq!(Cell::Text("  ".to_owned()).to_label(), None);
        assert_eq!(Cell::Number(0.0).to_label(), None);
        assert_eq!(Cell::Empty.to_label(), None);
    }

    #[test]
    fn test_missing_cell_is_empty() {
        let row = Row::from(vec![Cell::Text("EDP".to_owned())]);
        assert_eq!(row.cell(5), &Cell::Empty);
    }
}
