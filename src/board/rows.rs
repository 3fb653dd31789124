//! Spreadsheet grid → header-keyed records.
//!
//! The Sheets API hands back a plain two-dimensional array of cells. Each data
//! row is turned into a [`Row`] that maps header text to the cell string in
//! that column. No type coercion happens here; consumers parse numbers
//! themselves and decide what a blank cell means.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One spreadsheet row keyed by header text, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from `(header, value)` pairs, applying the same overwrite
    /// rule as [`Row::insert`].
    #[cfg(test)]
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut row = Row::new();
        for (k, v) in pairs {
            row.insert(k, v);
        }
        row
    }

    /// Set `header` to `value`. A repeated header replaces the earlier value
    /// but keeps its original column position.
    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        let header = header.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(h, _)| *h == header) {
            Some(slot) => slot.1 = value,
            None => self.cells.push((header, value)),
        }
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v.as_str())
    }

    /// Cell value, or `""` when the column is missing.
    pub fn text(&self, header: &str) -> &str {
        self.get(header).unwrap_or("")
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (header, value) in &self.cells {
            map.serialize_entry(header, value)?;
        }
        map.end()
    }
}

/// Normalize a grid whose header sits at `header_index`.
///
/// Rows above the header are a title block and are ignored. Data rows shorter
/// than the header are padded with `""`; cells beyond the header width are
/// dropped. A grid with no data rows below the header yields nothing.
pub fn normalize_rows(grid: &[Vec<String>], header_index: usize) -> Vec<Row> {
    let Some(headers) = grid.get(header_index) else {
        return Vec::new();
    };

    grid.iter()
        .skip(header_index + 1)
        .map(|cells| {
            let mut row = Row::new();
            for (i, header) in headers.iter().enumerate() {
                let value = cells.get(i).map(String::as_str).unwrap_or("");
                row.insert(header.as_str(), value);
            }
            row
        })
        .collect()
}

/// Normalize a grid whose first row is the header.
pub fn normalize_table(grid: &[Vec<String>]) -> Vec<Row> {
    normalize_rows(grid, 0)
}

/// Stringify a raw Sheets API cell. The API returns formatted strings by
/// default, but numbers and booleans show up with some value render options.
pub fn cell_to_string(cell: &serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Convert a raw JSON grid into owned cell strings.
pub fn grid_from_json(values: &[Vec<serde_json::Value>]) -> Vec<Vec<String>> {
    values
        .iter()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_empty_and_header_only() {
        assert!(normalize_table(&[]).is_empty());
        assert!(normalize_table(&grid(&[&["Matchup", "Line"]])).is_empty());
    }

    #[test]
    fn test_maps_headers_to_cells() {
        let rows = normalize_table(&grid(&[
            &["Matchup", "Line", "Edge"],
            &["A vs B", "3", "4"],
            &["C vs D", "7.5", "1"],
        ]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Matchup"), Some("A vs B"));
        assert_eq!(rows[1].get("Line"), Some("7.5"));
        assert_eq!(
            serde_json::to_string(&rows[1]).unwrap(),
            r#"{"Matchup":"C vs D","Line":"7.5","Edge":"1"}"#
        );
    }

    #[test]
    fn test_short_rows_pad_with_empty_string() {
        let rows = normalize_table(&grid(&[&["Matchup", "Line", "Edge"], &["A vs B"]]));
        assert_eq!(rows[0].get("Line"), Some(""));
        assert_eq!(rows[0].get("Edge"), Some(""));
    }

    #[test]
    fn test_extra_cells_are_dropped() {
        let rows = normalize_table(&grid(&[&["Game"], &["X", "stray"]]));
        assert_eq!(serde_json::to_string(&rows[0]).unwrap(), r#"{"Game":"X"}"#);
    }

    #[test]
    fn test_offset_header_skips_title_block() {
        let rows = normalize_rows(
            &grid(&[
                &["Cover Analysis"],
                &["Record", "22-16"],
                &[],
                &["Game", "Our Bet", "Result"],
                &["A vs B", "Take A -3", "WIN"],
            ]),
            3,
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text("Result"), "WIN");
        assert!(normalize_rows(&grid(&[&["title"], &["x"]]), 3).is_empty());
    }

    #[test]
    fn test_duplicate_header_overwrites() {
        let rows = normalize_table(&grid(&[&["Edge", "Line", "Edge"], &["1", "3", "9"]]));
        assert_eq!(rows[0].get("Edge"), Some("9"));
        assert_eq!(
            serde_json::to_string(&rows[0]).unwrap(),
            r#"{"Edge":"9","Line":"3"}"#
        );
    }

    #[test]
    fn test_serializes_in_column_order() {
        let row = Row::from_pairs([("Zeta", "1"), ("Alpha", "2")]);
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"Zeta":"1","Alpha":"2"}"#);
    }

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&serde_json::json!("3.5")), "3.5");
        assert_eq!(cell_to_string(&serde_json::json!(7)), "7");
        assert_eq!(cell_to_string(&serde_json::json!(null)), "");
        assert_eq!(cell_to_string(&serde_json::json!(true)), "true");
    }
}
