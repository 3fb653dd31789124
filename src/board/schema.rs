use serde::Serialize;

use super::edge::sanitize_edge;
use super::rows::Row;

/// Line markers the prediction sheet writes when no sportsbook line exists.
pub const NOT_APPLICABLE: &str = "N/A";
pub const NO_LINE_AVAILABLE: &str = "No Line Available";
/// Older sheet revisions wrote this into the Edge column for small differences.
pub const NO_EDGE: &str = "No Edge";

/// Typed view of a row from the "Predictions" tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRow {
    pub matchup: String,
    pub favorite: String,
    pub underdog: String,
    /// Raw "Predicted Difference" cell ("My Prediction" on older sheets)
    pub predicted_difference: String,
    /// Raw "Line" cell; blank when the column is missing
    pub line: String,
    /// Raw "Edge" cell; `None` when the sheet has no Edge column
    pub edge: Option<String>,
}

impl PredictionRow {
    /// Read the known prediction columns. Returns `None` for rows without a
    /// matchup (blank spreadsheet lines).
    ///
    /// ESPN schedule pulls carry `Away Team` / `Home Team` instead of a
    /// `Matchup`; those are joined as `"<away> vs <home>"`.
    pub fn from_row(row: &Row) -> Option<Self> {
        let mut matchup = row.text("Matchup").trim().to_string();
        if matchup.is_empty() {
            let away = row.text("Away Team").trim();
            let home = row.text("Home Team").trim();
            if !away.is_empty() && !home.is_empty() {
                matchup = format!("{} vs {}", away, home);
            }
        }
        if matchup.is_empty() {
            return None;
        }

        Some(PredictionRow {
            matchup,
            favorite: row.text("Favorite").trim().to_string(),
            underdog: row.text("Underdog").trim().to_string(),
            predicted_difference: row
                .get("Predicted Difference")
                .or_else(|| row.get("My Prediction"))
                .unwrap_or("")
                .trim()
                .to_string(),
            line: row.text("Line").trim().to_string(),
            edge: row.get("Edge").map(|e| e.trim().to_string()),
        })
    }

    /// Whether the Line cell holds something other than a no-line marker.
    pub fn has_line(&self) -> bool {
        !is_line_marker(&self.line)
    }

    /// Non-negative edge in points, or `None` when the row has no usable edge.
    ///
    /// A present Edge cell is authoritative: blank or sentinel text means no
    /// edge. Without an Edge column the edge is `|predicted - line|`, which
    /// needs a usable line.
    pub fn edge_value(&self) -> Option<f64> {
        let raw = match &self.edge {
            Some(cell) if is_line_marker(cell) || cell == NO_EDGE => return None,
            Some(cell) => parse_number(cell),
            None if self.has_line() => {
                (parse_number(&self.predicted_difference) - parse_number(&self.line)).abs()
            }
            None => return None,
        };
        Some(sanitize_edge(raw))
    }
}

/// Typed view of a row from the "Cover Analysis" tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeRow {
    pub game: String,
    pub our_bet: String,
    pub result: String,
}

impl OutcomeRow {
    pub fn from_row(row: &Row) -> Self {
        OutcomeRow {
            game: row.text("Game").trim().to_string(),
            our_bet: row.text("Our Bet").trim().to_string(),
            // Exact match is applied later; keep the tag as written.
            result: row.text("Result").to_string(),
        }
    }
}

/// Parse a numeric cell; anything unparseable becomes 0.0.
pub fn parse_number(cell: &str) -> f64 {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn is_line_marker(cell: &str) -> bool {
    cell.is_empty() || cell == NOT_APPLICABLE || cell == NO_LINE_AVAILABLE
}

pub fn predictions_from_rows(rows: &[Row]) -> Vec<PredictionRow> {
    rows.iter().filter_map(PredictionRow::from_row).collect()
}

pub fn outcomes_from_rows(rows: &[Row]) -> Vec<OutcomeRow> {
    rows.iter().map(OutcomeRow::from_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_from_row() {
        let row = Row::from_pairs([
            ("Matchup", "A vs B"),
            ("Favorite", "A"),
            ("Underdog", "B"),
            ("Predicted Difference", " 7 "),
            ("Line", "3"),
            ("Edge", "4"),
        ]);
        let p = PredictionRow::from_row(&row).unwrap();
        assert_eq!(p.matchup, "A vs B");
        assert_eq!(p.predicted_difference, "7");
        assert!(p.has_line());
        assert_eq!(p.edge_value(), Some(4.0));
    }

    #[test]
    fn test_missing_columns_default_blank() {
        let p = PredictionRow::from_row(&Row::from_pairs([("Matchup", "A vs B")])).unwrap();
        assert_eq!(p.line, "");
        assert_eq!(p.edge, None);
        assert!(!p.has_line());
        assert_eq!(p.edge_value(), None);
    }

    #[test]
    fn test_edge_derived_without_edge_column() {
        let row = Row::from_pairs([
            ("Matchup", "A vs B"),
            ("My Prediction", "10"),
            ("Line", "3"),
        ]);
        let p = PredictionRow::from_row(&row).unwrap();
        assert_eq!(p.predicted_difference, "10");
        assert_eq!(p.edge_value(), Some(7.0));

        let row = Row::from_pairs([
            ("Matchup", "A vs B"),
            ("Predicted Difference", "1"),
            ("Line", "6.5"),
        ]);
        assert_eq!(PredictionRow::from_row(&row).unwrap().edge_value(), Some(5.5));

        // No line to measure against
        let row = Row::from_pairs([
            ("Matchup", "A vs B"),
            ("Predicted Difference", "10"),
            ("Line", NO_LINE_AVAILABLE),
        ]);
        assert_eq!(PredictionRow::from_row(&row).unwrap().edge_value(), None);
    }

    #[test]
    fn test_present_edge_cell_is_authoritative() {
        for cell in ["", NOT_APPLICABLE, NO_LINE_AVAILABLE, NO_EDGE] {
            let row = Row::from_pairs([
                ("Matchup", "A vs B"),
                ("Predicted Difference", "10"),
                ("Line", "3"),
                ("Edge", cell),
            ]);
            let p = PredictionRow::from_row(&row).unwrap();
            assert_eq!(p.edge_value(), None, "{cell:?}");
        }
    }

    #[test]
    fn test_espn_layout_synthesizes_matchup() {
        let row = Row::from_pairs([("Away Team", "Navy"), ("Home Team", "Army")]);
        let p = PredictionRow::from_row(&row).unwrap();
        assert_eq!(p.matchup, "Navy vs Army");
    }

    #[test]
    fn test_blank_matchup_is_skipped() {
        let row = Row::from_pairs([("Matchup", "  "), ("Line", "3")]);
        assert!(PredictionRow::from_row(&row).is_none());
    }

    #[test]
    fn test_line_markers() {
        for marker in ["", NOT_APPLICABLE, NO_LINE_AVAILABLE] {
            let row = Row::from_pairs([("Matchup", "A vs B"), ("Line", marker)]);
            assert!(!PredictionRow::from_row(&row).unwrap().has_line(), "{marker:?}");
        }
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("3.5"), 3.5);
        assert_eq!(parse_number(" -7 "), -7.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
        assert_eq!(parse_number("inf"), 0.0);
    }
}
