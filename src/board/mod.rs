pub mod edge;
pub mod opportunity;
pub mod performance;
pub mod rows;
pub mod schema;

pub use edge::{band_reference, BandReferenceTable};
pub use opportunity::{
    build_opportunities, group_by_band, list_games, Opportunity, DEFAULT_MIN_EDGE,
};
pub use performance::{summarize, PerformanceSummary};
pub use rows::Row;

use chrono::{DateTime, Utc};
use serde::Serialize;

use opportunity::{BandGroup, GameListing};
use rows::{normalize_rows, normalize_table};
use schema::{outcomes_from_rows, predictions_from_rows};

/// Raw grids for the sheet tabs, as fetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTables {
    pub predictions: Vec<Vec<String>>,
    pub cover_analysis: Vec<Vec<String>>,
    pub results: Option<Vec<Vec<String>>>,
}

/// Normalized sheet data handed to the dashboard on every refresh.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetPayload {
    pub predictions: Vec<Row>,
    pub cover_analysis: Vec<Row>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Row>>,
    pub last_updated: DateTime<Utc>,
}

impl SheetPayload {
    /// Normalize fetched grids. `cover_header_index` is the 0-based row of
    /// the cover-analysis header; rows above it are the sheet's summary block.
    pub fn from_tables(
        tables: &RawTables,
        cover_header_index: usize,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        SheetPayload {
            predictions: normalize_table(&tables.predictions),
            cover_analysis: normalize_rows(&tables.cover_analysis, cover_header_index),
            results: tables.results.as_deref().map(normalize_table),
            last_updated: fetched_at,
        }
    }
}

/// Everything the dashboard page renders for one threshold.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub min_edge: f64,
    pub opportunities: Vec<Opportunity>,
    pub actionable_count: usize,
    pub bands: Vec<BandGroup>,
    pub performance: PerformanceSummary,
    pub games: Vec<GameListing>,
    pub lines_available: usize,
    pub total_games: usize,
    pub results: Option<Vec<Row>>,
    pub reference: BandReferenceTable,
    pub last_updated: DateTime<Utc>,
}

impl DashboardView {
    pub fn build(payload: &SheetPayload, min_edge: f64) -> Self {
        let predictions = predictions_from_rows(&payload.predictions);
        let outcomes = outcomes_from_rows(&payload.cover_analysis);

        let opportunities = build_opportunities(&predictions, min_edge);
        let actionable_count = opportunities.iter().filter(|o| o.is_actionable()).count();
        let games = list_games(&predictions);
        let lines_available = games.iter().filter(|g| g.line_available).count();

        DashboardView {
            min_edge,
            bands: group_by_band(&opportunities),
            performance: summarize(&outcomes, opportunities.len()),
            actionable_count,
            total_games: games.len(),
            lines_available,
            games,
            opportunities,
            results: payload.results.clone(),
            reference: band_reference(),
            last_updated: payload.last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    fn sample_tables() -> RawTables {
        RawTables {
            predictions: grid(&[
                &["Matchup", "Favorite", "Underdog", "Predicted Difference", "Line", "Edge"],
                &["A vs B", "A", "B", "7", "3", "4"],
                &["C vs D", "C", "D", "1", "10", "9"],
                &["E vs F", "E", "F", "3", "N/A", "No Line Available"],
                &["G vs H", "G", "H", "3", "2.5", "0.5"],
            ]),
            cover_analysis: grid(&[
                &["Cover Analysis"],
                &["Overall", "22-16"],
                &[""],
                &["Game", "Our Bet", "Result"],
                &["A vs B", "Take A -3", "WIN"],
                &["C vs D", "Take D +10", "WIN"],
                &["E vs F", "Take E -1", "LOSS"],
                &["G vs H", "Take H +2", "PENDING"],
            ]),
            results: Some(grid(&[&["Week", "Record"], &["1", "5-2"]])),
        }
    }

    #[test]
    fn test_payload_from_tables() {
        let payload = SheetPayload::from_tables(&sample_tables(), 3, Utc::now());
        assert_eq!(payload.predictions.len(), 4);
        assert_eq!(payload.cover_analysis.len(), 4);
        assert_eq!(payload.results.as_ref().map(Vec::len), Some(1));

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("coverAnalysis").is_some());
        assert!(json.get("lastUpdated").is_some());
        assert_eq!(json["predictions"][0]["Matchup"], "A vs B");
    }

    #[test]
    fn test_results_omitted_when_absent() {
        let mut tables = sample_tables();
        tables.results = None;
        let json = serde_json::to_value(SheetPayload::from_tables(&tables, 3, Utc::now())).unwrap();
        assert!(json.get("results").is_none());
    }

    #[test]
    fn test_dashboard_view() {
        let payload = SheetPayload::from_tables(&sample_tables(), 3, Utc::now());
        let view = DashboardView::build(&payload, DEFAULT_MIN_EDGE);

        let recs: Vec<_> = view
            .opportunities
            .iter()
            .map(|o| o.recommendation.as_str())
            .collect();
        assert_eq!(recs, vec!["Take D +10", "Take A -3", "Below threshold"]);
        assert_eq!(view.actionable_count, 2);
        assert_eq!(view.total_games, 4);
        assert_eq!(view.lines_available, 3);
        assert_eq!(view.bands.len(), 3);

        assert_eq!(view.performance.total, 3);
        assert_eq!(view.performance.wins, 2);
        assert_eq!(view.performance.opportunity_count, 3);
        assert_eq!(view.reference.bands.len(), 6);
    }

    #[test]
    fn test_sheet_without_edge_column() {
        let tables = RawTables {
            predictions: grid(&[
                &["Matchup", "Favorite", "Underdog", "Predicted Difference", "Line"],
                &["A vs B", "A", "B", "10", "3"],
                &["C vs D", "C", "D", "4", "N/A"],
            ]),
            ..Default::default()
        };
        let payload = SheetPayload::from_tables(&tables, 3, Utc::now());
        let view = DashboardView::build(&payload, DEFAULT_MIN_EDGE);

        assert_eq!(view.opportunities.len(), 1);
        let o = &view.opportunities[0];
        assert_eq!(o.edge, 7.0);
        assert_eq!(o.band, edge::EdgeBand::SevenToNine);
        assert_eq!(o.recommendation, "Take A -3");
        assert_eq!(view.total_games, 2);
    }
}
