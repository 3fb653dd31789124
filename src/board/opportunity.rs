//! Betting opportunities derived from the prediction sheet.
//!
//! A row becomes an opportunity when it has a usable sportsbook line and an
//! edge. Rows with a blank or sentinel Edge cell are left out here and only
//! show up in the all-games listing ([`list_games`]).

use serde::Serialize;
use tracing::debug;

use super::edge::{classify, EdgeBand};
use super::schema::{parse_number, PredictionRow};

pub const DEFAULT_MIN_EDGE: f64 = 2.0;
pub const BELOW_THRESHOLD: &str = "Below threshold";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BetSide {
    Favorite,
    Underdog,
    /// Edge below the threshold; no bet
    Pass,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Opportunity {
    pub matchup: String,
    pub favorite: String,
    pub underdog: String,
    /// Model-predicted point differential
    pub our_line: f64,
    pub vegas_line: f64,
    pub edge: f64,
    pub recommendation: String,
    pub side: BetSide,
    pub band: EdgeBand,
    pub tag: &'static str,
    pub confidence: String,
}

impl Opportunity {
    pub fn is_actionable(&self) -> bool {
        self.side != BetSide::Pass
    }
}

/// Pick the side and build the recommendation text.
///
/// The sheet records lines as positive magnitudes from the favorite's
/// perspective, so the sign in the text comes from the side, not the cell.
pub fn recommend(
    favorite: &str,
    underdog: &str,
    our_line: f64,
    vegas_line: f64,
    edge: f64,
    min_edge: f64,
) -> (BetSide, String) {
    if edge < min_edge {
        (BetSide::Pass, BELOW_THRESHOLD.to_string())
    } else if our_line > vegas_line {
        (
            BetSide::Favorite,
            format!("Take {} -{}", favorite, vegas_line.abs()),
        )
    } else {
        (
            BetSide::Underdog,
            format!("Take {} +{}", underdog, vegas_line.abs()),
        )
    }
}

/// Turn one prediction into an opportunity, or `None` when the row has no
/// usable line or no edge value.
pub fn build_opportunity(pred: &PredictionRow, min_edge: f64) -> Option<Opportunity> {
    if !pred.has_line() {
        return None;
    }
    let edge = pred.edge_value()?;
    let our_line = parse_number(&pred.predicted_difference);
    let vegas_line = parse_number(&pred.line);

    let (side, recommendation) = recommend(
        &pred.favorite,
        &pred.underdog,
        our_line,
        vegas_line,
        edge,
        min_edge,
    );
    let class = classify(edge);

    Some(Opportunity {
        matchup: pred.matchup.clone(),
        favorite: pred.favorite.clone(),
        underdog: pred.underdog.clone(),
        our_line,
        vegas_line,
        edge,
        recommendation,
        side,
        band: class.band,
        tag: class.tag,
        confidence: class.confidence,
    })
}

/// Build opportunities for every eligible prediction, highest edge first.
/// Equal edges keep their sheet order.
pub fn build_opportunities(preds: &[PredictionRow], min_edge: f64) -> Vec<Opportunity> {
    let mut opps: Vec<Opportunity> = preds
        .iter()
        .filter_map(|p| build_opportunity(p, min_edge))
        .collect();
    // Vec::sort_by is stable
    opps.sort_by(|a, b| b.edge.total_cmp(&a.edge));
    debug!(
        "Built {} opportunities from {} predictions (min_edge={})",
        opps.len(),
        preds.len(),
        min_edge
    );
    opps
}

/// Opportunities of one band.
#[derive(Debug, Clone, Serialize)]
pub struct BandGroup {
    pub band: EdgeBand,
    pub tag: &'static str,
    pub opportunities: Vec<Opportunity>,
}

/// Group opportunities by band, highest band first. Empty bands are omitted.
pub fn group_by_band(opps: &[Opportunity]) -> Vec<BandGroup> {
    EdgeBand::ALL
        .into_iter()
        .filter_map(|band| {
            let mut members: Vec<Opportunity> =
                opps.iter().filter(|o| o.band == band).cloned().collect();
            if members.is_empty() {
                return None;
            }
            members.sort_by(|a, b| b.edge.total_cmp(&a.edge));
            Some(BandGroup {
                band,
                tag: band.tag(),
                opportunities: members,
            })
        })
        .collect()
}

/// One line of the all-games listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameListing {
    pub matchup: String,
    pub favorite: String,
    pub underdog: String,
    pub predicted_difference: String,
    pub line: String,
    pub edge: String,
    pub line_available: bool,
    /// "Line Available" | "No Line"
    pub status: &'static str,
    /// Band label with its tag, or "Unknown" without an edge value
    pub edge_category: String,
    pub band: Option<EdgeBand>,
}

/// Informational listing of every prediction, including the ones that never
/// become opportunities. Sheet order is preserved.
pub fn list_games(preds: &[PredictionRow]) -> Vec<GameListing> {
    preds
        .iter()
        .map(|p| {
            let line_available = p.has_line();
            let edge = p.edge_value();
            let band = edge.map(|e| classify(e).band);
            let edge_category = match band {
                Some(b) => format!("{} {}", b.tag(), b.label()),
                None => "Unknown".to_string(),
            };
            GameListing {
                matchup: p.matchup.clone(),
                favorite: p.favorite.clone(),
                underdog: p.underdog.clone(),
                predicted_difference: p.predicted_difference.clone(),
                line: p.line.clone(),
                edge: match &p.edge {
                    Some(cell) => cell.clone(),
                    None => edge.map(|e| e.to_string()).unwrap_or_default(),
                },
                line_available,
                status: if line_available {
                    "Line Available"
                } else {
                    "No Line"
                },
                edge_category,
                band,
            }
        })
        .collect()
}
