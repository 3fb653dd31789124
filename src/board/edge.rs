//! Edge band classification.
//!
//! An edge is the absolute gap, in points, between the model's predicted
//! margin and the sportsbook line. Bands are half-open intervals checked from
//! the top down:
//!
//!   edge ≥ 12      → 12+
//!   9 ≤ edge < 12  → 9-12
//!   7 ≤ edge < 9   → 7-9
//!   5 ≤ edge < 7   → 5-7
//!   2 ≤ edge < 5   → 2-5
//!   edge < 2       → 0-2
//!
//! Each band carries a historical record from manual review of past weeks.
//! Those figures are reference data, bumped by hand between releases together
//! with [`BAND_HISTORY_VERSION`]; they are never derived from live outcomes.
use serde::Serialize;

/// Revision of the static band history below.
pub const BAND_HISTORY_VERSION: &str = "2025-w3";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EdgeBand {
    #[serde(rename = "12+")]
    TwelvePlus,
    #[serde(rename = "9-12")]
    NineToTwelve,
    #[serde(rename = "7-9")]
    SevenToNine,
    #[serde(rename = "5-7")]
    FiveToSeven,
    #[serde(rename = "2-5")]
    TwoToFive,
    #[serde(rename = "0-2")]
    ZeroToTwo,
}

/// Win/loss record of a band from the manual history review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandHistory {
    pub wins: u32,
    pub losses: u32,
    /// Rounded win percentage as published alongside the record
    pub win_pct: u32,
}

impl EdgeBand {
    /// All bands, highest edge first.
    pub const ALL: [EdgeBand; 6] = [
        EdgeBand::TwelvePlus,
        EdgeBand::NineToTwelve,
        EdgeBand::SevenToNine,
        EdgeBand::FiveToSeven,
        EdgeBand::TwoToFive,
        EdgeBand::ZeroToTwo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EdgeBand::TwelvePlus => "12+",
            EdgeBand::NineToTwelve => "9-12",
            EdgeBand::SevenToNine => "7-9",
            EdgeBand::FiveToSeven => "5-7",
            EdgeBand::TwoToFive => "2-5",
            EdgeBand::ZeroToTwo => "0-2",
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            EdgeBand::TwelvePlus => "👑",
            EdgeBand::NineToTwelve => "💎",
            EdgeBand::SevenToNine => "🔥",
            EdgeBand::FiveToSeven => "🟢",
            EdgeBand::TwoToFive => "🟡",
            EdgeBand::ZeroToTwo => "🔴",
        }
    }

    pub fn quality(self) -> &'static str {
        match self {
            EdgeBand::TwelvePlus => "Elite",
            EdgeBand::NineToTwelve => "Strong",
            EdgeBand::SevenToNine => "Excellent",
            EdgeBand::FiveToSeven => "Good",
            EdgeBand::TwoToFive => "Weak",
            EdgeBand::ZeroToTwo => "Avoid",
        }
    }

    pub fn history(self) -> BandHistory {
        let (wins, losses, win_pct) = match self {
            EdgeBand::TwelvePlus => (9, 5, 64),
            EdgeBand::NineToTwelve => (3, 2, 60),
            EdgeBand::SevenToNine => (2, 0, 100),
            EdgeBand::FiveToSeven => (3, 1, 75),
            EdgeBand::TwoToFive => (3, 5, 37),
            EdgeBand::ZeroToTwo => (2, 3, 40),
        };
        BandHistory {
            wins,
            losses,
            win_pct,
        }
    }

    /// e.g. "Elite (64%)"
    pub fn confidence(self) -> String {
        format!("{} ({}%)", self.quality(), self.history().win_pct)
    }

    /// Lower bound of the band, inclusive.
    pub fn floor(self) -> f64 {
        match self {
            EdgeBand::TwelvePlus => 12.0,
            EdgeBand::NineToTwelve => 9.0,
            EdgeBand::SevenToNine => 7.0,
            EdgeBand::FiveToSeven => 5.0,
            EdgeBand::TwoToFive => 2.0,
            EdgeBand::ZeroToTwo => 0.0,
        }
    }
}

/// Result of classifying one edge value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub band: EdgeBand,
    pub tag: &'static str,
    pub confidence: String,
}

/// Map NaN and negative edges to 0.0. Positive infinity is left alone and
/// lands in the top band.
pub fn sanitize_edge(edge: f64) -> f64 {
    if edge.is_nan() || edge <= 0.0 {
        0.0
    } else {
        edge
    }
}

pub fn band_for(edge: f64) -> EdgeBand {
    let edge = sanitize_edge(edge);
    EdgeBand::ALL
        .into_iter()
        .find(|band| edge >= band.floor())
        .unwrap_or(EdgeBand::ZeroToTwo)
}

pub fn classify(edge: f64) -> Classification {
    let band = band_for(edge);
    Classification {
        band,
        tag: band.tag(),
        confidence: band.confidence(),
    }
}

/// One line of the band reference table served to the dashboard sidebar.
#[derive(Debug, Clone, Serialize)]
pub struct BandReference {
    pub band: EdgeBand,
    pub tag: &'static str,
    pub quality: &'static str,
    pub confidence: String,
    pub history: BandHistory,
}

/// Betting guidance printed under the band table.
pub const BAND_GUIDANCE: &str = "Avoid 0-5 pt edges • Target 5+";

/// Combined record across every band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallRecord {
    pub wins: u32,
    pub losses: u32,
    /// Win percentage to one decimal; 0 with no games
    pub win_pct: f64,
}

impl OverallRecord {
    fn from_bands(bands: &[BandReference]) -> Self {
        let wins: u32 = bands.iter().map(|b| b.history.wins).sum();
        let losses: u32 = bands.iter().map(|b| b.history.losses).sum();
        let total = wins + losses;
        let win_pct = if total == 0 {
            0.0
        } else {
            (f64::from(wins) / f64::from(total) * 1000.0).round() / 10.0
        };
        OverallRecord {
            wins,
            losses,
            win_pct,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BandReferenceTable {
    pub version: &'static str,
    pub bands: Vec<BandReference>,
    pub overall: OverallRecord,
    pub guidance: &'static str,
}

pub fn band_reference() -> BandReferenceTable {
    let bands: Vec<BandReference> = EdgeBand::ALL
        .into_iter()
        .map(|band| BandReference {
            band,
            tag: band.tag(),
            quality: band.quality(),
            confidence: band.confidence(),
            history: band.history(),
        })
        .collect();
    BandReferenceTable {
        version: BAND_HISTORY_VERSION,
        overall: OverallRecord::from_bands(&bands),
        bands,
        guidance: BAND_GUIDANCE,
    }
}
