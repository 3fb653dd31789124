use serde::Serialize;

use super::schema::OutcomeRow;

pub const WIN: &str = "WIN";
pub const LOSS: &str = "LOSS";

/// Break-even win rate at standard -110 pricing (110 / 210).
pub const BREAKEVEN_WIN_RATE: f64 = 52.38;
/// Units lost per losing bet at -110.
const LOSS_UNITS: f64 = 1.1;
const RECENT_LIMIT: usize = 10;

/// One point of the cumulative win-rate line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WinRatePoint {
    /// 1-based count of settled bets so far
    pub game_number: usize,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub total: usize,
    pub wins: usize,
    pub losses: usize,
    /// Percentage in [0, 100]; 0 when nothing has settled
    pub win_rate: f64,
    pub opportunity_count: usize,
    /// Net units at -110 (win +1.0, loss -1.1)
    pub profit_units: f64,
    pub breakeven_win_rate: f64,
    pub win_rate_series: Vec<WinRatePoint>,
    /// Last settled bets, oldest first
    pub recent: Vec<OutcomeRow>,
}

fn is_settled(outcome: &OutcomeRow) -> bool {
    outcome.result == WIN || outcome.result == LOSS
}

/// Win rate as a percentage; 0 when `total` is 0.
pub fn win_rate(wins: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        wins as f64 / total as f64 * 100.0
    }
}

/// Summarize settled outcomes. Only an exact "WIN" or "LOSS" counts; pushes,
/// pending games and blanks are ignored rather than treated as losses.
pub fn summarize(outcomes: &[OutcomeRow], opportunity_count: usize) -> PerformanceSummary {
    let settled: Vec<&OutcomeRow> = outcomes.iter().filter(|o| is_settled(o)).collect();

    let mut wins = 0usize;
    let mut win_rate_series = Vec::with_capacity(settled.len());
    for (i, outcome) in settled.iter().enumerate() {
        if outcome.result == WIN {
            wins += 1;
        }
        win_rate_series.push(WinRatePoint {
            game_number: i + 1,
            win_rate: win_rate(wins, i + 1),
        });
    }

    let total = settled.len();
    let losses = total - wins;
    let recent = settled
        .iter()
        .skip(total.saturating_sub(RECENT_LIMIT))
        .map(|o| (*o).clone())
        .collect();

    PerformanceSummary {
        total,
        wins,
        losses,
        win_rate: win_rate(wins, total),
        opportunity_count,
        profit_units: wins as f64 - losses as f64 * LOSS_UNITS,
        breakeven_win_rate: BREAKEVEN_WIN_RATE,
        win_rate_series,
        recent,
    }
}
