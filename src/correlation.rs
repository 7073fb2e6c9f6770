use serde::Serialize;

use crate::dataset::MatchRecord;
use crate::team_view::{MatchResult, TeamMatchView};

/// Numeric columns the heatmap is built over, in render order. Labels
/// match the source table headers.
pub const CORRELATION_COLUMNS: [&str; 8] = [
    "home_score",
    "away_score",
    "Ball Possession",
    "Total Shots",
    "Shots on Goal",
    "Total passes",
    "Passes %",
    "Points",
];

/// Pairwise Pearson coefficients over the fixed column set, computed on
/// the full raw table. A cell is `None` when either column has no
/// variance (or fewer than two rows exist), keeping the payload free of
/// NaN.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<&'static str>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied().flatten()
    }
}

pub fn correlation_matrix(records: &[MatchRecord]) -> CorrelationMatrix {
    let series: Vec<Vec<f64>> = (0..CORRELATION_COLUMNS.len())
        .map(|col| records.iter().map(|r| column_value(r, col)).collect())
        .collect();

    let values = (0..series.len())
        .map(|i| {
            (0..series.len())
                .map(|j| pearson(&series[i], &series[j]))
                .collect()
        })
        .collect();

    CorrelationMatrix {
        columns: CORRELATION_COLUMNS.to_vec(),
        values,
    }
}

fn column_value(record: &MatchRecord, col: usize) -> f64 {
    match col {
        0 => record.home_score as f64,
        1 => record.away_score as f64,
        2 => record.possession,
        3 => record.total_shots as f64,
        4 => record.shots_on_goal as f64,
        5 => record.total_passes as f64,
        6 => record.pass_accuracy,
        _ => record.points,
    }
}

fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len();
    if n < 2 {
        return None;
    }
    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x <= 1e-12 || var_y <= 1e-12 {
        return None;
    }
    // Guard against tiny float drift past the unit interval.
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Raw (result, expected goals) pairs in team-view order, for box-plot
/// rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ResultExpectedGoals {
    pub result: MatchResult,
    pub expected_goals: f64,
}

pub fn expected_goals_by_result(view: &[TeamMatchView]) -> Vec<ResultExpectedGoals> {
    view.iter()
        .map(|row| ResultExpectedGoals {
            result: row.result,
            expected_goals: row.expected_goals,
        })
        .collect()
}
