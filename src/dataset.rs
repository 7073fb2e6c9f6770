use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

/// One row of the raw match table. Identity is row position; rows are
/// immutable once loaded.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub year: i32,
    pub month: u32,
    pub expected_goals: f64,
    pub possession: f64,
    pub total_shots: u32,
    pub shots_on_goal: u32,
    pub total_passes: u32,
    pub pass_accuracy: f64,
    pub points: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Unavailable {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed dataset row: {0}")]
    Malformed(#[from] csv::Error),

    #[error("malformed percentage {value:?} in column {column:?} (row {row})")]
    MalformedPercentage {
        column: &'static str,
        row: usize,
        value: String,
    },
}

#[derive(Debug, Deserialize)]
struct RawMatch {
    home_team: String,
    away_team: String,
    home_score: u32,
    away_score: u32,
    year: i32,
    month: u32,
    expected_goals: f64,
    #[serde(rename = "Ball Possession")]
    ball_possession: String,
    #[serde(rename = "Total Shots")]
    total_shots: u32,
    #[serde(rename = "Shots on Goal")]
    shots_on_goal: u32,
    #[serde(rename = "Total passes")]
    total_passes: u32,
    #[serde(rename = "Passes %")]
    passes_pct: String,
    #[serde(rename = "Points")]
    points: f64,
}

impl RawMatch {
    fn into_record(self, row: usize) -> Result<MatchRecord, DatasetError> {
        let possession = parse_percentage(&self.ball_possession).ok_or_else(|| {
            DatasetError::MalformedPercentage {
                column: "Ball Possession",
                row,
                value: self.ball_possession.clone(),
            }
        })?;
        let pass_accuracy = parse_percentage(&self.passes_pct).ok_or_else(|| {
            DatasetError::MalformedPercentage {
                column: "Passes %",
                row,
                value: self.passes_pct.clone(),
            }
        })?;
        Ok(MatchRecord {
            home_team: self.home_team.trim().to_string(),
            away_team: self.away_team.trim().to_string(),
            home_score: self.home_score,
            away_score: self.away_score,
            year: self.year,
            month: self.month,
            expected_goals: self.expected_goals,
            possession,
            total_shots: self.total_shots,
            shots_on_goal: self.shots_on_goal,
            total_passes: self.total_passes,
            pass_accuracy,
            points: self.points,
        })
    }
}

/// Load the match table from a CSV file. Any unreadable file, structural
/// problem, or bad percentage cell fails the whole load.
pub fn load_matches(path: &Path) -> Result<Vec<MatchRecord>, DatasetError> {
    let file = std::fs::File::open(path).map_err(|e| DatasetError::Unavailable {
        path: path.display().to_string(),
        source: e,
    })?;
    let records = load_matches_from_reader(file)?;
    info!(rows = records.len(), path = %path.display(), "match dataset loaded");
    Ok(records)
}

pub fn load_matches_from_reader<R: Read>(rdr: R) -> Result<Vec<MatchRecord>, DatasetError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<RawMatch>().enumerate() {
        let raw = row?;
        records.push(raw.into_record(idx + 1)?);
    }
    Ok(records)
}

/// Distinct years present in the table, ascending. Feeds the year
/// checkbox list.
pub fn distinct_years(records: &[MatchRecord]) -> Vec<i32> {
    let mut years: Vec<i32> = records.iter().map(|r| r.year).collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// Distinct months present in the table, ascending.
pub fn distinct_months(records: &[MatchRecord]) -> Vec<u32> {
    let mut months: Vec<u32> = records.iter().map(|r| r.month).collect();
    months.sort_unstable();
    months.dedup();
    months
}

/// (min, max) year over the table, `None` when the table is empty. Feeds
/// the year-range slider bounds.
pub fn year_bounds(records: &[MatchRecord]) -> Option<(i32, i32)> {
    let min = records.iter().map(|r| r.year).min()?;
    let max = records.iter().map(|r| r.year).max()?;
    Some((min, max))
}

// "54%" -> 0.54. The trailing '%' is required; anything else is malformed.
fn parse_percentage(raw: &str) -> Option<f64> {
    let s = raw.trim().strip_suffix('%')?;
    let value = s.trim().parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value / 100.0)
}
