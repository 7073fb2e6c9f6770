use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::team_view::TeamMatchView;

/// A (year, month) bucket. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    /// Chart axis label, month first: "8-2019".
    pub fn label(&self) -> String {
        format!("{}-{}", self.month, self.year)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodAggregate {
    pub period: Period,
    pub total_goals_for: u32,
    pub total_goals_against: u32,
    pub games_played: usize,
    pub average_goals_for: f64,
    pub average_goals_against: f64,
}

/// Subset of years/months to keep. `None` means every value is selected,
/// matching an untouched checkbox column.
#[derive(Debug, Clone, Default)]
pub struct PeriodFilter {
    pub years: Option<Vec<i32>>,
    pub months: Option<Vec<u32>>,
}

impl PeriodFilter {
    pub fn all() -> Self {
        Self::default()
    }

    fn keeps(&self, period: Period) -> bool {
        let year_ok = self
            .years
            .as_ref()
            .is_none_or(|years| years.contains(&period.year));
        let month_ok = self
            .months
            .as_ref()
            .is_none_or(|months| months.contains(&period.month));
        year_ok && month_ok
    }
}

#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("no periods available to rank")]
pub struct EmptyAggregate;

/// Group the team view by (year, month) into one merged row per period,
/// chronologically sorted. Games per period is at least one because
/// periods only exist where rows do, so the averages never divide by zero.
pub fn aggregate_by_period(view: &[TeamMatchView]) -> Vec<PeriodAggregate> {
    let mut buckets: HashMap<Period, (u32, u32, usize)> = HashMap::new();
    for row in view {
        let key = Period {
            year: row.year,
            month: row.month,
        };
        let entry = buckets.entry(key).or_insert((0, 0, 0));
        entry.0 += row.goals_for;
        entry.1 += row.goals_against;
        entry.2 += 1;
    }

    let mut aggregates: Vec<PeriodAggregate> = buckets
        .into_iter()
        .map(|(period, (goals_for, goals_against, games))| PeriodAggregate {
            period,
            total_goals_for: goals_for,
            total_goals_against: goals_against,
            games_played: games,
            average_goals_for: goals_for as f64 / games as f64,
            average_goals_against: goals_against as f64 / games as f64,
        })
        .collect();
    aggregates.sort_by_key(|a| a.period);
    aggregates
}

/// Keep only periods whose year and month are both selected.
pub fn filter_periods(
    aggregates: &[PeriodAggregate],
    filter: &PeriodFilter,
) -> Vec<PeriodAggregate> {
    aggregates
        .iter()
        .filter(|a| filter.keeps(a.period))
        .cloned()
        .collect()
}

/// Top `k` periods by average goals scored, descending, ties broken
/// chronologically.
pub fn top_by_goals_for(
    aggregates: &[PeriodAggregate],
    k: usize,
) -> Result<Vec<PeriodAggregate>, EmptyAggregate> {
    top_by(aggregates, k, |a| a.average_goals_for)
}

/// Top `k` periods by average goals conceded, descending, ties broken
/// chronologically.
pub fn top_by_goals_against(
    aggregates: &[PeriodAggregate],
    k: usize,
) -> Result<Vec<PeriodAggregate>, EmptyAggregate> {
    top_by(aggregates, k, |a| a.average_goals_against)
}

fn top_by(
    aggregates: &[PeriodAggregate],
    k: usize,
    metric: impl Fn(&PeriodAggregate) -> f64,
) -> Result<Vec<PeriodAggregate>, EmptyAggregate> {
    if aggregates.is_empty() {
        return Err(EmptyAggregate);
    }
    let mut ranked = aggregates.to_vec();
    ranked.sort_by(|a, b| {
        metric(b)
            .partial_cmp(&metric(a))
            .unwrap_or(Ordering::Equal)
            .then(a.period.cmp(&b.period))
    });
    ranked.truncate(k);
    Ok(ranked)
}
