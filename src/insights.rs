use serde::Serialize;
use tracing::warn;

use crate::correlation::{
    CorrelationMatrix, ResultExpectedGoals, correlation_matrix, expected_goals_by_result,
};
use crate::dataset::{self, MatchRecord};
use crate::outcomes::{NoDataInRange, OutcomeDistribution, summarize_outcomes};
use crate::periods::{
    EmptyAggregate, PeriodAggregate, PeriodFilter, aggregate_by_period, filter_periods,
    top_by_goals_against, top_by_goals_for,
};
use crate::team_view::{Side, TeamMatchView, build_team_view};

/// Ranking depth used by the dashboard's bar charts.
pub const TOP_PERIODS: usize = 5;

/// Immutable dataset plus the prebuilt team view. Every query is a pure
/// function of the retained data and its parameters; repeated calls with
/// identical arguments return identical output.
#[derive(Debug, Clone)]
pub struct TeamInsights {
    team: String,
    records: Vec<MatchRecord>,
    view: Vec<TeamMatchView>,
}

impl TeamInsights {
    pub fn new(records: Vec<MatchRecord>, team: impl Into<String>) -> Self {
        let team = team.into();
        let view = build_team_view(&records, &team);
        Self { team, records, view }
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    /// The full raw table, untouched by any team filter.
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    /// The team-centric table.
    pub fn team_view(&self) -> &[TeamMatchView] {
        &self.view
    }

    pub fn years(&self) -> Vec<i32> {
        dataset::distinct_years(&self.records)
    }

    pub fn months(&self) -> Vec<u32> {
        dataset::distinct_months(&self.records)
    }

    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        dataset::year_bounds(&self.records)
    }

    /// Per-period goal averages, restricted to the selected years and
    /// months, chronologically ordered.
    pub fn time_series(&self, filter: &PeriodFilter) -> Vec<PeriodAggregate> {
        filter_periods(&aggregate_by_period(&self.view), filter)
    }

    pub fn top_scoring_periods(&self, k: usize) -> Result<Vec<PeriodAggregate>, EmptyAggregate> {
        top_by_goals_for(&aggregate_by_period(&self.view), k)
    }

    pub fn top_conceding_periods(&self, k: usize) -> Result<Vec<PeriodAggregate>, EmptyAggregate> {
        top_by_goals_against(&aggregate_by_period(&self.view), k)
    }

    pub fn outcome_split(
        &self,
        year_min: i32,
        year_max: i32,
        side: Side,
    ) -> Result<OutcomeDistribution, NoDataInRange> {
        summarize_outcomes(&self.view, year_min, year_max, side)
    }

    pub fn correlation_matrix(&self) -> CorrelationMatrix {
        correlation_matrix(&self.records)
    }

    pub fn expected_goals_by_result(&self) -> Vec<ResultExpectedGoals> {
        expected_goals_by_result(&self.view)
    }

    /// Everything the external renderer needs in one serializable pass:
    /// the unfiltered series, both top rankings, per-side outcome splits
    /// over the full year bounds, the heatmap matrix, and the box-plot
    /// pairs. A side with no rows degrades to an absent split.
    pub fn payload(&self) -> InsightsPayload {
        let (year_min, year_max) = self.year_bounds().unwrap_or((0, 0));
        let series = self.time_series(&PeriodFilter::all());
        let top_scoring = self.top_scoring_periods(TOP_PERIODS).unwrap_or_default();
        let top_conceding = self.top_conceding_periods(TOP_PERIODS).unwrap_or_default();
        let home_outcomes = self.split_or_none(year_min, year_max, Side::Home);
        let away_outcomes = self.split_or_none(year_min, year_max, Side::Away);

        InsightsPayload {
            team: self.team.clone(),
            years: self.years(),
            months: self.months(),
            year_min,
            year_max,
            series,
            top_scoring,
            top_conceding,
            home_outcomes,
            away_outcomes,
            correlation: self.correlation_matrix(),
            expected_goals: self.expected_goals_by_result(),
            team_view: self.view.clone(),
        }
    }

    fn split_or_none(
        &self,
        year_min: i32,
        year_max: i32,
        side: Side,
    ) -> Option<OutcomeDistribution> {
        match self.outcome_split(year_min, year_max, side) {
            Ok(dist) => Some(dist),
            Err(err) => {
                warn!(team = %self.team, "outcome split degraded: {err}");
                None
            }
        }
    }
}

/// Serialized handoff to the external presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct InsightsPayload {
    pub team: String,
    pub years: Vec<i32>,
    pub months: Vec<u32>,
    pub year_min: i32,
    pub year_max: i32,
    pub series: Vec<PeriodAggregate>,
    pub top_scoring: Vec<PeriodAggregate>,
    pub top_conceding: Vec<PeriodAggregate>,
    pub home_outcomes: Option<OutcomeDistribution>,
    pub away_outcomes: Option<OutcomeDistribution>,
    pub correlation: CorrelationMatrix,
    pub expected_goals: Vec<ResultExpectedGoals>,
    pub team_view: Vec<TeamMatchView>,
}
