use serde::Serialize;

use crate::dataset::MatchRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    pub fn label(&self) -> &'static str {
        match self {
            MatchResult::Win => "win",
            MatchResult::Draw => "draw",
            MatchResult::Loss => "loss",
        }
    }
}

/// One derived row per raw record involving the tracked team, seen from
/// that team's perspective.
#[derive(Debug, Clone, Serialize)]
pub struct TeamMatchView {
    pub goals_for: u32,
    pub goals_against: u32,
    pub result: MatchResult,
    pub side: Side,
    pub year: i32,
    pub month: u32,
    pub expected_goals: f64,
}

/// Derive the team-centric view: home rows in input order, then away rows
/// in input order. Every record naming the team contributes exactly one
/// row; a record listing the team on both sides counts once, as home.
pub fn build_team_view(records: &[MatchRecord], team_name: &str) -> Vec<TeamMatchView> {
    let mut view = Vec::new();
    for record in records.iter().filter(|r| r.home_team == team_name) {
        view.push(view_row(record, Side::Home));
    }
    for record in records
        .iter()
        .filter(|r| r.away_team == team_name && r.home_team != team_name)
    {
        view.push(view_row(record, Side::Away));
    }
    view
}

fn view_row(record: &MatchRecord, side: Side) -> TeamMatchView {
    let (goals_for, goals_against) = match side {
        Side::Home => (record.home_score, record.away_score),
        Side::Away => (record.away_score, record.home_score),
    };
    let result = if goals_for > goals_against {
        MatchResult::Win
    } else if goals_for < goals_against {
        MatchResult::Loss
    } else {
        MatchResult::Draw
    };
    TeamMatchView {
        goals_for,
        goals_against,
        result,
        side,
        year: record.year,
        month: record.month,
        expected_goals: record.expected_goals,
    }
}
