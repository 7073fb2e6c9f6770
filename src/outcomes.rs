use serde::Serialize;

use crate::team_view::{MatchResult, Side, TeamMatchView};

#[derive(Debug, Clone, Serialize)]
pub struct OutcomeShare {
    pub result: MatchResult,
    pub count: usize,
    pub proportion: f64,
}

/// Win/draw/loss split for one side over an inclusive year range. Shares
/// are ordered by count descending and only list outcomes that occurred;
/// their proportions sum to 1.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeDistribution {
    pub side: Side,
    pub year_min: i32,
    pub year_max: i32,
    pub games: usize,
    pub shares: Vec<OutcomeShare>,
}

impl OutcomeDistribution {
    pub fn proportion_of(&self, result: MatchResult) -> Option<f64> {
        self.shares
            .iter()
            .find(|s| s.result == result)
            .map(|s| s.proportion)
    }
}

#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("no {} matches between {year_min} and {year_max}", .side.label())]
pub struct NoDataInRange {
    pub side: Side,
    pub year_min: i32,
    pub year_max: i32,
}

/// Count outcomes for rows on `side` with year in `[year_min, year_max]`
/// and turn the counts into proportions. An empty filtered set is an
/// explicit error, never a division by zero.
pub fn summarize_outcomes(
    view: &[TeamMatchView],
    year_min: i32,
    year_max: i32,
    side: Side,
) -> Result<OutcomeDistribution, NoDataInRange> {
    let mut wins = 0usize;
    let mut draws = 0usize;
    let mut losses = 0usize;
    for row in view
        .iter()
        .filter(|r| r.side == side && r.year >= year_min && r.year <= year_max)
    {
        match row.result {
            MatchResult::Win => wins += 1,
            MatchResult::Draw => draws += 1,
            MatchResult::Loss => losses += 1,
        }
    }

    let games = wins + draws + losses;
    if games == 0 {
        return Err(NoDataInRange {
            side,
            year_min,
            year_max,
        });
    }

    let mut shares: Vec<OutcomeShare> = [
        (MatchResult::Win, wins),
        (MatchResult::Draw, draws),
        (MatchResult::Loss, losses),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .map(|(result, count)| OutcomeShare {
        result,
        count,
        proportion: count as f64 / games as f64,
    })
    .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count));

    Ok(OutcomeDistribution {
        side,
        year_min,
        year_max,
        games,
        shares,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_row(year: i32, side: Side, goals_for: u32, goals_against: u32) -> TeamMatchView {
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
            year,
            month: 1,
            expected_goals: 1.0,
        }
    }

    #[test]
    fn proportions_sum_to_one() {
        let view = vec![
            view_row(2020, Side::Home, 2, 1),
            view_row(2020, Side::Home, 1, 1),
            view_row(2020, Side::Home, 0, 2),
            view_row(2021, Side::Home, 3, 0),
        ];
        let dist = summarize_outcomes(&view, 2020, 2021, Side::Home).unwrap();
        assert_eq!(dist.games, 4);
        let total: f64 = dist.shares.iter().map(|s| s.proportion).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn absent_outcomes_are_not_listed() {
        let view = vec![
            view_row(2020, Side::Home, 2, 1),
            view_row(2020, Side::Home, 1, 1),
        ];
        let dist = summarize_outcomes(&view, 2020, 2020, Side::Home).unwrap();
        assert_eq!(dist.shares.len(), 2);
        assert_eq!(dist.proportion_of(MatchResult::Win), Some(0.5));
        assert_eq!(dist.proportion_of(MatchResult::Draw), Some(0.5));
        assert_eq!(dist.proportion_of(MatchResult::Loss), None);
    }

    #[test]
    fn shares_are_ordered_by_count() {
        let view = vec![
            view_row(2020, Side::Away, 0, 1),
            view_row(2020, Side::Away, 0, 3),
            view_row(2020, Side::Away, 2, 0),
            view_row(2020, Side::Away, 1, 2),
        ];
        let dist = summarize_outcomes(&view, 2020, 2020, Side::Away).unwrap();
        assert_eq!(dist.shares[0].result, MatchResult::Loss);
        assert_eq!(dist.shares[0].count, 3);
        assert_eq!(dist.shares[1].result, MatchResult::Win);
    }

    #[test]
    fn year_range_is_inclusive() {
        let view = vec![
            view_row(2019, Side::Home, 2, 0),
            view_row(2020, Side::Home, 0, 2),
            view_row(2021, Side::Home, 1, 1),
        ];
        let dist = summarize_outcomes(&view, 2019, 2021, Side::Home).unwrap();
        assert_eq!(dist.games, 3);
        let narrowed = summarize_outcomes(&view, 2020, 2020, Side::Home).unwrap();
        assert_eq!(narrowed.games, 1);
        assert_eq!(narrowed.proportion_of(MatchResult::Loss), Some(1.0));
    }

    #[test]
    fn sides_are_summarized_independently() {
        let view = vec![
            view_row(2020, Side::Home, 2, 0),
            view_row(2020, Side::Away, 0, 2),
        ];
        let home = summarize_outcomes(&view, 2020, 2020, Side::Home).unwrap();
        let away = summarize_outcomes(&view, 2020, 2020, Side::Away).unwrap();
        assert_eq!(home.proportion_of(MatchResult::Win), Some(1.0));
        assert_eq!(away.proportion_of(MatchResult::Loss), Some(1.0));
    }

    #[test]
    fn empty_range_is_no_data() {
        let view = vec![view_row(2020, Side::Home, 2, 0)];
        let err = summarize_outcomes(&view, 1995, 1999, Side::Home).unwrap_err();
        assert_eq!(err.year_min, 1995);
        assert_eq!(err.year_max, 1999);
        assert_eq!(err.side, Side::Home);
    }

    #[test]
    fn side_with_no_rows_is_no_data() {
        let view = vec![view_row(2020, Side::Home, 2, 0)];
        assert!(summarize_outcomes(&view, 2020, 2020, Side::Away).is_err());
    }
}
