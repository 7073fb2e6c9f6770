use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dataset::MatchRecord;

const OPPONENTS: &[&str] = &[
    "Arsenal",
    "Chelsea",
    "Liverpool",
    "Manchester City",
    "Newcastle United",
    "Tottenham Hotspur",
    "Everton",
    "Aston Villa",
];

const SEASONS: std::ops::RangeInclusive<i32> = 2019..=2021;

/// Synthetic match table for running the pipeline without a configured
/// dataset. Deterministic for a given seed so tests and benches see the
/// same rows.
pub fn sample_matches(team: &str) -> Vec<MatchRecord> {
    sample_matches_seeded(team, 26)
}

pub fn sample_matches_seeded(team: &str, seed: u64) -> Vec<MatchRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::new();
    for year in SEASONS {
        for month in 1..=12u32 {
            for _ in 0..rng.gen_range(1..=3) {
                records.push(sample_match(&mut rng, team, year, month));
            }
        }
    }
    records
}

fn sample_match(rng: &mut StdRng, team: &str, year: i32, month: u32) -> MatchRecord {
    let opponent = OPPONENTS[rng.gen_range(0..OPPONENTS.len())];
    let at_home = rng.gen_bool(0.5);
    let (home_team, away_team) = if at_home {
        (team.to_string(), opponent.to_string())
    } else {
        (opponent.to_string(), team.to_string())
    };

    let home_score = rng.gen_range(0..=4u32);
    let away_score = rng.gen_range(0..=3u32);
    let team_score = if at_home { home_score } else { away_score };
    let opponent_score = if at_home { away_score } else { home_score };
    let points = if team_score > opponent_score {
        3.0
    } else if team_score < opponent_score {
        0.0
    } else {
        1.0
    };

    let total_shots = rng.gen_range(6..=20u32);
    let shots_on_goal = rng.gen_range(1..=total_shots / 2);
    let expected_goals = shots_on_goal as f64 * rng.gen_range(0.2..0.4);

    MatchRecord {
        home_team,
        away_team,
        home_score,
        away_score,
        year,
        month,
        expected_goals,
        possession: rng.gen_range(0.35..0.65),
        total_shots,
        shots_on_goal,
        total_passes: rng.gen_range(350..750),
        pass_accuracy: rng.gen_range(0.70..0.92),
        points,
    }
}
