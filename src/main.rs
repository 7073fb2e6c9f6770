use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use soccer_insights::correlation::CorrelationMatrix;
use soccer_insights::dataset;
use soccer_insights::insights::{TOP_PERIODS, TeamInsights};
use soccer_insights::outcomes::OutcomeDistribution;
use soccer_insights::periods::{PeriodAggregate, PeriodFilter};
use soccer_insights::sample;
use soccer_insights::team_view::Side;

const DEFAULT_TEAM: &str = "Manchester United";
const SERIES_PREVIEW_ROWS: usize = 12;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let team = parse_value_arg("--team")
        .or_else(|| opt_env("INSIGHTS_TEAM"))
        .unwrap_or_else(|| DEFAULT_TEAM.to_string());
    let data_path = parse_value_arg("--data")
        .map(PathBuf::from)
        .or_else(|| opt_env("INSIGHTS_DATA").map(PathBuf::from));

    let records = match &data_path {
        Some(path) => dataset::load_matches(path)
            .with_context(|| format!("load match dataset {}", path.display()))?,
        None => {
            info!("no dataset configured, generating sample matches");
            sample::sample_matches(&team)
        }
    };

    let insights = TeamInsights::new(records, team);

    if has_flag("--json") {
        println!("{}", serde_json::to_string_pretty(&insights.payload())?);
        return Ok(());
    }

    print_digest(&insights);
    Ok(())
}

fn print_digest(insights: &TeamInsights) {
    let view = insights.team_view();
    let home = view.iter().filter(|r| r.side == Side::Home).count();

    println!("Team insight digest: {}", insights.team());
    println!(
        "Matches: {} (home {} / away {})",
        view.len(),
        home,
        view.len() - home
    );
    match insights.year_bounds() {
        Some((min, max)) => println!("Years: {min}-{max}"),
        None => println!("Years: none"),
    }

    let series = insights.time_series(&PeriodFilter::all());
    println!("Periods: {}", series.len());
    for aggregate in series.iter().take(SERIES_PREVIEW_ROWS) {
        print_period_line(aggregate);
    }
    if series.len() > SERIES_PREVIEW_ROWS {
        println!("  ... {} more", series.len() - SERIES_PREVIEW_ROWS);
    }

    match insights.top_scoring_periods(TOP_PERIODS) {
        Ok(top) => {
            println!("Top {} scoring periods:", top.len());
            for aggregate in &top {
                print_period_line(aggregate);
            }
        }
        Err(err) => println!("Top scoring periods: {err}"),
    }
    match insights.top_conceding_periods(TOP_PERIODS) {
        Ok(top) => {
            println!("Top {} conceding periods:", top.len());
            for aggregate in &top {
                print_period_line(aggregate);
            }
        }
        Err(err) => println!("Top conceding periods: {err}"),
    }

    let payload = insights.payload();
    print_outcomes("Home results", payload.home_outcomes.as_ref());
    print_outcomes("Away results", payload.away_outcomes.as_ref());
    print_strongest_correlation(&payload.correlation);
}

fn print_period_line(aggregate: &PeriodAggregate) {
    println!(
        "  {:>8}  for {:.2}  against {:.2}  ({} games)",
        aggregate.period.label(),
        aggregate.average_goals_for,
        aggregate.average_goals_against,
        aggregate.games_played
    );
}

fn print_outcomes(heading: &str, outcomes: Option<&OutcomeDistribution>) {
    let Some(dist) = outcomes else {
        println!("{heading}: no matches in range");
        return;
    };
    let shares = dist
        .shares
        .iter()
        .map(|s| format!("{} {:.1}% ({})", s.result.label(), s.proportion * 100.0, s.count))
        .collect::<Vec<_>>()
        .join("  ");
    println!(
        "{heading} {}-{}: {} over {} games",
        dist.year_min, dist.year_max, shares, dist.games
    );
}

fn print_strongest_correlation(matrix: &CorrelationMatrix) {
    let mut strongest: Option<(usize, usize, f64)> = None;
    for i in 0..matrix.columns.len() {
        for j in (i + 1)..matrix.columns.len() {
            let Some(r) = matrix.cell(i, j) else {
                continue;
            };
            if strongest.is_none_or(|(_, _, best)| r.abs() > best.abs()) {
                strongest = Some((i, j, r));
            }
        }
    }
    match strongest {
        Some((i, j, r)) => println!(
            "Strongest correlation: {} vs {} at {:+.2}",
            matrix.columns[i], matrix.columns[j], r
        ),
        None => println!("Strongest correlation: not enough data"),
    }
}

fn opt_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .and_then(|val| if val.trim().is_empty() { None } else { Some(val) })
}

fn parse_value_arg(name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == name
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(next.trim().to_string());
        }
    }
    None
}

fn has_flag(name: &str) -> bool {
    std::env::args().skip(1).any(|arg| arg == name)
}
