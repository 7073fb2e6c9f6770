//! Data core for a single-team match results dashboard: loads the raw
//! match table, derives the team-centric view, and answers the period,
//! outcome, and correlation queries the presentation layer renders.

pub mod correlation;
pub mod dataset;
pub mod insights;
pub mod outcomes;
pub mod periods;
pub mod sample;
pub mod team_view;
