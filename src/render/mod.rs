//! Text and JSON rendering of the player dashboard.

pub mod chart;

use serde::Serialize;
use std::fmt::Write;

use crate::{
    cli::types::{GameId, PlayerId},
    nba::{
        clock::format_duration_minutes,
        locator::{GameLocation, LiveGame},
        timeline::{has_scoring_data, TimelineSample},
        types::GameLogRow,
    },
};

pub use chart::render_chart;

pub const NO_SCORING_DATA: &str = "⚠ No scoring data available for this game yet.";
pub const NO_GAMES: &str = "No games found for this season yet.";

/// What the dashboard shows for the located game.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum GameView {
    Live(LiveGame),
    LastGame(LastGameSummary),
    NoGames,
    /// The game-log fetch failed.
    HistoryUnavailable {
        error: String,
    },
}

/// Box-score line of the most recent completed game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LastGameSummary {
    pub game_id: GameId,
    pub game_date: String,
    pub matchup: String,
    pub result: String,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    pub minutes: String,
}

impl From<GameLogRow> for LastGameSummary {
    fn from(row: GameLogRow) -> Self {
        Self {
            game_id: row.game_id,
            game_date: row.game_date,
            matchup: row.matchup,
            result: row.wl,
            points: row.points,
            rebounds: row.rebounds,
            assists: row.assists,
            steals: row.steals,
            blocks: row.blocks,
            minutes: row.minutes,
        }
    }
}

impl From<GameLocation> for GameView {
    fn from(location: GameLocation) -> Self {
        match location {
            GameLocation::Live(game) => GameView::Live(game),
            GameLocation::LastGame(row) => GameView::LastGame(row.into()),
            GameLocation::NoGames => GameView::NoGames,
        }
    }
}

/// Everything one refresh produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub player: String,
    pub player_id: PlayerId,
    pub game: GameView,
    /// Empty when there was no game to chart.
    pub timeline: Vec<TimelineSample>,
}

/// Text rendering of the dashboard.
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "🏀 {} Tracker", dashboard.player);
    let _ = writeln!(out);

    match &dashboard.game {
        GameView::Live(game) => {
            let s = &game.stats;
            let _ = writeln!(out, "🔴 LIVE: {} vs {}", game.away_team, game.home_team);
            if !game.status_text.is_empty() {
                let _ = writeln!(out, "   {}", game.status_text.trim());
            }
            let _ = writeln!(out);
            out.push_str(&render_metrics(s.points, s.rebounds_total, s.assists));
            let _ = writeln!(out);
            let _ = writeln!(out, "⏱️ Minutes: {}", format_duration_minutes(&s.minutes));
            let _ = writeln!(
                out,
                "📊 FG: {}/{}",
                s.field_goals_made, s.field_goals_attempted
            );
        }
        GameView::LastGame(last) => {
            let _ = writeln!(out, "⚪ No live game right now. Showing last game stats:");
            let _ = writeln!(out);
            let _ = writeln!(out, "📅 {}", last.game_date);
            let _ = writeln!(out, "Matchup: {} | Result: {}", last.matchup, last.result);
            let _ = writeln!(out);
            out.push_str(&render_metrics(last.points, last.rebounds, last.assists));
            let _ = writeln!(out);
            out.push_str(&render_table(
                &["Steals", "Blocks", "Minutes"],
                &[
                    last.steals.to_string(),
                    last.blocks.to_string(),
                    last.minutes.clone(),
                ],
            ));
        }
        GameView::NoGames => {
            let _ = writeln!(out, "⚪ No live game right now.");
            let _ = writeln!(out, "{}", NO_GAMES);
        }
        GameView::HistoryUnavailable { error } => {
            let _ = writeln!(out, "⚪ No live game right now.");
            let _ = writeln!(out, "Error fetching history: {}", error);
        }
    }

    if matches!(dashboard.game, GameView::Live(_) | GameView::LastGame(_)) {
        let _ = writeln!(out);
        let _ = writeln!(out, "Scoring timeline");
        if has_scoring_data(&dashboard.timeline) {
            out.push_str(&render_chart(
                &dashboard.timeline,
                chart::DEFAULT_WIDTH,
                chart::DEFAULT_HEIGHT,
            ));
        } else {
            let _ = writeln!(out, "{}", NO_SCORING_DATA);
        }
    }

    out
}

/// Three big numbers side by side.
pub fn render_metrics(points: u32, rebounds: u32, assists: u32) -> String {
    format!(
        "  {:<10}{:<10}{:<10}\n  {:<10}{:<10}{:<10}\n",
        "Points", "Rebounds", "Assists", points, rebounds, assists
    )
}

/// One-row table with a header line.
pub fn render_table(headers: &[&str], values: &[String]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .zip(values)
        .map(|(h, v)| h.chars().count().max(v.chars().count()))
        .collect();

    let line = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<w$}", c, w = *w))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let header = line(headers.iter().map(|h| h.to_string()).collect());
    let separator = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");
    let row = line(values.to_vec());

    format!("  {}\n  {}\n  {}\n", header, separator, row)
}

/// Samples as a two-column listing, for `timeline` output.
pub fn render_samples(samples: &[TimelineSample]) -> String {
    let mut out = String::from("  minute  points\n");
    for s in samples {
        let _ = writeln!(out, "  {:>6.2}  {:>6}", s.minute, s.cumulative_points);
    }
    out
}
