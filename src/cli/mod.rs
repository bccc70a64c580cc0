//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{GameId, PlayerId, Season};

/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Player selection shared between commands
#[derive(Debug, Args)]
pub struct PlayerArgs {
    /// Full player name (or set `NBA_TRACKER_PLAYER` env var).
    #[clap(long, short)]
    pub player: Option<String>,

    /// Season, e.g. 2025-26 (defaults to the season in progress).
    #[clap(long, short)]
    pub season: Option<Season>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the live (or most recent) game dashboard for a player.
    ///
    /// Checks today's scoreboard for an in-progress game featuring the
    /// player; otherwise shows the last completed game from the game log.
    Watch {
        #[clap(flatten)]
        player: PlayerArgs,

        /// Refresh automatically every N seconds instead of waiting for Enter.
        #[clap(long, short, value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,

        /// Render once and exit.
        #[clap(long, conflicts_with = "interval")]
        once: bool,

        /// Output the dashboard as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Rebuild the scoring timeline for one game from play-by-play.
    Timeline {
        /// Game id, e.g. 0022500123.
        game_id: GameId,

        #[clap(flatten)]
        player: PlayerArgs,

        /// Use a person id directly instead of looking the name up.
        #[clap(long)]
        player_id: Option<PlayerId>,

        /// Treat the game as in progress (prefer the live feed).
        #[clap(long)]
        live: bool,

        /// Output samples as JSON instead of a chart.
        #[clap(long)]
        json: bool,
    },

    /// Resolve a player name to an NBA person id.
    Lookup {
        /// Full player name.
        name: String,

        #[clap(long, short)]
        season: Option<Season>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nba-tracker", about = "Live and last-game stats for one NBA player")]
pub struct Tracker {
    #[clap(subcommand)]
    pub command: Commands,

    /// Log level when `RUST_LOG` is unset (trace, debug, info, warn, error).
    #[clap(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Per-request timeout in seconds.
    #[clap(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_watch_defaults() {
        let app = Tracker::try_parse_from(["nba-tracker", "watch"]).unwrap();
        assert_eq!(app.timeout, DEFAULT_TIMEOUT_SECS);
        assert_eq!(app.log_level, "warn");
        match app.command {
            Commands::Watch {
                player,
                interval,
                once,
                json,
            } => {
                assert!(player.player.is_none());
                assert!(player.season.is_none());
                assert!(interval.is_none());
                assert!(!once);
                assert!(!json);
            }
            other => panic!("Expected Watch, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_watch_with_player_and_season() {
        let app = Tracker::try_parse_from([
            "nba-tracker",
            "watch",
            "-p",
            "Deni Avdija",
            "--season",
            "2024-25",
            "--once",
        ])
        .unwrap();
        match app.command {
            Commands::Watch { player, once, .. } => {
                assert_eq!(player.player.as_deref(), Some("Deni Avdija"));
                assert_eq!(player.season, Some(Season::new(2024)));
                assert!(once);
            }
            other => panic!("Expected Watch, got {other:?}"),
        }
    }

    #[test]
    fn test_interval_must_be_positive() {
        assert!(Tracker::try_parse_from(["nba-tracker", "watch", "--interval", "0"]).is_err());

        let app = Tracker::try_parse_from(["nba-tracker", "watch", "--interval", "1"]).unwrap();
        match app.command {
            Commands::Watch { interval, .. } => assert_eq!(interval, Some(1)),
            other => panic!("Expected Watch, got {other:?}"),
        }
    }

    #[test]
    fn test_once_conflicts_with_interval() {
        let result =
            Tracker::try_parse_from(["nba-tracker", "watch", "--once", "--interval", "30"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_timeline() {
        let app = Tracker::try_parse_from([
            "nba-tracker",
            "timeline",
            "0022500123",
            "--player-id",
            "1630166",
            "--live",
            "--timeout",
            "5",
        ])
        .unwrap();
        assert_eq!(app.timeout, 5);
        match app.command {
            Commands::Timeline {
                game_id,
                player_id,
                live,
                json,
                ..
            } => {
                assert_eq!(game_id.as_str(), "0022500123");
                assert_eq!(player_id, Some(PlayerId::new(1630166)));
                assert!(live);
                assert!(!json);
            }
            other => panic!("Expected Timeline, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_timeline_rejects_bad_game_id() {
        let result = Tracker::try_parse_from(["nba-tracker", "timeline", "not-a-game"]);
        assert!(result.is_err());
    }
}
