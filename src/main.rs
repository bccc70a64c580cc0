//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nba_tracker::{
    cli::{Commands, Tracker},
    commands::{
        lookup::handle_lookup,
        timeline::{handle_timeline, TimelineParams},
        watch::{handle_watch, WatchParams},
        CommandContext,
    },
    core::init_logging,
};
use std::time::Duration;

/// Run the CLI. Everything happens sequentially on one thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let app = Tracker::parse();
    init_logging(&app.log_level);

    let ctx = CommandContext::new(Duration::from_secs(app.timeout))
        .context("failed to set up the HTTP client")?;

    match app.command {
        Commands::Watch {
            player,
            interval,
            once,
            json,
        } => {
            handle_watch(
                &ctx,
                WatchParams {
                    player: player.player,
                    season: player.season,
                    interval,
                    once,
                    as_json: json,
                },
            )
            .await?
        }

        Commands::Timeline {
            game_id,
            player,
            player_id,
            live,
            json,
        } => {
            handle_timeline(
                &ctx,
                TimelineParams {
                    game_id,
                    player: player.player,
                    player_id,
                    season: player.season,
                    is_live: live,
                    as_json: json,
                },
            )
            .await?
        }

        Commands::Lookup { name, season } => handle_lookup(&ctx, &name, season).await?,
    }

    Ok(())
}
