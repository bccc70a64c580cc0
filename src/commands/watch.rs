//! Dashboard command: locate the game, chart it, render, wait for refresh.

use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::info;

use crate::{
    cli::types::Season,
    nba::{locator::locate_game, players::resolve_player, sources::scoring_timeline},
    render::{render_dashboard, Dashboard, GameView},
    Result,
};

use super::{resolve_player_name, CommandContext};

/// Options for the watch command.
#[derive(Debug)]
pub struct WatchParams {
    pub player: Option<String>,
    pub season: Option<Season>,
    /// Timer-triggered refresh; `None` waits for Enter.
    pub interval: Option<u64>,
    pub once: bool,
    pub as_json: bool,
}

/// One full pass: resolve → locate → timeline.
///
/// Only an unresolvable player is an error; every other failure degrades
/// into what the dashboard shows.
pub async fn build_dashboard(
    ctx: &CommandContext,
    player_name: &str,
    season: Season,
) -> Result<Dashboard> {
    let player = resolve_player(&ctx.client, &ctx.cache, player_name, season).await?;

    let (game, target) = match locate_game(&ctx.client, player.id, season).await {
        Ok(location) => {
            let target = location
                .timeline_target()
                .map(|(game_id, is_live)| (game_id.clone(), is_live));
            (GameView::from(location), target)
        }
        Err(e) => (
            GameView::HistoryUnavailable {
                error: e.to_string(),
            },
            None,
        ),
    };

    let timeline = match target {
        Some((game_id, is_live)) => {
            scoring_timeline(&ctx.client, &game_id, &player, is_live).await
        }
        None => Vec::new(),
    };

    Ok(Dashboard {
        player: player.full_name,
        player_id: player.id,
        game,
        timeline,
    })
}

/// Read one line: `q`/`quit` or end of input stops, anything else refreshes.
pub fn prompt_refresh(input: &mut impl BufRead) -> io::Result<bool> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    let answer = line.trim().to_lowercase();
    Ok(!(answer == "q" || answer == "quit"))
}

/// Handle the watch command
pub async fn handle_watch(ctx: &CommandContext, params: WatchParams) -> Result<()> {
    let player_name = resolve_player_name(params.player);
    let season = params.season.unwrap_or_default();

    loop {
        let dashboard = build_dashboard(ctx, &player_name, season).await?;

        if params.as_json {
            println!("{}", serde_json::to_string_pretty(&dashboard)?); // tarpaulin::skip
        } else {
            println!("{}", render_dashboard(&dashboard)); // tarpaulin::skip
        }

        if params.once {
            return Ok(());
        }

        match params.interval {
            Some(secs) => {
                info!(secs, "next refresh scheduled");
                tokio::time::sleep(Duration::from_secs(secs)).await;
            }
            None => {
                print!("[Enter] Refresh Data   [q] Quit: ");
                io::stdout().flush()?;
                if !prompt_refresh(&mut io::stdin().lock())? {
                    return Ok(());
                }
            }
        }
    }
}
