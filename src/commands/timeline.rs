//! Timeline command implementation

use crate::{
    cli::types::{GameId, PlayerId, Season},
    core::PlayerIdentity,
    nba::{players::resolve_player, sources::scoring_timeline, timeline::has_scoring_data},
    render::{render_chart, render_samples, chart, NO_SCORING_DATA},
    Result,
};

use super::{resolve_player_name, CommandContext};

/// Options for the timeline command.
#[derive(Debug)]
pub struct TimelineParams {
    pub game_id: GameId,
    pub player: Option<String>,
    pub player_id: Option<PlayerId>,
    pub season: Option<Season>,
    pub is_live: bool,
    pub as_json: bool,
}

/// Identity to chart: an explicit id skips the lookup.
///
/// With an id, only a name given alongside it is kept (for surname
/// attribution); the env var and default name belong to another player.
pub async fn timeline_identity(
    ctx: &CommandContext,
    player: Option<String>,
    player_id: Option<PlayerId>,
    season: Season,
) -> Result<PlayerIdentity> {
    match player_id {
        Some(id) => Ok(PlayerIdentity {
            id,
            full_name: player
                .map(|p| p.trim().to_string())
                .unwrap_or_default(),
        }),
        None => {
            let name = resolve_player_name(player);
            resolve_player(&ctx.client, &ctx.cache, &name, season).await
        }
    }
}

/// Handle the timeline command
pub async fn handle_timeline(ctx: &CommandContext, params: TimelineParams) -> Result<()> {
    let season = params.season.unwrap_or_default();
    let player = timeline_identity(ctx, params.player, params.player_id, season).await?;

    let samples = scoring_timeline(&ctx.client, &params.game_id, &player, params.is_live).await;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&samples)?); // tarpaulin::skip
        return Ok(());
    }

    println!(
        "{} ({}) in game {}",
        player.full_name, player.id, params.game_id
    ); // tarpaulin::skip
    if has_scoring_data(&samples) {
        println!(
            "{}",
            render_chart(&samples, chart::DEFAULT_WIDTH, chart::DEFAULT_HEIGHT)
        ); // tarpaulin::skip
        print!("{}", render_samples(&samples)); // tarpaulin::skip
    } else {
        println!("{}", NO_SCORING_DATA); // tarpaulin::skip
    }

    Ok(())
}
