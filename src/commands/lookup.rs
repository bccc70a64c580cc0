//! Lookup command implementation

use crate::{cli::types::Season, nba::players::resolve_player, Result};

use super::CommandContext;

/// Handle the lookup command
pub async fn handle_lookup(ctx: &CommandContext, name: &str, season: Option<Season>) -> Result<()> {
    let season = season.unwrap_or_default();
    let player = resolve_player(&ctx.client, &ctx.cache, name, season).await?;

    println!("{} {}", player.id.as_u64(), player.full_name); // tarpaulin::skip

    Ok(())
}
