//! Find the game to show: a live one featuring the player, else the most
//! recent completed one from the game log.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    cli::types::{GameId, PlayerId, Season},
    error::FetchError,
    nba::{
        http::NbaClient,
        types::{BoxscoreGame, GameLogRow, LivePlayerStatistics},
    },
};

/// The player on the floor in an in-progress game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveGame {
    pub game_id: GameId,
    pub away_team: String,
    pub home_team: String,
    pub status_text: String,
    pub stats: LivePlayerStatistics,
}

impl LiveGame {
    fn from_boxscore(box_game: &BoxscoreGame, player_id: PlayerId) -> Option<Self> {
        let player = box_game.find_player(player_id)?;
        Some(Self {
            game_id: box_game.game_id.clone(),
            away_team: box_game.away_team.team_name.clone(),
            home_team: box_game.home_team.team_name.clone(),
            status_text: box_game.game_status_text.clone(),
            stats: player.statistics.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameLocation {
    Live(LiveGame),
    /// First row of the game log.
    LastGame(GameLogRow),
    /// The game log is empty this season.
    NoGames,
}

impl GameLocation {
    /// Game whose play-by-play should be charted, with its liveness.
    pub fn timeline_target(&self) -> Option<(&GameId, bool)> {
        match self {
            GameLocation::Live(g) => Some((&g.game_id, true)),
            GameLocation::LastGame(row) => Some((&row.game_id, false)),
            GameLocation::NoGames => None,
        }
    }
}

/// Scan today's in-progress games for the player.
///
/// A scoreboard failure counts as "no live games"; a boxscore failure skips
/// that game.
pub async fn find_live_game(client: &NbaClient, player_id: PlayerId) -> Option<LiveGame> {
    let games = match client.scoreboard().await {
        Ok(games) => games,
        Err(e) => {
            warn!(error = %e, "scoreboard unavailable, assuming no live games");
            return None;
        }
    };

    for game in games.iter().filter(|g| g.is_live()) {
        let box_game = match client.boxscore(&game.game_id).await {
            Ok(b) => b,
            Err(e) => {
                warn!(game_id = %game.game_id, error = %e, "boxscore unavailable, skipping game");
                continue;
            }
        };
        if let Some(live) = LiveGame::from_boxscore(&box_game, player_id) {
            info!(game_id = %live.game_id, "player is in a live game");
            return Some(live);
        }
        debug!(game_id = %game.game_id, "player not in this live game");
    }

    None
}

/// Live game if there is one, else the last completed game.
///
/// Only a game-log failure is returned as an error; the caller shows it and
/// carries on.
pub async fn locate_game(
    client: &NbaClient,
    player_id: PlayerId,
    season: Season,
) -> Result<GameLocation, FetchError> {
    if let Some(live) = find_live_game(client, player_id).await {
        return Ok(GameLocation::Live(live));
    }

    let log = client.player_game_log(player_id, season).await?;
    Ok(match log.into_iter().next() {
        Some(row) => GameLocation::LastGame(row),
        None => GameLocation::NoGames,
    })
}
