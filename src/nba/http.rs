use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::{
    cli::types::{GameId, PlayerId, Season},
    core::build_client,
    error::FetchError,
    nba::types::{
        BoxscoreEnvelope, BoxscoreGame, GameLogRow, HistoricalEvent, LiveEvent,
        LivePlayByPlayEnvelope, PlayerIndexRow, ScoreboardEnvelope, ScoreboardGame, StatsResponse,
    },
    Result,
};

#[cfg(test)]
mod tests;

/// Base path for the live CDN feeds (scoreboard, boxscore, play-by-play).
pub const LIVE_BASE_URL: &str = "https://cdn.nba.com/static/json/liveData";

/// Base path for the stats endpoints (game log, player index, play-by-play).
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// Season type used for game-log lookups.
pub const REGULAR_SEASON: &str = "Regular Season";

/// Thin client over the upstream endpoints. Each method is one request.
#[derive(Debug, Clone)]
pub struct NbaClient {
    http: Client,
    live_base: String,
    stats_base: String,
}

impl NbaClient {
    /// Client against the public endpoints.
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_base_urls(timeout, LIVE_BASE_URL, STATS_BASE_URL)
    }

    /// Client against custom base URLs (mock servers in tests).
    pub fn with_base_urls(
        timeout: Duration,
        live_base: impl Into<String>,
        stats_base: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            http: build_client(timeout)?,
            live_base: live_base.into().trim_end_matches('/').to_string(),
            stats_base: stats_base.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> std::result::Result<T, FetchError> {
        debug!(url, ?params, "GET");

        let body = self
            .http
            .get(url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(serde_json::from_slice(&body)?)
    }

    /// Today's games with their status codes.
    pub async fn scoreboard(&self) -> std::result::Result<Vec<ScoreboardGame>, FetchError> {
        let url = format!("{}/scoreboard/todaysScoreboard_00.json", self.live_base);
        let envelope: ScoreboardEnvelope = self.get_json(&url, &[]).await?;
        Ok(envelope.scoreboard.games)
    }

    /// Boxscore snapshot for one game.
    pub async fn boxscore(&self, game_id: &GameId) -> std::result::Result<BoxscoreGame, FetchError> {
        let url = format!("{}/boxscore/boxscore_{}.json", self.live_base, game_id);
        let envelope: BoxscoreEnvelope = self.get_json(&url, &[]).await?;
        Ok(envelope.game)
    }

    /// All actions of the live play-by-play feed, in upstream order.
    pub async fn live_play_by_play(
        &self,
        game_id: &GameId,
    ) -> std::result::Result<Vec<LiveEvent>, FetchError> {
        let url = format!("{}/playbyplay/playbyplay_{}.json", self.live_base, game_id);
        let envelope: LivePlayByPlayEnvelope = self.get_json(&url, &[]).await?;
        Ok(envelope.game.actions)
    }

    /// All rows of the historical `playbyplayv2` feed, in upstream order.
    pub async fn historical_play_by_play(
        &self,
        game_id: &GameId,
    ) -> std::result::Result<Vec<HistoricalEvent>, FetchError> {
        let url = format!("{}/playbyplayv2", self.stats_base);
        let params = [
            ("GameID", game_id.to_string()),
            ("StartPeriod", "0".to_string()),
            ("EndPeriod", "14".to_string()),
        ];
        let response: StatsResponse = self.get_json(&url, &params).await?;
        response.result_set("PlayByPlay")?.rows()
    }

    /// Completed games for a player this season, most recent first.
    pub async fn player_game_log(
        &self,
        player_id: PlayerId,
        season: Season,
    ) -> std::result::Result<Vec<GameLogRow>, FetchError> {
        let url = format!("{}/playergamelog", self.stats_base);
        let params = [
            ("PlayerID", player_id.to_string()),
            ("Season", season.to_string()),
            ("SeasonType", REGULAR_SEASON.to_string()),
        ];
        let response: StatsResponse = self.get_json(&url, &params).await?;
        response.result_set("PlayerGameLog")?.rows()
    }

    /// Every player the league knows about, current and historical.
    pub async fn all_players(
        &self,
        season: Season,
    ) -> std::result::Result<Vec<PlayerIndexRow>, FetchError> {
        let url = format!("{}/commonallplayers", self.stats_base);
        let params = [
            ("LeagueID", "00".to_string()),
            ("Season", season.to_string()),
            ("IsOnlyCurrentSeason", "0".to_string()),
        ];
        let response: StatsResponse = self.get_json(&url, &params).await?;
        response.result_set("CommonAllPlayers")?.rows()
    }
}
