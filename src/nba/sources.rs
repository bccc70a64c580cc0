//! Play-by-play sources backed by [`NbaClient`], and the order they are
//! tried in.

use async_trait::async_trait;

use crate::{
    cli::types::GameId,
    core::PlayerIdentity,
    error::FetchError,
    nba::{
        classify::DescriptionClassifier,
        http::NbaClient,
        timeline::{build_timeline, Attribution, PlayByPlaySource, TimelineSample},
        types::PlayEvent,
    },
};

/// Live CDN play-by-play (`game.actions`).
pub struct LiveFeed<'a> {
    client: &'a NbaClient,
}

impl<'a> LiveFeed<'a> {
    pub fn new(client: &'a NbaClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PlayByPlaySource for LiveFeed<'_> {
    fn name(&self) -> &str {
        "live"
    }

    async fn fetch_events(&self, game_id: &GameId) -> Result<Vec<PlayEvent>, FetchError> {
        let events = self.client.live_play_by_play(game_id).await?;
        Ok(events.into_iter().map(PlayEvent::Live).collect())
    }
}

/// stats.nba.com `playbyplayv2`.
pub struct HistoricalFeed<'a> {
    client: &'a NbaClient,
    attribution: Attribution,
}

impl<'a> HistoricalFeed<'a> {
    pub fn new(client: &'a NbaClient) -> Self {
        Self {
            client,
            attribution: Attribution::PlayerId,
        }
    }

    /// Also attribute rows whose description names the player. For games
    /// where `PLAYER1_ID` does not line up with the player index.
    pub fn matching_surname(client: &'a NbaClient) -> Self {
        Self {
            client,
            attribution: Attribution::PlayerIdOrSurname,
        }
    }
}

#[async_trait]
impl PlayByPlaySource for HistoricalFeed<'_> {
    fn name(&self) -> &str {
        match self.attribution {
            Attribution::PlayerId => "historical",
            Attribution::PlayerIdOrSurname => "historical-by-name",
        }
    }

    fn attribution(&self) -> Attribution {
        self.attribution
    }

    async fn fetch_events(&self, game_id: &GameId) -> Result<Vec<PlayEvent>, FetchError> {
        let events = self.client.historical_play_by_play(game_id).await?;
        Ok(events.into_iter().map(PlayEvent::Historical).collect())
    }
}

/// Timeline for `player` in `game_id`.
///
/// An in-progress game prefers the live feed; a finished one prefers the
/// historical feed. The name-matching historical pass is always last.
pub async fn scoring_timeline(
    client: &NbaClient,
    game_id: &GameId,
    player: &PlayerIdentity,
    is_live: bool,
) -> Vec<TimelineSample> {
    let live = LiveFeed::new(client);
    let historical = HistoricalFeed::new(client);
    let by_name = HistoricalFeed::matching_surname(client);

    let chain: [&dyn PlayByPlaySource; 3] = if is_live {
        [&live, &historical, &by_name]
    } else {
        [&historical, &live, &by_name]
    };

    build_timeline(&chain, game_id, player, &DescriptionClassifier).await
}
