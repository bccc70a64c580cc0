use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::cli::types::{GameId, PlayerId};
use crate::error::FetchError;


/// `gameStatus` value for a game in progress.
pub const GAME_STATUS_LIVE: u8 = 2;

/// Accept `null` wherever a default is acceptable.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Minutes come back as `"32:15"`, `"PT32M15.00S"`, or a bare number
/// depending on the endpoint and season.
fn de_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

// ---------------------------------------------------------------------------
// Live CDN: scoreboard and boxscore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreboardEnvelope {
    pub scoreboard: Scoreboard,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scoreboard {
    #[serde(rename = "gameDate", default)]
    pub game_date: String,
    #[serde(default)]
    pub games: Vec<ScoreboardGame>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreboardGame {
    #[serde(rename = "gameId")]
    pub game_id: GameId,
    #[serde(rename = "gameStatus")]
    pub game_status: u8,
    #[serde(rename = "gameStatusText", default)]
    pub game_status_text: String,
}

impl ScoreboardGame {
    pub fn is_live(&self) -> bool {
        self.game_status == GAME_STATUS_LIVE
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoxscoreEnvelope {
    pub game: BoxscoreGame,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoxscoreGame {
    #[serde(rename = "gameId")]
    pub game_id: GameId,
    #[serde(rename = "gameStatusText", default)]
    pub game_status_text: String,
    #[serde(rename = "homeTeam")]
    pub home_team: BoxscoreTeam,
    #[serde(rename = "awayTeam")]
    pub away_team: BoxscoreTeam,
}

impl BoxscoreGame {
    /// Look the player up on either roster.
    pub fn find_player(&self, id: PlayerId) -> Option<&BoxscorePlayer> {
        self.home_team
            .players
            .iter()
            .chain(self.away_team.players.iter())
            .find(|p| p.person_id == id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoxscoreTeam {
    #[serde(rename = "teamName", default)]
    pub team_name: String,
    #[serde(rename = "teamTricode", default)]
    pub team_tricode: String,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub players: Vec<BoxscorePlayer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoxscorePlayer {
    #[serde(rename = "personId")]
    pub person_id: PlayerId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub statistics: LivePlayerStatistics,
}

/// Running totals for one player in a live game.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LivePlayerStatistics {
    pub points: u32,
    #[serde(rename = "reboundsTotal")]
    pub rebounds_total: u32,
    pub assists: u32,
    #[serde(deserialize_with = "de_string_or_number")]
    pub minutes: String,
    #[serde(rename = "fieldGoalsMade")]
    pub field_goals_made: u32,
    #[serde(rename = "fieldGoalsAttempted")]
    pub field_goals_attempted: u32,
    #[serde(rename = "threePointersMade")]
    pub three_pointers_made: u32,
    #[serde(rename = "threePointersAttempted")]
    pub three_pointers_attempted: u32,
    #[serde(rename = "freeThrowsMade")]
    pub free_throws_made: u32,
    #[serde(rename = "freeThrowsAttempted")]
    pub free_throws_attempted: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
}

// ---------------------------------------------------------------------------
// Play-by-play events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct LivePlayByPlayEnvelope {
    pub game: LivePlayByPlay,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LivePlayByPlay {
    #[serde(default)]
    pub actions: Vec<LiveEvent>,
}

/// Wire shape of one live-feed action; every field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawLiveAction {
    #[serde(deserialize_with = "de_null_default")]
    period: u32,
    #[serde(deserialize_with = "de_null_default")]
    clock: String,
    #[serde(rename = "personId", deserialize_with = "de_null_default")]
    person_id: u64,
    #[serde(deserialize_with = "de_null_default")]
    description: String,
    #[serde(rename = "shotResult")]
    shot_result: Option<String>,
}

/// One action from the live play-by-play feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawLiveAction")]
pub struct LiveEvent {
    pub period: u32,
    /// `"PT11M42.00S"`: time remaining in the period.
    pub clock: String,
    pub person_id: PlayerId,
    pub description: String,
    pub is_scoring_play: bool,
}

impl From<RawLiveAction> for LiveEvent {
    fn from(raw: RawLiveAction) -> Self {
        Self {
            period: raw.period.max(1),
            clock: raw.clock,
            person_id: PlayerId::new(raw.person_id),
            description: raw.description,
            is_scoring_play: raw.shot_result.as_deref() == Some("Made"),
        }
    }
}

/// `EVENTMSGTYPE` codes of the historical feed that matter for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventMsgType {
    FieldGoalMade,
    FieldGoalMissed,
    FreeThrow,
    Other(i64),
}

impl From<i64> for EventMsgType {
    fn from(code: i64) -> Self {
        match code {
            1 => EventMsgType::FieldGoalMade,
            2 => EventMsgType::FieldGoalMissed,
            3 => EventMsgType::FreeThrow,
            other => EventMsgType::Other(other),
        }
    }
}

/// Wire shape of one `playbyplayv2` row, after zipping with the headers.
#[derive(Debug, Clone, Deserialize)]
struct RawHistoricalRow {
    #[serde(rename = "EVENTMSGTYPE", default, deserialize_with = "de_null_default")]
    event_msg_type: i64,
    #[serde(rename = "PERIOD", default, deserialize_with = "de_null_default")]
    period: u32,
    #[serde(rename = "PCTIMESTRING", default, deserialize_with = "de_null_default")]
    pc_time_string: String,
    #[serde(rename = "HOMEDESCRIPTION", default)]
    home_description: Option<String>,
    #[serde(rename = "VISITORDESCRIPTION", default)]
    visitor_description: Option<String>,
    #[serde(rename = "PLAYER1_ID", default, deserialize_with = "de_null_default")]
    player1_id: u64,
}

/// One event from the historical (stats) play-by-play feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawHistoricalRow")]
pub struct HistoricalEvent {
    pub period: u32,
    /// `"11:42"`: time remaining in the period.
    pub clock: String,
    pub player_id: PlayerId,
    pub event_type: EventMsgType,
    pub home_description: String,
    pub visitor_description: String,
}

impl HistoricalEvent {
    /// Home and visitor text joined; either side may be empty.
    pub fn description(&self) -> String {
        match (
            self.home_description.is_empty(),
            self.visitor_description.is_empty(),
        ) {
            (false, false) => format!("{} {}", self.home_description, self.visitor_description),
            (false, true) => self.home_description.clone(),
            _ => self.visitor_description.clone(),
        }
    }
}

impl From<RawHistoricalRow> for HistoricalEvent {
    fn from(raw: RawHistoricalRow) -> Self {
        Self {
            period: raw.period.max(1),
            clock: raw.pc_time_string,
            player_id: PlayerId::new(raw.player1_id),
            event_type: EventMsgType::from(raw.event_msg_type),
            home_description: raw.home_description.unwrap_or_default(),
            visitor_description: raw.visitor_description.unwrap_or_default(),
        }
    }
}

/// A play-by-play record from either feed.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayEvent {
    Live(LiveEvent),
    Historical(HistoricalEvent),
}

impl PlayEvent {
    pub fn period(&self) -> u32 {
        match self {
            PlayEvent::Live(e) => e.period,
            PlayEvent::Historical(e) => e.period,
        }
    }

    pub fn clock(&self) -> &str {
        match self {
            PlayEvent::Live(e) => &e.clock,
            PlayEvent::Historical(e) => &e.clock,
        }
    }

    /// Subject of the action.
    pub fn player_id(&self) -> PlayerId {
        match self {
            PlayEvent::Live(e) => e.person_id,
            PlayEvent::Historical(e) => e.player_id,
        }
    }

    pub fn description(&self) -> String {
        match self {
            PlayEvent::Live(e) => e.description.clone(),
            PlayEvent::Historical(e) => e.description(),
        }
    }
}

// ---------------------------------------------------------------------------
// stats.nba.com result sets
// ---------------------------------------------------------------------------

/// Envelope shared by the stats endpoints. Older endpoints use the singular
/// `resultSet` key.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets", alias = "resultSet")]
    pub result_sets: ResultSets,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ResultSets {
    Many(Vec<ResultSet>),
    One(ResultSet),
}

impl StatsResponse {
    /// Find a result set by name, falling back to the first one.
    pub fn result_set(&self, name: &str) -> Result<&ResultSet, FetchError> {
        let sets: &[ResultSet] = match &self.result_sets {
            ResultSets::Many(sets) => sets,
            ResultSets::One(set) => std::slice::from_ref(set),
        };
        sets.iter()
            .find(|s| s.name == name)
            .or_else(|| sets.first())
            .ok_or_else(|| FetchError::MissingResultSet {
                name: name.to_string(),
            })
    }
}

/// Tabular block: column headers plus rows of positional values.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Deserialize every row by pairing its values with the headers.
    pub fn rows<T: DeserializeOwned>(&self) -> Result<Vec<T>, FetchError> {
        self.row_set
            .iter()
            .map(|row| {
                let obj: Map<String, Value> = self
                    .headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect();
                serde_json::from_value(Value::Object(obj)).map_err(FetchError::from)
            })
            .collect()
    }
}

/// One row of `playergamelog`; the first row is the most recent game.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameLogRow {
    #[serde(rename = "Game_ID", alias = "GAME_ID")]
    pub game_id: GameId,
    #[serde(rename = "GAME_DATE", default, deserialize_with = "de_null_default")]
    pub game_date: String,
    #[serde(rename = "MATCHUP", default, deserialize_with = "de_null_default")]
    pub matchup: String,
    #[serde(rename = "WL", default, deserialize_with = "de_null_default")]
    pub wl: String,
    #[serde(rename = "MIN", default, deserialize_with = "de_string_or_number")]
    pub minutes: String,
    #[serde(rename = "PTS", default, deserialize_with = "de_null_default")]
    pub points: u32,
    #[serde(rename = "REB", default, deserialize_with = "de_null_default")]
    pub rebounds: u32,
    #[serde(rename = "AST", default, deserialize_with = "de_null_default")]
    pub assists: u32,
    #[serde(rename = "STL", default, deserialize_with = "de_null_default")]
    pub steals: u32,
    #[serde(rename = "BLK", default, deserialize_with = "de_null_default")]
    pub blocks: u32,
}

/// One row of `commonallplayers`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerIndexRow {
    #[serde(rename = "PERSON_ID")]
    pub person_id: PlayerId,
    #[serde(rename = "DISPLAY_FIRST_LAST", default, deserialize_with = "de_null_default")]
    pub display_first_last: String,
    #[serde(rename = "ROSTERSTATUS", default, deserialize_with = "de_roster_status")]
    pub is_active: bool,
}

/// `ROSTERSTATUS` is `1`/`0` in some seasons and `"Active"`/`null` in others.
fn de_roster_status<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        Some(Value::String(s)) => s.eq_ignore_ascii_case("active") || s == "1",
        Some(Value::Bool(b)) => b,
        _ => false,
    })
}
