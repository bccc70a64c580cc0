//! Unit tests for the upstream client, against a mock server

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> NbaClient {
    NbaClient::with_base_urls(Duration::from_secs(5), server.uri(), server.uri()).unwrap()
}

#[cfg(test)]
mod live_endpoint_tests {
    use super::*;

    #[tokio::test]
    async fn test_scoreboard_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/scoreboard/todaysScoreboard_00.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "scoreboard": {
                    "gameDate": "2025-11-02",
                    "games": [
                        {"gameId": "0022500120", "gameStatus": 2, "gameStatusText": "Q2 3:01"},
                        {"gameId": "0022500121", "gameStatus": 1, "gameStatusText": "7:30 pm ET"}
                    ]
                }
            })))
            .mount(&mock_server)
            .await;

        let games = client_for(&mock_server).scoreboard().await.unwrap();

        assert_eq!(games.len(), 2);
        assert!(games[0].is_live());
        assert!(!games[1].is_live());
    }

    #[tokio::test]
    async fn test_boxscore_path_uses_game_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/boxscore/boxscore_0022500120.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "game": {
                    "gameId": "0022500120",
                    "gameStatusText": "Half",
                    "homeTeam": {"teamName": "Lakers", "score": 55, "players": []},
                    "awayTeam": {
                        "teamName": "Trail Blazers",
                        "score": 51,
                        "players": [
                            {"personId": 1630166, "name": "Deni Avdija", "statistics": {"points": 9}}
                        ]
                    }
                }
            })))
            .mount(&mock_server)
            .await;

        let game_id: GameId = "0022500120".parse().unwrap();
        let game = client_for(&mock_server).boxscore(&game_id).await.unwrap();

        assert_eq!(game.game_status_text, "Half");
        let player = game.find_player(PlayerId::new(1630166)).unwrap();
        assert_eq!(player.statistics.points, 9);
    }

    #[tokio::test]
    async fn test_live_play_by_play_actions() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playbyplay/playbyplay_0022500120.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "game": {
                    "gameId": "0022500120",
                    "actions": [
                        {
                            "period": 1,
                            "clock": "PT10M30.00S",
                            "personId": 1630166,
                            "description": "D. Avdija 3' Layup (2 PTS)",
                            "shotResult": "Made"
                        }
                    ]
                }
            })))
            .mount(&mock_server)
            .await;

        let game_id: GameId = "0022500120".parse().unwrap();
        let actions = client_for(&mock_server)
            .live_play_by_play(&game_id)
            .await
            .unwrap();

        assert_eq!(actions.len(), 1);
        assert!(actions[0].is_scoring_play);
        assert_eq!(actions[0].clock, "PT10M30.00S");
    }

    #[tokio::test]
    async fn test_missing_feed_is_status_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playbyplay/playbyplay_0022500999.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let game_id: GameId = "0022500999".parse().unwrap();
        let result = client_for(&mock_server).live_play_by_play(&game_id).await;

        match result {
            Err(FetchError::Status { status, url }) => {
                assert_eq!(status, 404);
                assert!(url.contains("playbyplay_0022500999.json"));
            }
            other => panic!("Expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/scoreboard/todaysScoreboard_00.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).scoreboard().await;
        assert!(matches!(result, Err(FetchError::Json(_))));
    }

    #[tokio::test]
    async fn test_slow_response_is_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/scoreboard/todaysScoreboard_00.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"scoreboard": {"games": []}}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let client = NbaClient::with_base_urls(
            Duration::from_millis(50),
            mock_server.uri(),
            mock_server.uri(),
        )
        .unwrap();

        let result = client.scoreboard().await;
        assert!(matches!(result, Err(FetchError::Timeout { .. })));
    }
}

#[cfg(test)]
mod stats_endpoint_tests {
    use super::*;
    use crate::nba::types::EventMsgType;

    #[tokio::test]
    async fn test_player_game_log_params_and_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playergamelog"))
            .and(query_param("PlayerID", "1630166"))
            .and(query_param("Season", "2025-26"))
            .and(query_param("SeasonType", "Regular Season"))
            .and(header("x-nba-stats-origin", "stats"))
            .and(header("referer", "https://www.nba.com/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resultSets": [{
                    "name": "PlayerGameLog",
                    "headers": ["Game_ID", "GAME_DATE", "MATCHUP", "WL", "MIN", "PTS", "REB", "AST", "STL", "BLK"],
                    "rowSet": [
                        ["0022500090", "OCT 28, 2025", "POR vs. GSW", "W", 34, 22, 8, 5, 2, 1],
                        ["0022500071", "OCT 26, 2025", "POR @ LAC", "L", 31, 13, 6, 3, 0, 0]
                    ]
                }]
            })))
            .mount(&mock_server)
            .await;

        let rows = client_for(&mock_server)
            .player_game_log(PlayerId::new(1630166), Season::new(2025))
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].game_id.as_str(), "0022500090");
        assert_eq!(rows[0].points, 22);
    }

    #[tokio::test]
    async fn test_historical_play_by_play_params() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playbyplayv2"))
            .and(query_param("GameID", "0022500090"))
            .and(query_param("StartPeriod", "0"))
            .and(query_param("EndPeriod", "14"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resultSets": [{
                    "name": "PlayByPlay",
                    "headers": ["EVENTMSGTYPE", "PERIOD", "PCTIMESTRING", "HOMEDESCRIPTION", "VISITORDESCRIPTION", "PLAYER1_ID"],
                    "rowSet": [
                        [1, 2, "6:00", null, "Avdija 25' 3PT Jump Shot (3 PTS)", 1630166]
                    ]
                }]
            })))
            .mount(&mock_server)
            .await;

        let game_id: GameId = "0022500090".parse().unwrap();
        let events = client_for(&mock_server)
            .historical_play_by_play(&game_id)
            .await
            .unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, EventMsgType::FieldGoalMade);
        assert_eq!(events[0].period, 2);
    }

    #[tokio::test]
    async fn test_all_players_params() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/commonallplayers"))
            .and(query_param("LeagueID", "00"))
            .and(query_param("Season", "2025-26"))
            .and(query_param("IsOnlyCurrentSeason", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resultSets": [{
                    "name": "CommonAllPlayers",
                    "headers": ["PERSON_ID", "DISPLAY_FIRST_LAST", "ROSTERSTATUS"],
                    "rowSet": [[1630166, "Deni Avdija", 1]]
                }]
            })))
            .mount(&mock_server)
            .await;

        let rows = client_for(&mock_server)
            .all_players(Season::new(2025))
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].display_first_last, "Deni Avdija");
        assert!(rows[0].is_active);
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_is_trimmed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/commonallplayers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resultSet": {"name": "CommonAllPlayers", "headers": ["PERSON_ID"], "rowSet": []}
            })))
            .mount(&mock_server)
            .await;

        let base = format!("{}/", mock_server.uri());
        let client = NbaClient::with_base_urls(Duration::from_secs(5), base.clone(), base).unwrap();

        let rows = client.all_players(Season::new(2025)).await.unwrap();
        assert!(rows.is_empty());
    }
}

#[cfg(test)]
mod source_chain_tests {
    use super::*;
    use crate::{
        core::PlayerIdentity,
        nba::{sources::scoring_timeline, timeline::TimelineSample},
    };

    fn deni() -> PlayerIdentity {
        PlayerIdentity {
            id: PlayerId::new(1630166),
            full_name: "Deni Avdija".to_string(),
        }
    }

    async fn mount_historical(server: &MockServer, rows: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/playbyplayv2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resultSets": [{
                    "name": "PlayByPlay",
                    "headers": ["EVENTMSGTYPE", "PERIOD", "PCTIMESTRING", "HOMEDESCRIPTION", "VISITORDESCRIPTION", "PLAYER1_ID"],
                    "rowSet": rows
                }]
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_completed_game_uses_historical_first() {
        let mock_server = MockServer::start().await;
        mount_historical(
            &mock_server,
            json!([
                [1, 1, "10:30", "Avdija 2' Layup (2 PTS)", null, 1630166],
                [3, 1, "5:00", "MISS Avdija Free Throw 1 of 2", null, 1630166],
                [3, 1, "5:00", "Avdija Free Throw 2 of 2 (3 PTS)", null, 1630166],
                [1, 2, "11:00", "Avdija 27' 3PT Jump Shot (6 PTS)", null, 1630166]
            ]),
        )
        .await;

        let game_id: GameId = "0022500090".parse().unwrap();
        let timeline = scoring_timeline(&client_for(&mock_server), &game_id, &deni(), false).await;

        assert_eq!(
            timeline,
            vec![
                TimelineSample::ORIGIN,
                TimelineSample { minute: 1.5, cumulative_points: 2 },
                TimelineSample { minute: 7.0, cumulative_points: 3 },
                TimelineSample { minute: 13.0, cumulative_points: 6 },
            ]
        );
    }

    #[tokio::test]
    async fn test_live_game_falls_back_to_historical() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playbyplay/playbyplay_0022500120.json"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;
        mount_historical(
            &mock_server,
            json!([[1, 1, "6:00", "Avdija 1' Dunk (2 PTS)", null, 1630166]]),
        )
        .await;

        let game_id: GameId = "0022500120".parse().unwrap();
        let timeline = scoring_timeline(&client_for(&mock_server), &game_id, &deni(), true).await;

        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[1], TimelineSample { minute: 6.0, cumulative_points: 2 });
    }

    #[tokio::test]
    async fn test_surname_pass_recovers_unmatched_ids() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playbyplay/playbyplay_0022500090.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"game": {"actions": []}})))
            .mount(&mock_server)
            .await;
        mount_historical(
            &mock_server,
            json!([[1, 3, "12:00", null, "AVDIJA 24' 3PT Jump Shot (3 PTS)", 0]]),
        )
        .await;

        let game_id: GameId = "0022500090".parse().unwrap();
        let timeline = scoring_timeline(&client_for(&mock_server), &game_id, &deni(), false).await;

        assert_eq!(
            timeline,
            vec![
                TimelineSample::ORIGIN,
                TimelineSample { minute: 24.0, cumulative_points: 3 },
            ]
        );
    }

    #[tokio::test]
    async fn test_every_source_failing_yields_origin_only() {
        let mock_server = MockServer::start().await;

        let game_id: GameId = "0022500090".parse().unwrap();
        let timeline = scoring_timeline(&client_for(&mock_server), &game_id, &deni(), true).await;

        assert_eq!(timeline, vec![TimelineSample::ORIGIN]);
    }
}
