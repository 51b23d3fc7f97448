//! StarCraft II profile, ladder and catalog accessors against a mock API host

#![allow(clippy::expect_used)]

use bnet_community::sc2::{RewardCategory, Sc2Ladder, Sc2Profile, Sc2Resources};
use bnet_community::{ClientConfig, Session};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session_for(server: &MockServer) -> Session {
    let config = ClientConfig::new("test-key", "ko_KR")
        .expect("Operation should succeed")
        .with_base_url(server.uri());
    Session::from_config(&config).expect("Operation should succeed")
}

async fn mount_json(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_empty_ladder_has_no_averages() {
    let server = MockServer::start().await;
    mount_json(&server, "/sc2/ladder/42", r#"{"ladderMembers":[]}"#).await;

    let session = session_for(&server);
    let mut ladder = Sc2Ladder::new(&session, 42);

    assert_eq!(
        ladder.average_win_rate().await.expect("Operation should succeed"),
        None
    );
    assert_eq!(
        ladder
            .average_highest_rank()
            .await
            .expect("Operation should succeed"),
        None
    );
    assert!(ladder
        .member_names()
        .await
        .expect("Operation should succeed")
        .is_empty());

    server.verify().await;
}

#[tokio::test]
async fn test_ladder_member_statistics() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/sc2/ladder/7",
        r#"{"ladderMembers":[
            {"character":{"displayName":"Maru"},"wins":3,"losses":1,"highestRank":1,"favoriteRaceP1":"TERRAN"},
            {"character":{"displayName":"Rogue"},"wins":1,"losses":1,"highestRank":2,"favoriteRaceP1":"ZERG"},
            {"character":{"displayName":"Newcomer"},"wins":0,"losses":0,"highestRank":6}
        ]}"#,
    )
    .await;

    let session = session_for(&server);
    let mut ladder = Sc2Ladder::new(&session, 7);

    assert_eq!(
        ladder
            .member_win_rates()
            .await
            .expect("Operation should succeed"),
        vec![
            ("Maru".to_string(), Some(75.0)),
            ("Rogue".to_string(), Some(50.0)),
            ("Newcomer".to_string(), None),
        ]
    );
    assert_eq!(
        ladder.average_win_rate().await.expect("Operation should succeed"),
        Some(62.5)
    );
    assert_eq!(
        ladder
            .average_highest_rank()
            .await
            .expect("Operation should succeed"),
        Some(3.0)
    );

    let rogue = ladder
        .member("Rogue")
        .await
        .expect("Operation should succeed")
        .expect("Member should exist");
    assert_eq!(rogue.favorite_race_p1.as_deref(), Some("ZERG"));
    assert!(ladder
        .member("rogue")
        .await
        .expect("Operation should succeed")
        .is_none());

    server.verify().await;
}

#[tokio::test]
async fn test_profile_win_rates_and_current_ladder() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/sc2/profile/123/1/Player/",
        r#"{"displayName":"Player","clanName":"Team","clanTag":"TM",
            "career":{"primaryRace":"PROTOSS","terranWins":0,"protossWins":30,"zergWins":0,"seasonTotalGames":40},
            "rewards":{"selected":[1],"earned":[1,2,3]},
            "achievements":{"points":{"totalPoints":1200,"categoryPoints":{"4325382":300,"4330138":900}},
                "achievements":[{"achievementId":91,"completionDate":1}]}}"#,
    )
    .await;
    mount_json(
        &server,
        "/sc2/profile/123/1/Player/ladders",
        r#"{"currentSeason":[],"previousSeason":[]}"#,
    )
    .await;
    mount_json(
        &server,
        "/sc2/profile/123/1/Player/matches",
        r#"{"matches":[
            {"map":"A","type":"SOLO","decision":"WIN"},
            {"map":"B","type":"SOLO","decision":"LOSS"},
            {"map":"C","type":"TWOS","decision":"WIN"},
            {"map":"D","type":"CUSTOM","decision":"WATCHER"}
        ]}"#,
    )
    .await;

    let session = session_for(&server);
    let mut profile = Sc2Profile::new(&session, 123, "Player");

    assert_eq!(
        profile.season_win_rate().await.expect("Operation should succeed"),
        Some(75.0)
    );
    assert_eq!(
        profile.clan_tag().await.expect("Operation should succeed"),
        "TM"
    );
    assert!(profile
        .has_earned_reward(2)
        .await
        .expect("Operation should succeed"));
    assert!(profile
        .has_earned_achievement(91)
        .await
        .expect("Operation should succeed"));
    assert_eq!(
        profile
            .total_achievement_points()
            .await
            .expect("Operation should succeed"),
        1200
    );
    let by_category = profile
        .achievement_points_by_category()
        .await
        .expect("Operation should succeed");
    assert_eq!(by_category.len(), 2);
    assert_eq!(by_category.get("4325382"), Some(&300));

    assert_eq!(
        profile
            .current_ladder_name()
            .await
            .expect("Operation should succeed"),
        None
    );
    assert_eq!(
        profile.current_league().await.expect("Operation should succeed"),
        None
    );

    assert_eq!(
        profile.games_played().await.expect("Operation should succeed"),
        4
    );
    assert_eq!(
        profile.total_win_rate().await.expect("Operation should succeed"),
        Some(50.0)
    );
    assert_eq!(
        profile.solo_win_rate().await.expect("Operation should succeed"),
        Some(50.0)
    );

    server.verify().await;
}

#[tokio::test]
async fn test_rewards_are_searched_across_categories() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/sc2/data/rewards",
        r#"{"portraits":[{"id":10,"title":"Raynor"}],
            "skins":[{"id":20,"title":"Blackstone","achievementId":5}],
            "animations":[]}"#,
    )
    .await;
    mount_json(
        &server,
        "/sc2/data/achievements",
        r#"{"achievements":[{"title":"Hot Shot","achievementId":5,"points":10}]}"#,
    )
    .await;

    let session = session_for(&server);
    let mut resources = Sc2Resources::new(&session);

    let skin = resources
        .reward_by_id(20)
        .await
        .expect("Operation should succeed")
        .expect("Reward should exist");
    assert_eq!(skin.title, "Blackstone");
    assert!(resources
        .reward_by_title("Missing")
        .await
        .expect("Operation should succeed")
        .is_none());
    assert_eq!(
        resources
            .reward_titles(RewardCategory::Portraits)
            .await
            .expect("Operation should succeed"),
        vec!["Raynor".to_string()]
    );
    assert!(resources
        .rewards(RewardCategory::ZergDecals)
        .await
        .expect("Operation should succeed")
        .is_empty());

    let ids = resources
        .achievement_ids_by_title()
        .await
        .expect("Operation should succeed");
    assert_eq!(ids.get("Hot Shot"), Some(&5));

    server.verify().await;
}
