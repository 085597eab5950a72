//! Every resource facade hits the right endpoint with the right body.

use debate_platform_client::{ApiClient, ClientConfig, Session};
use debate_platform_core::{
    DebateId, DebateStatus, NewDebate, RoundId, RoundStatus, RoundSubmission, RoundWinner, Side,
    TopicApplication, TopicId, TopicStatus, UserId,
};
use debate_platform_integration_tests::{StubServer, user_json};
use serde_json::{Map, json};

fn topic_json(topic_id: i32, status: &str) -> serde_json::Value {
    json!({
        "topic_id": topic_id,
        "title": "AI should be regulated",
        "description": "Discuss",
        "side_pros": "Yes",
        "side_cons": "No",
        "rules": "{}",
        "status": status,
        "created_by": 1,
        "creator_nickname": "alice",
        "created_at": "2024-10-01T12:00:00",
        "updated_at": null
    })
}

fn debate_json(debate_id: i32) -> serde_json::Value {
    json!({
        "debate_id": debate_id,
        "topic_id": 1,
        "pros_user_id": 1,
        "cons_user_id": 2,
        "status": "ONGOING",
        "round_count": 1,
        "winner_id": null,
        "topic_title": "AI should be regulated",
        "pros_nickname": "alice",
        "cons_nickname": "bob",
        "created_at": "Tue, 01 Oct 2024 12:00:00 GMT"
    })
}

fn message(text: &str) -> serde_json::Value {
    json!({ "message": text })
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_users_endpoints() {
    let server = StubServer::start().await;
    server.respond("GET", "/api/users/me", 200, user_json(1, "alice", false));
    server.respond("GET", "/api/users/2", 200, user_json(2, "bob", false));
    server.respond(
        "GET",
        "/api/users/2/matches",
        200,
        json!({ "matches": [{
            "debate_id": 5, "user_id": 2, "result": "win",
            "rating_before": 1500, "rating_after": 1516,
            "topic_id": 1, "topic_title": "t", "opponent_id": 1,
            "opponent_nickname": "alice", "created_at": null
        }] }),
    );

    let session = Session::in_memory();
    let client = server.client(session.clone());

    let me = client.users().me().await.unwrap();
    assert_eq!(me.nickname, "alice");
    assert_eq!(session.current_user().unwrap(), None);

    let bob = client.users().get(UserId::new(2)).await.unwrap();
    assert_eq!(bob.user_id, UserId::new(2));

    let matches = client.users().matches(UserId::new(2)).await.unwrap();
    assert_eq!(matches.matches.len(), 1);
    assert_eq!(matches.matches[0].rating_after, Some(1516));

    let paths: Vec<_> = server.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, ["/api/users/me", "/api/users/2", "/api/users/2/matches"]);
}

// ============================================================================
// Topics
// ============================================================================

#[tokio::test]
async fn test_topic_list_default_filter() {
    let server = StubServer::start().await;
    server.respond(
        "GET",
        "/api/topics",
        200,
        json!({ "topics": [topic_json(1, "approved")] }),
    );

    let client = server.client(Session::in_memory());
    let topics = client.topics().list(None).await.unwrap();
    assert_eq!(topics.topics.len(), 1);
    assert_eq!(topics.topics[0].status, TopicStatus::Approved);
    assert_eq!(server.last_request().unwrap().query.as_deref(), Some("status=approved"));

    client
        .topics()
        .list(Some(TopicStatus::Pending))
        .await
        .unwrap();
    assert_eq!(server.last_request().unwrap().query.as_deref(), Some("status=pending"));
}

#[tokio::test]
async fn test_topic_list_configured_default() {
    let server = StubServer::start().await;
    server.respond("GET", "/api/topics", 200, json!({ "topics": [] }));

    let config = ClientConfig {
        default_topic_status: TopicStatus::Rejected,
        ..server.config()
    };
    let client = ApiClient::new(config, Session::in_memory());
    client.topics().list(None).await.unwrap();
    assert_eq!(server.last_request().unwrap().query.as_deref(), Some("status=rejected"));
}

#[tokio::test]
async fn test_topic_get_and_apply() {
    let server = StubServer::start().await;
    server.respond("GET", "/api/topics/3", 200, topic_json(3, "approved"));
    server.respond(
        "POST",
        "/api/topics/apply",
        201,
        json!({ "message": "Topic application submitted", "topic_id": 4 }),
    );

    let session = Session::in_memory();
    session.set_token("t").unwrap();
    let client = server.client(session);

    let topic = client.topics().get(TopicId::new(3)).await.unwrap();
    assert_eq!(topic.title, "AI should be regulated");

    let mut rules = Map::new();
    rules.insert("rounds".to_string(), json!(3));
    let applied = client
        .topics()
        .apply(&TopicApplication {
            title: "Remote work".to_string(),
            description: "Is it better?".to_string(),
            side_pros: "Yes".to_string(),
            side_cons: "No".to_string(),
            rules,
        })
        .await
        .unwrap();
    assert_eq!(applied.topic_id, TopicId::new(4));

    let request = server.last_request().unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(request.header("authorization"), Some("Bearer t"));
    assert_eq!(
        request.json(),
        json!({
            "title": "Remote work",
            "description": "Is it better?",
            "side_pros": "Yes",
            "side_cons": "No",
            "rules": { "rounds": 3 }
        })
    );
}

// ============================================================================
// Debates
// ============================================================================

#[tokio::test]
async fn test_debate_list_default_filter() {
    let server = StubServer::start().await;
    server.respond(
        "GET",
        "/api/debates",
        200,
        json!({ "debates": [debate_json(1)] }),
    );

    let client = server.client(Session::in_memory());
    let debates = client.debates().list(None).await.unwrap();
    assert_eq!(debates.debates[0].status, DebateStatus::Ongoing);
    assert_eq!(server.last_request().unwrap().query.as_deref(), Some("status=ONGOING"));

    client
        .debates()
        .list(Some(DebateStatus::Finished))
        .await
        .unwrap();
    assert_eq!(server.last_request().unwrap().query.as_deref(), Some("status=FINISHED"));
}

#[tokio::test]
async fn test_debate_detail_with_rounds() {
    let server = StubServer::start().await;
    let mut detail = debate_json(7);
    detail["side_pros"] = json!("Yes");
    detail["pros_rating"] = json!(1510);
    detail["rounds"] = json!([{
        "round_id": 11,
        "debate_id": 7,
        "round_number": 1,
        "status": "WAIT_PROS_REPLY",
        "pros_statement": "Opening",
        "cons_questions": "[\"Why?\",\"How?\"]",
        "pros_questions": null,
        "winner_side": null
    }]);
    server.respond("GET", "/api/debates/7", 200, detail);

    let client = server.client(Session::in_memory());
    let debate = client.debates().get(DebateId::new(7)).await.unwrap();
    assert_eq!(debate.summary.debate_id, DebateId::new(7));
    assert_eq!(debate.pros_rating, Some(1510));
    assert_eq!(debate.rounds.len(), 1);
    assert_eq!(debate.rounds[0].status, RoundStatus::WaitProsReply);
    assert_eq!(
        debate.rounds[0].cons_questions.as_deref(),
        Some(&["Why?".to_string(), "How?".to_string()][..])
    );
}

#[tokio::test]
async fn test_debate_create() {
    let server = StubServer::start().await;
    server.respond(
        "POST",
        "/api/debates/create",
        201,
        json!({ "message": "Debate created", "debate_id": 8, "round_id": 20 }),
    );

    let client = server.client(Session::in_memory());
    let created = client
        .debates()
        .create(&NewDebate {
            topic_id: TopicId::new(1),
            pros_user_id: UserId::new(1),
            cons_user_id: UserId::new(2),
        })
        .await
        .unwrap();
    assert_eq!(created.round_id, RoundId::new(20));
    assert_eq!(
        server.last_request().unwrap().json(),
        json!({ "topic_id": 1, "pros_user_id": 1, "cons_user_id": 2 })
    );
}

#[tokio::test]
async fn test_created_ids_sent_as_decimal_strings() {
    let server = StubServer::start().await;
    server.respond(
        "POST",
        "/api/debates/create",
        201,
        json!({
            "message": "Debate created successfully",
            "debate_id": "8",
            "round_id": "20"
        }),
    );
    server.respond(
        "POST",
        "/api/topics/apply",
        201,
        json!({ "message": "Topic application submitted", "topic_id": "12" }),
    );

    let client = server.client(Session::in_memory());
    let created = client
        .debates()
        .create(&NewDebate {
            topic_id: TopicId::new(1),
            pros_user_id: UserId::new(1),
            cons_user_id: UserId::new(2),
        })
        .await
        .unwrap();
    assert_eq!(created.debate_id, DebateId::new(8));
    assert_eq!(created.round_id, RoundId::new(20));

    let applied = client
        .topics()
        .apply(&TopicApplication {
            title: "Remote work".to_string(),
            description: String::new(),
            side_pros: "Yes".to_string(),
            side_cons: "No".to_string(),
            rules: Map::new(),
        })
        .await
        .unwrap();
    assert_eq!(applied.topic_id, TopicId::new(12));
}

// ============================================================================
// Rounds
// ============================================================================

#[tokio::test]
async fn test_round_get() {
    let server = StubServer::start().await;
    server.respond(
        "GET",
        "/api/rounds/11",
        200,
        json!({
            "round_id": 11, "debate_id": 7, "round_number": 2,
            "status": "ROUND_RESULT", "cons_questions": ["Why?"],
            "winner_side": "draw"
        }),
    );

    let client = server.client(Session::in_memory());
    let round = client.rounds().get(RoundId::new(11)).await.unwrap();
    assert_eq!(round.round_number, 2);
    assert_eq!(round.winner_side, Some(RoundWinner::Draw));
}

#[tokio::test]
async fn test_round_submissions() {
    let server = StubServer::start().await;
    for step in [
        "pros_statement",
        "cons_questions",
        "pros_reply",
        "cons_statement",
        "pros_questions",
        "cons_reply",
    ] {
        server.respond("POST", &format!("/api/rounds/5/{step}"), 200, message("ok"));
    }

    let client = server.client(Session::in_memory());
    let rounds = client.rounds();
    let id = RoundId::new(5);
    let questions = vec!["Q1".to_string(), "Q2".to_string()];

    rounds.submit_pros_statement(id, "S1").await.unwrap();
    rounds
        .submit_cons_questions(id, questions.clone())
        .await
        .unwrap();
    rounds.submit_pros_reply(id, "R1").await.unwrap();
    rounds.submit_cons_statement(id, "S2").await.unwrap();
    rounds.submit_pros_questions(id, questions).await.unwrap();
    rounds
        .submit(id, &RoundSubmission::ConsReply("R2".to_string()))
        .await
        .unwrap();

    let sent: Vec<_> = server
        .requests()
        .into_iter()
        .map(|r| (r.path.clone(), r.json()))
        .collect();
    assert_eq!(
        sent,
        vec![
            ("/api/rounds/5/pros_statement".to_string(), json!({ "statement": "S1" })),
            ("/api/rounds/5/cons_questions".to_string(), json!({ "questions": ["Q1", "Q2"] })),
            ("/api/rounds/5/pros_reply".to_string(), json!({ "reply": "R1" })),
            ("/api/rounds/5/cons_statement".to_string(), json!({ "statement": "S2" })),
            ("/api/rounds/5/pros_questions".to_string(), json!({ "questions": ["Q1", "Q2"] })),
            ("/api/rounds/5/cons_reply".to_string(), json!({ "reply": "R2" })),
        ]
    );
}

#[tokio::test]
async fn test_out_of_turn_submission_surfaces_server_message() {
    let server = StubServer::start().await;
    server.respond(
        "POST",
        "/api/rounds/5/pros_reply",
        400,
        json!({ "error": "Invalid round status" }),
    );

    let client = server.client(Session::in_memory());
    let err = client
        .rounds()
        .submit_pros_reply(RoundId::new(5), "late")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid round status");
}

// ============================================================================
// Votes and ranking
// ============================================================================

#[tokio::test]
async fn test_votes() {
    let server = StubServer::start().await;
    server.respond(
        "POST",
        "/api/votes/9/vote",
        201,
        message("Vote submitted successfully"),
    );
    server.respond(
        "GET",
        "/api/votes/9/results",
        200,
        json!({
            "round_id": 9, "pros_votes": 3, "cons_votes": 1, "total_votes": 4,
            "pros_percentage": 75.0, "cons_percentage": 25.0, "winner_side": "pros"
        }),
    );
    server.respond(
        "POST",
        "/api/votes/9/close_voting",
        200,
        json!({ "message": "Voting closed", "winner_side": "pros", "debate_finished": false }),
    );

    let client = server.client(Session::in_memory());
    let votes = client.votes();

    votes.submit(RoundId::new(9), Side::Cons).await.unwrap();
    assert_eq!(server.last_request().unwrap().json(), json!({ "side_voted": "cons" }));

    let results = votes.results(RoundId::new(9)).await.unwrap();
    assert_eq!(results.winner_side, Some(RoundWinner::Pros));
    assert!((results.pros_percentage - 75.0).abs() < f64::EPSILON);

    let closed = votes.close_voting(RoundId::new(9)).await.unwrap();
    assert!(!closed.debate_finished);
    let request = server.last_request().unwrap();
    assert_eq!(request.method, "POST");
    assert!(request.header("content-type").is_none());
}

#[tokio::test]
async fn test_ranking() {
    let server = StubServer::start().await;
    server.respond(
        "GET",
        "/api/ranking",
        200,
        json!({ "ranking": [{
            "rank": 1, "user_id": 2, "nickname": "bob", "avatar": null,
            "rating": 1600, "wins": 4, "losses": 1, "draws": 0, "win_rate": 80.0
        }] }),
    );

    let client = server.client(Session::in_memory());
    let ranking = client.ranking().get().await.unwrap();
    assert_eq!(ranking.ranking[0].rank, 1);
    assert_eq!(ranking.ranking[0].nickname, "bob");
}

// ============================================================================
// Admin
// ============================================================================

#[tokio::test]
async fn test_admin_endpoints() {
    let server = StubServer::start().await;
    server.respond(
        "GET",
        "/api/admin/topics/pending",
        200,
        json!({ "topics": [topic_json(4, "pending")] }),
    );
    server.respond(
        "POST",
        "/api/admin/topics/4/approve",
        200,
        message("Topic approved"),
    );
    server.respond(
        "POST",
        "/api/admin/topics/4/reject",
        200,
        message("Topic rejected"),
    );
    server.respond(
        "POST",
        "/api/admin/debates/8/force_end",
        200,
        message("Debate force ended"),
    );
    server.respond(
        "POST",
        "/api/admin/users/3/set_admin",
        200,
        message("Admin status updated"),
    );
    server.respond(
        "POST",
        "/api/admin/judges/assign",
        201,
        message("Judge assigned"),
    );

    let session = Session::in_memory();
    session.set_token("admin-token").unwrap();
    let client = server.client(session);
    let admin = client.admin();

    let pending = admin.pending_topics().await.unwrap();
    assert_eq!(pending.topics[0].status, TopicStatus::Pending);

    admin.approve_topic(TopicId::new(4)).await.unwrap();
    let request = server.last_request().unwrap();
    assert!(request.body.is_empty());
    assert!(request.header("content-type").is_none());

    let rejected = admin.reject_topic(TopicId::new(4)).await.unwrap();
    assert_eq!(rejected.message, "Topic rejected");

    admin
        .force_end_debate(DebateId::new(8), None)
        .await
        .unwrap();
    assert_eq!(server.last_request().unwrap().json(), json!({ "winner_id": null }));
    admin
        .force_end_debate(DebateId::new(8), Some(UserId::new(2)))
        .await
        .unwrap();
    assert_eq!(server.last_request().unwrap().json(), json!({ "winner_id": 2 }));

    admin.set_admin(UserId::new(3), true).await.unwrap();
    assert_eq!(server.last_request().unwrap().json(), json!({ "is_admin": true }));

    admin
        .assign_judge(DebateId::new(8), UserId::new(5))
        .await
        .unwrap();
    assert_eq!(
        server.last_request().unwrap().json(),
        json!({ "debate_id": 8, "user_id": 5 })
    );

    assert!(
        server
            .requests()
            .iter()
            .all(|r| r.header("authorization") == Some("Bearer admin-token"))
    );
}

#[tokio::test]
async fn test_admin_forbidden() {
    let server = StubServer::start().await;
    server.respond(
        "POST",
        "/api/admin/topics/4/approve",
        403,
        json!({ "error": "Admin access required" }),
    );

    let client = server.client(Session::in_memory());
    let err = client
        .admin()
        .approve_topic(TopicId::new(4))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "Admin access required");
}
