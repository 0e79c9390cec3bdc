//! End-to-end API tests against a throwaway PostgreSQL container.
//!
//! Run with `cargo test -- --ignored` on a machine with Docker.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::{Value, json};
use sqlx::PgPool;
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;
use tower::ServiceExt;

use heatboard::{
    build_router,
    config::{AllocationConfig, Config, DatabaseConfig, ServerConfig},
    state::AppState,
};

static POSTGRES: OnceCell<ContainerAsync<Postgres>> = OnceCell::const_new();

/// Start PostgreSQL once per test binary; `NULLS NOT DISTINCT` needs 15+
async fn postgres_url() -> String {
    let container = POSTGRES
        .get_or_init(|| async {
            Postgres::default()
                .with_user("heatboard")
                .with_password("heatboard_test")
                .with_db_name("heatboard_test")
                .with_tag("16-alpine")
                .start()
                .await
                .expect("Failed to start PostgreSQL container")
        })
        .await;

    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();
    format!("postgres://heatboard:heatboard_test@{host}:{port}/heatboard_test")
}

async fn test_app() -> Router {
    let url = postgres_url().await;
    let pool = PgPool::connect(&url)
        .await
        .expect("Failed to connect to test database");
    heatboard::db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "warn".to_string(),
            json_logs: false,
            request_timeout_seconds: 30,
            max_body_bytes: 1024 * 1024,
        },
        database: DatabaseConfig {
            url,
            max_connections: 5,
        },
        allocation: AllocationConfig::default(),
    };

    build_router(AppState::new(pool, config))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())).unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1_000_000)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Competition with one category holding `participants` dancers and a final round
struct Fixture {
    competition_id: i64,
    category_id: i64,
    round_id: i64,
    criterion_id: i64,
    participant_ids: Vec<i64>,
}

async fn fixture(app: &Router, participants: usize) -> Fixture {
    fixture_with_criteria(app, participants, json!(["Technique", "Artistry"])).await
}

async fn fixture_with_criteria(app: &Router, participants: usize, criteria: Value) -> Fixture {
    let (status, competition) = send(
        app,
        Method::POST,
        "/api/v1/competitions",
        Some(json!({"title": "Spring Cup", "date": "2026-04-18", "location": "Kazan"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let competition_id = competition["id"].as_i64().unwrap();

    let (status, category) = send(
        app,
        Method::POST,
        &format!("/api/v1/competitions/{competition_id}/categories"),
        Some(json!({"name": "Latin Juniors", "type": "amateur", "criteria": criteria})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let category_id = category["id"].as_i64().unwrap();
    let criterion_id = category["criteria"][0]["id"].as_i64().unwrap();

    let mut participant_ids = Vec::with_capacity(participants);
    for n in 0..participants {
        participant_ids.push(
            register(app, competition_id, category_id, &format!("Dancer Number{n}")).await,
        );
    }

    let (status, round) = send(
        app,
        Method::POST,
        "/api/v1/rounds",
        Some(json!({"event_id": competition_id, "category_id": category_id, "round_type": "final"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    Fixture {
        competition_id,
        category_id,
        round_id: round["id"].as_i64().unwrap(),
        criterion_id,
        participant_ids,
    }
}

async fn register(app: &Router, competition_id: i64, category_id: i64, full_name: &str) -> i64 {
    let (status, participant) = send(
        app,
        Method::POST,
        &format!("/api/v1/competitions/{competition_id}/participants"),
        Some(json!({"full_name": full_name, "category_id": category_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    participant["id"].as_i64().unwrap()
}

async fn add_category(app: &Router, competition_id: i64, name: &str) -> i64 {
    let (status, category) = send(
        app,
        Method::POST,
        &format!("/api/v1/competitions/{competition_id}/categories"),
        Some(json!({"name": name, "type": "pro", "criteria": ["Technique"]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    category["id"].as_i64().unwrap()
}

async fn submit(app: &Router, score: Value) -> (StatusCode, Value) {
    send(app, Method::POST, "/api/v1/scores", Some(score)).await
}

async fn distribute(app: &Router, round_id: i64, max_in_heat: i64) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        &format!("/api/v1/rounds/{round_id}/distribute"),
        Some(json!({"max_in_heat": max_in_heat})),
    )
    .await
}

async fn judge(app: &Router) -> i64 {
    let (status, user) = send(
        app,
        Method::POST,
        "/api/v1/users",
        Some(json!({"first_name": "Irina", "last_name": "Volkova", "role": "judge"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    user["id"].as_i64().unwrap()
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_distribute_ten_into_heats_of_four() {
    let app = test_app().await;
    let fx = fixture(&app, 10).await;

    let (status, body) = distribute(&app, fx.round_id, 4).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["heats_created"], 3);
    assert_eq!(body["heats_replaced"], 0);

    let sizes: Vec<usize> = body["heats"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["participants"].as_array().unwrap().len())
        .collect();
    assert_eq!(sizes, vec![4, 4, 2]);
    let numbers: Vec<i64> = body["heats"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["heat_number"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    // Redistribution fully replaces the previous set
    let (status, body) = distribute(&app, fx.round_id, 5).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["heats_created"], 2);
    assert_eq!(body["heats_replaced"], 3);

    let (_, heats) = send(
        &app,
        Method::GET,
        &format!("/api/v1/rounds/{}/heats", fx.round_id),
        None,
    )
    .await;
    assert_eq!(heats.as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_distribute_edge_cases() {
    let app = test_app().await;
    let fx = fixture(&app, 0).await;

    let (status, body) = distribute(&app, fx.round_id, 4).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["heats_created"], 0);

    let (status, body) = distribute(&app, fx.round_id, 0).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = distribute(&app, i64::MAX, 4).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_score_upsert_is_last_write_wins() {
    let app = test_app().await;
    let fx = fixture(&app, 2).await;
    let judge_id = judge(&app).await;

    let (_, body) = distribute(&app, fx.round_id, 2).await;
    let heat = &body["heats"][0];
    let heat_id = heat["id"].as_i64().unwrap();
    let participant_id = heat["participants"][0]["participant_id"].as_i64().unwrap();

    let score = |value: f64| {
        json!({
            "participant_id": participant_id,
            "judge_id": judge_id,
            "round_id": fx.round_id,
            "heat_id": heat_id,
            "criterion_id": fx.criterion_id,
            "score": value,
        })
    };

    let (status, first) = send(&app, Method::POST, "/api/v1/scores", Some(score(8.5))).await;
    assert_eq!(status, StatusCode::OK);
    let (status, second) = send(&app, Method::POST, "/api/v1/scores", Some(score(9.0))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["id"], second["id"]);
    assert_eq!(second["score"], 9.0);

    let (_, scores) = send(
        &app,
        Method::GET,
        &format!("/api/v1/scores/heats/{heat_id}"),
        None,
    )
    .await;
    assert_eq!(scores.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::POST, "/api/v1/scores", Some(score(10.5))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_finished_heat_is_locked_but_accepts_corrections() {
    let app = test_app().await;
    let fx = fixture(&app, 4).await;
    let judge_id = judge(&app).await;

    let (_, body) = distribute(&app, fx.round_id, 2).await;
    let heat_id = body["heats"][0]["id"].as_i64().unwrap();
    let member_id = body["heats"][0]["participants"][0]["participant_id"]
        .as_i64()
        .unwrap();

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/v1/heats/{heat_id}/status"),
        Some(json!({"status": "finished"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["previous_status"], "waiting");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/rounds/{}/heats/{heat_id}", fx.round_id),
        Some(json!({"participant_ids": [member_id]})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "HEAT_LOCKED");

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/rounds/{}/heats/{heat_id}", fx.round_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Corrections after finish are accepted by policy
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/scores",
        Some(json!({
            "participant_id": member_id,
            "judge_id": judge_id,
            "round_id": fx.round_id,
            "heat_id": heat_id,
            "criterion_id": fx.criterion_id,
            "score": 7.0,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, results) = send(
        &app,
        Method::GET,
        &format!("/api/v1/heats/{heat_id}/results"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results["results"][0]["participant_id"], member_id);
    assert_eq!(results["results"][0]["placement"], 1);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_status_cannot_regress() {
    let app = test_app().await;
    let fx = fixture(&app, 1).await;

    let (_, body) = distribute(&app, fx.round_id, 4).await;
    let heat_id = body["heats"][0]["id"].as_i64().unwrap();
    let uri = format!("/api/v1/heats/{heat_id}/status");

    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({"status": "waiting"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["changed"], false);

    let (status, _) = send(&app, Method::PATCH, &uri, Some(json!({"status": "finished"}))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({"status": "waiting"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "INVALID_STATUS_TRANSITION");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_manual_heat_composition() {
    let app = test_app().await;
    let fx = fixture(&app, 3).await;
    let (_, body) = distribute(&app, fx.round_id, 2).await;
    let first_heat = &body["heats"][0];
    let taken = first_heat["participants"][0]["participant_id"]
        .as_i64()
        .unwrap();
    let free = body["heats"][1]["participants"][0]["participant_id"]
        .as_i64()
        .unwrap();
    let heats_uri = format!("/api/v1/rounds/{}/heats", fx.round_id);

    let (status, body) = send(
        &app,
        Method::POST,
        &heats_uri,
        Some(json!({"participant_ids": []})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    // Already seated in heat 1
    let (status, body) = send(
        &app,
        Method::POST,
        &heats_uri,
        Some(json!({"participant_ids": [taken]})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");

    let heat_two = heat_id_by_number(&app, &heats_uri, 2).await;
    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("{heats_uri}/{heat_two}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        &app,
        Method::POST,
        &heats_uri,
        Some(json!({"participant_ids": [free, free]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["heat_number"], 2);
    assert_eq!(body["participants"].as_array().unwrap().len(), 1);
}

async fn heat_id_by_number(app: &Router, heats_uri: &str, heat_number: i64) -> i64 {
    let (_, heats) = send(app, Method::GET, heats_uri, None).await;
    heats
        .as_array()
        .unwrap()
        .iter()
        .find(|h| h["heat_number"] == heat_number)
        .and_then(|h| h["id"].as_i64())
        .unwrap()
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_health_reports_database() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "up");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_distribute_heat_larger_than_roster() {
    let app = test_app().await;
    let fx = fixture(&app, 10).await;

    let (status, body) = distribute(&app, fx.round_id, 100).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["heats_created"], 1);

    let members: Vec<i64> = body["heats"][0]["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["participant_id"].as_i64().unwrap())
        .collect();
    assert_eq!(members, fx.participant_ids);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_score_against_replaced_heat_is_rejected() {
    let app = test_app().await;
    let fx = fixture(&app, 2).await;
    let judge_id = judge(&app).await;
    let participant_id = fx.participant_ids[0];

    let (_, body) = distribute(&app, fx.round_id, 2).await;
    let old_heat = body["heats"][0]["id"].as_i64().unwrap();
    let (status, _) = distribute(&app, fx.round_id, 1).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = submit(
        &app,
        json!({
            "participant_id": participant_id,
            "judge_id": judge_id,
            "round_id": fx.round_id,
            "heat_id": old_heat,
            "criterion_id": fx.criterion_id,
            "score": 6.0,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (_, stats) = send(
        &app,
        Method::GET,
        &format!("/api/v1/participants/{participant_id}/stats"),
        None,
    )
    .await;
    assert!(stats["scores"].as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_score_unknown_references_are_not_found() {
    let app = test_app().await;
    let fx = fixture(&app, 1).await;
    let judge_id = judge(&app).await;
    let score = json!({
        "participant_id": fx.participant_ids[0],
        "judge_id": judge_id,
        "round_id": fx.round_id,
        "criterion_id": fx.criterion_id,
        "score": 5.0,
    });

    let cases = [
        ("judge_id", json!(i64::MAX)),
        ("criterion_id", json!(i64::MAX)),
        ("heat_id", json!(i64::MAX)),
        ("round_id", json!(i64::MAX)),
        ("participant_id", json!(i64::MAX)),
    ];
    for (field, value) in cases {
        let mut body = score.clone();
        body[field] = value;
        let (status, body) = submit(&app, body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "unknown {field}");
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    let (status, _) = submit(&app, score).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_score_scale_lower_bound() {
    let app = test_app().await;
    let fx = fixture_with_criteria(
        &app,
        1,
        json!([{"name": "Musicality", "scale_min": 1, "scale_max": 6}]),
    )
    .await;
    let judge_id = judge(&app).await;
    let score = |value: f64| {
        json!({
            "participant_id": fx.participant_ids[0],
            "judge_id": judge_id,
            "round_id": fx.round_id,
            "criterion_id": fx.criterion_id,
            "score": value,
        })
    };

    let (status, body) = submit(&app, score(0.5)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) = submit(&app, score(1.0)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 1.0);

    let (status, _) = submit(&app, score(6.5)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Without a criterion only negative values are refused
    let mut unscaled = score(-0.5);
    unscaled["criterion_id"] = Value::Null;
    let (status, _) = submit(&app, unscaled.clone()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    unscaled["score"] = json!(0.0);
    let (status, _) = submit(&app, unscaled).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_participant_stats() {
    let app = test_app().await;
    let fx = fixture(&app, 2).await;
    let judge_id = judge(&app).await;
    let participant_id = fx.participant_ids[0];
    let stats_uri = format!("/api/v1/participants/{participant_id}/stats");

    let (status, stats) = send(&app, Method::GET, &stats_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["id"], participant_id);
    assert_eq!(stats["category_name"], "Latin Juniors");
    assert_eq!(stats["event_title"], "Spring Cup");
    assert!(stats["heats"].as_array().unwrap().is_empty());
    assert!(stats["scores"].as_array().unwrap().is_empty());

    let (_, body) = distribute(&app, fx.round_id, 2).await;
    let heat_id = body["heats"][0]["id"].as_i64().unwrap();
    let (status, _) = submit(
        &app,
        json!({
            "participant_id": participant_id,
            "judge_id": judge_id,
            "round_id": fx.round_id,
            "heat_id": heat_id,
            "criterion_id": fx.criterion_id,
            "score": 8.0,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, stats) = send(&app, Method::GET, &stats_uri, None).await;
    assert_eq!(stats["heats"][0]["id"], heat_id);
    assert_eq!(stats["heats"][0]["round_type"], "final");
    assert_eq!(stats["scores"][0]["heat_id"], heat_id);
    assert_eq!(stats["scores"][0]["criterion_name"], "Technique");
    assert_eq!(stats["scores"][0]["judge_name"], "Irina Volkova");
    assert_eq!(stats["scores"][0]["orphaned"], false);

    // Redistribution drops the heat but keeps the score
    let (status, _) = distribute(&app, fx.round_id, 1).await;
    assert_eq!(status, StatusCode::OK);
    let (_, stats) = send(&app, Method::GET, &stats_uri, None).await;
    assert_eq!(stats["heats"].as_array().unwrap().len(), 1);
    assert_ne!(stats["heats"][0]["id"], heat_id);
    assert_eq!(stats["scores"].as_array().unwrap().len(), 1);
    assert_eq!(stats["scores"][0]["heat_id"], heat_id);
    assert_eq!(stats["scores"][0]["orphaned"], true);

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/v1/participants/{}/stats", i64::MAX),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_update_manual_heat_replaces_members() {
    let app = test_app().await;
    let fx = fixture(&app, 3).await;
    let heats_uri = format!("/api/v1/rounds/{}/heats", fx.round_id);
    let [first, second, third] = fx.participant_ids[..] else {
        panic!("fixture registers three participants");
    };

    let (_, body) = distribute(&app, fx.round_id, 2).await;
    let heat_one = body["heats"][0]["id"].as_i64().unwrap();
    let heat_two = body["heats"][1]["id"].as_i64().unwrap();

    // `third` still sits in heat 2
    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("{heats_uri}/{heat_one}"),
        Some(json!({"participant_ids": [first, third]})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("{heats_uri}/{heat_one}"),
        Some(json!({"participant_ids": [first]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], heat_one);
    assert_eq!(body["heat_number"], 1);
    assert_eq!(body["participants"].as_array().unwrap().len(), 1);
    assert_eq!(body["participants"][0]["participant_id"], first);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("{heats_uri}/{heat_two}"),
        Some(json!({"participant_ids": [third, second]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let members: Vec<i64> = body["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["participant_id"].as_i64().unwrap())
        .collect();
    assert_eq!(members.len(), 2);
    assert!(members.contains(&second) && members.contains(&third));

    let (_, heats) = send(&app, Method::GET, &heats_uri, None).await;
    let sizes: Vec<usize> = heats
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["participants"].as_array().unwrap().len())
        .collect();
    assert_eq!(sizes, vec![1, 2]);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_manual_heat_rejects_other_category() {
    let app = test_app().await;
    let fx = fixture(&app, 1).await;
    let other_category = add_category(&app, fx.competition_id, "Standard Adults").await;
    let outsider = register(&app, fx.competition_id, other_category, "Outside Dancer").await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/v1/rounds/{}/heats", fx.round_id),
        Some(json!({"participant_ids": [fx.participant_ids[0], outsider]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (_, heats) = send(
        &app,
        Method::GET,
        &format!("/api/v1/rounds/{}/heats", fx.round_id),
        None,
    )
    .await;
    assert!(heats.as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_category_change_refused_while_in_heats() {
    let app = test_app().await;
    let fx = fixture(&app, 1).await;
    let participant_id = fx.participant_ids[0];
    let other_category = add_category(&app, fx.competition_id, "Standard Adults").await;
    let participant_uri = format!(
        "/api/v1/competitions/{}/participants/{participant_id}",
        fx.competition_id
    );

    let (_, body) = distribute(&app, fx.round_id, 4).await;
    let heat_id = body["heats"][0]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::PATCH,
        &participant_uri,
        Some(json!({"category_id": other_category})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");

    // Other fields stay editable, and re-stating the current category is no change
    let (status, body) = send(
        &app,
        Method::PATCH,
        &participant_uri,
        Some(json!({"number": 17, "category_id": fx.category_id})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number"], 17);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/rounds/{}/heats/{heat_id}", fx.round_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        &app,
        Method::PATCH,
        &participant_uri,
        Some(json!({"category_id": other_category})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category_id"], other_category);
}
