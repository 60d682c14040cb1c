//! Whole-pipeline runs against a mock PokeAPI and an in-memory database.

use std::collections::HashMap;
use std::sync::Arc;

use pokepipe_api::{DefaultPokeApiClient, PokeApiConfig};
use pokepipe_cli::{CliContext, CliError, bootstrap_with};
use pokepipe_core::{PipelineSettings, TableCounts};
use pokepipe_db::TestDb;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> PipelineSettings {
    let env: HashMap<&str, String> = HashMap::from([
        ("POKEAPI_BASE", format!("{}/api/v2", server.uri())),
        ("MAX_RETRIES", "3".to_string()),
        ("RETRY_DELAY_MS", "1".to_string()),
        ("HTTP_TIMEOUT_SECONDS", "2".to_string()),
        ("MAX_CONCURRENCY", "2".to_string()),
    ]);
    PipelineSettings::from_lookup(|key| env.get(key).cloned()).unwrap()
}

fn context_for(server: &MockServer, db: &TestDb) -> CliContext {
    let settings = settings_for(server);
    let client = DefaultPokeApiClient::new(&PokeApiConfig::from_settings(&settings)).unwrap();
    bootstrap_with(settings, Arc::new(client), db.repos())
}

fn detail(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "base_experience": 64,
        "sprites": {"front_default": format!("https://img.example/{id}.png")},
        "types": [
            {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
            {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}}
        ],
        "abilities": [
            {"ability": {"name": "overgrow", "url": "https://pokeapi.co/api/v2/ability/65/"}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "chlorophyll", "url": "https://pokeapi.co/api/v2/ability/34/"}, "is_hidden": true, "slot": 3}
        ],
        "stats": [
            {"base_stat": 45, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
            {"base_stat": 49, "effort": 0, "stat": {"name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/"}}
        ]
    })
}

async fn mount_listing(server: &MockServer, names: &[&str]) {
    let results: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({"name": name, "url": format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1)})
        })
        .collect();
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .and(query_param("limit", names.len().to_string()))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"count": 1302, "results": results})),
        )
        .mount(server)
        .await;
}

async fn mount_detail(server: &MockServer, id: i64, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v2/pokemon/{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail(id, name)))
        .mount(server)
        .await;
}

async fn healthy_server() -> MockServer {
    let server = MockServer::start().await;
    mount_listing(&server, &["bulbasaur", "ivysaur"]).await;
    mount_detail(&server, 1, "bulbasaur").await;
    mount_detail(&server, 2, "ivysaur").await;
    server
}

async fn counts(ctx: &CliContext) -> TableCounts {
    ctx.catalog().counts().await.unwrap()
}

#[tokio::test]
async fn two_item_run_loads_two_rows() {
    let server = healthy_server().await;
    let db = TestDb::new().await.unwrap();
    let ctx = context_for(&server, &db);

    let summary = ctx.pipeline().run(2, 0).await.unwrap();

    assert_eq!(summary.requested, 2);
    assert_eq!(summary.loaded, 2);
    let counts = counts(&ctx).await;
    assert_eq!(counts.pokemon, 2);
    assert_eq!(counts.types, 2);
    assert_eq!(counts.pokemon_types, 4);
    assert_eq!(counts.pokemon_abilities, 4);
    assert_eq!(counts.pokemon_stats, 4);

    let bulbasaur = ctx.catalog().find("bulbasaur").await.unwrap();
    assert_eq!(bulbasaur.summary.height_cm, 70);
    assert!((bulbasaur.summary.weight_kg - 6.9).abs() < 1e-9);
    assert!((bulbasaur.summary.bmi.unwrap() - 14.08).abs() < 0.01);
    assert_eq!(bulbasaur.summary.types, vec!["grass", "poison"]);
}

#[tokio::test]
async fn exhausted_retries_leave_store_unchanged() {
    let db = TestDb::new().await.unwrap();

    let good = healthy_server().await;
    let first = context_for(&good, &db);
    first.pipeline().run(2, 0).await.unwrap();
    let before = counts(&first).await;

    let failing = MockServer::start().await;
    mount_listing(&failing, &["bulbasaur", "ivysaur"]).await;
    mount_detail(&failing, 1, "bulbasaur").await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/ivysaur"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&failing)
        .await;
    let second = context_for(&failing, &db);

    let err = second.pipeline().run(2, 0).await.unwrap_err();

    assert!(err.is_network(), "unexpected error: {err:?}");
    assert_eq!(CliError::from(err).exit_code(), 69);
    assert_eq!(counts(&second).await, before);
}

#[tokio::test]
async fn rerun_updates_in_place() {
    let server = healthy_server().await;
    let db = TestDb::new().await.unwrap();
    let ctx = context_for(&server, &db);

    ctx.pipeline().run(2, 0).await.unwrap();
    let before = counts(&ctx).await;
    let loaded_at = ctx.catalog().find("ivysaur").await.unwrap().loaded_at;

    let summary = ctx.pipeline().run(2, 0).await.unwrap();

    assert_eq!(summary.loaded, 2);
    assert_eq!(counts(&ctx).await, before);
    assert_eq!(
        ctx.catalog().find("ivysaur").await.unwrap().loaded_at,
        loaded_at
    );
}

#[tokio::test]
async fn zero_limit_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let db = TestDb::new().await.unwrap();
    let ctx = context_for(&server, &db);

    let err = ctx.pipeline().run(0, 0).await.unwrap_err();

    assert_eq!(CliError::from(err).exit_code(), 2);
}

#[tokio::test]
async fn type_filter_lists_matching_rows() {
    let server = healthy_server().await;
    let db = TestDb::new().await.unwrap();
    let ctx = context_for(&server, &db);
    ctx.pipeline().run(2, 0).await.unwrap();

    let filter = pokepipe_core::PokemonFilter::default()
        .with_name("IVY")
        .with_type("Poison");
    let rows = ctx.catalog().list(&filter).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "ivysaur");
    assert_eq!(ctx.catalog().type_names().await.unwrap(), vec!["grass", "poison"]);
}
