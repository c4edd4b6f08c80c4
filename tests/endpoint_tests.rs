//! Endpoint scenarios against a mock weather service
//!
//! These tests mock the weather data endpoint to verify fetch behavior and
//! the full action cycle without a real backend.

use weather_report::action::Action;
use weather_report::api::{self, FetchError, STATUS_ERROR_TEXT};
use weather_report::effect::Effect;
use weather_report::reducer::reducer;
use weather_report::state::{AppState, ViewState, WeatherRecord};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

async fn server_returning(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body.to_owned(), "application/json"))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_fetch_parses_records_in_order() {
    let body = r#"[
        {"place":"Paris","date":"2024-01-01","temperature":"10C"},
        {"place":"Kollam","date":"Mon 14:00","temperature":"24°C"}
    ]"#;
    let server = server_returning(200, body).await;

    let records = api::fetch_weather(&client(), &server.uri()).await.unwrap();

    assert_eq!(
        records,
        vec![
            WeatherRecord {
                place: "Paris".into(),
                date: "2024-01-01".into(),
                temperature: "10C".into(),
            },
            WeatherRecord {
                place: "Kollam".into(),
                date: "Mon 14:00".into(),
                temperature: "24°C".into(),
            },
        ]
    );
}

#[tokio::test]
async fn test_fetch_empty_array_is_not_an_error() {
    let server = server_returning(200, "[]").await;

    let records = api::fetch_weather(&client(), &server.uri()).await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_http_error_yields_fixed_message() {
    let server = server_returning(500, "boom").await;

    let err = api::fetch_weather(&client(), &server.uri()).await.unwrap_err();

    assert!(matches!(err, FetchError::Status(_)));
    assert_eq!(err.user_message(), STATUS_ERROR_TEXT);
}

#[tokio::test]
async fn test_invalid_json_yields_parser_message() {
    let server = server_returning(200, "not json at all").await;

    let err = api::fetch_weather(&client(), &server.uri()).await.unwrap_err();

    assert!(matches!(err, FetchError::Parse(_)));
    assert!(!err.user_message().is_empty());
    assert_ne!(err.user_message(), STATUS_ERROR_TEXT);
}

#[tokio::test]
async fn test_unreachable_endpoint_yields_request_error() {
    let err = api::fetch_weather(&client(), "http://127.0.0.1:1")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Request(_)));
    assert!(!err.user_message().is_empty());
}

#[tokio::test]
async fn test_missing_fields_resolve_to_empty_cells() {
    let server = server_returning(200, r#"[{"place":"Kochi"}]"#).await;

    let records = api::fetch_weather(&client(), &server.uri()).await.unwrap();

    assert_eq!(records[0].place, "Kochi");
    assert_eq!(records[0].date, "");
    assert_eq!(records[0].temperature, "");
}

#[tokio::test]
async fn test_numeric_temperature_renders_as_text() {
    let server =
        server_returning(200, r#"[{"place":"Kochi","date":"Mon","temperature":26}]"#).await;

    let records = api::fetch_weather(&client(), &server.uri()).await.unwrap();

    assert_eq!(records[0].temperature, "26");
}

/// Drive one full fetch cycle through the reducer, the way the task in the
/// main loop does it.
async fn run_fetch_cycle(state: &mut AppState, base_url: &str) {
    let result = reducer(state, Action::WeatherFetch);
    assert!(state.view.is_loading());
    assert_eq!(result.effects, vec![Effect::FetchWeather]);

    let action = match api::fetch_weather(&client(), base_url).await {
        Ok(records) => Action::WeatherDidLoad(records),
        Err(e) => Action::WeatherDidError(e.user_message()),
    };
    reducer(state, action);
}

#[tokio::test]
async fn test_fetch_cycle_success() {
    let body = r#"[{"place":"Paris","date":"2024-01-01","temperature":"10C"}]"#;
    let server = server_returning(200, body).await;
    let mut state = AppState::default();

    run_fetch_cycle(&mut state, &server.uri()).await;

    assert!(!state.view.is_loading());
    assert_eq!(
        state.view.records().map(<[WeatherRecord]>::len),
        Some(1),
        "expected one loaded record"
    );
}

#[tokio::test]
async fn test_fetch_cycle_http_error() {
    let server = server_returning(500, "").await;
    let mut state = AppState::default();

    run_fetch_cycle(&mut state, &server.uri()).await;

    assert_eq!(state.view, ViewState::Failed(STATUS_ERROR_TEXT.into()));
}

#[tokio::test]
async fn test_fetch_cycle_always_leaves_loading() {
    // Success, HTTP error, and parse error all resolve the loading state.
    let cases = [
        (200, r#"[]"#),
        (500, "boom"),
        (200, "not json"),
    ];

    for (status, body) in cases {
        let server = server_returning(status, body).await;
        let mut state = AppState::default();

        run_fetch_cycle(&mut state, &server.uri()).await;

        assert!(
            !state.view.is_loading(),
            "loading not cleared for status {status} body {body:?}"
        );
    }
}
