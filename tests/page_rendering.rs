use async_trait::async_trait;
use eventageous::components::session::Navigator;
use eventageous::config::Config;
use eventageous::error::AppResult;
use eventageous::App;
use reqwest::Client;
use serde_json::json;
use std::sync::{Arc, Mutex};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Records every URL it is asked to open
#[derive(Default)]
struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn navigate(&self, url: &Url) -> AppResult<()> {
        self.visited.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

fn app_for(server: &MockServer, navigator: Arc<RecordingNavigator>) -> App {
    let config = Config {
        api_base_url: server.uri(),
        timezone: "America/New_York".to_string(),
        ..Config::default()
    };
    App::with_navigator(&config, Client::new(), navigator).unwrap()
}

async fn serve_events(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_page_lists_events() {
    let server = MockServer::start().await;
    serve_events(
        &server,
        json!({
            "data": {
                "events": [
                    {
                        "summary": "Coffee",
                        "description": "Morning coffee",
                        "location": "https://meet.example.com/coffee",
                        "startDatetime": "2024-01-01T10:00:00Z",
                        "recurrence": true
                    },
                    {
                        "summary": "Lunch",
                        "location": "Cafe <Regatta>",
                        "startDatetime": "2024-01-02T17:30:00Z"
                    },
                    {
                        "summary": "Walk",
                        "location": "Hietaniemi, Helsinki",
                        "startDatetime": "2024-01-03T12:00:00Z",
                        "startTimezone": "Europe/Helsinki"
                    }
                ]
            }
        }),
    )
    .await;

    let app = app_for(&server, Arc::new(RecordingNavigator::default()));
    let page = app.render_page().await.unwrap();

    assert!(page.contains("Coffee"));
    assert!(page.contains("Monday, January 1, 2024 at 5:00:00 AM EST"));
    assert!(page.contains("Recurring"));
    assert!(page.contains("One-time"));
    assert!(page.contains(
        "<a href=\"https://meet.example.com/coffee\">https://meet.example.com/coffee</a>"
    ));
    assert!(page.contains("query=Hietaniemi%2C%20Helsinki\">Hietaniemi, Helsinki</a>"));
    assert!(page.contains("Wednesday, January 3, 2024 at 2:00:00 PM EET"));

    // Plain text is escaped, unlike the link markup
    assert!(page.contains("Cafe &"));
    assert!(page.contains("Regatta"));
    assert!(!page.contains("<Regatta>"));

    assert!(page.contains("Log in"));
    assert!(!page.contains("Failed to load events"));
}

#[tokio::test]
async fn test_page_shows_placeholder_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let app = app_for(&server, Arc::new(RecordingNavigator::default()));
    let page = app.render_page().await.unwrap();

    assert!(page.contains("Failed to load events"));
    assert!(!page.contains("<article"));
    assert!(!page.contains("No upcoming events"));
}

#[tokio::test]
async fn test_page_shows_empty_state_and_login_status() {
    let server = MockServer::start().await;
    serve_events(
        &server,
        json!({ "data": { "events": [], "authed": true, "email": "a@b.com" } }),
    )
    .await;

    let app = app_for(&server, Arc::new(RecordingNavigator::default()));
    let page = app.render_page().await.unwrap();

    assert!(page.contains("No upcoming events"));
    assert!(page.contains("Logged in as a@b.com"));
    assert!(!page.contains("Log in<"));
}

#[tokio::test]
async fn test_login_redirects_once() {
    let server = MockServer::start().await;
    serve_events(&server, json!({ "data": { "events": [], "authed": false } })).await;

    let navigator = Arc::new(RecordingNavigator::default());
    let app = app_for(&server, Arc::clone(&navigator));

    app.load_events().await.unwrap();
    assert!(!app.current_session().logged_in);

    assert!(app.login().await.unwrap());
    assert!(!app.login().await.unwrap());
    assert!(app.session().is_logged_in());

    let visited = navigator.visited.lock().unwrap();
    assert_eq!(*visited, vec![format!("{}/auth/login", server.uri())]);
}

#[tokio::test]
async fn test_login_skipped_when_server_reports_login() {
    let server = MockServer::start().await;
    serve_events(
        &server,
        json!({ "data": { "events": [], "authed": true, "email": "a@b.com" } }),
    )
    .await;

    let navigator = Arc::new(RecordingNavigator::default());
    let app = app_for(&server, Arc::clone(&navigator));

    app.load_events().await.unwrap();
    assert!(!app.login().await.unwrap());
    assert!(navigator.visited.lock().unwrap().is_empty());

    app.shutdown().await.unwrap();
}
