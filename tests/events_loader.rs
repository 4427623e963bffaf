use async_trait::async_trait;
use eventageous::components::events::{Event, EventLoader, EventsHandle};
use eventageous::components::session::{Navigator, Session, SessionService};
use eventageous::error::{AppResult, Error};
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Navigator that goes nowhere
struct StayPut;

#[async_trait]
impl Navigator for StayPut {
    async fn navigate(&self, _url: &Url) -> AppResult<()> {
        Ok(())
    }
}

fn session() -> Arc<SessionService> {
    Arc::new(SessionService::new(
        Url::parse("http://localhost/auth/login").unwrap(),
        Arc::new(StayPut),
    ))
}

fn loader_for(server_uri: &str, session: Arc<SessionService>) -> EventLoader {
    let url = Url::parse(server_uri).unwrap().join("/api/events").unwrap();
    EventLoader::new(Client::new(), url, session)
}

fn sample_events() -> serde_json::Value {
    json!([
        {
            "summary": "Coffee",
            "description": "Morning coffee",
            "location": "https://meet.example.com/coffee",
            "creatorEmail": "a@b.com",
            "creatorName": "A",
            "startDatetime": "2024-01-01T10:00:00Z",
            "startTimezone": "America/New_York",
            "endDatetime": "2024-01-01T11:00:00Z",
            "endTimezone": "America/New_York",
            "recurrence": true
        },
        {
            "summary": "Lunch",
            "description": "",
            "location": "Aleksanterinkatu 1, Helsinki",
            "startDatetime": "2024-01-02T11:00:00Z",
            "recurrence": false
        },
        {
            "summary": "Another coffee",
            "startDatetime": "2024-01-01T08:00:00Z"
        }
    ])
}

#[tokio::test]
async fn test_load_updates_session_and_keeps_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "events": sample_events(),
                "authed": true,
                "email": "a@b.com"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = session();
    let loader = loader_for(&server.uri(), Arc::clone(&session));

    let events = loader.load().await.unwrap();

    let expected: Vec<Event> = serde_json::from_value(sample_events()).unwrap();
    assert_eq!(events, expected);
    let summaries: Vec<&str> = events.iter().map(|e| e.summary.as_str()).collect();
    assert_eq!(summaries, ["Coffee", "Lunch", "Another coffee"]);

    assert_eq!(
        session.current(),
        Session {
            logged_in: true,
            user_email: Some("a@b.com".to_string()),
        }
    );
}

#[tokio::test]
async fn test_missing_data_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": sample_events(),
            "authed": true
        })))
        .mount(&server)
        .await;

    let session = session();
    let loader = loader_for(&server.uri(), Arc::clone(&session));

    let result = loader.load().await;
    assert!(matches!(result, Err(Error::MalformedEvents(_))));
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn test_non_json_body_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let loader = loader_for(&server.uri(), session());
    assert!(matches!(
        loader.load().await,
        Err(Error::MalformedEvents(_))
    ));
}

#[tokio::test]
async fn test_legacy_envelope_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "items": [{ "summary": "old" }] }
        })))
        .mount(&server)
        .await;

    let loader = loader_for(&server.uri(), session());
    assert!(matches!(loader.load().await, Err(Error::LegacyEnvelope)));
}

#[tokio::test]
async fn test_error_status_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let loader = loader_for(&server.uri(), session());
    assert!(matches!(
        loader.load().await,
        Err(Error::EventsStatus { status: 500 })
    ));
}

#[tokio::test]
async fn test_unreachable_backend_is_a_failure() {
    // Grab a free port and close it again so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let loader = loader_for(&uri, session());
    assert!(matches!(loader.load().await, Err(Error::EventsRequest(_))));
}

#[tokio::test]
async fn test_handle_loads_through_actor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "events": sample_events(), "authed": false }
        })))
        .expect(2)
        .mount(&server)
        .await;

    let session = session();
    let handle = EventsHandle::new(loader_for(&server.uri(), Arc::clone(&session)));

    let first = handle.load_events().await.unwrap();
    let second = handle.clone().load_events().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    assert_eq!(session.current(), Session::default());

    handle.shutdown().await.unwrap();
    assert!(matches!(
        handle.load_events().await,
        Err(Error::Component(_))
    ));
}
