use event_carousel::components::event_source::{EventSource, HttpEventSource};
use event_carousel::config::Config;
use event_carousel::error::Error;
use std::thread;
use url::Url;

/// Source with proxies disabled so requests stay on loopback
fn source(url: Url) -> HttpEventSource {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpEventSource::with_client(client, url)
}

/// Serve a single response on a local port and return the endpoint URL
fn serve_once(status: u16, body: &'static str) -> (Url, thread::JoinHandle<String>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let url = Url::parse(&format!("http://{}/events", addr)).unwrap();

    let worker = thread::spawn(move || {
        let request = server.recv().unwrap();
        let seen = format!("{} {}", request.method(), request.url());
        let response =
            tiny_http::Response::from_string(body).with_status_code(tiny_http::StatusCode(status));
        request.respond(response).unwrap();
        seen
    });

    (url, worker)
}

/// Test that a JSON array of events is fetched in order
#[tokio::test]
async fn test_fetch_events_array() {
    let (url, worker) = serve_once(
        200,
        r#"[
            {"title": "Kickoff", "start_date": "2024-09-01", "start_time": "10:00", "end_time": "11:00"},
            {"title": "Demo day", "description": "https://example.com/demo"}
        ]"#,
    );

    let events = source(url).fetch_events().await.unwrap();

    assert_eq!(worker.join().unwrap(), "GET /events");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title.as_deref(), Some("Kickoff"));
    assert_eq!(events[0].display_time(), "10:00 - 11:00");
    assert_eq!(events[0].display_date(), "2024-09-01");
    assert!(events[1].display_description().is_link());
}

/// Test that a body that is not an event array is a fetch failure
#[tokio::test]
async fn test_fetch_rejects_non_array() {
    let (url, worker) = serve_once(200, r#"{"events": []}"#);

    let result = source(url).fetch_events().await;
    worker.join().unwrap();

    assert!(matches!(result, Err(Error::Fetch(_))));
}

/// Test that a body that is not JSON is a fetch failure
#[tokio::test]
async fn test_fetch_rejects_non_json() {
    let (url, worker) = serve_once(200, "<html>maintenance</html>");

    let result = source(url).fetch_events().await;
    worker.join().unwrap();

    assert!(matches!(result, Err(Error::Fetch(_))));
}

/// Test that an error status with an event array still yields the events
#[tokio::test]
async fn test_error_status_with_event_array_is_decoded() {
    let (url, worker) = serve_once(404, r#"[{"title": "X"}]"#);

    let events = source(url).fetch_events().await.unwrap();
    worker.join().unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].display_title(), "X");
}

/// Test that an error status with an empty array yields no events
#[tokio::test]
async fn test_error_status_with_empty_array_is_decoded() {
    let (url, worker) = serve_once(500, "[]");

    let events = source(url).fetch_events().await.unwrap();
    worker.join().unwrap();

    assert!(events.is_empty());
}

/// Test that an error page that is not JSON is a fetch failure
#[tokio::test]
async fn test_error_status_with_html_body_fails() {
    let (url, worker) = serve_once(503, "<html>Service Unavailable</html>");

    let result = source(url).fetch_events().await;
    worker.join().unwrap();

    assert!(matches!(result, Err(Error::Fetch(_))));
}

/// Test that an unreachable endpoint is a fetch failure
#[tokio::test]
async fn test_fetch_unreachable_endpoint() {
    // Bind and drop a listener so the port is closed
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let url = Url::parse(&format!("http://{}/events", addr)).unwrap();

    let result = source(url).fetch_events().await;

    assert!(matches!(result, Err(Error::Fetch(_))));
}

/// Test building the source from configuration
#[test]
fn test_source_from_config() {
    let source = HttpEventSource::from_config(&Config::default()).unwrap();
    assert_eq!(source.endpoint().as_str(), "http://localhost:5000/events");

    let config = Config {
        events_endpoint: "mailto:events@example.com".to_string(),
    };
    assert!(matches!(
        HttpEventSource::from_config(&config),
        Err(Error::Config(_))
    ));
}
