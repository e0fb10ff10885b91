#![allow(clippy::unwrap_used)]
// Integration tests for `OrionClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use orion_api::{ClientConfig, Error, OrionClient, Scope, Subscription};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, OrionClient) {
    let server = MockServer::start().await;
    let client = setup_client(&server, None);
    (server, client)
}

fn setup_client(server: &MockServer, token: Option<&str>) -> OrionClient {
    let uri = Url::parse(&server.uri()).unwrap();
    let config = ClientConfig {
        host: uri.host_str().unwrap().to_owned(),
        port: uri.port().unwrap(),
        tls: false,
        token: token.map(|t| t.to_owned().into()),
        ..ClientConfig::default()
    };
    OrionClient::new(&config).unwrap()
}

fn sample_subscription(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "description": "room temperature watch",
        "subject": {
            "entities": [{"idPattern": ".*", "type": "Room"}],
            "condition": {"attrs": ["temperature"]}
        },
        "notification": {
            "http": {"url": "http://localhost:1028/accumulate"},
            "attrs": ["temperature"],
            "attrsFormat": "normalized",
            "timesSent": 3,
            "lastSuccessCode": 200
        },
        "status": "active",
        "throttling": 5
    })
}

// ── Subscriptions ───────────────────────────────────────────────────

#[tokio::test]
async fn test_list_subscriptions() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v2/subscriptions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([sample_subscription("sub1"), sample_subscription("sub2")])),
        )
        .mount(&server)
        .await;

    let subs = client.list_subscriptions(&Scope::default()).await.unwrap();

    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0].id.as_deref(), Some("sub1"));
    assert_eq!(subs[0].notification.times_sent, Some(3));
    assert_eq!(subs[1].subject.entities[0].id_pattern.as_deref(), Some(".*"));
}

#[tokio::test]
async fn test_list_subscriptions_empty() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v2/subscriptions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let subs = client.list_subscriptions(&Scope::default()).await.unwrap();
    assert!(subs.is_empty());
}

#[tokio::test]
async fn test_get_subscription() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v2/subscriptions/sub1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_subscription("sub1")))
        .mount(&server)
        .await;

    let sub = client
        .get_subscription("sub1", &Scope::default())
        .await
        .unwrap();

    assert_eq!(sub.id.as_deref(), Some("sub1"));
    assert_eq!(
        sub.notification.http.as_ref().map(|h| h.url.as_str()),
        Some("http://localhost:1028/accumulate")
    );
}

#[tokio::test]
async fn test_get_subscription_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v2/subscriptions/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "NotFound",
            "description": "The requested subscription has not been found."
        })))
        .mount(&server)
        .await;

    let result = client.get_subscription("nope", &Scope::default()).await;

    match result {
        Err(err @ Error::Api { status: 404, .. }) => assert!(err.is_not_found()),
        other => panic!("expected 404 Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_subscription_returns_location_id() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v2/subscriptions"))
        .and(body_partial_json(json!({
            "description": "room temperature watch"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("Location", "/v2/subscriptions/5fa7b9"),
        )
        .mount(&server)
        .await;

    let sub: Subscription = serde_json::from_value(sample_subscription("ignored")).unwrap();
    let id = client
        .create_subscription(&sub, &Scope::default())
        .await
        .unwrap();

    assert_eq!(id, "5fa7b9");
}

#[tokio::test]
async fn test_create_subscription_without_location_header() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v2/subscriptions"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let result = client
        .create_subscription(&Subscription::default(), &Scope::default())
        .await;

    assert!(matches!(result, Err(Error::MissingLocation)));
}

#[tokio::test]
async fn test_delete_subscription() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/subscriptions/sub1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client
        .delete_subscription("sub1", &Scope::default())
        .await
        .unwrap();
}

// ── Tenant scope headers ────────────────────────────────────────────

#[tokio::test]
async fn test_scope_headers_forwarded() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v2/subscriptions"))
        .and(header("Fiware-Service", "smartcity"))
        .and(header("Fiware-ServicePath", "/gardens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let scope = Scope::new(Some("smartcity".into()), Some("/gardens".into()));
    client.list_subscriptions(&scope).await.unwrap();
}

#[tokio::test]
async fn test_bearer_token_header() {
    let server = MockServer::start().await;
    let client = setup_client(&server, Some("s3cret"));

    Mock::given(method("GET"))
        .and(path("/v2/subscriptions"))
        .and(header("Authorization", "Bearer s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client.list_subscriptions(&Scope::default()).await.unwrap();
}

// ── Registrations ───────────────────────────────────────────────────

#[tokio::test]
async fn test_list_registrations() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v2/registrations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "reg1",
            "dataProvided": {
                "entities": [{"id": "room2", "type": "Room"}],
                "attrs": ["relativeHumidity"]
            },
            "provider": {
                "http": {"url": "http://localhost:1234"},
                "legacyForwarding": true
            },
            "status": "active"
        }])))
        .mount(&server)
        .await;

    let regs = client.list_registrations(&Scope::default()).await.unwrap();

    assert_eq!(regs.len(), 1);
    assert_eq!(regs[0].id.as_deref(), Some("reg1"));
    assert_eq!(regs[0].data_provided.attrs, vec!["relativeHumidity"]);
    assert_eq!(regs[0].status.as_deref(), Some("active"));
}

#[tokio::test]
async fn test_create_registration_returns_location_id() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v2/registrations"))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("Location", "/v2/registrations/reg42"),
        )
        .mount(&server)
        .await;

    let id = client
        .create_registration(&orion_api::Registration::default(), &Scope::default())
        .await
        .unwrap();

    assert_eq!(id, "reg42");
}

#[tokio::test]
async fn test_delete_registration_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/registrations/reg1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "InternalServerError",
            "description": "database is on fire"
        })))
        .mount(&server)
        .await;

    let result = client.delete_registration("reg1", &Scope::default()).await;

    match result {
        Err(Error::Api {
            status: 500,
            error,
            description,
        }) => {
            assert_eq!(error, "InternalServerError");
            assert_eq!(description.as_deref(), Some("database is on fire"));
        }
        other => panic!("expected 500 Api error, got: {other:?}"),
    }
}

// ── Version ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_version() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orion": {
                "version": "3.10.1",
                "uptime": "0 d, 0 h, 17 m, 57 s",
                "git_hash": "1916c3f21e7d6c71dbf1a0e40b0b09e02ca0e9a5",
                "compile_time": "Mon Jun 12 17:18:27 UTC 2023",
                "compiled_by": "root",
                "compiled_in": "buildkitsandbox",
                "release_date": "Mon Jun 12 17:18:27 UTC 2023",
                "machine": "x86_64",
                "doc": "https://fiware-orion.rtfd.io/en/3.10.1/"
            }
        })))
        .mount(&server)
        .await;

    let version = client.get_version().await.unwrap();

    assert_eq!(version.orion.version, "3.10.1");
    assert_eq!(version.orion.machine, "x86_64");
}

// ── Construction ────────────────────────────────────────────────────

#[tokio::test]
async fn test_construction_performs_no_network_io() {
    // TEST-NET-1 address: nothing listens there. Construction must
    // still succeed instantly; only issued operations may fail.
    let config = ClientConfig {
        host: "192.0.2.1".into(),
        port: 1026,
        ..ClientConfig::default()
    };
    assert!(OrionClient::new(&config).is_ok());
}
