//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint against the library
//! crate, using the in-memory store and failing store doubles.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use readthrough_demo::{
    api::create_router,
    cache::{CacheStore, FixedClock, MemoryStore, ProcessSalt, RandomSource, ReadThrough, TtlPolicy},
    metrics::Metrics,
    payload::{FakePayload, FakeRecord},
    AppError, AppState, Config, Result,
};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

const SALT: &str = "4111-1111-1111-1111";

/// Store double that can be switched into a failing mode per operation.
#[derive(Default)]
struct SwitchableStore {
    inner: MemoryStore,
    fail_get: AtomicBool,
    fail_set: AtomicBool,
    fail_ping: AtomicBool,
}

#[async_trait]
impl CacheStore for SwitchableStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(AppError::Store("READONLY You can't read against a replica".into()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        if self.fail_set.load(Ordering::SeqCst) {
            return Err(AppError::Store("OOM command not allowed".into()));
        }
        self.inner.set(key, value, ttl).await
    }

    async fn ping(&self) -> Result<()> {
        if self.fail_ping.load(Ordering::SeqCst) {
            return Err(AppError::Store("NOAUTH Authentication required".into()));
        }
        self.inner.ping().await
    }
}

fn create_test_app(store: Arc<dyn CacheStore>, second: u32, ttl: TtlPolicy) -> Router {
    let cache = ReadThrough::new(
        store,
        Arc::new(FakePayload::default()),
        Arc::new(RandomSource::seeded(42)),
        Arc::new(FixedClock(second)),
        Some(ProcessSalt::new(SALT)),
        ttl,
    );
    create_router(AppState::new(cache, Metrics::new().unwrap()))
}

async fn get_bytes(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let (status, bytes) = get_bytes(app, uri).await;
    (status, String::from_utf8(bytes).unwrap())
}

// == Hello Endpoint Tests ==

#[tokio::test]
async fn test_hello_endpoint() {
    let app = create_test_app(Arc::new(MemoryStore::new()), 0, TtlPolicy::Persistent);

    for _ in 0..3 {
        let (status, body) = get(&app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello, World!");
    }
}

// == Redis Endpoint Tests ==

#[tokio::test]
async fn test_redis_miss_generates_thirty_records() {
    let store = Arc::new(MemoryStore::new());
    let app = create_test_app(store.clone(), 7, TtlPolicy::Persistent);

    let (status, body) = get(&app, "/redis").await;

    assert_eq!(status, StatusCode::OK);
    let records: Vec<FakeRecord> = serde_json::from_str(&body).unwrap();
    assert_eq!(records.len(), 30);

    let json: Value = serde_json::from_str(&body).unwrap();
    let first = json[0].as_object().unwrap();
    for field in [
        "id",
        "first_name",
        "last_name",
        "address",
        "animal",
        "user_agent",
        "car",
        "url",
        "uuid",
        "password",
    ] {
        assert!(first.contains_key(field), "missing field {}", field);
    }

    let stored = store.get("07-4111-1111-1111-1111").await.unwrap();
    assert_eq!(stored, Some(body.into_bytes()));
}

#[tokio::test]
async fn test_redis_hit_returns_identical_body() {
    let app = create_test_app(Arc::new(MemoryStore::new()), 12, TtlPolicy::default());

    let (_, first) = get(&app, "/redis").await;
    let (status, second) = get(&app, "/redis").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_redis_returns_non_utf8_value_verbatim() {
    let store = Arc::new(MemoryStore::new());
    let value = vec![0x80, 0xff, b'o', b'k', 0x00, 0xc3];
    store
        .set("33-4111-1111-1111-1111", &value, None)
        .await
        .unwrap();
    let app = create_test_app(store.clone(), 33, TtlPolicy::Persistent);

    let (status, body) = get_bytes(&app, "/redis").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, value);
    assert_eq!(store.len().await, 1, "a stored value is never regenerated");
}

#[tokio::test]
async fn test_redis_keys_are_per_second() {
    let store = Arc::new(MemoryStore::new());

    let at_three = create_test_app(store.clone(), 3, TtlPolicy::Persistent);
    let at_four = create_test_app(store.clone(), 4, TtlPolicy::Persistent);
    get(&at_three, "/redis").await;
    get(&at_four, "/redis").await;

    assert_eq!(store.len().await, 2);
    assert!(store.get("03-4111-1111-1111-1111").await.unwrap().is_some());
    assert!(store.get("04-4111-1111-1111-1111").await.unwrap().is_some());
}

#[tokio::test]
async fn test_redis_fill_ttl_within_bounds() {
    let store = Arc::new(MemoryStore::new());
    let app = create_test_app(store.clone(), 59, TtlPolicy::default());

    get(&app, "/redis").await;

    let ttl = store.ttl("59-4111-1111-1111-1111").await.unwrap();
    assert!(ttl <= Duration::from_secs(129));
    assert!(ttl >= Duration::from_secs(9));
}

#[tokio::test]
async fn test_redis_get_failure() {
    let store = Arc::new(SwitchableStore::default());
    store.fail_get.store(true, Ordering::SeqCst);
    let app = create_test_app(store.clone(), 1, TtlPolicy::default());

    let (status, body) = get(&app, "/redis").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("READONLY"));
    assert!(store.inner.is_empty().await, "nothing is stored on a GET failure");
}

#[tokio::test]
async fn test_redis_set_failure() {
    let store = Arc::new(SwitchableStore::default());
    store.fail_set.store(true, Ordering::SeqCst);
    let app = create_test_app(store, 1, TtlPolicy::default());

    let (status, body) = get(&app, "/redis").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("OOM command not allowed"));
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint_tracks_ping() {
    let store = Arc::new(SwitchableStore::default());
    let app = create_test_app(store.clone(), 0, TtlPolicy::Persistent);

    let (status, body) = get(&app, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");

    store.fail_ping.store(true, Ordering::SeqCst);
    let (status, body) = get(&app, "/healthz").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("NOAUTH Authentication required"));
}

// == Metrics Endpoint Tests ==

#[tokio::test]
async fn test_metrics_counts_hits_and_misses() {
    let app = create_test_app(Arc::new(MemoryStore::new()), 20, TtlPolicy::Persistent);

    get(&app, "/redis").await;
    get(&app, "/redis").await;
    get(&app, "/redis").await;
    let (status, body) = get(&app, "/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("cache_lookups_total{outcome=\"hit\"} 2"));
    assert!(body.contains("cache_lookups_total{outcome=\"miss\"} 1"));
}

// == Startup Tests ==

#[test]
fn test_missing_configuration_is_fatal() {
    let result = Config::from_lookup(|_| None);
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[tokio::test]
async fn test_state_from_config_serves_requests() {
    let config = Config::from_lookup(|name| match name {
        "REDIS_URL" => Some("localhost:6379".to_string()),
        "REDIS_PASSWORD" => Some(String::new()),
        _ => None,
    })
    .unwrap();
    let state = AppState::from_config(&config, Arc::new(MemoryStore::new())).unwrap();
    let app = create_router(state);

    let (status, body) = get(&app, "/redis").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.is_empty());
}
