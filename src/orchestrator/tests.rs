use super::{AUTH, CELESTIAL, ISS, LOCATION, RequestOrchestrator, WEATHER};
use crate::http_handler::{HTTPError, HTTPRequestMethod, Transport};
use crate::keychain::Keychain;
use crate::sky_source::{ProxySource, SkySource};
use crate::state::{DurableStore, MemoryStore, NotificationState, SessionState};
use crate::test_support::StubTransport;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn setup() -> (Arc<StubTransport>, Arc<dyn DurableStore>, RequestOrchestrator) {
    let stub = Arc::new(StubTransport::new());
    let store: Arc<dyn DurableStore> = Arc::new(MemoryStore::new());
    let backend: Arc<dyn Transport> = Arc::clone(&stub) as Arc<dyn Transport>;
    let sky: Arc<dyn SkySource> = Arc::new(ProxySource::new(Arc::clone(&backend)));
    let k = Keychain::from_parts(backend, sky, Arc::clone(&store), NotificationState::DEFAULT_TTL);
    (stub, store, k.orchestrator())
}

fn auth_body(token: &str) -> serde_json::Value { json!({ "token": token, "user": { "id": 42, "email": "a@b.com" } }) }

#[tokio::test(start_paused = true)]
async fn test_login_success_end_to_end() {
    let (stub, store, orch) = setup();
    stub.reply("/api/auth/login", 200, auth_body("jwt-1"));

    let user = orch.login("a@b.com", "hunter2").await.unwrap();
    assert_eq!(user.id(), 42);

    let k = orch.k();
    assert!(k.session().is_logged_in());
    assert_eq!(k.session().identity().map(|u| u.email().to_string()).as_deref(), Some("a@b.com"));
    assert_eq!(store.get(SessionState::TOKEN_KEY).as_deref(), Some("jwt-1"));
    assert!(!k.loading().is_loading(AUTH));
    assert_eq!(k.notifications().error(AUTH), None);
    assert_eq!(k.notifications().global_success().as_deref(), Some("Logged in"));

    tokio::time::sleep(Duration::from_millis(5_001)).await;
    assert_eq!(k.notifications().global_success(), None);
}

#[tokio::test(start_paused = true)]
async fn test_register_conflict_end_to_end() {
    let (stub, store, orch) = setup();
    stub.reply("/api/auth/register", 409, json!({ "error": "Email already registered" }));

    let err = orch.register("a@b.com", "hunter2").await.unwrap_err();
    assert_eq!(err.carried_message(), Some("Email already registered"));

    let k = orch.k();
    assert!(!k.session().is_logged_in());
    assert_eq!(store.get(SessionState::TOKEN_KEY), None);
    assert!(!k.loading().is_loading(AUTH));
    assert_eq!(k.notifications().error(AUTH).as_deref(), Some("Email already registered"));
    assert_eq!(k.notifications().global_error().as_deref(), Some("Email already registered"));
}

#[tokio::test(start_paused = true)]
async fn test_transport_failure_uses_fallback() {
    let (stub, _, orch) = setup();
    stub.fail("/api/auth/login", || crate::http_handler::ResponseError::NoConnection);

    orch.login("a@b.com", "hunter2").await.unwrap_err();
    assert_eq!(orch.k().notifications().error(AUTH).as_deref(), Some("Login failed"));
    assert!(!orch.k().loading().is_loading(AUTH));
}

#[tokio::test(start_paused = true)]
async fn test_validation_runs_before_any_call() {
    let (stub, _, orch) = setup();

    orch.login("", "pw").await.unwrap_err();
    assert_eq!(orch.k().notifications().error(AUTH).as_deref(), Some("Email and password required"));
    orch.register("not-an-email", "pw").await.unwrap_err();
    assert_eq!(orch.k().notifications().error(AUTH).as_deref(), Some("Invalid email address"));
    orch.delete_account().await.unwrap_err();
    assert_eq!(orch.k().notifications().error(AUTH).as_deref(), Some("Not authenticated"));
    orch.fetch_weather(f64::NAN, 13.4).await.unwrap_err();
    assert_eq!(orch.k().notifications().error(WEATHER).as_deref(), Some("Missing coordinates"));

    assert!(stub.seen().is_empty());
    assert!(!orch.k().loading().any_loading());
}

#[tokio::test(start_paused = true)]
async fn test_previous_error_is_cleared_on_retry() {
    let (stub, _, orch) = setup();
    stub.reply("/api/auth/login", 401, json!({ "error": "Invalid credentials" }));
    orch.login("a@b.com", "wrong").await.unwrap_err();
    assert_eq!(orch.k().notifications().error(AUTH).as_deref(), Some("Invalid credentials"));

    stub.reply("/api/auth/login", 200, auth_body("jwt-2"));
    orch.login("a@b.com", "right").await.unwrap();
    assert_eq!(orch.k().notifications().error(AUTH), None);
}

#[tokio::test(start_paused = true)]
async fn test_delete_account_sends_bearer_and_clears_session() {
    let (stub, store, orch) = setup();
    stub.reply("/api/auth/login", 200, auth_body("jwt-3"));
    stub.reply("/api/protected/delete", 200, serde_json::Value::Null);
    orch.login("a@b.com", "hunter2").await.unwrap();

    orch.delete_account().await.unwrap();

    let delete = stub.seen().into_iter().find(|s| s.endpoint == "/api/protected/delete").unwrap();
    assert_eq!(delete.method, HTTPRequestMethod::Delete);
    assert_eq!(delete.bearer.as_deref(), Some("jwt-3"));
    assert_eq!(stub.calls_to("/api/protected/delete"), 1);
    assert!(!orch.k().session().is_logged_in());
    assert_eq!(store.get(SessionState::TOKEN_KEY), None);
}

#[tokio::test(start_paused = true)]
async fn test_delete_account_failure_keeps_session() {
    let (stub, _, orch) = setup();
    stub.reply("/api/auth/login", 200, auth_body("jwt-4"));
    stub.reply("/api/protected/delete", 500, json!({}));
    orch.login("a@b.com", "hunter2").await.unwrap();

    orch.delete_account().await.unwrap_err();
    assert!(orch.k().session().is_logged_in());
    assert_eq!(orch.k().notifications().error(AUTH).as_deref(), Some("Account deletion failed"));
}

#[tokio::test(start_paused = true)]
async fn test_logout_is_local() {
    let (stub, _, orch) = setup();
    stub.reply("/api/auth/login", 200, auth_body("jwt-5"));
    orch.login("a@b.com", "hunter2").await.unwrap();

    orch.logout();
    assert!(!orch.k().session().is_logged_in());
    assert_eq!(stub.seen().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_fetch_modules_use_their_keys() {
    let (stub, _, orch) = setup();
    stub.reply(
        "/api/weather",
        200,
        json!({ "temperature": 3.0, "windspeed": 35.0, "winddirection": 10.0, "weathercode": 71, "time": "2025-01-02T08:00" }),
    );
    stub.reply("/api/celestial", 500, json!({ "error": "Missing AstronomyAPI credentials" }));
    stub.reply("/api/geocode", 200, json!({ "display_name": "Berlin, Germany", "address": { "country_code": "de" } }));

    let weather = orch.fetch_weather(52.52, 13.405).await.unwrap();
    assert_eq!(weather.weathercode(), 71);

    orch.fetch_celestial(52.52, 13.405).await.unwrap_err();
    assert_eq!(orch.k().notifications().error(CELESTIAL).as_deref(), Some("Missing AstronomyAPI credentials"));
    assert_eq!(orch.k().notifications().error(WEATHER), None);

    let payload = orch.fetch_location(52.52, 13.405).await.unwrap();
    assert_eq!(payload["address"]["country_code"], "de");
    assert_eq!(orch.k().location().current().location, "Berlin, Germany");
    assert!(orch.k().location().coordinates().is_some());

    orch.fetch_iss().await.unwrap_err();
    assert_eq!(orch.k().notifications().error(ISS).as_deref(), Some("Not found"));
    assert_eq!(orch.k().notifications().error(LOCATION), None);
    assert!(!orch.k().loading().any_loading());
}

#[tokio::test(start_paused = true)]
async fn test_loading_is_set_while_running() {
    let (_, _, orch) = setup();
    let loading = orch.k().loading();
    let observed = orch
        .run("custom", "Custom failed", async { Ok::<_, HTTPError>(loading.is_loading("custom")) })
        .await
        .unwrap();
    assert!(observed);
    assert!(!loading.is_loading("custom"));
}

#[tokio::test(start_paused = true)]
async fn test_loading_reset_after_panic() {
    let (_, _, orch) = setup();
    let loading = orch.k().loading();
    let task_orch = orch.clone();
    let joined = tokio::spawn(async move {
        task_orch
            .run("custom", "Custom failed", async {
                if task_orch.k().loading().is_loading("custom") {
                    panic!("operation blew up");
                }
                Ok::<_, HTTPError>(())
            })
            .await
    })
    .await;
    assert!(joined.is_err());
    assert!(!loading.is_loading("custom"));
}

#[tokio::test(start_paused = true)]
async fn test_loading_reset_after_cancellation() {
    let (_, _, orch) = setup();
    let loading = orch.k().loading();
    let task_orch = orch.clone();
    let handle = tokio::spawn(async move {
        task_orch
            .run("slow", "Slow failed", async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok::<_, HTTPError>(())
            })
            .await
    });
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(loading.is_loading("slow"));
    handle.abort();
    assert!(handle.await.unwrap_err().is_cancelled());
    assert!(!loading.is_loading("slow"));
}
