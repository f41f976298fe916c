use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    Router,
};
use morpheo_orchestrator_client::prelude::*;
use tokio::net::TcpListener;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Received {
    method: String,
    path: String,
    body: Vec<u8>,
}

/// Records every request and answers with a configurable status code
#[derive(Clone)]
struct FakeOrchestrator {
    received: Arc<Mutex<Vec<Received>>>,
    reply: Arc<AtomicU16>,
}

impl FakeOrchestrator {
    fn requests(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }

    fn reply_with(&self, status: u16) {
        self.reply.store(status, Ordering::SeqCst);
    }
}

async fn record(
    State(fake): State<FakeOrchestrator>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> StatusCode {
    fake.received.lock().unwrap().push(Received {
        method: method.to_string(),
        path: uri.path().to_string(),
        body: body.to_vec(),
    });
    StatusCode::from_u16(fake.reply.load(Ordering::SeqCst)).unwrap()
}

async fn spawn_orchestrator() -> (FakeOrchestrator, OrchestratorApi) {
    let fake = FakeOrchestrator {
        received: Arc::new(Mutex::new(Vec::new())),
        reply: Arc::new(AtomicU16::new(200)),
    };
    let app = Router::new().fallback(record).with_state(fake.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (fake, OrchestratorApi::new(ClientConfig::new("127.0.0.1", port)))
}

#[tokio::test]
async fn status_update_posts_json_status() {
    let (fake, api) = spawn_orchestrator().await;
    let id = Uuid::new_v4();

    api.update_uplet_status("learn", "done", id).await.unwrap();

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, format!("/update_status/learn/{id}"));
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "done" }));
}

#[tokio::test]
async fn status_update_accepts_every_valid_pair() {
    let (fake, api) = spawn_orchestrator().await;
    for uplet_type in VALID_UPLET_TYPES {
        for status in VALID_STATUSES {
            api.update_uplet_status(uplet_type, status, Uuid::new_v4())
                .await
                .unwrap();
        }
    }
    assert_eq!(fake.requests().len(), VALID_UPLET_TYPES.len() * VALID_STATUSES.len());
}

#[tokio::test]
async fn invalid_uplet_type_is_rejected_before_any_request() {
    let (fake, api) = spawn_orchestrator().await;
    for status in VALID_STATUSES.iter().chain(["bogus", ""].iter()) {
        let err = api
            .update_uplet_status("learnuplet", status, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, OrchestratorError::InvalidUpletType { .. }));
        assert!(err.is_validation());
    }
    assert!(fake.requests().is_empty());
}

#[tokio::test]
async fn invalid_status_is_rejected_before_any_request() {
    let (fake, api) = spawn_orchestrator().await;
    for uplet_type in VALID_UPLET_TYPES {
        let err = api
            .update_uplet_status(uplet_type, "finished", Uuid::new_v4())
            .await
            .unwrap_err();
        match err {
            OrchestratorError::InvalidStatus { value, allowed } => {
                assert_eq!(value, "finished");
                assert_eq!(allowed, VALID_STATUSES);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
    assert!(fake.requests().is_empty());
}

#[tokio::test]
async fn non_ok_status_codes_are_errors() {
    let (fake, api) = spawn_orchestrator().await;
    let id = Uuid::new_v4();

    for code in [201u16, 204, 404, 500, 503] {
        fake.reply_with(code);
        let err = api.update_uplet_status("pred", "failed", id).await.unwrap_err();
        assert_eq!(err.status().map(|s| s.as_u16()), Some(code));

        let msg = err.to_string();
        assert!(msg.contains(&code.to_string()));
        assert!(msg.contains(&format!("/update_status/pred/{id}")));
    }
}

#[tokio::test]
async fn learn_result_forwards_bytes_unmodified() {
    let (fake, api) = spawn_orchestrator().await;
    let id = Uuid::new_v4();
    // Larger than one body chunk, with formatting a re-encoder would lose
    let document = format!(
        "{{ \"perf\" : 0.5,\n  \"padding\": \"{}\" }}",
        "x".repeat(20 * 1024)
    );

    api.post_learn_result(id, result_reader(document.clone()))
        .await
        .unwrap();

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, format!("/learndone/{id}"));
    assert_eq!(requests[0].body, document.into_bytes());
}

#[tokio::test]
async fn pred_result_uses_its_own_route() {
    let (fake, api) = spawn_orchestrator().await;
    let id = Uuid::new_v4();

    api.post_pred_result(id, result_reader(r#"{"pred":[1,0,1]}"#))
        .await
        .unwrap();

    let requests = fake.requests();
    assert_eq!(requests[0].path, format!("/preddone/{id}"));
    assert_eq!(requests[0].body, br#"{"pred":[1,0,1]}"#.to_vec());
}

#[tokio::test]
async fn learn_result_rejected_by_orchestrator() {
    let (fake, api) = spawn_orchestrator().await;
    fake.reply_with(500);

    let err = api
        .post_learn_result(Uuid::new_v4(), result_reader("{}"))
        .await
        .unwrap_err();
    assert!(matches!(err, OrchestratorError::UnexpectedStatus { .. }));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn unreachable_orchestrator_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let api = OrchestratorApi::new(ClientConfig::new("127.0.0.1", port));
    let id = Uuid::new_v4();
    let err = api.update_uplet_status("learn", "done", id).await.unwrap_err();

    match &err {
        OrchestratorError::Transport { url, .. } => {
            assert_eq!(url, &format!("http://127.0.0.1:{port}/update_status/learn/{id}"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!err.is_validation());
}
