//! End-to-end coordinator flows against a stub backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use serde_json::json;

use landcover_rust::api::{
    AnalysisClient, AnalysisParams, BoundingBox, RegionAnalysisRequest, RequestCoordinator,
    RunOutcome, Selection, SizeBounds, TabKind,
};
use landcover_rust::services::{ProgressStage, RegionOutcome};

const MODEL: &str = "models/eurosat_rgb.pt";

async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn coordinator_for(base_url: &str, timeout: Duration) -> RequestCoordinator {
    let client = AnalysisClient::new(base_url, timeout).unwrap();
    RequestCoordinator::new(client, SizeBounds::default())
}

fn valid_selection() -> Selection {
    Selection::new(BoundingBox::from_center_km(52.0, 19.0, 10.0, 10.0), 10)
}

fn success_body() -> String {
    json!({
        "cached": false,
        "analysis_id": 42,
        "stats": {
            "areas_sq_km": {"Forest": 60.0, "River": 40.0},
            "areas_pct": {"Forest": 60.0, "River": 40.0},
            "fragmentation": {"Forest": 0.0021, "River": 0.0007},
            "adjacency": {"Forest": {"Forest": 0.0, "River": 0.05},
                          "River": {"Forest": 0.05, "River": 0.0}},
            "density": 0.0134,
        },
        "original_image": "data:image/jpeg;base64,AAAA",
        "mask_image": "data:image/png;base64,AAAA",
        "preview_image": "data:image/png;base64,AAAA",
    })
    .to_string()
}

/// Stub `/analyze-bbox/` that counts hits and replies with a fixed body
/// after an optional delay.
fn stub_app(hits: Arc<AtomicUsize>, status: StatusCode, body: String, delay: Duration) -> Router {
    Router::new().route(
        "/analyze-bbox/",
        post(move || {
            let hits = hits.clone();
            let body = body.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(delay).await;
                (
                    status,
                    [("content-type", "application/json")],
                    body,
                )
            }
        }),
    )
}

#[tokio::test]
async fn test_rejected_selection_issues_no_request() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base = spawn_stub(stub_app(
        hits.clone(),
        StatusCode::OK,
        success_body(),
        Duration::ZERO,
    ))
    .await;
    let coordinator = coordinator_for(&base, Duration::from_secs(5));

    // 60 km wide: over the side limit.
    let selection = Selection::new(BoundingBox::from_center_km(52.0, 19.0, 60.0, 5.0), 10);
    let outcome = coordinator
        .run_bbox(&selection, MODEL, &AnalysisParams::default())
        .await;

    assert!(matches!(outcome, RunOutcome::Rejected(_)));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_eq!(coordinator.progress().stage(), ProgressStage::Idle);
}

#[tokio::test]
async fn test_successful_analysis_reaches_done() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base = spawn_stub(stub_app(
        hits.clone(),
        StatusCode::OK,
        success_body(),
        Duration::ZERO,
    ))
    .await;
    let coordinator = coordinator_for(&base, Duration::from_secs(5));

    let outcome = coordinator
        .run_bbox(&valid_selection(), MODEL, &AnalysisParams::default())
        .await;

    let result = match outcome {
        RunOutcome::Completed(result) => result,
        other => panic!("unexpected outcome: {:?}", other),
    };
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(coordinator.progress().stage(), ProgressStage::Done);
    assert_eq!(result.analysis_id, Some(42));
    assert!(result.tabs.iter().any(|t| t.kind == TabKind::Percentage));
    assert!(result.tabs.iter().any(|t| t.kind == TabKind::Adjacency));
    assert!(result.images.original.is_some());
    assert!(result.images.blended.is_some());
    assert!(result.images.residential.is_none());
}

#[tokio::test]
async fn test_domain_error_fails_with_server_message() {
    let hits = Arc::new(AtomicUsize::new(0));
    let body = json!({"error": "No water areas found in selection"}).to_string();
    let base = spawn_stub(stub_app(hits, StatusCode::OK, body, Duration::ZERO)).await;
    let coordinator = coordinator_for(&base, Duration::from_secs(5));

    let outcome = coordinator
        .run_bbox(&valid_selection(), MODEL, &AnalysisParams::default())
        .await;

    match outcome {
        RunOutcome::Failed(message) => {
            assert!(message.contains("No water areas found"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(coordinator.progress().stage(), ProgressStage::Idle);
}

#[tokio::test]
async fn test_http_error_status_fails() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base = spawn_stub(stub_app(
        hits,
        StatusCode::INTERNAL_SERVER_ERROR,
        "boom".to_string(),
        Duration::ZERO,
    ))
    .await;
    let coordinator = coordinator_for(&base, Duration::from_secs(5));

    let outcome = coordinator
        .run_bbox(&valid_selection(), MODEL, &AnalysisParams::default())
        .await;

    assert!(matches!(outcome, RunOutcome::Failed(_)));
    assert_eq!(coordinator.progress().stage(), ProgressStage::Idle);
}

#[tokio::test]
async fn test_malformed_body_fails() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base = spawn_stub(stub_app(
        hits,
        StatusCode::OK,
        "<html>proxy error</html>".to_string(),
        Duration::ZERO,
    ))
    .await;
    let coordinator = coordinator_for(&base, Duration::from_secs(5));

    let outcome = coordinator
        .run_bbox(&valid_selection(), MODEL, &AnalysisParams::default())
        .await;

    assert!(matches!(outcome, RunOutcome::Failed(_)));
    assert_eq!(coordinator.progress().stage(), ProgressStage::Idle);
}

#[tokio::test]
async fn test_timeout_fails() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base = spawn_stub(stub_app(
        hits,
        StatusCode::OK,
        success_body(),
        Duration::from_secs(5),
    ))
    .await;
    let coordinator = coordinator_for(&base, Duration::from_millis(200));

    let outcome = coordinator
        .run_bbox(&valid_selection(), MODEL, &AnalysisParams::default())
        .await;

    assert!(matches!(outcome, RunOutcome::Failed(_)));
    assert_eq!(coordinator.progress().stage(), ProgressStage::Idle);
}

#[tokio::test]
async fn test_cleared_selection_supersedes_in_flight_request() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base = spawn_stub(stub_app(
        hits,
        StatusCode::OK,
        success_body(),
        Duration::from_millis(300),
    ))
    .await;
    let coordinator = Arc::new(coordinator_for(&base, Duration::from_secs(5)));

    let task = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move {
            coordinator
                .run_bbox(&valid_selection(), MODEL, &AnalysisParams::default())
                .await
        })
    };

    // Let the request reach the stub, then redraw.
    tokio::time::sleep(Duration::from_millis(50)).await;
    coordinator.clear_selection();

    let outcome = task.await.unwrap();
    assert!(matches!(outcome, RunOutcome::Superseded));
    assert_eq!(coordinator.progress().stage(), ProgressStage::Idle);
}

#[tokio::test]
async fn test_superseded_failure_leaves_newer_progress_alone() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base = spawn_stub(stub_app(
        hits,
        StatusCode::INTERNAL_SERVER_ERROR,
        "boom".to_string(),
        Duration::from_millis(300),
    ))
    .await;
    let coordinator = Arc::new(coordinator_for(&base, Duration::from_secs(5)));

    let task = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move {
            coordinator
                .run_bbox(&valid_selection(), MODEL, &AnalysisParams::default())
                .await
        })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    coordinator.clear_selection();
    // A newer run has since taken the panel forward.
    coordinator.progress().set(ProgressStage::Submitted);

    let outcome = task.await.unwrap();
    assert!(matches!(outcome, RunOutcome::Superseded));
    assert_eq!(coordinator.progress().stage(), ProgressStage::Submitted);
}

#[tokio::test]
async fn test_rejection_after_completed_run_resets_progress() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base = spawn_stub(stub_app(
        hits.clone(),
        StatusCode::OK,
        success_body(),
        Duration::ZERO,
    ))
    .await;
    let coordinator = coordinator_for(&base, Duration::from_secs(5));

    let outcome = coordinator
        .run_bbox(&valid_selection(), MODEL, &AnalysisParams::default())
        .await;
    assert!(outcome.is_completed());
    assert_eq!(coordinator.progress().stage(), ProgressStage::Done);

    let oversized = Selection::new(BoundingBox::from_center_km(52.0, 19.0, 60.0, 5.0), 10);
    let outcome = coordinator
        .run_bbox(&oversized, MODEL, &AnalysisParams::default())
        .await;

    assert!(matches!(outcome, RunOutcome::Rejected(_)));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(coordinator.progress().stage(), ProgressStage::Idle);
}

#[tokio::test]
async fn test_region_analysis_ready_and_failed() {
    let ready_body = json!({
        "success": true,
        "cached": false,
        "analysis_id": 3,
        "redirect_url": "/wojewodztwo/3/",
    })
    .to_string();
    let app = Router::new().route(
        "/api/analyze-wojewodztwo/",
        post(move || {
            let body = ready_body.clone();
            async move { ([("content-type", "application/json")], body) }
        }),
    );
    let base = spawn_stub(app).await;
    let coordinator = coordinator_for(&base, Duration::from_secs(5));

    let request = RegionAnalysisRequest {
        wojewodztwo_id: 3,
        model_path: MODEL.to_string(),
        params: Default::default(),
        zoom: 9,
        force_recompute: false,
    };
    match coordinator.run_region(&request).await {
        RegionOutcome::Ready {
            redirect_url,
            cached,
        } => {
            assert_eq!(redirect_url, "/wojewodztwo/3/");
            assert!(!cached);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    let failed_body = json!({"error": "Województwo 99 not found"}).to_string();
    let app = Router::new().route(
        "/api/analyze-wojewodztwo/",
        post(move || {
            let body = failed_body.clone();
            async move { ([("content-type", "application/json")], body) }
        }),
    );
    let base = spawn_stub(app).await;
    let coordinator = coordinator_for(&base, Duration::from_secs(5));

    let mut request = request;
    request.wojewodztwo_id = 99;
    match coordinator.run_region(&request).await {
        RegionOutcome::Failed(message) => assert!(message.contains("not found")),
        other => panic!("unexpected outcome: {:?}", other),
    }
}
