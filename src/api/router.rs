use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::data;
use super::health;
use super::state::AppState;

/// Document, health probes, and the static frontend as fallback.
/// The document is readable cross-origin so frontends hosted elsewhere can fetch it.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    let index = format!("{}/index.html", static_dir.trim_end_matches('/'));
    let frontend = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .route("/data.json", get(data::get_document))
        .fallback_service(frontend)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use tokio::net::TcpListener;

    use super::*;
    use crate::domain::{Dataset, EvalDocument};

    async fn spawn_server() -> String {
        let doc = EvalDocument {
            title: "Served".to_string(),
            ..Default::default()
        };
        let app = create_router(AppState::new(Dataset::new(doc), "data.json"), "does-not-exist");
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_serves_document() {
        let base = spawn_server().await;

        let doc: EvalDocument = reqwest::get(format!("{}/data.json", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(doc.title, "Served");
    }

    #[tokio::test]
    async fn test_health_and_readiness() {
        let base = spawn_server().await;

        let health = reqwest::get(format!("{}/health", base)).await.unwrap();
        assert_eq!(health.status(), reqwest::StatusCode::OK);

        let ready: serde_json::Value = reqwest::get(format!("{}/ready", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(ready["status"], "degraded");
    }
}
