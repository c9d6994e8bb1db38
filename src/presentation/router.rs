// Route table for the dashboard HTTP surface
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_chart, get_dashboard, health_check, list_subjects, select_subject,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/subjects", get(list_subjects))
        .route("/charts/:region", get(get_chart))
        .route("/selection", post(select_subject))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_controller::DashboardController;
    use crate::application::dataset_source::{DatasetSource, LoadError};
    use crate::domain::dataset::Dataset;
    use crate::infrastructure::view_state::ViewState;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use serde_json::{json, Value};

    struct StubSource;

    #[async_trait]
    impl DatasetSource for StubSource {
        async fn load(&self) -> Result<Dataset, LoadError> {
            Ok(serde_json::from_value(json!({
                "metadata": [
                    {"id": 940, "location": "Beaufort/NC", "wfreq": 2},
                    {"id": 941, "location": "Chicago/IL", "wfreq": 6}
                ],
                "samples": [
                    {"id": "940", "otu_ids": [1167, 2859], "otu_labels": ["a", "b"], "sample_values": [163, 126]},
                    {"id": "941", "otu_ids": [482], "otu_labels": ["c"], "sample_values": [45]}
                ]
            }))
            .unwrap())
        }
    }

    /// Serve the full router on an ephemeral local port and return its base URL.
    async fn serve(dashboard: DashboardController<ViewState>) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(Arc::new(AppState::new(dashboard)));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn loaded() -> String {
        let mut dashboard = DashboardController::new(ViewState::default());
        dashboard.load(&StubSource).await.unwrap();
        serve(dashboard).await
    }

    #[tokio::test]
    async fn test_routes_serve_loaded_dashboard() {
        let base = loaded().await;
        let client = reqwest::Client::new();

        let health = client.get(format!("{}/healthz", base)).send().await.unwrap();
        assert_eq!(health.status(), StatusCode::OK);
        assert_eq!(health.text().await.unwrap(), "ok");

        let dashboard: Value = client
            .get(format!("{}/dashboard", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(dashboard["status"], "loaded");
        assert_eq!(dashboard["selector"]["value"], "940");

        let subjects: Value = client
            .get(format!("{}/subjects", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(subjects, json!([{"text": "940", "value": "940"}, {"text": "941", "value": "941"}]));

        let bar: Value = client
            .get(format!("{}/charts/bar", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(bar["data"][0]["type"], "bar");
        assert_eq!(bar["data"][0]["y"], json!(["OTU 2859", "OTU 1167"]));

        let missing = client.get(format!("{}/charts/pie", base)).send().await.unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_selection_route_rerenders() {
        let base = loaded().await;
        let client = reqwest::Client::new();

        let response = client
            .post(format!("{}/selection", base))
            .json(&json!({"id": "941"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let snapshot: Value = response.json().await.unwrap();
        assert_eq!(snapshot["selector"]["value"], "941");
        assert_eq!(snapshot["demographics"], json!(["id: 941", "location: Chicago/IL", "wfreq: 6"]));
        assert_eq!(snapshot["charts"]["gauge"]["data"][0]["value"], 6.0);

        let unknown = client
            .post(format!("{}/selection", base))
            .json(&json!({"id": "999"}))
            .send()
            .await
            .unwrap();
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

        let malformed = client
            .post(format!("{}/selection", base))
            .json(&json!({"subject": "941"}))
            .send()
            .await
            .unwrap();
        assert!(malformed.status().is_client_error());
    }

    #[tokio::test]
    async fn test_unloaded_dashboard_over_http() {
        let base = serve(DashboardController::new(ViewState::default())).await;
        let client = reqwest::Client::new();

        let dashboard: Value = client
            .get(format!("{}/dashboard", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(dashboard["status"], "unloaded");
        assert_eq!(dashboard["charts"], json!({}));

        let selection = client
            .post(format!("{}/selection", base))
            .json(&json!({"id": "940"}))
            .send()
            .await
            .unwrap();
        assert_eq!(selection.status(), StatusCode::CONFLICT);
    }
}
