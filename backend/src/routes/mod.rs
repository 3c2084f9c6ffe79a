//! Route definitions for the farm section harvest service

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/farmer-section-harvest", harvest_record_routes())
        .route(
            "/harvest-history/generate",
            post(handlers::generate_harvest_history),
        )
}

/// Farmer section harvest record routes
fn harvest_record_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_harvest_records))
        .route("/:record_id", get(handlers::get_harvest_record))
        .route("/:record_id/summary", get(handlers::get_harvest_summary))
        .route(
            "/:record_id/history.csv",
            get(handlers::export_harvest_history_csv),
        )
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::{create_app, services::HarvestHistoryService, AppState, Config};
    use std::sync::Arc;

    fn app() -> Router {
        let state = AppState {
            harvest: HarvestHistoryService::new(shared::demo_farmer_section_harvest()),
            config: Arc::new(Config::default()),
        };
        create_app(state)
    }

    async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let (status, bytes) = send(request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get("/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["records"], 6);
    }

    #[tokio::test]
    async fn test_list_records() {
        let (status, body) = get("/api/v1/farmer-section-harvest").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["items"].as_array().unwrap().len(), 6);
        assert_eq!(json["items"][0]["history"].as_array().unwrap().len(), 56);
    }

    #[tokio::test]
    async fn test_list_records_filtered() {
        let (status, body) = get("/api/v1/farmer-section-harvest?itemId=item-cucumber").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        let items = json["items"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|r| r["itemId"] == "item-cucumber"));
    }

    #[tokio::test]
    async fn test_get_record_and_not_found() {
        let (status, body) = get("/api/v1/farmer-section-harvest/fsh-tomato-b").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["id"], "fsh-tomato-b");

        let (status, body) = get("/api/v1/farmer-section-harvest/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_summary() {
        let (status, body) = get("/api/v1/farmer-section-harvest/fsh-cucumber-a/summary").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["recordId"], "fsh-cucumber-a");
        assert_eq!(json["days"], 14);
    }

    #[tokio::test]
    async fn test_history_csv() {
        let (status, body) = get("/api/v1/farmer-section-harvest/fsh-tomato-a/history.csv").await;
        assert_eq!(status, StatusCode::OK);
        let text = String::from_utf8(body).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "date,shift,harvested_kg_per_m2");
        assert_eq!(lines.len(), 57);
        assert!(lines[1].starts_with("2025-09-22,morning,"));
    }

    #[tokio::test]
    async fn test_generate() {
        let (status, json) = post_json(
            "/api/v1/harvest-history/generate",
            json!({
                "startDate": "2025-09-22",
                "days": 7,
                "perShiftKgPerM2": { "morning": 0.5, "night": 0.1 },
                "pattern": "hump",
                "seed": "api-test"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let history = json["history"].as_array().unwrap();
        assert_eq!(history.len(), 28);
        assert_eq!(history[1]["shift"], "afternoon");
        assert_eq!(history[1]["harvestedKgPerM2"], 0.0);
    }

    #[tokio::test]
    async fn test_generate_rejects_negative_days() {
        let (status, json) = post_json(
            "/api/v1/harvest-history/generate",
            json!({ "startDate": "2025-09-22", "days": -3 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["field"], "days");
    }

    #[tokio::test]
    async fn test_generate_rejects_window_over_limit() {
        let (status, json) = post_json(
            "/api/v1/harvest-history/generate",
            json!({ "startDate": "2025-09-22", "days": 10_000 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["field"], "days");
    }

    #[tokio::test]
    async fn test_generate_rejects_window_before_min_date() {
        let (status, json) = post_json(
            "/api/v1/harvest-history/generate",
            json!({ "startDate": "-262143-01-01", "days": 3 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["field"], "startDate");
    }

    #[tokio::test]
    async fn test_generate_rejects_malformed_body() {
        for body in [
            json!({ "days": 3 }),
            json!({ "startDate": "2025-09-22", "days": 3.5 }),
        ] {
            let (status, json) = post_json("/api/v1/harvest-history/generate", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
            assert_eq!(json["error"]["field"], "body");
        }
    }

    #[tokio::test]
    async fn test_root_health_matches_api_health() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["records"], 6);
    }
}
