//! HTTP layer - the JSON API behind the drafting form.
//!
//! Handlers are thin: they extract the request, call into [`crate::core`] and
//! wrap the result in [`ApiResponse`]. Every failure is mapped to a status code
//! by [`ApiError`] and affects only the request that caused it.

/// Document validate, preview, CRUD and export endpoints
pub mod documents;
/// Error to HTTP response mapping
pub mod error;
/// Extractors that reject through `ApiError`
pub mod extract;
/// Reference data and attribution defaults
pub mod reference;
/// `ApiResponse` envelope
pub mod response;
/// Amount-in-words endpoint
pub mod words;

pub use error::ApiError;
pub use response::ApiResponse;

use crate::config::DefaultsConfig;
use axum::{Router, response::Json as ResponseJson, routing::get};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The one database client, passed into every persistence call
    pub db: Arc<DatabaseConnection>,
    /// Attribution defaults from config.toml
    pub defaults: Arc<DefaultsConfig>,
}

impl AppState {
    /// Creates the state from a connection and the configured defaults.
    #[must_use]
    pub fn new(db: DatabaseConnection, defaults: DefaultsConfig) -> Self {
        Self {
            db: Arc::new(db),
            defaults: Arc::new(defaults),
        }
    }
}

/// GET /api/health
pub async fn health() -> ResponseJson<ApiResponse<&'static str>> {
    ResponseJson(ApiResponse::success("ok"))
}

/// Builds the full `/api` router with request tracing and CORS.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .merge(documents::router())
        .merge(reference::router())
        .merge(words::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::{model::DocumentForm, reference::seed_reference_data},
        errors::Result,
        test_utils::{sample_reference_config, sample_sale_deed, setup_test_db},
    };
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn test_app() -> Result<Router> {
        let db = setup_test_db().await?;
        seed_reference_data(&db, &sample_reference_config()).await?;
        let defaults = DefaultsConfig {
            typist_name: "செல்வி".to_string(),
            typist_office: "மதுரை ஆவண எழுத்தர் அலுவலகம்".to_string(),
            sro_office: String::new(),
        };
        Ok(router(AppState::new(db, defaults)))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let (status, bytes) = send(app, request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, form: &DocumentForm) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(form).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() -> Result<()> {
        let app = test_app().await?;
        let (status, body) = send_json(&app, get_request("/api/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], "ok");
        Ok(())
    }

    #[tokio::test]
    async fn test_validate_reports_mismatch_without_saving() -> Result<()> {
        let app = test_app().await?;
        let mut deed = sample_sale_deed();
        deed.payments[0].amount = "200000".to_string();
        let form = DocumentForm::SaleDeed(deed);

        let (status, body) =
            send_json(&app, json_request("POST", "/api/documents/validate", &form)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["isValid"], false);
        assert_eq!(body["data"]["firstInvalidSection"], "payment");
        let message = body["data"]["errors"]["payment"][0].as_str().unwrap();
        assert!(message.contains("200000.00") && message.contains("250000.00"));

        let (_, list) = send_json(&app, get_request("/api/documents")).await;
        assert_eq!(list["data"].as_array().unwrap().len(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_save_is_unprocessable() -> Result<()> {
        let app = test_app().await?;
        let mut deed = sample_sale_deed();
        deed.buyers.clear();
        let form = DocumentForm::SaleDeed(deed);

        let (status, body) = send_json(&app, json_request("POST", "/api/documents", &form)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert_eq!(body["data"]["firstInvalidSection"], "buyers");
        Ok(())
    }

    #[tokio::test]
    async fn test_save_fetch_print_and_export() -> Result<()> {
        let app = test_app().await?;
        let form = DocumentForm::SaleDeed(sample_sale_deed());

        let (status, body) = send_json(&app, json_request("POST", "/api/documents", &form)).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["data"]["id"].as_i64().unwrap();

        let (status, body) = send_json(&app, get_request(&format!("/api/documents/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "draft");
        assert_eq!(body["data"]["form"]["kind"], "sale_deed");
        assert_eq!(body["data"]["form"]["documentDate"], "15/06/2024");

        let (status, html) = send(&app, get_request(&format!("/api/documents/{id}/print"))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(html).unwrap().contains("<h1>கிரைய சாசனம்</h1>"));

        let response = app
            .clone()
            .oneshot(get_request(&format!("/api/documents/{id}/export/word")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/msword"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            format!("attachment; filename=\"sale_deed_{id}.doc\"").as_str()
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_status_update_and_delete() -> Result<()> {
        let app = test_app().await?;
        let form = DocumentForm::SaleDeed(sample_sale_deed());
        let (_, body) = send_json(&app, json_request("POST", "/api/documents", &form)).await;
        let id = body["data"]["id"].as_i64().unwrap();

        let request = Request::builder()
            .method("PUT")
            .uri(format!("/api/documents/{id}/status"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"status":"final"}"#))
            .unwrap();
        let (status, _) = send_json(&app, request).await;
        assert_eq!(status, StatusCode::OK);

        let (_, list) = send_json(&app, get_request("/api/documents?kind=sale_deed")).await;
        assert_eq!(list["data"][0]["status"], "final");
        assert_eq!(list["data"][0]["firstParty"], "முருகன்");

        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/api/documents/{id}"))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send_json(&app, request).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send_json(&app, get_request(&format!("/api/documents/{id}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        Ok(())
    }

    #[tokio::test]
    async fn test_undecodable_body_keeps_envelope() -> Result<()> {
        let app = test_app().await?;
        let request = Request::builder()
            .method("POST")
            .uri("/api/documents")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"kind":"gift_deed"}"#))
            .unwrap();

        let (status, body) = send_json(&app, request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("deserialize"));
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_id_is_bad_request() -> Result<()> {
        let app = test_app().await?;

        let (status, body) = send_json(&app, get_request("/api/documents/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("abc"));

        let (status, body) =
            send_json(&app, get_request("/api/reference/districts/x/taluks")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_kind_filter_is_bad_request() -> Result<()> {
        let app = test_app().await?;
        let (status, _) = send_json(&app, get_request("/api/documents?kind=gift_deed")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn test_preview_renders_unsaved_form() -> Result<()> {
        let app = test_app().await?;
        let form = DocumentForm::SaleDeed(sample_sale_deed());

        let (status, body) =
            send_json(&app, json_request("POST", "/api/documents/preview", &form)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["document"]["title"], "கிரைய சாசனம்");
        assert!(body["data"]["html"].as_str().unwrap().starts_with("<!DOCTYPE html>"));
        assert_eq!(body["data"]["validation"]["isValid"], true);
        Ok(())
    }

    #[tokio::test]
    async fn test_words_endpoint() -> Result<()> {
        let app = test_app().await?;

        let (_, body) = send_json(&app, get_request("/api/words?amount=250000")).await;
        assert_eq!(
            body["data"]["tamilRupees"],
            "ரூபாய் இரண்டு லட்சத்து ஐம்பது ஆயிரம் மட்டும்"
        );
        assert_eq!(body["data"]["english"], "Two Lakh Fifty Thousand");

        let (status, body) = send_json(&app, get_request("/api/words?amount=abc")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["tamil"], "தவறான தொகை");
        assert_eq!(body["data"]["englishRupees"], "Invalid amount");
        Ok(())
    }

    #[tokio::test]
    async fn test_reference_cascade() -> Result<()> {
        let app = test_app().await?;

        let (_, districts) = send_json(&app, get_request("/api/reference/districts")).await;
        assert_eq!(districts["data"][0]["name"], "Madurai");
        let madurai_id = districts["data"][0]["id"].as_i64().unwrap();

        let (_, taluks) = send_json(
            &app,
            get_request(&format!("/api/reference/districts/{madurai_id}/taluks")),
        )
        .await;
        assert_eq!(taluks["data"][0]["name"], "Madurai North");
        let taluk_id = taluks["data"][0]["id"].as_i64().unwrap();

        let (_, villages) = send_json(
            &app,
            get_request(&format!("/api/reference/taluks/{taluk_id}/villages")),
        )
        .await;
        assert_eq!(villages["data"].as_array().unwrap().len(), 2);

        let (_, offices) = send_json(
            &app,
            get_request(&format!(
                "/api/reference/sub-registrar-offices?districtId={madurai_id}"
            )),
        )
        .await;
        assert_eq!(offices["data"][0]["name"], "Thallakulam");

        let (_, defaults) = send_json(&app, get_request("/api/reference/defaults")).await;
        assert_eq!(defaults["data"]["typistName"], "செல்வி");
        Ok(())
    }
}
