//! Document endpoints: validate, preview, CRUD, status, print and Word export.

use crate::{
    api::{
        AppState,
        error::ApiError,
        extract::{Json, Path, Query},
        response::ApiResponse,
    },
    core::{
        dates::today,
        documents,
        export::{WORD_CONTENT_TYPE, export_file_name, print_html, word_document},
        model::{DocumentForm, DocumentKind, DocumentRecord, DocumentStatus, DocumentSummary},
        render::{RenderedDocument, render_document},
        validation::{ValidationReport, validate_form},
    },
};
use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Json as ResponseJson},
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};

/// `?kind=` filter of the document list
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub kind: Option<String>,
}

/// Body of a status change
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: DocumentStatus,
}

/// Id of a newly saved document
#[derive(Debug, Serialize)]
pub struct SavedDocument {
    pub id: i64,
}

/// Live preview of an unsaved form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub document: RenderedDocument,
    pub html: String,
    pub validation: ValidationReport,
}

/// POST /api/documents/validate
pub async fn validate(
    Json(form): Json<DocumentForm>,
) -> ResponseJson<ApiResponse<ValidationReport>> {
    ResponseJson(ApiResponse::success(validate_form(&form, today())))
}

/// POST /api/documents/preview
/// Renders whatever has been typed so far, valid or not
pub async fn preview(Json(form): Json<DocumentForm>) -> ResponseJson<ApiResponse<Preview>> {
    let document = render_document(&form);
    let html = print_html(&document);
    ResponseJson(ApiResponse::success(Preview {
        document,
        html,
        validation: validate_form(&form, today()),
    }))
}

/// GET /api/documents?kind=
pub async fn list_documents(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<ResponseJson<ApiResponse<Vec<DocumentSummary>>>, ApiError> {
    let kind = match query.kind.as_deref() {
        None | Some("") => None,
        Some(value) => Some(value.parse::<DocumentKind>().map_err(ApiError::BadRequest)?),
    };

    let summaries = documents::list_documents(&state.db, kind).await?;
    Ok(ResponseJson(ApiResponse::success(summaries)))
}

/// POST /api/documents
pub async fn create_document(
    State(state): State<AppState>,
    Json(form): Json<DocumentForm>,
) -> Result<(StatusCode, ResponseJson<ApiResponse<SavedDocument>>), ApiError> {
    let id = documents::save_document(&state.db, &form).await?;
    Ok((
        StatusCode::CREATED,
        ResponseJson(ApiResponse::success(SavedDocument { id })),
    ))
}

/// GET /api/documents/{id}
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<DocumentRecord>>, ApiError> {
    let record = documents::fetch_document(&state.db, id).await?;
    Ok(ResponseJson(ApiResponse::success(record)))
}

/// PUT /api/documents/{id}
/// Replaces the document and returns it as stored
pub async fn update_document(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<DocumentForm>,
) -> Result<ResponseJson<ApiResponse<DocumentRecord>>, ApiError> {
    documents::update_document(&state.db, id, &form).await?;
    let record = documents::fetch_document(&state.db, id).await?;
    Ok(ResponseJson(ApiResponse::success(record)))
}

/// DELETE /api/documents/{id}
pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    documents::delete_document(&state.db, id).await?;
    Ok(ResponseJson(ApiResponse::success(())))
}

/// PUT /api/documents/{id}/status
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update): Json<StatusUpdate>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    documents::set_status(&state.db, id, update.status).await?;
    Ok(ResponseJson(ApiResponse::success(())))
}

async fn render_stored(state: &AppState, id: i64) -> Result<(DocumentKind, RenderedDocument), ApiError> {
    let record = documents::fetch_document(&state.db, id).await?;
    Ok((record.form.kind(), render_document(&record.form)))
}

/// GET /api/documents/{id}/print
/// Self-contained page for the print window
pub async fn print_document(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, ApiError> {
    let (_, rendered) = render_stored(&state, id).await?;
    Ok(Html(print_html(&rendered)))
}

/// GET /api/documents/{id}/export/word
pub async fn export_word(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let (kind, rendered) = render_stored(&state, id).await?;
    let disposition = format!("attachment; filename=\"{}\"", export_file_name(kind, id));
    Ok((
        [
            (header::CONTENT_TYPE, WORD_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        word_document(&rendered),
    ))
}

/// Routes under `/api/documents`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/documents", get(list_documents).post(create_document))
        .route("/documents/validate", post(validate))
        .route("/documents/preview", post(preview))
        .route(
            "/documents/{id}",
            get(get_document).put(update_document).delete(delete_document),
        )
        .route("/documents/{id}/status", put(set_status))
        .route("/documents/{id}/print", get(print_document))
        .route("/documents/{id}/export/word", get(export_word))
}
