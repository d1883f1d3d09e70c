//! Reference data endpoints feeding the cascading address and property dropdowns.

use crate::{
    api::{
        AppState,
        error::ApiError,
        extract::{Path, Query},
        response::ApiResponse,
    },
    config::DefaultsConfig,
    core::reference,
};
use axum::{
    Router,
    extract::State,
    response::Json as ResponseJson,
    routing::get,
};
use serde::{Deserialize, Serialize};

/// One dropdown option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupItem {
    pub id: i64,
    pub name: String,
}

/// `?districtId=` filter for offices
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeQuery {
    pub district_id: Option<i64>,
}

/// GET /api/reference/districts
pub async fn districts(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<LookupItem>>>, ApiError> {
    let items = reference::list_districts(&state.db)
        .await?
        .into_iter()
        .map(|district| LookupItem {
            id: district.id,
            name: district.name,
        })
        .collect();
    Ok(ResponseJson(ApiResponse::success(items)))
}

/// GET /api/reference/districts/{id}/taluks
pub async fn taluks(
    State(state): State<AppState>,
    Path(district_id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<Vec<LookupItem>>>, ApiError> {
    let items = reference::list_taluks(&state.db, district_id)
        .await?
        .into_iter()
        .map(|taluk| LookupItem {
            id: taluk.id,
            name: taluk.name,
        })
        .collect();
    Ok(ResponseJson(ApiResponse::success(items)))
}

/// GET /api/reference/taluks/{id}/villages
pub async fn villages(
    State(state): State<AppState>,
    Path(taluk_id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<Vec<LookupItem>>>, ApiError> {
    let items = reference::list_villages(&state.db, taluk_id)
        .await?
        .into_iter()
        .map(|village| LookupItem {
            id: village.id,
            name: village.name,
        })
        .collect();
    Ok(ResponseJson(ApiResponse::success(items)))
}

/// GET /api/reference/sub-registrar-offices?districtId=
pub async fn sub_registrar_offices(
    State(state): State<AppState>,
    Query(query): Query<OfficeQuery>,
) -> Result<ResponseJson<ApiResponse<Vec<LookupItem>>>, ApiError> {
    let items = reference::list_sub_registrar_offices(&state.db, query.district_id)
        .await?
        .into_iter()
        .map(|office| LookupItem {
            id: office.id,
            name: office.name,
        })
        .collect();
    Ok(ResponseJson(ApiResponse::success(items)))
}

/// GET /api/reference/defaults
/// Attribution values prefilled into new forms
pub async fn defaults(State(state): State<AppState>) -> ResponseJson<ApiResponse<DefaultsConfig>> {
    ResponseJson(ApiResponse::success(state.defaults.as_ref().clone()))
}

/// Routes under `/api/reference`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reference/districts", get(districts))
        .route("/reference/districts/{id}/taluks", get(taluks))
        .route("/reference/taluks/{id}/villages", get(villages))
        .route("/reference/sub-registrar-offices", get(sub_registrar_offices))
        .route("/reference/defaults", get(defaults))
}
