use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{Store, StoreLayout},
    state::AppState,
};

/// Store with its layout parsed out of the stored JSON text.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreWithLayout {
    pub id: i32,
    pub name: String,
    pub branch: String,
    pub qr_code: String,
    pub layout: StoreLayout,
}

impl StoreWithLayout {
    fn from_record(store: Store) -> AppResult<Self> {
        let layout: StoreLayout = serde_json::from_str(&store.layout)
            .map_err(|err| AppError::Internal(err.into()))?;
        Ok(Self {
            id: store.id,
            name: store.name,
            branch: store.branch,
            qr_code: store.qr_code,
            layout,
        })
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(get_store))
        .route("/qr/{qr_code}", get(get_store_by_qr))
}

#[utoipa::path(
    get,
    path = "/api/store/{id}",
    params(
        ("id" = i32, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Get store", body = StoreWithLayout),
        (status = 400, description = "Non-numeric id"),
        (status = 404, description = "Store not found"),
    ),
    tag = "Stores"
)]
pub async fn get_store(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<StoreWithLayout>> {
    let store = state.storage.store(id).ok_or(AppError::NotFound("Store"))?;
    Ok(Json(StoreWithLayout::from_record(store)?))
}

#[utoipa::path(
    get,
    path = "/api/store/qr/{qr_code}",
    params(
        ("qr_code" = String, Path, description = "Store scan code")
    ),
    responses(
        (status = 200, description = "Get store by scan code", body = StoreWithLayout),
        (status = 404, description = "Store not found"),
    ),
    tag = "Stores"
)]
pub async fn get_store_by_qr(
    State(state): State<AppState>,
    Path(qr_code): Path<String>,
) -> AppResult<Json<StoreWithLayout>> {
    let store = state
        .storage
        .store_by_qr_code(&qr_code)
        .ok_or(AppError::NotFound("Store"))?;
    Ok(Json(StoreWithLayout::from_record(store)?))
}
