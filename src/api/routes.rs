use crate::api::api_error::APIError;
use crate::api::auth::Authorized;
use crate::api::model::{EditRecordRequest, ListRecordsQuery, ListRecordsResult, TxtRecordRequest};
use crate::api::server::AppState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use serde_json::json;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub(super) fn new(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(health_check))
        .route("/set_txt", post(set_txt))
        .route("/delete_txt", post(delete_txt))
        .route("/edit_txt", post(edit_txt))
        .route("/list_txt", get(list_txt))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(state.config.api_timeout))
        .with_state(state)
}

#[allow(clippy::unused_async)]
async fn health_check() -> impl IntoResponse {
    Json(json!({"ok":"healthy"}))
}

async fn set_txt(
    State(state): State<AppState>,
    _: Authorized,
    WithRejection(Json(payload), _): WithRejection<Json<TxtRecordRequest>, APIError>,
) -> Result<Json<TxtRecordRequest>, APIError> {
    state
        .txt_store
        .create_txt(&payload.domain, &payload.key, &payload.value)
        .await?;
    tracing::info!("set TXT \"{}\" for \"{}\"", payload.key, payload.domain);
    Ok(Json(payload))
}

async fn delete_txt(
    State(state): State<AppState>,
    _: Authorized,
    WithRejection(Json(payload), _): WithRejection<Json<TxtRecordRequest>, APIError>,
) -> Result<Json<TxtRecordRequest>, APIError> {
    state
        .txt_store
        .delete_txt(&payload.domain, &payload.key, &payload.value)
        .await?;
    tracing::info!("deleted TXT \"{}\" for \"{}\"", payload.key, payload.domain);
    Ok(Json(payload))
}

async fn edit_txt(
    State(state): State<AppState>,
    _: Authorized,
    WithRejection(Json(payload), _): WithRejection<Json<EditRecordRequest>, APIError>,
) -> Result<Json<EditRecordRequest>, APIError> {
    state
        .txt_store
        .edit_txt(
            &payload.domain,
            &payload.key,
            &payload.old_value,
            &payload.new_value,
        )
        .await?;
    tracing::info!("edited TXT \"{}\" for \"{}\"", payload.key, payload.domain);
    Ok(Json(payload))
}

async fn list_txt(
    State(state): State<AppState>,
    _: Authorized,
    WithRejection(Query(query), _): WithRejection<Query<ListRecordsQuery>, APIError>,
) -> Result<Json<ListRecordsResult>, APIError> {
    let records = state
        .txt_store
        .list_txt(&query.domain, query.key.as_deref())
        .await?;
    Ok(Json(ListRecordsResult { records }))
}
