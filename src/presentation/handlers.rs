// HTTP request handlers
use crate::application::edit_service::SubmitOutcome;
use crate::domain::form::{DashboardForm, FormAction};
use crate::infrastructure::http_response::ApiError;
use crate::infrastructure::ndjson_stream::stream_from_receiver;
use crate::presentation::app_state::AppState;
use crate::presentation::views::{DashboardDetailView, DashboardListView, StreamMessage};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct FormActionRequest {
    pub form: DashboardForm,
    pub action: FormAction,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List all dashboards as cards
pub async fn list_dashboards(State(state): State<Arc<AppState>>) -> Json<DashboardListView> {
    let dashboards = state.dashboard_service.list_dashboards().await;
    Json(DashboardListView::from_dashboards(&dashboards))
}

/// Detail view; waits for the review batch before answering
pub async fn get_dashboard(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardDetailView>, ApiError> {
    let detail = state
        .dashboard_service
        .get_dashboard_detail(&id)
        .await
        .ok_or(ApiError::NotFound(id))?;

    Ok(Json(DashboardDetailView::from(&detail)))
}

/// Detail view streamed progressively: skeleton first, analytics when loaded
pub async fn stream_dashboard(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.streaming_service.stream_dashboard(&id).await {
        Some(rx) => stream_from_receiver::<_, StreamMessage>(rx).into_response(),
        None => ApiError::NotFound(id).into_response(),
    }
}

/// Blank form for the create route
pub async fn new_dashboard_form() -> Json<DashboardForm> {
    Json(DashboardForm::default())
}

/// Form seeded from a stored dashboard
pub async fn edit_dashboard_form(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardForm>, ApiError> {
    state
        .edit_service
        .load_form(&id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

/// Apply one list edit to a posted form and hand the result back
pub async fn apply_form_action(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FormActionRequest>,
) -> Json<DashboardForm> {
    Json(state.edit_service.apply_action(request.form, request.action))
}

pub async fn create_dashboard(
    State(state): State<Arc<AppState>>,
    Json(form): Json<DashboardForm>,
) -> Result<(StatusCode, Json<SubmitOutcome>), ApiError> {
    let outcome = state.edit_service.submit_create(&form).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

pub async fn update_dashboard(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(form): Json<DashboardForm>,
) -> Result<Json<SubmitOutcome>, ApiError> {
    let outcome = state.edit_service.submit_update(&id, &form).await?;
    Ok(Json(outcome))
}

pub async fn delete_dashboard(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, ApiError> {
    state.edit_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
