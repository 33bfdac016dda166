use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListCostItemsParams {
    pub search: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListCostItemsParams>,
) -> impl IntoResponse {
    match state.list_handler.handle(params.search.as_deref()).await {
        Ok(views) => Json(views).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
