use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::cost_items::core::selection::RecordSelection;
use crate::modules::cost_items::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteCostItemBody {
    pub item_id: String,
    pub row_index: u32,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DeleteCostItemBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let selection = RecordSelection {
        item_id: body.item_id,
        row_index: body.row_index,
    };

    match state.delete_handler.handle(selection).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(ApplicationError::Selection(err)) => {
            (StatusCode::CONFLICT, err.to_string()).into_response()
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
