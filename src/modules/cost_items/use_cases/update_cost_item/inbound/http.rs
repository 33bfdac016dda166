use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;

use crate::modules::cost_items::core::selection::RecordSelection;
use crate::modules::cost_items::use_cases::errors::ApplicationError;
use crate::modules::cost_items::use_cases::update_cost_item::command::UpdateCostItem;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateCostItemBody {
    pub item_id: String,
    pub row_index: u32,
    pub item_name: String,
    pub unit_cost: f64,
    pub item_type: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub description: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<UpdateCostItemBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateCostItem {
        selection: RecordSelection {
            item_id: body.item_id,
            row_index: body.row_index,
        },
        item_name: body.item_name,
        unit_cost: body.unit_cost,
        item_type: body.item_type,
        category: body.category,
        vendor: body.vendor,
        description: body.description,
    };
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    match state.update_handler.handle(command, now).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(ApplicationError::Validation(err)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()).into_response()
        }
        Err(ApplicationError::Selection(err)) => {
            (StatusCode::CONFLICT, err.to_string()).into_response()
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
