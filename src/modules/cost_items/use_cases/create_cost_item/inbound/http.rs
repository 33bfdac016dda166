use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{Datelike, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::cost_items::use_cases::create_cost_item::command::CreateCostItem;
use crate::modules::cost_items::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateCostItemBody {
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

#[derive(Serialize)]
pub struct CreateCostItemResponse {
    pub item_id: String,
    pub row_index: u32,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateCostItemBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateCostItem {
        item_name: body.item_name,
        unit_cost: body.unit_cost,
        item_type: body.item_type,
        category: body.category,
        vendor: body.vendor,
        description: body.description,
    };
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let year = Utc::now().year();

    match state.create_handler.handle(command, now, year).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(CreateCostItemResponse {
                item_id: created.item_id,
                row_index: created.row_index,
            }),
        )
            .into_response(),
        Err(ApplicationError::Validation(err)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()).into_response()
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
