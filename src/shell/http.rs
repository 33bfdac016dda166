use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::cost_items::use_cases::create_cost_item::inbound::http as create_http;
use crate::modules::cost_items::use_cases::delete_cost_item::inbound::http as delete_http;
use crate::modules::cost_items::use_cases::list_cost_items::inbound::http as list_http;
use crate::modules::cost_items::use_cases::update_cost_item::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/create-cost-item", post(create_http::handle))
        .route("/list-cost-items", get(list_http::handle))
        .route("/update-cost-item", post(update_http::handle))
        .route("/delete-cost-item", post(delete_http::handle))
        .with_state(state)
}
