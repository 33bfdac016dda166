// Pure build function for creation.
//
// Purpose
// - Turn a validated command into a complete record with creation defaults.
//
// Responsibilities
// - Quantity defaults to 1, so the initial total equals the unit cost.
// - Approval status, requester and unit of measurement take their defaults;
//   the record starts active with all three timestamps set to the same now.
// - Never perform input or output.

use crate::modules::cost_items::core::record::{
    CostItem, DEFAULT_APPROVAL_STATUS, DEFAULT_QUANTITY, DEFAULT_REQUESTED_BY,
    DEFAULT_UNIT_OF_MEASUREMENT,
};
use crate::modules::cost_items::use_cases::create_cost_item::command::CreateCostItem;

pub fn build_record(command: CreateCostItem, item_id: String, now: String) -> CostItem {
    CostItem {
        item_id,
        item_name: command.item_name,
        unit_cost: command.unit_cost,
        item_type: command.item_type,
        quantity: DEFAULT_QUANTITY,
        total_cost: command.unit_cost * DEFAULT_QUANTITY as f64,
        approval_status: DEFAULT_APPROVAL_STATUS.to_string(),
        requested_by: DEFAULT_REQUESTED_BY.to_string(),
        request_date: now.clone(),
        category: command.category,
        vendor: command.vendor,
        description: command.description,
        unit_of_measurement: DEFAULT_UNIT_OF_MEASUREMENT.to_string(),
        is_active: true,
        creation_date: now.clone(),
        last_modified: now,
        notes: String::new(),
    }
}
