// Pure merge function for updates.
//
// Purpose
// - Combine the existing record with the editable fields of the command.
//
// Responsibilities
// - Overwrite item_name, unit_cost, item_type, category, vendor, description.
// - Recompute total_cost from the new unit cost and the existing quantity.
// - Refresh last_modified; keep quantity, approval_status, requested_by,
//   request_date, unit_of_measurement, is_active, creation_date and notes
//   exactly as stored.
// - Never perform input or output.

use crate::modules::cost_items::core::record::CostItem;
use crate::modules::cost_items::use_cases::update_cost_item::command::UpdateCostItem;

pub fn apply_update(existing: CostItem, command: &UpdateCostItem, now: String) -> CostItem {
    CostItem {
        item_name: command.item_name.clone(),
        unit_cost: command.unit_cost,
        item_type: command.item_type.clone(),
        total_cost: command.unit_cost * existing.quantity as f64,
        category: command.category.clone(),
        vendor: command.vendor.clone(),
        description: command.description.clone(),
        last_modified: now,
        ..existing
    }
}
