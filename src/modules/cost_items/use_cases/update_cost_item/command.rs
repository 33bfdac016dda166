// Command data type for updating a cost item.
//
// Purpose
// - Express user intent to overwrite the six editable fields of a selected
//   record. Everything else on the row is preserved by the merge.
//
// Responsibilities
// - Carry the explicit selection (id + row index) the presentation layer owns.
// - Share the presence and type checks with creation.

use crate::modules::cost_items::core::selection::RecordSelection;
use crate::modules::cost_items::use_cases::errors::ValidationError;

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCostItem {
    pub selection: RecordSelection,
    pub item_name: String,
    pub unit_cost: f64,
    pub item_type: String,
    pub category: String,
    pub vendor: String,
    pub description: String,
}

impl UpdateCostItem {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.item_name.trim().is_empty() {
            return Err(ValidationError::MissingItemName);
        }
        if !(self.unit_cost > 0.0) {
            return Err(ValidationError::InvalidUnitCost);
        }
        if self.item_type.trim().is_empty() {
            return Err(ValidationError::MissingItemType);
        }
        Ok(())
    }
}
