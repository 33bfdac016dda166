// Command data type for creating a cost item.
//
// Purpose
// - Express user intent to add a record with the six user-entered fields.
//
// Responsibilities
// - Carry input data for the build step to validate and turn into a record.
// - Be independent of transport layer details (not tied to HTTP).

use crate::modules::cost_items::use_cases::errors::ValidationError;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCostItem {
    pub item_name: String,
    pub unit_cost: f64,
    pub item_type: String,
    pub category: String,
    pub vendor: String,
    pub description: String,
}

impl CreateCostItem {
    /// Presence and type checks only; runs before any storage write.
    /// The comparison rejects NaN along with zero and negative costs.
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
