// Read model handed to the presentation layer.
//
// Purpose
// - Pair a decoded record with the 1-based row index that addresses it, so the
//   caller can hand the pair back as a RecordSelection for update and delete.

use crate::modules::cost_items::core::record::CostItem;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CostItemView {
    pub row_index: u32,
    pub item_id: String,
    pub item_name: String,
    pub unit_cost: f64,
    pub item_type: String,
    pub quantity: i64,
    pub total_cost: f64,
    pub approval_status: String,
    pub requested_by: String,
    pub request_date: String,
    pub category: String,
    pub vendor: String,
    pub description: String,
    pub unit_of_measurement: String,
    pub creation_date: String,
    pub last_modified: String,
    pub notes: String,
}

impl CostItemView {
    pub fn from_record(row_index: u32, record: CostItem) -> Self {
        Self {
            row_index,
            item_id: record.item_id,
            item_name: record.item_name,
            unit_cost: record.unit_cost,
            item_type: record.item_type,
            quantity: record.quantity,
            total_cost: record.total_cost,
            approval_status: record.approval_status,
            requested_by: record.requested_by,
            request_date: record.request_date,
            category: record.category,
            vendor: record.vendor,
            description: record.description,
            unit_of_measurement: record.unit_of_measurement,
            creation_date: record.creation_date,
            last_modified: record.last_modified,
            notes: record.notes,
        }
    }

    /// Case-insensitive match over the fields the search box covers.
    pub fn matches(&self, search: &str) -> bool {
        let needle = search.to_lowercase();
        [
            &self.item_id,
            &self.item_name,
            &self.item_type,
            &self.category,
            &self.vendor,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}
