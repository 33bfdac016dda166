// CostItem is the canonical record stored as one worksheet row.
//
// Purpose
// - Replace the positional array the sheet holds with a named-field structure.
// - Pin the persisted schema: a fixed 17-column block (A-Q) with the header in
//   row 1. Column order must never change; existing sheets depend on it.
//
// Boundaries
// - This file must not perform input or output.
// - Timestamps are carried as ISO-8601 strings; the shell produces them.

/// Column positions of the persisted layout. Index = worksheet column.
pub mod col {
    pub const ID: usize = 0;
    pub const ITEM_NAME: usize = 1;
    pub const UNIT_COST: usize = 2;
    pub const ITEM_TYPE: usize = 3;
    pub const QUANTITY: usize = 4;
    pub const TOTAL_COST: usize = 5;
    pub const APPROVAL_STATUS: usize = 6;
    pub const REQUESTED_BY: usize = 7;
    pub const REQUEST_DATE: usize = 8;
    pub const CATEGORY: usize = 9;
    pub const VENDOR: usize = 10;
    pub const DESCRIPTION: usize = 11;
    pub const UNIT_OF_MEASUREMENT: usize = 12;
    pub const IS_ACTIVE: usize = 13;
    pub const CREATION_DATE: usize = 14;
    pub const LAST_MODIFIED: usize = 15;
    pub const NOTES: usize = 16;
}

pub const COLUMN_COUNT: usize = 17;

pub const HEADER_TITLES: [&str; COLUMN_COUNT] = [
    "ID",
    "Item Name",
    "Unit Cost",
    "Item Type",
    "Quantity",
    "Total Cost",
    "Approval Status",
    "Requested By",
    "Request Date",
    "Category",
    "Vendor",
    "Description",
    "Unit of Measurement",
    "Is Active",
    "Creation Date",
    "Last Modified",
    "Notes",
];

pub const DEFAULT_QUANTITY: i64 = 1;
pub const DEFAULT_APPROVAL_STATUS: &str = "Pending";
pub const DEFAULT_REQUESTED_BY: &str = "User";
pub const DEFAULT_UNIT_OF_MEASUREMENT: &str = "Each";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CostItem {
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
    pub is_active: bool,
    pub creation_date: String,
    pub last_modified: String,
    pub notes: String,
}

#[cfg(test)]
mod cost_item_record_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_keep_the_header_aligned_with_the_column_layout() {
        assert_eq!(HEADER_TITLES.len(), COLUMN_COUNT);
        assert_eq!(HEADER_TITLES[col::ID], "ID");
        assert_eq!(HEADER_TITLES[col::IS_ACTIVE], "Is Active");
        assert_eq!(HEADER_TITLES[col::NOTES], "Notes");
    }
}
