// Codec between a CostItem and its positional worksheet row.
//
// Purpose
// - encode: produce the fixed-order 17-cell row for a record.
// - decode: the inverse mapping, validated at the serialization boundary.
//
// Responsibilities
// - Reject rows of the wrong width instead of indexing past the end.
// - Filter rather than fail: a well-formed row without an id, or flagged
//   inactive, decodes to None and is skipped by listing logic.
//
// Boundaries
// - No input or output. No side effects.
//
// Testing guidance
// - decode(encode(record)) must round-trip every visible record.

use crate::modules::cost_items::core::record::{COLUMN_COUNT, CostItem, col};
use crate::shared::infrastructure::worksheet::{CellValue, Row};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("row has {actual} cells, expected {COLUMN_COUNT}")]
    WrongWidth { actual: usize },

    #[error("cell in column {column} is not a number")]
    InvalidNumber { column: usize },
}

pub fn encode(record: &CostItem) -> Row {
    vec![
        CellValue::text(record.item_id.clone()),
        CellValue::text(record.item_name.clone()),
        CellValue::Number(record.unit_cost),
        CellValue::text(record.item_type.clone()),
        CellValue::Number(record.quantity as f64),
        CellValue::Number(record.total_cost),
        CellValue::text(record.approval_status.clone()),
        CellValue::text(record.requested_by.clone()),
        CellValue::text(record.request_date.clone()),
        CellValue::text(record.category.clone()),
        CellValue::text(record.vendor.clone()),
        CellValue::text(record.description.clone()),
        CellValue::text(record.unit_of_measurement.clone()),
        CellValue::Bool(record.is_active),
        CellValue::text(record.creation_date.clone()),
        CellValue::text(record.last_modified.clone()),
        CellValue::text(record.notes.clone()),
    ]
}

/// Decodes one data row. `Ok(None)` means the row is not visible: either the
/// id cell is empty or the active flag is off. That is a filter, not an error.
pub fn decode(row: &[CellValue]) -> Result<Option<CostItem>, DecodeError> {
    if row.len() != COLUMN_COUNT {
        return Err(DecodeError::WrongWidth { actual: row.len() });
    }

    let item_id = row[col::ID].as_text();
    if item_id.is_empty() || !row[col::IS_ACTIVE].is_truthy() {
        return Ok(None);
    }

    Ok(Some(CostItem {
        item_id,
        item_name: row[col::ITEM_NAME].as_text(),
        unit_cost: number_at(row, col::UNIT_COST)?,
        item_type: row[col::ITEM_TYPE].as_text(),
        quantity: number_at(row, col::QUANTITY)? as i64,
        total_cost: number_at(row, col::TOTAL_COST)?,
        approval_status: row[col::APPROVAL_STATUS].as_text(),
        requested_by: row[col::REQUESTED_BY].as_text(),
        request_date: row[col::REQUEST_DATE].as_text(),
        category: row[col::CATEGORY].as_text(),
        vendor: row[col::VENDOR].as_text(),
        description: row[col::DESCRIPTION].as_text(),
        unit_of_measurement: row[col::UNIT_OF_MEASUREMENT].as_text(),
        is_active: true,
        creation_date: row[col::CREATION_DATE].as_text(),
        last_modified: row[col::LAST_MODIFIED].as_text(),
        notes: row[col::NOTES].as_text(),
    }))
}

fn number_at(row: &[CellValue], column: usize) -> Result<f64, DecodeError> {
    match &row[column] {
        CellValue::Number(n) => Ok(*n),
        CellValue::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| DecodeError::InvalidNumber { column }),
        CellValue::Bool(_) | CellValue::Blank => Err(DecodeError::InvalidNumber { column }),
    }
}
