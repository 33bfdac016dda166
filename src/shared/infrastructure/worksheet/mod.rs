// Worksheet storage port.
//
// Purpose
// - Describe the host worksheet as an abstract capability the use cases code against.
//
// Responsibilities
// - Expose the five calls the record operations need: used row count, full range
//   read, row write, single cell read, single cell write.
// - Keep the core independent of any concrete host by coding against a trait.
//
// Boundaries
// - Row indices are 1-based; row 1 is the header row. Column indices are 0-based
//   and follow the fixed A-Q layout defined by the record module.
// - No concrete input or output here. Adapters implement this trait.
//
// Testing guidance
// - Use the in memory implementation for tests and local development.

pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorksheetError {
    #[error("worksheet backend error: {0}")]
    Backend(String),
}

/// A single worksheet cell. The host hands back untyped values; this enum is
/// the typed boundary the codec validates against.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Blank,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Text content of the cell. Blank reads as the empty string, matching how
    /// the host reports untouched cells inside the used range.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Blank => String::new(),
        }
    }

    /// Liveness check used by the decode filter. Hand-edited sheets sometimes
    /// carry the literal text "true" instead of a boolean cell.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Bool(b) => *b,
            CellValue::Number(n) => *n != 0.0,
            CellValue::Text(s) => s.trim().eq_ignore_ascii_case("true"),
            CellValue::Blank => false,
        }
    }
}

pub type Row = Vec<CellValue>;

#[async_trait]
pub trait WorksheetStore: Send + Sync {
    /// Number of rows in the used range, header included. Zero for an empty sheet.
    async fn used_row_count(&self) -> Result<u32, WorksheetError>;

    /// Every row of the used range, header first. Index 0 of the result is row 1.
    async fn read_all_rows(&self) -> Result<Vec<Row>, WorksheetError>;

    async fn write_row(&self, row_index: u32, row: Row) -> Result<(), WorksheetError>;

    async fn read_cell(&self, row_index: u32, column_index: usize)
    -> Result<CellValue, WorksheetError>;

    async fn write_cell(
        &self,
        row_index: u32,
        column_index: usize,
        value: CellValue,
    ) -> Result<(), WorksheetError>;
}

#[cfg(test)]
mod cell_value_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CellValue::text("Pen"), "Pen")]
    #[case(CellValue::Number(2.5), "2.5")]
    #[case(CellValue::Bool(true), "true")]
    #[case(CellValue::Blank, "")]
    fn it_should_read_cells_as_text(#[case] cell: CellValue, #[case] expected: &str) {
        assert_eq!(cell.as_text(), expected);
    }

    #[rstest]
    #[case(CellValue::Bool(true), true)]
    #[case(CellValue::Bool(false), false)]
    #[case(CellValue::Number(1.0), true)]
    #[case(CellValue::Number(0.0), false)]
    #[case(CellValue::text("TRUE"), true)]
    #[case(CellValue::text("false"), false)]
    #[case(CellValue::text("yes"), false)]
    #[case(CellValue::Blank, false)]
    fn it_should_evaluate_cell_truthiness(#[case] cell: CellValue, #[case] expected: bool) {
        assert_eq!(cell.is_truthy(), expected);
    }
}
