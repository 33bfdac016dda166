// RecordSelection names the record an update or delete targets.
//
// Purpose
// - Replace the old global "selected record" with an explicit value the
//   presentation layer owns and passes into each operation.
//
// Responsibilities
// - Carry the pair that addresses a record: its id and its 1-based row index.
//   Handlers re-read the row and refuse to act when the pair no longer lines
//   up with what the sheet holds.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordSelection {
    pub item_id: String,
    pub row_index: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no active record at row {row_index}")]
    NoRecordAtRow { row_index: u32 },

    #[error("row {row_index} holds {found}, not {expected}")]
    IdMismatch {
        row_index: u32,
        expected: String,
        found: String,
    },
}

impl RecordSelection {
    /// Checks the id read back from the sheet against this selection.
    pub fn verify(&self, id_at_row: &str) -> Result<(), SelectionError> {
        if id_at_row.is_empty() {
            return Err(SelectionError::NoRecordAtRow {
                row_index: self.row_index,
            });
        }
        if id_at_row != self.item_id {
            return Err(SelectionError::IdMismatch {
                row_index: self.row_index,
                expected: self.item_id.clone(),
                found: id_at_row.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod record_selection_tests {
    use super::*;
    use rstest::rstest;

    fn selection() -> RecordSelection {
        RecordSelection {
            item_id: "ITEM2024001".to_string(),
            row_index: 2,
        }
    }

    #[rstest]
    fn it_should_accept_a_matching_id() {
        assert!(selection().verify("ITEM2024001").is_ok());
    }

    #[rstest]
    fn it_should_reject_an_empty_row() {
        assert_eq!(
            selection().verify(""),
            Err(SelectionError::NoRecordAtRow { row_index: 2 })
        );
    }

    #[rstest]
    fn it_should_reject_a_stale_selection() {
        assert_eq!(
            selection().verify("ITEM2024009"),
            Err(SelectionError::IdMismatch {
                row_index: 2,
                expected: "ITEM2024001".to_string(),
                found: "ITEM2024009".to_string(),
            })
        );
    }
}
