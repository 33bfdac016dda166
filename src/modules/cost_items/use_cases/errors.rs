// Error kinds shared by the cost item use cases.
//
// Purpose
// - Name the three terminal failure classes: validation, selection, storage.
//
// Responsibilities
// - Validation failures abort before any storage write.
// - Storage and decode failures propagate untouched; nothing is retried.

use crate::modules::cost_items::core::codec::DecodeError;
use crate::modules::cost_items::core::selection::SelectionError;
use crate::shared::infrastructure::worksheet::WorksheetError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("item name is required")]
    MissingItemName,

    #[error("valid unit cost is required")]
    InvalidUnitCost,

    #[error("item type is required")]
    MissingItemType,
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Storage(#[from] WorksheetError),

    #[error("stored row is corrupt: {0}")]
    CorruptRow(#[from] DecodeError),
}
