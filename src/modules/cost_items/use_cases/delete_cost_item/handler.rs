// Handler for the delete use case.
//
// Purpose
// - Soft-delete a selected record by flipping its active flag in place.
//
// Responsibilities
// - Verify the selection against the id cell before writing; a row that moved
//   on or was already cleared is a selection error.
// - Never remove the row. Row indices are the only link between a record and
//   its storage location, so positions must stay stable forever.

use crate::modules::cost_items::core::record::col;
use crate::modules::cost_items::core::selection::RecordSelection;
use crate::modules::cost_items::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::worksheet::{CellValue, WorksheetStore};
use std::sync::Arc;

pub struct DeleteCostItemHandler<TStore>
where
    TStore: WorksheetStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteCostItemHandler<TStore>
where
    TStore: WorksheetStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, selection: RecordSelection) -> Result<(), ApplicationError> {
        let id_at_row = self
            .store
            .read_cell(selection.row_index, col::ID)
            .await?
            .as_text();
        selection.verify(&id_at_row)?;

        self.store
            .write_cell(selection.row_index, col::IS_ACTIVE, CellValue::Bool(false))
            .await?;

        tracing::info!(
            item_id = %selection.item_id,
            row_index = selection.row_index,
            "cost item soft-deleted"
        );
        Ok(())
    }
}
