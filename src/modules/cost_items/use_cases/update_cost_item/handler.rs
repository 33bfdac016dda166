// Handler for the update use case.
//
// Purpose
// - Overwrite the editable columns of a selected record in place.
//
// Responsibilities
// - Validate the incoming fields before any storage access.
// - Re-read the selected row and verify the selection still matches what the
//   sheet holds; a soft-deleted or replaced row is a selection error, not a
//   silent overwrite.

use crate::modules::cost_items::core::codec::{decode, encode};
use crate::modules::cost_items::core::selection::SelectionError;
use crate::modules::cost_items::use_cases::errors::ApplicationError;
use crate::modules::cost_items::use_cases::update_cost_item::apply::apply_update;
use crate::modules::cost_items::use_cases::update_cost_item::command::UpdateCostItem;
use crate::shared::infrastructure::worksheet::WorksheetStore;
use std::sync::Arc;

pub struct UpdateCostItemHandler<TStore>
where
    TStore: WorksheetStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UpdateCostItemHandler<TStore>
where
    TStore: WorksheetStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: UpdateCostItem, now: String) -> Result<(), ApplicationError> {
        command.validate()?;

        let selection = &command.selection;
        let rows = self.store.read_all_rows().await?;
        let row = rows
            .get(selection.row_index.saturating_sub(1) as usize)
            .ok_or(SelectionError::NoRecordAtRow {
                row_index: selection.row_index,
            })?;

        let existing = decode(row)?.ok_or(SelectionError::NoRecordAtRow {
            row_index: selection.row_index,
        })?;
        selection.verify(&existing.item_id)?;

        let updated = apply_update(existing, &command, now);
        self.store
            .write_row(selection.row_index, encode(&updated))
            .await?;

        tracing::info!(
            item_id = %selection.item_id,
            row_index = selection.row_index,
            "cost item updated"
        );
        Ok(())
    }
}
