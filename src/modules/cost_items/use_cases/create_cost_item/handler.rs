// Handler for the create use case.
//
// Purpose
// - Validate, locate the next free row, build the record, write it.
//
// Responsibilities
// - The id sequence and the target row both derive from the used row count at
//   the moment of creation: with the header in row 1, a sheet holding n rows
//   takes its n-th record at row n + 1 under id sequence n.
// - Abort before touching storage when validation fails.

use crate::modules::cost_items::core::codec::encode;
use crate::modules::cost_items::core::locator::{generate_item_id, next_row_index};
use crate::modules::cost_items::use_cases::create_cost_item::build::build_record;
use crate::modules::cost_items::use_cases::create_cost_item::command::CreateCostItem;
use crate::modules::cost_items::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::worksheet::WorksheetStore;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CreatedCostItem {
    pub item_id: String,
    pub row_index: u32,
}

pub struct CreateCostItemHandler<TStore>
where
    TStore: WorksheetStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateCostItemHandler<TStore>
where
    TStore: WorksheetStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: CreateCostItem,
        now: String,
        year: i32,
    ) -> Result<CreatedCostItem, ApplicationError> {
        command.validate()?;

        let used = self.store.used_row_count().await?;
        let row_index = next_row_index(used);
        let item_id = generate_item_id(used, year);

        let record = build_record(command, item_id.clone(), now);
        self.store.write_row(row_index, encode(&record)).await?;

        tracing::info!(item_id = %item_id, row_index, "cost item created");
        Ok(CreatedCostItem { item_id, row_index })
    }
}
