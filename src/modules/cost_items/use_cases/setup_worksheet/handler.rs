// Handler for worksheet bootstrap.
//
// Purpose
// - Make sure the header row exists before any record operation runs.
//
// Responsibilities
// - Write the 17 header titles to row 1 when the sheet is empty.
// - Leave a sheet that already has content alone, so the bootstrap is safe to
//   run on every startup.

use crate::modules::cost_items::core::record::HEADER_TITLES;
use crate::modules::cost_items::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::worksheet::{CellValue, WorksheetStore};
use std::sync::Arc;

pub struct SetupWorksheetHandler<TStore>
where
    TStore: WorksheetStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SetupWorksheetHandler<TStore>
where
    TStore: WorksheetStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<(), ApplicationError> {
        if self.store.used_row_count().await? > 0 {
            return Ok(());
        }

        let header = HEADER_TITLES.iter().copied().map(CellValue::text).collect();
        self.store.write_row(1, header).await?;
        tracing::info!("worksheet header row written");
        Ok(())
    }
}
