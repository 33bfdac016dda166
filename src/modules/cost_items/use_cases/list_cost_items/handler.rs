// Handler for the list use case.
//
// Purpose
// - Produce the visible records from a full scan of the used range.
//
// Responsibilities
// - Skip the header row; decode the rest.
// - Rows without an id or flagged inactive are silently skipped; that is the
//   soft-delete filter, not an error. Malformed rows do fail the scan.
// - Apply the optional search filter after decoding.

use crate::modules::cost_items::core::codec::decode;
use crate::modules::cost_items::use_cases::errors::ApplicationError;
use crate::modules::cost_items::use_cases::list_cost_items::view::CostItemView;
use crate::shared::infrastructure::worksheet::WorksheetStore;
use std::sync::Arc;

pub struct ListCostItemsHandler<TStore>
where
    TStore: WorksheetStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListCostItemsHandler<TStore>
where
    TStore: WorksheetStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<CostItemView>, ApplicationError> {
        let rows = self.store.read_all_rows().await?;

        let mut views = Vec::new();
        for (index, row) in rows.iter().enumerate().skip(1) {
            let row_index = (index + 1) as u32;
            if let Some(record) = decode(row)? {
                views.push(CostItemView::from_record(row_index, record));
            }
        }

        if let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) {
            views.retain(|view| view.matches(search));
        }

        Ok(views)
    }
}
