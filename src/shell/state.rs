use crate::modules::cost_items::use_cases::create_cost_item::handler::CreateCostItemHandler;
use crate::modules::cost_items::use_cases::delete_cost_item::handler::DeleteCostItemHandler;
use crate::modules::cost_items::use_cases::list_cost_items::handler::ListCostItemsHandler;
use crate::modules::cost_items::use_cases::update_cost_item::handler::UpdateCostItemHandler;
use crate::shared::infrastructure::worksheet::in_memory::InMemoryWorksheet;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_handler: Arc<CreateCostItemHandler<InMemoryWorksheet>>,
    pub list_handler: Arc<ListCostItemsHandler<InMemoryWorksheet>>,
    pub update_handler: Arc<UpdateCostItemHandler<InMemoryWorksheet>>,
    pub delete_handler: Arc<DeleteCostItemHandler<InMemoryWorksheet>>,
}

impl AppState {
    pub fn with_store(store: Arc<InMemoryWorksheet>) -> Self {
        Self {
            create_handler: Arc::new(CreateCostItemHandler::new(store.clone())),
            list_handler: Arc::new(ListCostItemsHandler::new(store.clone())),
            update_handler: Arc::new(UpdateCostItemHandler::new(store.clone())),
            delete_handler: Arc::new(DeleteCostItemHandler::new(store)),
        }
    }
}
