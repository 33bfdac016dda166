use crate::modules::cost_items::core::record::col;
use crate::modules::cost_items::core::selection::RecordSelection;
use crate::modules::cost_items::use_cases::create_cost_item::handler::CreateCostItemHandler;
use crate::modules::cost_items::use_cases::delete_cost_item::handler::DeleteCostItemHandler;
use crate::modules::cost_items::use_cases::list_cost_items::handler::ListCostItemsHandler;
use crate::modules::cost_items::use_cases::setup_worksheet::handler::SetupWorksheetHandler;
use crate::modules::cost_items::use_cases::update_cost_item::command::UpdateCostItem;
use crate::modules::cost_items::use_cases::update_cost_item::handler::UpdateCostItemHandler;
use crate::shared::infrastructure::worksheet::WorksheetStore;
use crate::shared::infrastructure::worksheet::in_memory::InMemoryWorksheet;
use crate::test_support::fixtures::commands::create_cost_item::CreateCostItemBuilder;
use std::sync::Arc;

const T0: &str = "2024-06-01T10:00:00.000Z";
const T1: &str = "2024-06-02T11:30:00.000Z";

#[tokio::test]
async fn creates_updates_and_soft_deletes_records_through_the_full_flow() {
    let store = Arc::new(InMemoryWorksheet::new());
    SetupWorksheetHandler::new(store.clone()).handle().await.unwrap();

    let create = CreateCostItemHandler::new(store.clone());
    let list = ListCostItemsHandler::new(store.clone());
    let update = UpdateCostItemHandler::new(store.clone());
    let delete = DeleteCostItemHandler::new(store.clone());

    // Two records land in rows 2 and 3 with sequential ids.
    let chair = create
        .handle(
            CreateCostItemBuilder::new().build(),
            T0.to_string(),
            2024,
        )
        .await
        .unwrap();
    let pen = create
        .handle(
            CreateCostItemBuilder::new()
                .item_name("Pen")
                .unit_cost(2.5)
                .item_type("Supply")
                .build(),
            T0.to_string(),
            2024,
        )
        .await
        .unwrap();
    assert_eq!(chair.item_id, "ITEM2024001");
    assert_eq!(chair.row_index, 2);
    assert_eq!(pen.item_id, "ITEM2024002");
    assert_eq!(pen.row_index, 3);

    let views = list.handle(None).await.unwrap();
    assert_eq!(views.len(), 2);

    // Updating the chair recomputes the total and keeps the creation stamp.
    update
        .handle(
            UpdateCostItem {
                selection: RecordSelection {
                    item_id: chair.item_id.clone(),
                    row_index: chair.row_index,
                },
                item_name: "Office Chair Deluxe".to_string(),
                unit_cost: 200.0,
                item_type: "Furniture".to_string(),
                category: "Furniture".to_string(),
                vendor: "Acme Supplies".to_string(),
                description: "Upgraded".to_string(),
            },
            T1.to_string(),
        )
        .await
        .unwrap();

    let views = list.handle(None).await.unwrap();
    let chair_view = views.iter().find(|v| v.item_id == chair.item_id).unwrap();
    assert_eq!(chair_view.item_name, "Office Chair Deluxe");
    assert_eq!(chair_view.total_cost, 200.0);
    assert_eq!(chair_view.creation_date, T0);
    assert_eq!(chair_view.last_modified, T1);

    // Soft-deleting the pen hides it from listings but keeps its row.
    delete
        .handle(RecordSelection {
            item_id: pen.item_id.clone(),
            row_index: pen.row_index,
        })
        .await
        .unwrap();

    let views = list.handle(None).await.unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].item_id, chair.item_id);
    assert_eq!(store.used_row_count().await.unwrap(), 3);

    // The next record appends after the deleted row; positions never shift.
    let ruler = create
        .handle(
            CreateCostItemBuilder::new()
                .item_name("Ruler")
                .unit_cost(1.0)
                .item_type("Supply")
                .build(),
            T1.to_string(),
            2024,
        )
        .await
        .unwrap();
    assert_eq!(ruler.item_id, "ITEM2024003");
    assert_eq!(ruler.row_index, 4);

    let rows = store.read_all_rows().await.unwrap();
    assert_eq!(rows[2][col::ID].as_text(), pen.item_id);
    assert!(!rows[2][col::IS_ACTIVE].is_truthy());
}

#[tokio::test]
async fn searches_across_visible_records_only() {
    let store = Arc::new(InMemoryWorksheet::new());
    SetupWorksheetHandler::new(store.clone()).handle().await.unwrap();

    let create = CreateCostItemHandler::new(store.clone());
    let list = ListCostItemsHandler::new(store.clone());
    let delete = DeleteCostItemHandler::new(store.clone());

    for (name, item_type) in [("Office Chair", "Furniture"), ("Desk Pen", "Supply")] {
        create
            .handle(
                CreateCostItemBuilder::new()
                    .item_name(name)
                    .item_type(item_type)
                    .build(),
                T0.to_string(),
                2024,
            )
            .await
            .unwrap();
    }

    let hits = list.handle(Some("pen")).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].item_name, "Desk Pen");

    delete
        .handle(RecordSelection {
            item_id: hits[0].item_id.clone(),
            row_index: hits[0].row_index,
        })
        .await
        .unwrap();

    let hits = list.handle(Some("pen")).await.unwrap();
    assert!(hits.is_empty());
}
