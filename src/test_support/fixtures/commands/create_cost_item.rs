// Shared test fixture for the CreateCostItem command.
// Defaults come from a JSON file so the transport shape stays visible in tests.

use crate::modules::cost_items::use_cases::create_cost_item::command::CreateCostItem;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCostItemDto {
    pub item_name: String,
    pub unit_cost: f64,
    pub item_type: String,
    pub category: String,
    pub vendor: String,
    pub description: String,
}

pub struct CreateCostItemBuilder {
    inner: CreateCostItem,
}

impl Default for CreateCostItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateCostItemBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/test_support/fixtures/commands/json/create_cost_item.json")
                .unwrap();
        let dto: CreateCostItemDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: CreateCostItem {
                item_name: dto.item_name,
                unit_cost: dto.unit_cost,
                item_type: dto.item_type,
                category: dto.category,
                vendor: dto.vendor,
                description: dto.description,
            },
        }
    }

    pub fn item_name(mut self, v: impl Into<String>) -> Self {
        self.inner.item_name = v.into();
        self
    }

    pub fn unit_cost(mut self, v: f64) -> Self {
        self.inner.unit_cost = v;
        self
    }

    pub fn item_type(mut self, v: impl Into<String>) -> Self {
        self.inner.item_type = v.into();
        self
    }

    pub fn category(mut self, v: impl Into<String>) -> Self {
        self.inner.category = v.into();
        self
    }

    pub fn vendor(mut self, v: impl Into<String>) -> Self {
        self.inner.vendor = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn build(self) -> CreateCostItem {
        self.inner
    }
}

#[cfg(test)]
mod create_cost_item_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_the_json_defaults() {
        let built = CreateCostItemBuilder::default().build();
        assert_eq!(built.item_name, "Office Chair");
        assert_eq!(built.unit_cost, 150.0);
        assert_eq!(built.item_type, "Furniture");
        assert_eq!(built.category, "Furniture");
        assert_eq!(built.vendor, "Acme Supplies");
        assert_eq!(built.description, "Ergonomic desk chair");
    }

    #[rstest]
    fn it_should_apply_every_override() {
        let custom = CreateCostItemBuilder::new()
            .item_name("Pen")
            .unit_cost(2.5)
            .item_type("Supply")
            .category("Stationery")
            .vendor("Paper Co")
            .description("Blue ink")
            .build();

        assert_eq!(custom.item_name, "Pen");
        assert_eq!(custom.unit_cost, 2.5);
        assert_eq!(custom.item_type, "Supply");
        assert_eq!(custom.category, "Stationery");
        assert_eq!(custom.vendor, "Paper Co");
        assert_eq!(custom.description, "Blue ink");
    }
}
