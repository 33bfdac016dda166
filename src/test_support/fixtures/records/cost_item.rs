// Shared test fixture for CostItem records.
//
// The builder derives total_cost from unit_cost and quantity on build, so a
// fixture record is always internally consistent.

use crate::modules::cost_items::core::record::CostItem;

pub const FIXED_TIMESTAMP: &str = "2024-06-01T10:00:00.000Z";

pub struct CostItemBuilder {
    inner: CostItem,
}

impl Default for CostItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CostItemBuilder {
    pub fn new() -> Self {
        Self {
            inner: CostItem {
                item_id: "ITEM2024001".to_string(),
                item_name: "Office Chair".to_string(),
                unit_cost: 150.0,
                item_type: "Furniture".to_string(),
                quantity: 1,
                total_cost: 150.0,
                approval_status: "Pending".to_string(),
                requested_by: "User".to_string(),
                request_date: FIXED_TIMESTAMP.to_string(),
                category: "Furniture".to_string(),
                vendor: "Acme Supplies".to_string(),
                description: "Ergonomic desk chair".to_string(),
                unit_of_measurement: "Each".to_string(),
                is_active: true,
                creation_date: FIXED_TIMESTAMP.to_string(),
                last_modified: FIXED_TIMESTAMP.to_string(),
                notes: String::new(),
            },
        }
    }

    pub fn item_id(mut self, v: impl Into<String>) -> Self {
        self.inner.item_id = v.into();
        self
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

    pub fn quantity(mut self, v: i64) -> Self {
        self.inner.quantity = v;
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

    pub fn is_active(mut self, v: bool) -> Self {
        self.inner.is_active = v;
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = v.into();
        self
    }

    pub fn build(mut self) -> CostItem {
        self.inner.total_cost = self.inner.unit_cost * self.inner.quantity as f64;
        self.inner
    }
}

#[cfg(test)]
mod cost_item_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_build_an_internally_consistent_record() {
        let record = CostItemBuilder::new().unit_cost(10.0).quantity(3).build();
        assert_eq!(record.total_cost, 30.0);
        assert!(record.is_active);
    }

    #[rstest]
    fn it_should_apply_every_override() {
        let record = CostItemBuilder::new()
            .item_id("ITEM2025007")
            .item_name("Ruler")
            .item_type("Supply")
            .category("Stationery")
            .vendor("Paper Co")
            .is_active(false)
            .notes("restock")
            .build();

        assert_eq!(record.item_id, "ITEM2025007");
        assert_eq!(record.item_name, "Ruler");
        assert_eq!(record.item_type, "Supply");
        assert_eq!(record.category, "Stationery");
        assert_eq!(record.vendor, "Paper Co");
        assert!(!record.is_active);
        assert_eq!(record.notes, "restock");
    }
}
