// In memory implementation of the WorksheetStore port.
//
// Purpose
// - Support handler tests and local development without a host workbook.
//
// Responsibilities
// - Hold the used range as a vector of rows behind an async RwLock.
// - Grow the range with blank rows when a write lands past the current edge,
//   the way a real sheet extends its used range.
// - Offer `toggle_offline` so tests can exercise storage failure paths.

use crate::shared::infrastructure::worksheet::{CellValue, Row, WorksheetError, WorksheetStore};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryWorksheet {
    rows: RwLock<Vec<Row>>,
    offline: bool,
}

impl InMemoryWorksheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn check_online(&self) -> Result<(), WorksheetError> {
        if self.offline {
            return Err(WorksheetError::Backend("worksheet offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl WorksheetStore for InMemoryWorksheet {
    async fn used_row_count(&self) -> Result<u32, WorksheetError> {
        self.check_online()?;
        Ok(self.rows.read().await.len() as u32)
    }

    async fn read_all_rows(&self) -> Result<Vec<Row>, WorksheetError> {
        self.check_online()?;
        Ok(self.rows.read().await.clone())
    }

    async fn write_row(&self, row_index: u32, row: Row) -> Result<(), WorksheetError> {
        self.check_online()?;
        let mut rows = self.rows.write().await;
        let index = row_index.saturating_sub(1) as usize;
        while rows.len() <= index {
            rows.push(Vec::new());
        }
        rows[index] = row;
        Ok(())
    }

    async fn read_cell(
        &self,
        row_index: u32,
        column_index: usize,
    ) -> Result<CellValue, WorksheetError> {
        self.check_online()?;
        let rows = self.rows.read().await;
        let index = row_index.saturating_sub(1) as usize;
        let cell = rows
            .get(index)
            .and_then(|row| row.get(column_index))
            .cloned()
            .unwrap_or(CellValue::Blank);
        Ok(cell)
    }

    async fn write_cell(
        &self,
        row_index: u32,
        column_index: usize,
        value: CellValue,
    ) -> Result<(), WorksheetError> {
        self.check_online()?;
        let mut rows = self.rows.write().await;
        let index = row_index.saturating_sub(1) as usize;
        while rows.len() <= index {
            rows.push(Vec::new());
        }
        let row = &mut rows[index];
        while row.len() <= column_index {
            row.push(CellValue::Blank);
        }
        row[column_index] = value;
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_worksheet_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_start_with_an_empty_used_range() {
        let store = InMemoryWorksheet::new();
        assert_eq!(store.used_row_count().await.unwrap(), 0);
        assert!(store.read_all_rows().await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_write_and_read_back_a_row() {
        let store = InMemoryWorksheet::new();
        let row = vec![CellValue::text("ITEM2024001"), CellValue::Number(50.0)];
        store.write_row(2, row.clone()).await.unwrap();

        assert_eq!(store.used_row_count().await.unwrap(), 2);
        let rows = store.read_all_rows().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_empty());
        assert_eq!(rows[1], row);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_write_a_single_cell_and_grow_the_row() {
        let store = InMemoryWorksheet::new();
        store
            .write_cell(3, 13, CellValue::Bool(false))
            .await
            .unwrap();

        assert_eq!(store.used_row_count().await.unwrap(), 3);
        let cell = store.read_cell(3, 13).await.unwrap();
        assert_eq!(cell, CellValue::Bool(false));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_read_blank_for_cells_outside_the_used_range() {
        let store = InMemoryWorksheet::new();
        let cell = store.read_cell(9, 0).await.unwrap();
        assert_eq!(cell, CellValue::Blank);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_every_call_when_offline() {
        let mut store = InMemoryWorksheet::new();
        store.toggle_offline();

        assert!(store.used_row_count().await.is_err());
        assert!(store.read_all_rows().await.is_err());
        assert!(store.write_row(1, Vec::new()).await.is_err());
        assert!(store.read_cell(1, 0).await.is_err());
        assert!(store.write_cell(1, 0, CellValue::Blank).await.is_err());
    }
}
