// Row locator and item id generation.
//
// Purpose
// - Compute where the next record lands and what id it receives.
//
// Responsibilities
// - Rows are addressed 1-based; the header occupies row 1, so the first data
//   row is 2 and the next free row is always used_row_count + 1.
// - Item ids follow "ITEM" + four-digit year + three-digit sequence. The
//   sequence is the used row count at creation time, not a persisted counter.
//   That only stays collision-free because rows are never physically removed;
//   the soft-delete-only policy is a hard constraint of this scheme.
//
// Boundaries
// - No input or output. The caller supplies the current year.

/// 1-based index of the first unused row.
pub fn next_row_index(used_row_count: u32) -> u32 {
    used_row_count + 1
}

pub fn generate_item_id(sequence: u32, year: i32) -> String {
    format!("ITEM{year}{sequence:03}")
}
