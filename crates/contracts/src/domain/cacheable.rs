//! Columns shared by every cached business model

use crate::shared::metadata::TreeColumn;

/// Base tree-view columns; models append their own after these
pub const CACHEABLE_ATTR_LIST: &[TreeColumn] = &[
    TreeColumn::new("Title", "title").with_order(1),
    TreeColumn::new("Code", "slug").with_order(2),
    TreeColumn::new("Last Updated Date", "updated_at"),
    TreeColumn::new("Last Updated By", "modified_by"),
    TreeColumn::new("Created Date", "created_at"),
];
