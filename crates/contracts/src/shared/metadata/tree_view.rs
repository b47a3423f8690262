//! Tree-view rendering metadata

/// A column of the object tree view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeColumn {
    pub attr_title: &'static str,
    pub attr_name: &'static str,
    /// Explicit display position; unordered columns follow ordered ones
    pub order: Option<u32>,
    pub attr_sort_field: Option<&'static str>,
}

impl TreeColumn {
    pub const fn new(attr_title: &'static str, attr_name: &'static str) -> Self {
        Self {
            attr_title,
            attr_name,
            order: None,
            attr_sort_field: None,
        }
    }

    pub const fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    pub const fn with_sort_field(mut self, field: &'static str) -> Self {
        self.attr_sort_field = Some(field);
        self
    }

    /// Field used when sorting by this column
    pub fn sort_field(&self) -> &'static str {
        self.attr_sort_field.unwrap_or(self.attr_name)
    }
}

/// Columns shown for a model: shared base columns, then model-specific ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeViewOptions {
    pub base: &'static [TreeColumn],
    pub extra: &'static [TreeColumn],
}

impl TreeViewOptions {
    /// All columns in declaration order (base first)
    pub fn attr_list(&self) -> impl Iterator<Item = &'static TreeColumn> {
        self.base.iter().chain(self.extra.iter())
    }

    pub fn find(&self, attr_name: &str) -> Option<&'static TreeColumn> {
        self.attr_list().find(|c| c.attr_name == attr_name)
    }

    /// Columns in display order: explicitly ordered ones by their order,
    /// then the rest in declaration order
    pub fn display_columns(&self) -> Vec<&'static TreeColumn> {
        let mut columns: Vec<_> = self.attr_list().collect();
        // stable sort keeps declaration order among equal keys
        columns.sort_by_key(|c| c.order.unwrap_or(u32::MAX));
        columns
    }
}

/// Options for the nested tree under an expanded row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubTreeViewOptions {
    /// Model names shown by default in the sub tree
    pub default_filter: &'static [&'static str],
}
