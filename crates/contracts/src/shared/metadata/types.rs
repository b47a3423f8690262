//! Core descriptor types for business models
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::error::MetadataError;
use super::mixin::{Capabilities, Mixin};
use super::route::ApiRoutes;
use super::tree_view::{SubTreeViewOptions, TreeViewOptions};

// ============================================================================
// Model-level descriptor
// ============================================================================

/// Declarative description of a business model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelDescriptor {
    /// Model short name, also the `type` of its instances
    pub model_name: &'static str,
    pub root_object: &'static str,
    pub root_collection: &'static str,
    pub category: ModelCategory,
    pub routes: ApiRoutes,
    pub mixins: &'static [Mixin],
    /// Date the model was migrated to its current schema, `MM/DD/YYYY`
    pub migration_date: Option<&'static str>,
    pub is_custom_attributable: bool,
    pub is_roleable: bool,
    pub tree_view: TreeViewOptions,
    pub sub_tree_view: SubTreeViewOptions,
    /// Valid lifecycle status labels
    pub statuses: &'static [&'static str],
    pub obj_nav_options: ObjNavOptions,
}

impl ModelDescriptor {
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::compose(self.mixins)
    }

    pub fn has_mixin(&self, mixin: Mixin) -> bool {
        self.mixins.contains(&mixin)
    }

    pub fn is_valid_status(&self, status: &str) -> bool {
        self.statuses.contains(&status)
    }

    pub fn migration_date(&self) -> Result<Option<chrono::NaiveDate>, MetadataError> {
        self.migration_date
            .map(|raw| {
                chrono::NaiveDate::parse_from_str(raw, "%m/%d/%Y")
                    .map_err(|_| MetadataError::InvalidDate(raw.to_string()))
            })
            .transpose()
    }

    /// URL of the detail endpoint for one object
    pub fn object_url(&self, id: &str) -> String {
        self.routes.find_one.expand(id)
    }
}

/// Functional area a model belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelCategory {
    Scope,
    Programs,
    Governance,
    Risk,
}

impl ModelCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scope => "scope",
            Self::Programs => "programs",
            Self::Governance => "governance",
            Self::Risk => "risk",
        }
    }
}

/// Object-page tab options declared by a model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjNavOptions {
    /// Show every tab regardless of object counts
    pub show_all_tabs: bool,
    /// Tab titles that are never moved to the hidden list
    pub force_show_list: &'static [&'static str],
}

impl ObjNavOptions {
    pub const DEFAULT: Self = Self {
        show_all_tabs: false,
        force_show_list: &[],
    };
}

impl Default for ObjNavOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
