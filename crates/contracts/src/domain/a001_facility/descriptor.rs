use crate::domain::cacheable::CACHEABLE_ATTR_LIST;
use crate::shared::metadata::{
    ApiRoutes, Mixin, ModelCategory, ModelDescriptor, ObjNavOptions, RouteTemplate,
    SubTreeViewOptions, TreeColumn, TreeViewOptions,
};

// ============================================================================
// Tree view
// ============================================================================

const FACILITY_ATTR_LIST: &[TreeColumn] = &[
    TreeColumn::new("Reference URL", "reference_url"),
    TreeColumn::new("Effective Date", "start_date"),
    TreeColumn::new("Last Deprecated Date", "end_date"),
    TreeColumn::new("Launch Status", "status").with_order(40),
    TreeColumn::new("Description", "description"),
    TreeColumn::new("Notes", "notes"),
    TreeColumn::new("Created By", "created_by").with_sort_field("created_by"),
];

// ============================================================================
// Descriptor
// ============================================================================

/// Facility: a physical location in the scope of a program
pub const FACILITY: ModelDescriptor = ModelDescriptor {
    model_name: "Facility",
    root_object: "facility",
    root_collection: "facilities",
    category: ModelCategory::Scope,
    routes: ApiRoutes {
        find_all: RouteTemplate::parse("GET /api/facilities"),
        find_one: RouteTemplate::parse("GET /api/facilities/{id}"),
    },
    mixins: &[
        Mixin::Questionnaire,
        Mixin::ChangeableExternally,
        Mixin::DisableAddComments,
    ],
    migration_date: Some("02/24/2020"),
    is_custom_attributable: true,
    is_roleable: true,
    tree_view: TreeViewOptions {
        base: CACHEABLE_ATTR_LIST,
        extra: FACILITY_ATTR_LIST,
    },
    sub_tree_view: SubTreeViewOptions {
        default_filter: &["Program"],
    },
    statuses: &["Draft", "Deprecated", "Active"],
    obj_nav_options: ObjNavOptions::DEFAULT,
};
