//! Metadata types for describing business models
//!
//! Every business model of the application is described by a single
//! `ModelDescriptor` constant: REST routes, capabilities, tree-view columns,
//! lifecycle statuses and object-navigation options.
//! All types use 'static lifetimes for zero-cost access to compile-time constants.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::a001_facility::FACILITY;
//!
//! let url = FACILITY.routes.find_one.expand("42");
//! for column in FACILITY.tree_view.display_columns() {
//!     println!("{} -> {}", column.attr_title, column.sort_field());
//! }
//! ```

mod error;
mod mixin;
mod route;
mod tree_view;
mod types;

pub use error::MetadataError;
pub use mixin::{Capabilities, Mixin, ModelCapability};
pub use route::{ApiRoutes, HttpMethod, RouteTemplate};
pub use tree_view::{SubTreeViewOptions, TreeColumn, TreeViewOptions};
pub use types::{ModelCategory, ModelDescriptor, ObjNavOptions};
