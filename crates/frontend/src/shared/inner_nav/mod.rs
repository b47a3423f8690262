//! Inner navigation: the tab strip of an object page
//!
//! Содержит:
//! - `widget` - tab descriptors and the widgets built from them
//! - `view_model` - visibility, counts and active-tab bookkeeping
//! - `router` - navigation state (which tab is requested)
//! - `services` - counts, admin check, version classifier, URL builder
//! - `config` - per-model navigation options
//! - `component` - Leptos tab strip around the view-model

pub mod component;
pub mod config;
pub mod events;
pub mod prohibited;
pub mod router;
pub mod services;
pub mod view_model;
pub mod widget;

pub use component::InnerNav;
pub use config::{load_nav_config, load_page_config, NavConfig, NavOptions};
pub use events::{CloseTabRequest, InnerNavEvent, ListenerId};
pub use router::{BrowserRouter, MemoryRouter, NavigationState, SubscriptionId};
pub use services::{
    AdminCheck, CountsProvider, InnerNavServices, QueryUrlBuilder, StaticAdmin, StaticCounts,
    SuffixVersionClassifier, UrlBuilder, VersionClassifier,
};
pub use view_model::{InnerNavVm, NavInstance};
pub use widget::{Widget, WidgetDescriptor, WidgetKind, WidgetTitle};
