//! Collaborators the inner navigation calls into
//!
//! Each concern is a small trait so the view-model can be driven by the real
//! page services in the browser and by fixed values in tests.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::router::NavigationState;

/// Live object counts keyed by counts name
pub trait CountsProvider {
    fn counts(&self) -> HashMap<String, usize>;

    /// Record a freshly loaded count; read-only providers ignore it
    fn store(&self, _name: &str, _count: usize) {}
}

pub trait AdminCheck {
    fn is_admin(&self) -> bool;
}

/// Decides whether a widget id denotes an object-versions tab
pub trait VersionClassifier {
    fn is_object_version(&self, widget_id: &str) -> bool;
}

pub trait UrlBuilder {
    fn build_url(&self, widget_id: &str) -> String;
}

// ============================================================================
// Default implementations
// ============================================================================

/// Counts held in memory, replaced as new numbers arrive
#[derive(Debug, Clone, Default)]
pub struct StaticCounts {
    counts: Rc<RefCell<HashMap<String, usize>>>,
}

impl StaticCounts {
    pub fn new(counts: HashMap<String, usize>) -> Self {
        Self {
            counts: Rc::new(RefCell::new(counts)),
        }
    }

    pub fn set(&self, name: &str, count: usize) {
        self.counts.borrow_mut().insert(name.to_string(), count);
    }
}

impl CountsProvider for StaticCounts {
    fn counts(&self) -> HashMap<String, usize> {
        self.counts.borrow().clone()
    }

    fn store(&self, name: &str, count: usize) {
        self.set(name, count);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAdmin(pub bool);

impl AdminCheck for StaticAdmin {
    fn is_admin(&self) -> bool {
        self.0
    }
}

const OBJECT_VERSION_POSTFIX: &str = "_version";

#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixVersionClassifier;

impl VersionClassifier for SuffixVersionClassifier {
    fn is_object_version(&self, widget_id: &str) -> bool {
        widget_id.contains(OBJECT_VERSION_POSTFIX)
    }
}

#[derive(Serialize, Deserialize)]
pub(crate) struct WidgetQuery {
    pub widget: String,
}

/// Links of the form `?widget=<id>`
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryUrlBuilder;

impl UrlBuilder for QueryUrlBuilder {
    fn build_url(&self, widget_id: &str) -> String {
        let query = serde_qs::to_string(&WidgetQuery {
            widget: widget_id.to_string(),
        })
        .unwrap_or_default();
        format!("?{}", query)
    }
}

/// Everything the view-model needs from the outside world
#[derive(Clone)]
pub struct InnerNavServices {
    pub counts: Rc<dyn CountsProvider>,
    pub admin: Rc<dyn AdminCheck>,
    pub versions: Rc<dyn VersionClassifier>,
    pub urls: Rc<dyn UrlBuilder>,
    pub router: Rc<dyn NavigationState>,
}

impl InnerNavServices {
    /// Default classifier and URL builder around the given counts, admin flag and router
    pub fn new(
        counts: Rc<dyn CountsProvider>,
        admin: Rc<dyn AdminCheck>,
        router: Rc<dyn NavigationState>,
    ) -> Self {
        Self {
            counts,
            admin,
            versions: Rc::new(SuffixVersionClassifier),
            urls: Rc::new(QueryUrlBuilder),
            router,
        }
    }
}
