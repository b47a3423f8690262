//! Tab descriptors and the widgets built from them

use std::fmt;
use std::rc::Rc;

/// Tab title: fixed text or computed when the widget is built
#[derive(Clone)]
pub enum WidgetTitle {
    Literal(String),
    Resolver(Rc<dyn Fn() -> String>),
}

impl WidgetTitle {
    pub fn resolver(f: impl Fn() -> String + 'static) -> Self {
        Self::Resolver(Rc::new(f))
    }

    pub fn resolve(&self) -> String {
        match self {
            Self::Literal(title) => title.clone(),
            Self::Resolver(f) => f(),
        }
    }
}

impl fmt::Debug for WidgetTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(title) => f.debug_tuple("Literal").field(title).finish(),
            Self::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

impl From<&str> for WidgetTitle {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for WidgetTitle {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

/// Externally supplied description of one tab
#[derive(Debug, Clone)]
pub struct WidgetDescriptor {
    pub widget_id: String,
    pub widget_name: WidgetTitle,
    pub widget_icon: String,
    /// Short name of the model listed in the tab, e.g. `"Program"`
    pub model: String,
    pub order: i32,
    pub uncountable: bool,
    pub force_refetch: bool,
    pub counts_name: Option<String>,
    /// Counts name declared in the tab's content options
    pub content_counts_name: Option<String>,
}

impl WidgetDescriptor {
    pub fn new(
        widget_id: impl Into<String>,
        widget_name: impl Into<WidgetTitle>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            widget_id: widget_id.into(),
            widget_name: widget_name.into(),
            widget_icon: String::new(),
            model: model.into(),
            order: 0,
            uncountable: false,
            force_refetch: false,
            counts_name: None,
            content_counts_name: None,
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.widget_icon = icon.into();
        self
    }

    pub fn with_counts_name(mut self, name: impl Into<String>) -> Self {
        self.counts_name = Some(name.into());
        self
    }

    pub fn with_content_counts_name(mut self, name: impl Into<String>) -> Self {
        self.content_counts_name = Some(name.into());
        self
    }

    pub fn uncountable(mut self) -> Self {
        self.uncountable = true;
        self
    }

    pub fn force_refetch(mut self) -> Self {
        self.force_refetch = true;
        self
    }

    /// Counts name used for the tab badge; empty for uncountable tabs
    pub fn resolved_counts_name(&self) -> String {
        if self.uncountable {
            return String::new();
        }
        self.counts_name
            .as_ref()
            .or(self.content_counts_name.as_ref())
            .cloned()
            .unwrap_or_else(|| self.model.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetKind {
    #[default]
    Default,
    /// Tab listing object versions (snapshots)
    Version,
}

/// One tab of the inner navigation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Widget {
    pub id: String,
    pub title: String,
    pub kind: WidgetKind,
    pub icon: String,
    pub href: String,
    pub model: String,
    pub order: i32,
    pub uncountable: bool,
    pub force_refetch: bool,
    pub count: usize,
    pub counts_name: String,
    /// Keeps a zero-count tab visible while it is open
    pub force_show: bool,
    pub in_force_show_list: bool,
}

impl Widget {
    pub fn is_version(&self) -> bool {
        self.kind == WidgetKind::Version
    }
}
