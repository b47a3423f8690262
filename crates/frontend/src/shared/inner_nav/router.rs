//! Navigation state: which widget the page is currently showing
//!
//! `MemoryRouter` keeps the value in process; `BrowserRouter` additionally
//! mirrors it into the `?widget=` query parameter of the address bar.

use std::cell::RefCell;
use std::rc::Rc;
use web_sys::window;

use super::services::WidgetQuery;

pub type NavListener = Box<dyn Fn(&str)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub trait NavigationState {
    fn current_widget(&self) -> Option<String>;
    /// Changes the current widget; listeners fire only on an actual change
    fn set_widget(&self, widget_id: &str);
    fn subscribe(&self, listener: NavListener) -> SubscriptionId;
    fn unsubscribe(&self, id: SubscriptionId);
}

#[derive(Default)]
struct RouterState {
    current: Option<String>,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Rc<dyn Fn(&str)>)>,
}

/// In-process navigation state shared by cloning
#[derive(Clone, Default)]
pub struct MemoryRouter {
    state: Rc<RefCell<RouterState>>,
}

impl MemoryRouter {
    pub fn new(initial: Option<&str>) -> Self {
        let router = Self::default();
        router.state.borrow_mut().current = initial.map(str::to_string);
        router
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl NavigationState for MemoryRouter {
    fn current_widget(&self) -> Option<String> {
        self.state.borrow().current.clone()
    }

    fn set_widget(&self, widget_id: &str) {
        let listeners = {
            let mut state = self.state.borrow_mut();
            if state.current.as_deref() == Some(widget_id) {
                return;
            }
            state.current = Some(widget_id.to_string());
            state
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect::<Vec<_>>()
        };
        log::debug!("navigation: widget -> '{}'", widget_id);
        // borrow released: listeners may read or write the router
        for listener in listeners {
            listener(widget_id);
        }
    }

    fn subscribe(&self, listener: NavListener) -> SubscriptionId {
        let mut state = self.state.borrow_mut();
        let id = SubscriptionId(state.next_id);
        state.next_id += 1;
        state.listeners.push((id, Rc::from(listener)));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.state
            .borrow_mut()
            .listeners
            .retain(|(listener_id, _)| *listener_id != id);
    }
}

/// Navigation state backed by the page URL
#[derive(Clone, Default)]
pub struct BrowserRouter {
    inner: MemoryRouter,
}

impl BrowserRouter {
    /// Start from the `widget` query parameter of the current location
    pub fn from_location() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let initial = serde_qs::from_str::<WidgetQuery>(search.trim_start_matches('?'))
            .ok()
            .map(|query| query.widget);
        Self {
            inner: MemoryRouter::new(initial.as_deref()),
        }
    }

    fn write_location(widget_id: &str) {
        let query_string = serde_qs::to_string(&WidgetQuery {
            widget: widget_id.to_string(),
        })
        .unwrap_or_default();
        let new_url = format!("?{}", query_string);

        let current_search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if current_search == new_url {
            return;
        }
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                if history
                    .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
                    .is_err()
                {
                    log::warn!("navigation: failed to update URL to '{}'", new_url);
                }
            }
        }
    }
}

impl NavigationState for BrowserRouter {
    fn current_widget(&self) -> Option<String> {
        self.inner.current_widget()
    }

    fn set_widget(&self, widget_id: &str) {
        Self::write_location(widget_id);
        self.inner.set_widget(widget_id);
    }

    fn subscribe(&self, listener: NavListener) -> SubscriptionId {
        self.inner.subscribe(listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.unsubscribe(id)
    }
}
