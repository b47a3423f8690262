use super::widget::Widget;

/// Notifications emitted by the inner navigation
#[derive(Debug, Clone, PartialEq)]
pub enum InnerNavEvent {
    ActiveChanged(Widget),
}

/// Request from the tab strip to close a tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseTabRequest {
    pub widget_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Observer list for `InnerNavEvent`s
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    listeners: Vec<(ListenerId, Box<dyn Fn(&InnerNavEvent)>)>,
}

impl EventBus {
    pub fn subscribe(&mut self, listener: impl Fn(&InnerNavEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    pub fn dispatch(&self, event: &InnerNavEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
