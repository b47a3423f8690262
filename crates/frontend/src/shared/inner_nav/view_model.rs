//! ViewModel for the object page inner navigation (tab strip)
//!
//! Owns the widget list, the hidden-widget list and the active widget.
//! State lives in plain fields; observers are notified through an explicit
//! `EventBus`, and navigation changes arrive through an inbox drained by
//! `process_navigation`, so a redirect issued while routing never re-enters
//! the view-model.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use contracts::shared::metadata::ModelDescriptor;

use super::config::{NavConfig, NavOptions};
use super::events::{CloseTabRequest, EventBus, InnerNavEvent, ListenerId};
use super::prohibited::is_prohibited;
use super::router::SubscriptionId;
use super::services::InnerNavServices;
use super::widget::{Widget, WidgetDescriptor, WidgetKind};

/// The object whose page hosts the tabs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavInstance {
    /// Model short name of the object, e.g. `"Issue"`
    pub instance_type: String,
    pub nav_options: NavOptions,
}

impl NavInstance {
    pub fn new(instance_type: impl Into<String>, nav_options: NavOptions) -> Self {
        Self {
            instance_type: instance_type.into(),
            nav_options,
        }
    }

    pub fn for_model(model: &ModelDescriptor, config: &NavConfig) -> Self {
        Self::new(model.model_name, config.options_for(model))
    }
}

pub struct InnerNavVm {
    instance: NavInstance,
    services: InnerNavServices,
    widgets: Vec<Widget>,
    /// Ids of hidden widgets, ordered by title
    hidden: Vec<String>,
    active: Option<String>,
    events: EventBus,
    inbox: Rc<RefCell<VecDeque<String>>>,
    subscription: Option<SubscriptionId>,
}

impl InnerNavVm {
    pub fn new(
        descriptors: &[WidgetDescriptor],
        instance: NavInstance,
        services: InnerNavServices,
    ) -> Self {
        let mut vm = Self {
            instance,
            services,
            widgets: Vec::new(),
            hidden: Vec::new(),
            active: None,
            events: EventBus::default(),
            inbox: Rc::new(RefCell::new(VecDeque::new())),
            subscription: None,
        };
        vm.widgets = vm.build_widget_list(descriptors);
        vm
    }

    // === Lifecycle ===

    /// Subscribe to navigation, apply current counts and open the requested tab
    pub fn initialize(&mut self) {
        if self.subscription.is_none() {
            let inbox = Rc::clone(&self.inbox);
            let id = self.services.router.subscribe(Box::new(move |widget_id| {
                inbox.borrow_mut().push_back(widget_id.to_string());
            }));
            self.subscription = Some(id);
        }

        self.sync_counts();

        let requested = self.services.router.current_widget().unwrap_or_default();
        log::debug!(
            "inner nav: init {} with {} widgets, requested '{}'",
            self.instance.instance_type,
            self.widgets.len(),
            requested
        );
        self.route(&requested);
        self.process_navigation();
    }

    /// Stop listening to navigation changes
    pub fn dispose(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.services.router.unsubscribe(id);
        }
        self.inbox.borrow_mut().clear();
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    // === Widget list ===

    /// Convert descriptors to widgets ordered by (order, title)
    pub fn build_widget_list(&self, descriptors: &[WidgetDescriptor]) -> Vec<Widget> {
        let mut widgets: Vec<Widget> = descriptors.iter().map(|d| self.create_widget(d)).collect();
        widgets.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.title.cmp(&b.title)));
        widgets
    }

    fn create_widget(&self, descriptor: &WidgetDescriptor) -> Widget {
        let id = descriptor.widget_id.clone();
        let title = descriptor.widget_name.resolve();
        let kind = if self.services.versions.is_object_version(&id) {
            WidgetKind::Version
        } else {
            WidgetKind::Default
        };
        let in_force_show_list = self
            .instance
            .nav_options
            .force_show_list
            .iter()
            .any(|t| *t == title);

        Widget {
            href: self.services.urls.build_url(&id),
            id,
            title,
            kind,
            icon: descriptor.widget_icon.clone(),
            model: descriptor.model.clone(),
            order: descriptor.order,
            uncountable: descriptor.uncountable,
            force_refetch: descriptor.force_refetch,
            count: 0,
            counts_name: descriptor.resolved_counts_name(),
            force_show: false,
            in_force_show_list,
        }
    }

    // === Hidden widgets ===

    /// Recompute whether the widget belongs to the hidden list
    pub fn update_hidden_widgets(&mut self, widget_id: &str) {
        let Some(widget) = self.find_widget_by_id(widget_id) else {
            return;
        };
        if self.is_never_hidden(widget) {
            return;
        }

        if widget.count == 0 && !widget.force_show {
            self.add_to_hidden_widgets(widget_id);
        } else {
            self.remove_from_hidden_widgets(widget_id);
        }
    }

    fn is_never_hidden(&self, widget: &Widget) -> bool {
        self.show_all_tabs()
            || widget.in_force_show_list
            || widget.is_version()
            || widget.uncountable
            || self.is_in_prohibited_map(widget)
    }

    fn is_in_prohibited_map(&self, widget: &Widget) -> bool {
        is_prohibited(&self.instance.instance_type, &widget.model)
    }

    fn add_to_hidden_widgets(&mut self, widget_id: &str) {
        if self.hidden.iter().any(|id| id == widget_id) {
            return;
        }
        self.hidden.push(widget_id.to_string());

        let widgets = &self.widgets;
        self.hidden.sort_by(|a, b| {
            title_of(widgets, a)
                .cmp(title_of(widgets, b))
                .then_with(|| a.cmp(b))
        });
    }

    fn remove_from_hidden_widgets(&mut self, widget_id: &str) {
        self.hidden.retain(|id| id != widget_id);
    }

    // === Commands ===

    /// Make the widget active, or redirect navigation to the first widget
    /// when it does not exist
    pub fn route(&mut self, widget_id: &str) {
        let Some(index) = self.widgets.iter().position(|w| w.id == widget_id) else {
            if let Some(first) = self.widgets.first() {
                let first_id = first.id.clone();
                log::debug!("inner nav: unknown widget '{}', redirecting to '{}'", widget_id, first_id);
                self.services.router.set_widget(&first_id);
            }
            return;
        };

        // keep zero-count tabs visible while open
        self.widgets[index].force_show = true;
        let previous = self.active.replace(widget_id.to_string());
        let widget = self.widgets[index].clone();
        self.events.dispatch(&InnerNavEvent::ActiveChanged(widget));
        self.update_hidden_widgets(widget_id);

        if let Some(previous) = previous.filter(|id| id != widget_id) {
            self.update_hidden_widgets(&previous);
        }
    }

    /// Ask navigation to show the widget and apply the resulting change
    pub fn navigate(&mut self, widget_id: &str) {
        self.services.router.set_widget(widget_id);
        self.process_navigation();
    }

    /// Route to every navigation change received since the last call
    pub fn process_navigation(&mut self) -> usize {
        let mut handled = 0;
        loop {
            let next = self.inbox.borrow_mut().pop_front();
            let Some(widget_id) = next else {
                break;
            };
            self.route(&widget_id);
            handled += 1;
        }
        handled
    }

    pub fn set_widget_count(&mut self, counts_name: &str, count: usize) {
        if counts_name.is_empty() {
            return;
        }
        let Some(widget) = self.widgets.iter_mut().find(|w| w.counts_name == counts_name) else {
            return;
        };
        widget.count = count;
        let id = widget.id.clone();
        self.update_hidden_widgets(&id);
    }

    /// Record a count pushed by the page and apply it to the matching widget
    pub fn update_count(&mut self, counts_name: &str, count: usize) {
        self.services.counts.store(counts_name, count);
        self.set_widget_count(counts_name, count);
    }

    /// Apply the counts provider snapshot to all widgets
    pub fn sync_counts(&mut self) {
        let counts = self.services.counts.counts();
        for (name, count) in counts {
            self.set_widget_count(&name, count);
        }
    }

    pub fn close_tab(&mut self, request: CloseTabRequest) {
        let widget_id = request.widget_id;
        let Some(widget) = self.widgets.iter_mut().find(|w| w.id == widget_id) else {
            return;
        };
        widget.force_show = false;

        let current = self.services.router.current_widget();
        if current.as_deref() == Some(widget_id.as_str()) {
            if let Some(first) = self.widgets.first() {
                let first_id = first.id.clone();
                self.services.router.set_widget(&first_id);
            }
        }

        self.update_hidden_widgets(&widget_id);
    }

    // === Events ===

    pub fn on_event(&mut self, listener: impl Fn(&InnerNavEvent) + 'static) -> ListenerId {
        self.events.subscribe(listener)
    }

    pub fn off(&mut self, id: ListenerId) {
        self.events.unsubscribe(id);
    }

    // === Derived state ===

    /// Tabs are shown when there is anything counted, or to administrators
    pub fn show_tabs(&self) -> bool {
        !self.services.counts.counts().is_empty() || self.services.admin.is_admin()
    }

    pub fn show_all_tabs(&self) -> bool {
        self.instance.nav_options.show_all_tabs
    }

    // === Queries ===

    pub fn instance(&self) -> &NavInstance {
        &self.instance
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn visible_widgets(&self) -> Vec<&Widget> {
        self.widgets.iter().filter(|w| !self.is_hidden(&w.id)).collect()
    }

    pub fn hidden_widgets(&self) -> Vec<&Widget> {
        self.hidden
            .iter()
            .filter_map(|id| self.find_widget_by_id(id))
            .collect()
    }

    pub fn is_hidden(&self, widget_id: &str) -> bool {
        self.hidden.iter().any(|id| id == widget_id)
    }

    pub fn active_widget(&self) -> Option<&Widget> {
        self.active
            .as_deref()
            .and_then(|id| self.find_widget_by_id(id))
    }

    pub fn find_widget_by_id(&self, widget_id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == widget_id)
    }

    pub fn find_widget_by_counts_name(&self, counts_name: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.counts_name == counts_name)
    }
}

fn title_of<'a>(widgets: &'a [Widget], widget_id: &str) -> &'a str {
    widgets
        .iter()
        .find(|w| w.id == widget_id)
        .map(|w| w.title.as_str())
        .unwrap_or_default()
}

impl Drop for InnerNavVm {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::inner_nav::router::{MemoryRouter, NavigationState};
    use crate::shared::inner_nav::services::{CountsProvider, StaticAdmin, StaticCounts};
    use crate::shared::inner_nav::widget::WidgetTitle;
    use std::collections::HashMap;

    struct Fixture {
        vm: InnerNavVm,
        router: MemoryRouter,
        counts: StaticCounts,
        events: Rc<RefCell<Vec<String>>>,
    }

    fn descriptor(id: &str, title: &str, model: &str, order: i32) -> WidgetDescriptor {
        WidgetDescriptor::new(id, title, model).with_order(order)
    }

    fn standard_descriptors() -> Vec<WidgetDescriptor> {
        vec![
            descriptor("info", "Info", "Facility", 0).uncountable(),
            descriptor("program", "Programs", "Program", 10),
            descriptor("control", "Controls", "Control", 10),
            descriptor("assessment", "Assessments", "Assessment", 20),
            descriptor("control_version", "Controls Versions", "Control", 30),
        ]
    }

    fn fixture_with(
        descriptors: Vec<WidgetDescriptor>,
        instance: NavInstance,
        counts: HashMap<String, usize>,
        admin: bool,
        requested: Option<&str>,
    ) -> Fixture {
        let router = MemoryRouter::new(requested);
        let counts = StaticCounts::new(counts);
        let services = InnerNavServices::new(
            Rc::new(counts.clone()),
            Rc::new(StaticAdmin(admin)),
            Rc::new(router.clone()),
        );
        let mut vm = InnerNavVm::new(&descriptors, instance, services);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        vm.on_event(move |event| match event {
            InnerNavEvent::ActiveChanged(widget) => sink.borrow_mut().push(widget.id.clone()),
        });
        Fixture {
            vm,
            router,
            counts,
            events,
        }
    }

    fn fixture(instance_type: &str) -> Fixture {
        fixture_with(
            standard_descriptors(),
            NavInstance::new(instance_type, NavOptions::default()),
            HashMap::new(),
            false,
            None,
        )
    }

    fn ids(widgets: &[&Widget]) -> Vec<String> {
        widgets.iter().map(|w| w.id.clone()).collect()
    }

    // === Building ===

    #[test]
    fn test_widgets_sorted_by_order_then_title() {
        let f = fixture_with(
            vec![descriptor("A", "Bravo", "Program", 2), descriptor("B", "Alpha", "Program", 1)],
            NavInstance::new("Facility", NavOptions::default()),
            HashMap::new(),
            false,
            None,
        );
        let list: Vec<_> = f.vm.widgets().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(list, vec!["B", "A"]);

        let f = fixture("Facility");
        let list: Vec<_> = f.vm.widgets().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(
            list,
            vec!["info", "control", "program", "assessment", "control_version"]
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let f = fixture("Facility");
        let first = f.vm.build_widget_list(&standard_descriptors());
        let mut reversed = standard_descriptors();
        reversed.reverse();
        let second = f.vm.build_widget_list(&reversed);
        assert_eq!(first, second);
        assert_eq!(first, f.vm.widgets());
    }

    #[test]
    fn test_widget_fields() {
        let options = NavOptions {
            show_all_tabs: false,
            force_show_list: vec!["Programs".to_string()],
        };
        let descriptors = vec![
            descriptor("program", "Programs", "Program", 1)
                .with_icon("program")
                .force_refetch(),
            descriptor("control_version", "Controls Versions", "Control", 2),
            WidgetDescriptor::new("audit", WidgetTitle::resolver(|| "Audits".to_string()), "Audit")
                .uncountable(),
        ];
        let f = fixture_with(
            descriptors,
            NavInstance::new("Facility", options),
            HashMap::new(),
            false,
            None,
        );

        let program = f.vm.find_widget_by_id("program").unwrap();
        assert_eq!(program.href, "?widget=program");
        assert_eq!(program.icon, "program");
        assert_eq!(program.counts_name, "Program");
        assert_eq!(program.count, 0);
        assert!(program.force_refetch);
        assert!(program.in_force_show_list);
        assert!(!program.force_show);
        assert_eq!(program.kind, WidgetKind::Default);

        let version = f.vm.find_widget_by_id("control_version").unwrap();
        assert_eq!(version.kind, WidgetKind::Version);
        assert!(!version.in_force_show_list);

        let audit = f.vm.find_widget_by_id("audit").unwrap();
        assert_eq!(audit.title, "Audits");
        assert_eq!(audit.counts_name, "");
    }

    // === Hidden widgets ===

    #[test]
    fn test_zero_count_hides_and_positive_count_shows() {
        let mut f = fixture("Facility");
        f.vm.set_widget_count("Program", 0);
        assert!(f.vm.is_hidden("program"));

        f.vm.set_widget_count("Program", 4);
        assert!(!f.vm.is_hidden("program"));
        assert_eq!(f.vm.find_widget_by_id("program").unwrap().count, 4);
    }

    #[test]
    fn test_update_hidden_widgets_is_idempotent() {
        let mut f = fixture("Facility");
        f.vm.set_widget_count("Program", 0);
        f.vm.set_widget_count("Program", 0);
        f.vm.update_hidden_widgets("program");
        f.vm.update_hidden_widgets("program");
        assert_eq!(ids(&f.vm.hidden_widgets()), vec!["program"]);

        f.vm.set_widget_count("Program", 2);
        f.vm.update_hidden_widgets("program");
        assert!(f.vm.hidden_widgets().is_empty());
    }

    #[test]
    fn test_hidden_widgets_sorted_by_title() {
        let mut f = fixture("Facility");
        f.vm.set_widget_count("Program", 0);
        f.vm.set_widget_count("Assessment", 0);
        f.vm.set_widget_count("Control", 0);
        assert_eq!(
            ids(&f.vm.hidden_widgets()),
            vec!["assessment", "control", "program"]
        );
        assert_eq!(ids(&f.vm.visible_widgets()), vec!["info", "control_version"]);
    }

    #[test]
    fn test_uncountable_never_hidden() {
        let mut f = fixture("Facility");
        f.vm.update_hidden_widgets("info");
        assert!(!f.vm.is_hidden("info"));
        assert_eq!(f.vm.find_widget_by_counts_name(""), f.vm.find_widget_by_id("info"));
        f.vm.set_widget_count("", 0);
        assert!(!f.vm.is_hidden("info"));
    }

    #[test]
    fn test_version_widget_never_hidden() {
        let mut f = fixture("Facility");
        f.vm.update_hidden_widgets("control_version");
        assert!(!f.vm.is_hidden("control_version"));

        f.vm.set_widget_count("Control", 0);
        assert!(f.vm.is_hidden("control"));
        assert!(!f.vm.is_hidden("control_version"));
    }

    #[test]
    fn test_prohibited_widget_never_hidden() {
        let mut f = fixture("Issue");
        f.vm.set_widget_count("Assessment", 0);
        assert!(!f.vm.is_hidden("assessment"));

        let mut f = fixture("Facility");
        f.vm.set_widget_count("Assessment", 0);
        assert!(f.vm.is_hidden("assessment"));
    }

    #[test]
    fn test_force_show_list_and_show_all_tabs() {
        let options = NavOptions {
            show_all_tabs: false,
            force_show_list: vec!["Programs".to_string()],
        };
        let mut f = fixture_with(
            standard_descriptors(),
            NavInstance::new("Facility", options),
            HashMap::new(),
            false,
            None,
        );
        f.vm.set_widget_count("Program", 0);
        f.vm.set_widget_count("Control", 0);
        assert!(!f.vm.is_hidden("program"));
        assert!(f.vm.is_hidden("control"));

        let options = NavOptions {
            show_all_tabs: true,
            force_show_list: Vec::new(),
        };
        let mut f = fixture_with(
            standard_descriptors(),
            NavInstance::new("Facility", options),
            HashMap::new(),
            false,
            None,
        );
        assert!(f.vm.show_all_tabs());
        f.vm.set_widget_count("Program", 0);
        f.vm.set_widget_count("Control", 0);
        assert!(f.vm.hidden_widgets().is_empty());
    }

    #[test]
    fn test_unknown_counts_name_is_ignored() {
        let mut f = fixture("Facility");
        f.vm.set_widget_count("Spaceship", 0);
        assert!(f.vm.hidden_widgets().is_empty());
        assert!(f.vm.widgets().iter().all(|w| w.count == 0));
    }

    // === Routing ===

    #[test]
    fn test_route_keeps_zero_count_widget_visible_until_closed() {
        let mut f = fixture("Facility");
        f.vm.set_widget_count("Program", 0);
        assert!(f.vm.is_hidden("program"));

        f.vm.route("program");
        assert!(!f.vm.is_hidden("program"));
        assert!(f.vm.find_widget_by_id("program").unwrap().force_show);
        assert_eq!(f.vm.active_widget().unwrap().id, "program");
        assert_eq!(*f.events.borrow(), vec!["program".to_string()]);

        f.vm.close_tab(CloseTabRequest {
            widget_id: "program".to_string(),
        });
        assert!(!f.vm.find_widget_by_id("program").unwrap().force_show);
        assert!(f.vm.is_hidden("program"));
    }

    #[test]
    fn test_route_to_missing_widget_redirects_without_event() {
        let mut f = fixture("Facility");
        f.vm.initialize();
        f.events.borrow_mut().clear();
        f.router.set_widget("control");
        f.vm.process_navigation();
        f.events.borrow_mut().clear();

        f.vm.route("missing");
        assert_eq!(f.router.current_widget().as_deref(), Some("info"));
        assert!(f.events.borrow().is_empty());
        assert_eq!(f.vm.active_widget().unwrap().id, "control");

        assert_eq!(f.vm.process_navigation(), 1);
        assert_eq!(f.vm.active_widget().unwrap().id, "info");
        assert_eq!(*f.events.borrow(), vec!["info".to_string()]);
    }

    #[test]
    fn test_route_on_empty_list_is_noop() {
        let mut f = fixture_with(
            Vec::new(),
            NavInstance::new("Facility", NavOptions::default()),
            HashMap::new(),
            false,
            Some("missing"),
        );
        f.vm.initialize();
        assert!(f.vm.active_widget().is_none());
        assert_eq!(f.router.current_widget().as_deref(), Some("missing"));
        assert!(f.events.borrow().is_empty());
    }

    #[test]
    fn test_previous_active_widget_is_reevaluated() {
        let mut f = fixture("Facility");
        f.vm.set_widget_count("Program", 0);
        f.vm.route("program");
        f.vm.route("control");
        // opened tabs stay until closed
        assert!(!f.vm.is_hidden("program"));
        assert_eq!(f.vm.active_widget().unwrap().id, "control");
        assert_eq!(
            *f.events.borrow(),
            vec!["program".to_string(), "control".to_string()]
        );
    }

    #[test]
    fn test_close_active_tab_resets_navigation_to_first_widget() {
        let mut f = fixture_with(
            standard_descriptors(),
            NavInstance::new("Facility", NavOptions::default()),
            HashMap::new(),
            false,
            Some("program"),
        );
        f.vm.initialize();
        assert_eq!(f.vm.active_widget().unwrap().id, "program");

        f.vm.close_tab(CloseTabRequest {
            widget_id: "program".to_string(),
        });
        assert_eq!(f.router.current_widget().as_deref(), Some("info"));

        f.vm.process_navigation();
        assert_eq!(f.vm.active_widget().unwrap().id, "info");
    }

    #[test]
    fn test_close_inactive_tab_keeps_navigation() {
        let mut f = fixture_with(
            standard_descriptors(),
            NavInstance::new("Facility", NavOptions::default()),
            HashMap::new(),
            false,
            Some("control"),
        );
        f.vm.initialize();
        f.vm.route("program");
        f.vm.close_tab(CloseTabRequest {
            widget_id: "program".to_string(),
        });
        assert_eq!(f.router.current_widget().as_deref(), Some("control"));

        f.vm.close_tab(CloseTabRequest {
            widget_id: "missing".to_string(),
        });
        assert_eq!(f.router.current_widget().as_deref(), Some("control"));
    }

    // === Lifecycle ===

    #[test]
    fn test_initialize_routes_to_requested_widget() {
        let mut counts = HashMap::new();
        counts.insert("Program".to_string(), 0);
        counts.insert("Control".to_string(), 3);
        let mut f = fixture_with(
            standard_descriptors(),
            NavInstance::new("Facility", NavOptions::default()),
            counts,
            false,
            Some("assessment"),
        );
        f.vm.initialize();

        assert!(f.vm.is_subscribed());
        assert_eq!(f.router.subscriber_count(), 1);
        assert_eq!(f.vm.active_widget().unwrap().id, "assessment");
        assert_eq!(*f.events.borrow(), vec!["assessment".to_string()]);
        assert!(f.vm.is_hidden("program"));
        assert!(!f.vm.is_hidden("control"));
        assert_eq!(f.vm.find_widget_by_id("control").unwrap().count, 3);
    }

    #[test]
    fn test_initialize_without_request_opens_first_widget() {
        let mut f = fixture("Facility");
        f.vm.initialize();
        assert_eq!(f.router.current_widget().as_deref(), Some("info"));
        assert_eq!(f.vm.active_widget().unwrap().id, "info");
        assert_eq!(*f.events.borrow(), vec!["info".to_string()]);

        f.vm.initialize();
        assert_eq!(f.router.subscriber_count(), 1);
    }

    #[test]
    fn test_navigation_changes_route_until_disposed() {
        let mut f = fixture("Facility");
        f.vm.initialize();

        f.router.set_widget("control");
        assert_eq!(f.vm.process_navigation(), 1);
        assert_eq!(f.vm.active_widget().unwrap().id, "control");

        f.vm.dispose();
        assert!(!f.vm.is_subscribed());
        assert_eq!(f.router.subscriber_count(), 0);

        f.router.set_widget("program");
        assert_eq!(f.vm.process_navigation(), 0);
        assert_eq!(f.vm.active_widget().unwrap().id, "control");
    }

    #[test]
    fn test_navigate_goes_through_router() {
        let mut f = fixture("Facility");
        f.vm.initialize();
        f.vm.set_widget_count("Program", 0);
        assert!(f.vm.is_hidden("program"));

        f.vm.navigate("program");
        assert_eq!(f.router.current_widget().as_deref(), Some("program"));
        assert_eq!(f.vm.active_widget().unwrap().id, "program");
        assert!(!f.vm.is_hidden("program"));

        f.vm.navigate("missing");
        assert_eq!(f.router.current_widget().as_deref(), Some("info"));
        assert_eq!(f.vm.active_widget().unwrap().id, "info");
    }

    #[test]
    fn test_drop_unsubscribes() {
        let f = fixture("Facility");
        let router = f.router.clone();
        let mut vm = f.vm;
        vm.initialize();
        assert_eq!(router.subscriber_count(), 1);
        drop(vm);
        assert_eq!(router.subscriber_count(), 0);
    }

    #[test]
    fn test_listener_removal() {
        let mut f = fixture("Facility");
        let seen = Rc::new(RefCell::new(0));
        let sink = seen.clone();
        let id = f.vm.on_event(move |_| *sink.borrow_mut() += 1);
        f.vm.route("program");
        f.vm.off(id);
        f.vm.route("control");
        assert_eq!(*seen.borrow(), 1);
        assert_eq!(f.events.borrow().len(), 2);
    }

    // === Derived state ===

    #[test]
    fn test_show_tabs() {
        let f = fixture("Facility");
        assert!(!f.vm.show_tabs());

        f.counts.set("Program", 0);
        assert!(f.vm.show_tabs());

        let f = fixture_with(
            standard_descriptors(),
            NavInstance::new("Facility", NavOptions::default()),
            HashMap::new(),
            true,
            None,
        );
        assert!(f.vm.show_tabs());
    }

    #[test]
    fn test_pushed_counts_reach_show_tabs() {
        let mut f = fixture("Facility");
        f.vm.initialize();
        assert!(!f.vm.show_tabs());

        f.vm.update_count("Program", 3);
        assert_eq!(f.vm.find_widget_by_id("program").map(|w| w.count), Some(3));
        assert!(f.vm.show_tabs());
        assert_eq!(f.counts.counts().get("Program"), Some(&3));
    }

    #[test]
    fn test_instance_for_model() {
        use contracts::domain::a001_facility::FACILITY;
        let instance = NavInstance::for_model(&FACILITY, &NavConfig::default());
        assert_eq!(instance.instance_type, "Facility");
        assert!(!instance.nav_options.show_all_tabs);
    }
}
