//! Tab strip component for object pages
//!
//! Thin wrapper that:
//! - Creates and initializes the ViewModel
//! - Feeds count updates into it
//! - Renders visible tabs, the hidden-tab dropdown and close controls
//!
//! The ViewModel is not reactive; every mutation bumps `revision`, which the
//! view reads to re-render.

use super::events::{CloseTabRequest, InnerNavEvent};
use super::services::InnerNavServices;
use super::view_model::{InnerNavVm, NavInstance};
use super::widget::{Widget, WidgetDescriptor};
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::collections::HashMap;
use thaw::*;

#[component]
pub fn InnerNav(
    descriptors: Vec<WidgetDescriptor>,
    instance: NavInstance,
    services: InnerNavServices,
    /// Live object counts keyed by counts name
    #[prop(into, default = Signal::stored(HashMap::new()))]
    counts: Signal<HashMap<String, usize>>,
    #[prop(optional, into)] on_active_changed: Option<Callback<Widget>>,
) -> impl IntoView {
    let revision = RwSignal::new(0u64);

    let mut vm = InnerNavVm::new(&descriptors, instance, services);
    if let Some(callback) = on_active_changed {
        vm.on_event(move |event| match event {
            InnerNavEvent::ActiveChanged(widget) => callback.run(widget.clone()),
        });
    }
    vm.initialize();

    let vm = StoredValue::new_local(vm);
    on_cleanup(move || vm.update_value(|vm| vm.dispose()));

    Effect::new(move |_| {
        let snapshot = counts.get();
        vm.update_value(|vm| {
            for (name, count) in &snapshot {
                vm.update_count(name, *count);
            }
        });
        revision.update(|r| *r += 1);
    });

    let on_select = Callback::new(move |widget_id: String| {
        vm.update_value(|vm| vm.navigate(&widget_id));
        revision.update(|r| *r += 1);
    });

    let on_close = Callback::new(move |widget_id: String| {
        vm.update_value(|vm| {
            vm.close_tab(CloseTabRequest { widget_id });
            vm.process_navigation();
        });
        revision.update(|r| *r += 1);
    });

    let show_tabs = move || {
        revision.track();
        vm.with_value(|vm| vm.show_tabs())
    };

    let tabs = move || {
        revision.track();
        vm.with_value(|vm| {
            let active = vm.active_widget().map(|w| w.id.clone());
            vm.visible_widgets()
                .into_iter()
                .map(|w| {
                    let is_active = active.as_deref() == Some(w.id.as_str());
                    (w.clone(), is_active)
                })
                .collect::<Vec<_>>()
        })
    };

    let hidden = move || {
        revision.track();
        vm.with_value(|vm| {
            vm.hidden_widgets()
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show when=show_tabs>
            <div class="inner-nav">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    {move || {
                        tabs()
                            .into_iter()
                            .map(|(widget, is_active)| {
                                view! {
                                    <TabButton
                                        widget=widget
                                        is_active=is_active
                                        on_select=on_select
                                        on_close=on_close
                                    />
                                }
                            })
                            .collect_view()
                    }}
                    <HiddenTabs hidden=Signal::derive(hidden) on_select=on_select />
                </Flex>
            </div>
        </Show>
    }
}

#[component]
fn TabButton(
    widget: Widget,
    is_active: bool,
    on_select: Callback<String>,
    on_close: Callback<String>,
) -> impl IntoView {
    let closable = widget.force_show && widget.count == 0 && !widget.uncountable;
    let id_for_select = widget.id.clone();
    let id_for_close = widget.id.clone();
    let show_count = !widget.uncountable && !widget.is_version();
    let class = if is_active {
        "inner-nav__tab inner-nav__tab--active"
    } else {
        "inner-nav__tab"
    };
    let icon_name = if widget.is_version() {
        "version".to_string()
    } else {
        widget.icon.clone()
    };

    view! {
        <span class=class data-widget=widget.id.clone()>
            <Button
                appearance=if is_active { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                size=ButtonSize::Small
                on_click=move |_| on_select.run(id_for_select.clone())
            >
                <span class="tab-icon">{icon(&icon_name)}</span>
                {widget.title.clone()}
                {show_count.then(|| view! {
                    <Badge appearance=BadgeAppearance::Tint>{widget.count}</Badge>
                })}
            </Button>
            {closable.then(|| view! {
                <span
                    class="inner-nav__close"
                    title="Close"
                    on:click=move |_| on_close.run(id_for_close.clone())
                >
                    {icon("x")}
                </span>
            })}
        </span>
    }
}

/// "Add tab" dropdown listing hidden widgets
#[component]
fn HiddenTabs(hidden: Signal<Vec<Widget>>, on_select: Callback<String>) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <Show when=move || !hidden.get().is_empty()>
            <div class="inner-nav__hidden">
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| open.update(|v| *v = !*v)
                >
                    {icon("plus")}
                    {icon("chevron-down")}
                </Button>
                <Show when=move || open.get()>
                    <div class="inner-nav__hidden-list">
                        {move || {
                            hidden
                                .get()
                                .into_iter()
                                .map(|widget| {
                                    let id = widget.id.clone();
                                    view! {
                                        <div
                                            class="inner-nav__hidden-item"
                                            on:click=move |_| {
                                                open.set(false);
                                                on_select.run(id.clone());
                                            }
                                        >
                                            {icon(&widget.icon)}
                                            {widget.title.clone()}
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>
        </Show>
    }
}
