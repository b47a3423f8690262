//! Facility object page
//!
//! Header with the facility status, the inner navigation tab strip and the
//! content of the active tab.

use super::widgets::{facility_widget_descriptors, INFO_WIDGET_ID};
use crate::shared::inner_nav::{
    load_page_config, BrowserRouter, InnerNav, InnerNavServices, NavInstance, StaticAdmin,
    StaticCounts, Widget,
};
use contracts::domain::a001_facility::{FacilityStatus, FACILITY};
use contracts::shared::metadata::ModelCapability;
use leptos::prelude::*;
use std::collections::HashMap;
use std::rc::Rc;
use thaw::*;

#[component]
pub fn FacilityDetail(
    id: String,
    title: String,
    status: FacilityStatus,
    /// Object counts per counts name, pushed by the page loader
    #[prop(into, default = Signal::stored(HashMap::new()))]
    counts: Signal<HashMap<String, usize>>,
    #[prop(optional)] is_admin: bool,
) -> impl IntoView {
    let active = RwSignal::new(None::<Widget>);

    let config = load_page_config();
    let instance = NavInstance::for_model(&FACILITY, &config);
    let initial_counts = counts.get_untracked();
    let services = InnerNavServices::new(
        Rc::new(StaticCounts::new(initial_counts)),
        Rc::new(StaticAdmin(is_admin)),
        Rc::new(BrowserRouter::from_location()),
    );

    let on_active_changed = Callback::new(move |widget: Widget| {
        log::info!("facility page: active tab '{}'", widget.id);
        active.set(Some(widget));
    });

    let badge_color = match status {
        FacilityStatus::Active => BadgeColor::Success,
        FacilityStatus::Draft => BadgeColor::Warning,
        FacilityStatus::Deprecated => BadgeColor::Danger,
    };
    let object_url = FACILITY.object_url(&id);
    let comments_enabled = FACILITY.capabilities().comments_enabled;

    view! {
        <div class="page page--detail" id="a001_facility--detail" data-page-category="detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h2>{title}</h2>
                    <Badge appearance=BadgeAppearance::Filled color=badge_color>
                        {status.as_str()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <span class="page__meta">{object_url}</span>
                </div>
            </div>

            <InnerNav
                descriptors=facility_widget_descriptors()
                instance=instance
                services=services
                counts=counts
                on_active_changed=on_active_changed
            />

            <div class="page__content">
                {move || match active.get() {
                    Some(widget) if widget.id == INFO_WIDGET_ID => {
                        view! { <InfoTab comments_enabled=comments_enabled /> }.into_any()
                    }
                    Some(widget) => view! {
                        <div class="tab-placeholder" data-widget=widget.id.clone()>
                            <h3>{widget.title.clone()}</h3>
                            <span>{format!("{} object(s)", widget.count)}</span>
                        </div>
                    }
                    .into_any(),
                    None => view! { <div>"No tabs"</div> }.into_any(),
                }}
            </div>
        </div>
    }
}

/// Attribute overview rendered from the tree-view columns of the descriptor
#[component]
fn InfoTab(comments_enabled: bool) -> impl IntoView {
    let columns = FACILITY.tree_view.display_columns();
    let statuses = FACILITY.statuses.join(", ");
    let mixins = FACILITY
        .mixins
        .iter()
        .map(|mixin| mixin.name())
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div class="facility-info">
            <table class="facility-info__attributes">
                <thead>
                    <tr>
                        <th>"Attribute"</th>
                        <th>"Field"</th>
                        <th>"Sort by"</th>
                    </tr>
                </thead>
                <tbody>
                    {columns
                        .into_iter()
                        .map(|column| view! {
                            <tr>
                                <td>{column.attr_title}</td>
                                <td>{column.attr_name}</td>
                                <td>{column.sort_field()}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
            <div class="facility-info__statuses">{format!("Statuses: {}", statuses)}</div>
            <div class="facility-info__mixins">{format!("Capabilities: {}", mixins)}</div>
            {(!comments_enabled).then(|| view! {
                <div class="facility-info__note">"Comments are disabled for facilities"</div>
            })}
        </div>
    }
}
