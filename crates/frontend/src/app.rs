use crate::domain::a001_facility::ui::details::FacilityDetail;
use contracts::domain::a001_facility::FacilityStatus;
use leptos::prelude::*;
use std::collections::HashMap;

#[component]
pub fn App() -> impl IntoView {
    let counts = RwSignal::new(HashMap::from([
        ("Program".to_string(), 2),
        ("Control".to_string(), 5),
        ("Assessment".to_string(), 0),
        ("Audit".to_string(), 0),
        ("Issue".to_string(), 1),
        ("Control_version".to_string(), 0),
    ]));

    view! {
        <FacilityDetail
            id="1".to_string()
            title="Main Facility".to_string()
            status=FacilityStatus::Active
            counts=counts
            is_admin=true
        />
    }
}
