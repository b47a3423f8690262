//! Tabs shown on the Facility page

use crate::shared::inner_nav::{WidgetDescriptor, WidgetTitle};

pub const INFO_WIDGET_ID: &str = "info";
const CONTROLS_TITLE: &str = "Controls";

pub fn facility_widget_descriptors() -> Vec<WidgetDescriptor> {
    vec![
        WidgetDescriptor::new(INFO_WIDGET_ID, "Facility Info", "Facility")
            .with_icon("info")
            .uncountable(),
        WidgetDescriptor::new("program", "Programs", "Program")
            .with_icon("program")
            .with_order(10),
        WidgetDescriptor::new("control", CONTROLS_TITLE, "Control")
            .with_icon("control")
            .with_order(20),
        WidgetDescriptor::new("assessment", "Assessments", "Assessment")
            .with_icon("assessment")
            .with_order(30)
            .force_refetch(),
        WidgetDescriptor::new("audit", "Audits", "Audit")
            .with_icon("audit")
            .with_order(30),
        WidgetDescriptor::new("issue", "Issues", "Issue")
            .with_icon("issue")
            .with_order(40),
        WidgetDescriptor::new(
            "control_version",
            WidgetTitle::resolver(|| format!("{} Versions", CONTROLS_TITLE)),
            "Control",
        )
        .with_order(50)
        .with_content_counts_name("Control_version"),
        WidgetDescriptor::new("change_log", "Change Log", "Facility")
            .with_icon("version")
            .with_order(100)
            .uncountable(),
    ]
}
