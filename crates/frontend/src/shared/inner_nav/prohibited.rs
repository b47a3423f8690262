/// Child model tabs that never take part in hidden-tab bookkeeping for a parent type
static PROHIBITED_MAP: &[(&str, &[&str])] = &[
    ("Issue", &["Assessment", "Audit"]),
    ("Assessment", &["Evidence"]),
];

pub fn prohibited_children(parent_type: &str) -> &'static [&'static str] {
    PROHIBITED_MAP
        .iter()
        .find(|(parent, _)| *parent == parent_type)
        .map(|(_, children)| *children)
        .unwrap_or(&[])
}

pub fn is_prohibited(parent_type: &str, child_model: &str) -> bool {
    prohibited_children(parent_type).contains(&child_model)
}
