use super::a001_facility::FACILITY;
use crate::shared::metadata::ModelDescriptor;

/// Every model descriptor known to the client
pub static MODELS: &[&ModelDescriptor] = &[&FACILITY];

/// Look a descriptor up by model short name, e.g. `"Facility"`
pub fn model_by_name(name: &str) -> Option<&'static ModelDescriptor> {
    MODELS.iter().copied().find(|m| m.model_name == name)
}
