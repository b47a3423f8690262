//! Business model descriptors

pub mod a001_facility;
pub mod cacheable;
mod registry;

pub use registry::{model_by_name, MODELS};
