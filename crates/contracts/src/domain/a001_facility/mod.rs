pub mod descriptor;
pub mod status;

pub use descriptor::FACILITY;
pub use status::FacilityStatus;
