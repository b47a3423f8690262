mod page;
pub mod widgets;

pub use page::FacilityDetail;
