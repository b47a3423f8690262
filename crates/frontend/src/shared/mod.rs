pub mod icons;
pub mod inner_nav;
