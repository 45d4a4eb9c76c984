pub mod footer;
pub mod icons;
pub mod menu;
pub mod modal;
pub mod navigation;
pub mod section;
