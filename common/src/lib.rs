pub mod catalog;
pub mod config;
pub mod geometry;
pub mod hit;
pub mod listener;
pub mod modal;
pub mod section;
pub mod theme;
pub mod view;
