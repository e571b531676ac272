pub mod api_utils;
pub mod components;
pub mod config;
pub mod navigation;
pub mod page_frame;
