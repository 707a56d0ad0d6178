pub mod api;
pub mod app_context;
pub mod config;
pub mod forms;
pub mod logging;
pub mod navigation;
pub mod session;
