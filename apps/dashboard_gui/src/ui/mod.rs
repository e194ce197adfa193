//! UI layer: the dashboard app shell and its screens.

pub mod app;

pub use app::DashboardApp;
