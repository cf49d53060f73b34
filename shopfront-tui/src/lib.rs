//! Shopfront TUI - terminal rendition of the product catalog page
//!
//! Provides the page the controller binds to:
//! - Catalog panel with the price slider, filter checkboxes, and listing
//! - Activity panel showing recorded filter selections
//! - Help panel with keyboard shortcuts

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod persistence;
pub mod sample_data;
pub mod theme;
pub mod ui;

pub use app::AppState;
