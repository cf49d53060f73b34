//! Shopfront Core — catalog domain types, page element tree, page controller.
//!
//! This crate contains everything the catalog page does that is independent
//! of how the page is drawn:
//! - Product domain types (what the catalog lists)
//! - The page element tree, addressed by stable identifier
//! - Declarative page markup (which controls exist, and their defaults)
//! - The Catalog Page Controller: price label sync, filter mutual exclusion,
//!   and the log-only `filter_products` stub boundary

pub mod controller;
pub mod domain;
pub mod page;
