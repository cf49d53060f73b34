//! Domain types for the catalog page.

pub mod product;

pub use product::{Availability, Product};
