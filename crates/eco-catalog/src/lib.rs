#![deny(unsafe_code)]
//! # eco-catalog
//!
//! Read-only lookup tables consumed by every estimate:
//!
//! - [`MaterialCatalog`] - material name → CO2 intensity and recyclability
//! - [`ComplexityTable`] - product category → manufacturing complexity factor
//!
//! Both tables degrade gracefully: an unknown key resolves to a documented
//! default rather than an error, so an estimate is never blocked by an
//! unseen material or category. Tables are built once (from the built-in
//! data or a JSON/CSV file) and shared behind an `Arc`.

pub mod complexity;
pub mod error;
pub mod format;
pub mod materials;

pub use complexity::ComplexityTable;
pub use error::{CatalogError, Result};
pub use format::CatalogFormat;
pub use materials::MaterialCatalog;
