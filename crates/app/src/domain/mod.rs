//! Inventory Domain Concerns

pub mod brands;
pub mod categories;
pub(crate) mod columns;
pub mod dashboard;
pub mod hierarchy;
pub mod integrity;
pub mod models;
pub mod products;
pub mod users;
pub mod validation;
