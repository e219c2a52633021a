//! Dashboard
//!
//! Read-only reporting views. Nothing here touches the catalog hierarchy
//! beyond reading product rows.

pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::DashboardServiceError;
pub use service::*;
