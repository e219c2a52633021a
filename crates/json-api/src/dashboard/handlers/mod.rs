//! Dashboard Handlers

pub(crate) mod get;
