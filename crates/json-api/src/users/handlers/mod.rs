//! User Handlers

pub(crate) mod index;
