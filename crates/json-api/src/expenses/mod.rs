//! Expenses

mod handlers;

pub(crate) use handlers::*;
