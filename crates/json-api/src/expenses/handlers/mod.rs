//! Expense Handlers

pub(crate) mod index;
