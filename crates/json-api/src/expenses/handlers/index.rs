//! Expense Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    dashboard::responses::ExpenseByCategoryResponse, errors::ApiError, extensions::*,
    state::State,
};

/// Expense Index Handler
///
/// Returns every expense line, most recent first.
#[endpoint(tags("expenses"), summary = "List Expenses By Category")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<ExpenseByCategoryResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let expenses = state
        .app
        .dashboard
        .list_expenses_by_category()
        .await
        .or_500("failed to fetch expenses")?;

    Ok(Json(expenses.into_iter().map(Into::into).collect()))
}
