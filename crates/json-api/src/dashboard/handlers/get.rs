//! Dashboard Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    dashboard::responses::DashboardResponse, errors::ApiError, extensions::*, state::State,
};

/// Dashboard Handler
///
/// Returns popular products and the latest sales, purchase and expense
/// summaries.
#[endpoint(tags("dashboard"), summary = "Dashboard Summary")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<DashboardResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let summary = state
        .app
        .dashboard
        .get_dashboard_summary()
        .await
        .or_500("failed to build dashboard summary")?;

    Ok(Json(summary.into()))
}
