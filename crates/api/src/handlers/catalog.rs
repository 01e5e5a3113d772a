use axum::{extract::State, Json};
use std::sync::Arc;

use eventpoll_core::catalog::Catalog;

use crate::ApiState;

/// Returns the fixed slot catalog, in display order.
///
/// The presentation layer builds one checkbox per (date, time) pair from
/// this. An empty catalog means there is nothing to vote on.
#[axum::debug_handler]
pub async fn get_catalog(State(state): State<Arc<ApiState>>) -> Json<Catalog> {
    Json(state.catalog.clone())
}
