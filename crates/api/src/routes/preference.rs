use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/preferences/:user_name",
            get(handlers::preference::get_preferences),
        )
        .route(
            "/api/preferences/:user_name",
            put(handlers::preference::replace_preferences),
        )
}
