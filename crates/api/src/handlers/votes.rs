use std::sync::Arc;

use axum::{extract::State, Json};

use eventpoll_core::{
    errors::PollError,
    models::Preference,
    tally::{tally_votes, GetVotesResponse},
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Returns the aggregated vote view for the stacked-bar chart.
///
/// Reads the full preference dump and recomputes the tally from scratch on
/// every call. `tally` is `null` when nothing has been submitted yet, so the
/// presentation layer renders its neutral state instead of an empty chart.
#[axum::debug_handler]
pub async fn get_votes(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<GetVotesResponse>, AppError> {
    let rows = eventpoll_db::repositories::preference::get_all_preferences(&state.db_pool)
        .await
        .map_err(PollError::Database)?;

    let preferences: Vec<Preference> = rows.into_iter().map(Into::into).collect();
    let tally = tally_votes(&preferences, &state.catalog);

    Ok(Json(GetVotesResponse { tally }))
}
