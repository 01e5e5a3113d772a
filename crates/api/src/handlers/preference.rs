use std::collections::BTreeSet;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use eventpoll_core::{
    errors::PollError,
    models::{
        validate_user_name, GetPreferencesResponse, ReplacePreferencesRequest,
        ReplacePreferencesResponse, Slot,
    },
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Returns the user's current selection, for pre-checking the form.
///
/// A user who has never submitted gets an empty slot list, not an error.
#[axum::debug_handler]
pub async fn get_preferences(
    State(state): State<Arc<ApiState>>,
    Path(user_name): Path<String>,
) -> Result<Json<GetPreferencesResponse>, AppError> {
    let user_name = validate_user_name(&user_name)?;

    let rows = eventpoll_db::repositories::preference::get_preferences(&state.db_pool, user_name)
        .await
        .map_err(PollError::Database)?;

    let response = GetPreferencesResponse {
        user_name: user_name.to_string(),
        slots: rows
            .into_iter()
            .map(|row| Slot::new(row.date_label, row.time_label))
            .collect(),
    };

    Ok(Json(response))
}

/// Replaces the user's entire selection with the submitted one.
///
/// The name is validated before any store operation; the submitted slots
/// are collected into a set, so duplicates collapse before insertion. An
/// empty submission withdraws all of the user's preferences.
#[axum::debug_handler]
pub async fn replace_preferences(
    State(state): State<Arc<ApiState>>,
    Path(user_name): Path<String>,
    Json(payload): Json<ReplacePreferencesRequest>,
) -> Result<Json<ReplacePreferencesResponse>, AppError> {
    let user_name = validate_user_name(&user_name)?;

    let selection: BTreeSet<Slot> = payload.slots.into_iter().collect();

    eventpoll_db::repositories::preference::replace_preferences(
        &state.db_pool,
        user_name,
        &selection,
    )
    .await
    .map_err(PollError::Database)?;

    let response = ReplacePreferencesResponse {
        user_name: user_name.to_string(),
        stored: selection.len(),
    };

    Ok(Json(response))
}
