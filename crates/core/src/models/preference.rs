use serde::{Deserialize, Serialize};

use crate::errors::{PollError, PollResult};
use crate::models::slot::Slot;

/// One persisted preference row: a user's vote for a single slot.
///
/// The store guarantees at most one row per (user, date, time) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    pub user_name: String,
    pub date_label: String,
    pub time_label: String,
}

impl Preference {
    pub fn slot(&self) -> Slot {
        Slot::new(self.date_label.clone(), self.time_label.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPreferencesResponse {
    pub user_name: String,
    pub slots: Vec<Slot>,
}

/// Replace-all submission: the complete new selection for one user.
///
/// Slots are an explicit typed list collected from form state. An empty list
/// is a valid submission and withdraws every prior preference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacePreferencesRequest {
    #[serde(default)]
    pub slots: Vec<Slot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacePreferencesResponse {
    pub user_name: String,
    /// Number of distinct slots stored for the user after the replace.
    pub stored: usize,
}

/// Checks a submitted user name before any store operation.
///
/// Empty and whitespace-only names are rejected; the returned slice is the
/// trimmed name to persist.
pub fn validate_user_name(user_name: &str) -> PollResult<&str> {
    let trimmed = user_name.trim();
    if trimmed.is_empty() {
        return Err(PollError::Validation(
            "User name must not be empty".to_string(),
        ));
    }
    Ok(trimmed)
}
