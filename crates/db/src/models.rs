use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use eventpoll_core::models::Preference;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DbPreference {
    pub user_name: String,
    pub date_label: String,
    pub time_label: String,
}

impl From<DbPreference> for Preference {
    fn from(row: DbPreference) -> Self {
        Preference {
            user_name: row.user_name,
            date_label: row.date_label,
            time_label: row.time_label,
        }
    }
}
