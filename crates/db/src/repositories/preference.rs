use std::collections::BTreeSet;

use eyre::Result;
use sqlx::{Pool, Sqlite};

use eventpoll_core::models::Slot;

use crate::models::DbPreference;

/// Returns the current selection for a user, ordered for display.
///
/// An unknown user is not an error; the result is simply empty.
pub async fn get_preferences(pool: &Pool<Sqlite>, user_name: &str) -> Result<Vec<DbPreference>> {
    tracing::debug!("Getting preferences for user: {}", user_name);

    let preferences = sqlx::query_as::<_, DbPreference>(
        r#"
        SELECT user_name, date_label, time_label
        FROM preferences
        WHERE user_name = ?
        ORDER BY date_label ASC, time_label ASC
        "#,
    )
    .bind(user_name)
    .fetch_all(pool)
    .await?;

    Ok(preferences)
}

/// Atomically replaces a user's entire selection.
///
/// Delete and inserts run in one transaction: a concurrent reader observes
/// either the old complete set or the new complete set, and a crash
/// mid-write rolls back. An empty selection is a valid withdrawal.
pub async fn replace_preferences(
    pool: &Pool<Sqlite>,
    user_name: &str,
    selection: &BTreeSet<Slot>,
) -> Result<()> {
    tracing::debug!(
        "Replacing preferences: user={}, slots={}",
        user_name,
        selection.len()
    );

    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        DELETE FROM preferences
        WHERE user_name = ?
        "#,
    )
    .bind(user_name)
    .execute(&mut *tx)
    .await?;

    for slot in selection {
        sqlx::query(
            r#"
            INSERT INTO preferences (user_name, date_label, time_label)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(user_name)
        .bind(&slot.date_label)
        .bind(&slot.time_label)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::debug!("Preferences replaced for user: {}", user_name);
    Ok(())
}

/// Full preference dump for aggregation. No filtering, no pagination; the
/// table holds at most a few hundred rows.
pub async fn get_all_preferences(pool: &Pool<Sqlite>) -> Result<Vec<DbPreference>> {
    tracing::debug!("Getting all preferences");

    let preferences = sqlx::query_as::<_, DbPreference>(
        r#"
        SELECT user_name, date_label, time_label
        FROM preferences
        ORDER BY user_name ASC, date_label ASC, time_label ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(preferences)
}
