use std::collections::BTreeSet;

use axum::extract::{Path, State};
use axum::Json;
use pretty_assertions::assert_eq;
use rstest::rstest;

use eventpoll_api::handlers::preference::{get_preferences, replace_preferences};
use eventpoll_core::errors::PollError;
use eventpoll_core::models::{ReplacePreferencesRequest, Slot};
use eventpoll_db::mock::repositories::MockPreferenceRepo;
use eventpoll_db::models::DbPreference;

use crate::test_utils::create_test_state;

fn request(slots: &[(&str, &str)]) -> ReplacePreferencesRequest {
    ReplacePreferencesRequest {
        slots: slots
            .iter()
            .map(|(date, time)| Slot::new(*date, *time))
            .collect(),
    }
}

#[tokio::test]
async fn unknown_user_gets_empty_selection() {
    let state = create_test_state().await;

    let response = get_preferences(State(state), Path("Alice".to_string()))
        .await
        .unwrap();

    assert_eq!(response.0.user_name, "Alice");
    assert_eq!(response.0.slots, vec![]);
}

#[tokio::test]
async fn submission_round_trips_through_the_store() {
    let state = create_test_state().await;
    let payload = request(&[
        ("Thursday 24/04/2025", "8:00"),
        ("Friday 25/04/2025", "9:00"),
    ]);

    let response = replace_preferences(
        State(state.clone()),
        Path("Alice".to_string()),
        Json(payload),
    )
    .await
    .unwrap();
    assert_eq!(response.0.stored, 2);

    let stored = get_preferences(State(state), Path("Alice".to_string()))
        .await
        .unwrap();
    assert_eq!(stored.0.slots.len(), 2);
    assert!(stored
        .0
        .slots
        .contains(&Slot::new("Thursday 24/04/2025", "8:00")));
    assert!(stored
        .0
        .slots
        .contains(&Slot::new("Friday 25/04/2025", "9:00")));
}

#[tokio::test]
async fn resubmission_replaces_the_previous_selection() {
    let state = create_test_state().await;

    replace_preferences(
        State(state.clone()),
        Path("Alice".to_string()),
        Json(request(&[
            ("Thursday 24/04/2025", "8:00"),
            ("Thursday 24/04/2025", "9:00"),
        ])),
    )
    .await
    .unwrap();

    replace_preferences(
        State(state.clone()),
        Path("Alice".to_string()),
        Json(request(&[("Monday 28/04/2025", "15:00")])),
    )
    .await
    .unwrap();

    let stored = get_preferences(State(state), Path("Alice".to_string()))
        .await
        .unwrap();
    assert_eq!(
        stored.0.slots,
        vec![Slot::new("Monday 28/04/2025", "15:00")]
    );
}

#[tokio::test]
async fn empty_submission_withdraws_everything() {
    let state = create_test_state().await;

    replace_preferences(
        State(state.clone()),
        Path("Alice".to_string()),
        Json(request(&[("Thursday 24/04/2025", "8:00")])),
    )
    .await
    .unwrap();

    let response = replace_preferences(
        State(state.clone()),
        Path("Alice".to_string()),
        Json(request(&[])),
    )
    .await
    .unwrap();
    assert_eq!(response.0.stored, 0);

    let stored = get_preferences(State(state), Path("Alice".to_string()))
        .await
        .unwrap();
    assert_eq!(stored.0.slots, vec![]);
}

#[tokio::test]
async fn duplicate_slots_collapse_in_one_submission() {
    let state = create_test_state().await;
    let payload = request(&[
        ("Thursday 24/04/2025", "8:00"),
        ("Thursday 24/04/2025", "8:00"),
    ]);

    let response = replace_preferences(
        State(state.clone()),
        Path("Alice".to_string()),
        Json(payload),
    )
    .await
    .unwrap();
    assert_eq!(response.0.stored, 1);

    let stored = get_preferences(State(state), Path("Alice".to_string()))
        .await
        .unwrap();
    assert_eq!(stored.0.slots.len(), 1);
}

#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test]
async fn blank_name_is_rejected_before_any_write(#[case] name: &str) {
    let state = create_test_state().await;

    // Seed another user so we can observe the store is untouched after the
    // rejected submission.
    replace_preferences(
        State(state.clone()),
        Path("Bob".to_string()),
        Json(request(&[("Thursday 24/04/2025", "8:00")])),
    )
    .await
    .unwrap();

    let result = replace_preferences(
        State(state.clone()),
        Path(name.to_string()),
        Json(request(&[("Thursday 24/04/2025", "9:00")])),
    )
    .await;

    match result {
        Err(err) => match err.0 {
            PollError::Validation(_) => {}
            e => panic!("Expected Validation error, got: {:?}", e),
        },
        Ok(_) => panic!("Blank name should be rejected"),
    }

    let all = eventpoll_db::repositories::preference::get_all_preferences(&state.db_pool)
        .await
        .unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].user_name, "Bob");
}

#[tokio::test]
async fn submitted_name_is_trimmed() {
    let state = create_test_state().await;

    replace_preferences(
        State(state.clone()),
        Path("  Alice  ".to_string()),
        Json(request(&[("Thursday 24/04/2025", "8:00")])),
    )
    .await
    .unwrap();

    let stored = get_preferences(State(state), Path("Alice".to_string()))
        .await
        .unwrap();
    assert_eq!(stored.0.slots.len(), 1);
}

#[tokio::test]
async fn repository_failures_surface_as_database_errors() {
    // Mock-level check that a failing store propagates instead of being
    // swallowed; mirrors the handler's validate -> replace flow.
    let mut repo = MockPreferenceRepo::new();
    repo.expect_replace_preferences()
        .returning(|_, _| Err(eyre::eyre!("disk I/O error")));

    let selection: BTreeSet<Slot> = request(&[("Thursday 24/04/2025", "8:00")])
        .slots
        .into_iter()
        .collect();

    let result = repo.replace_preferences("Alice", selection).await;
    let err = result.expect_err("failure must propagate");
    let poll_error = PollError::Database(err);

    match poll_error {
        PollError::Database(_) => {}
        e => panic!("Expected Database error, got: {:?}", e),
    }
}

#[tokio::test]
async fn mock_repository_serves_canned_rows() {
    let mut repo = MockPreferenceRepo::new();
    repo.expect_get_preferences().returning(|user_name| {
        Ok(vec![DbPreference {
            user_name: user_name.to_string(),
            date_label: "Thursday 24/04/2025".to_string(),
            time_label: "8:00".to_string(),
        }])
    });

    let rows = repo.get_preferences("Alice").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_name, "Alice");
}
