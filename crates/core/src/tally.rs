//! # Vote Aggregation
//!
//! Turns the full persisted preference set into an ordered per-slot tally
//! for the stacked-bar chart. The tally is a derived view: it is recomputed
//! from scratch on every call and never cached, so two calls over the same
//! preference dump always produce identical output.
//!
//! ## Ordering
//!
//! Slots are ordered for display by a composite key:
//!
//! 1. Slots still present in the catalog come before slots that are not
//!    (votes for retired slots are still counted, just shown last).
//! 2. The date parsed from the date label (`"Thursday 24/04/2025"` sorts by
//!    the `24/04/2025` portion; the day name is ignored). Labels whose date
//!    portion cannot be parsed order after those that can.
//! 3. The time label parsed chronologically, so `"8:00"` precedes `"14:00"`
//!    where a lexicographic comparison would not.
//! 4. The raw labels, as a final tiebreak.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::{Preference, Slot};

/// Votes for a single slot, broken out per user.
///
/// Each voter contributes exactly one vote per slot (the store's uniqueness
/// constraint makes the per-user count 0 or 1), so `total_votes` is the
/// number of distinct users and each map value is 1. The per-user breakdown
/// drives the chart's colored segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotTally {
    pub slot: Slot,
    pub voters: BTreeMap<String, u32>,
    pub total_votes: u32,
}

/// The aggregated vote view, slots in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub slots: Vec<SlotTally>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetVotesResponse {
    /// `None` when nothing has been submitted yet, so callers can render a
    /// neutral "no votes" state instead of an empty chart.
    pub tally: Option<VoteTally>,
}

/// Aggregates the full preference dump into an ordered tally.
///
/// Returns `None` when there are no preferences at all; an empty store is a
/// distinct state, not a zero-vote tally and not an error.
pub fn tally_votes(preferences: &[Preference], catalog: &Catalog) -> Option<VoteTally> {
    if preferences.is_empty() {
        return None;
    }

    // Group by slot, then by user. Each user counts once per slot.
    let mut by_slot: BTreeMap<Slot, BTreeMap<String, u32>> = BTreeMap::new();
    for preference in preferences {
        by_slot
            .entry(preference.slot())
            .or_default()
            .insert(preference.user_name.clone(), 1);
    }

    let mut slots: Vec<SlotTally> = by_slot
        .into_iter()
        .map(|(slot, voters)| {
            let total_votes = voters.len() as u32;
            SlotTally {
                slot,
                voters,
                total_votes,
            }
        })
        .collect();

    slots.sort_by(|a, b| display_key(&a.slot, catalog).cmp(&display_key(&b.slot, catalog)));

    Some(VoteTally { slots })
}

/// Composite display ordering key for a slot.
///
/// The boolean components push out-of-catalog slots and unparseable labels
/// after their well-formed counterparts; the trailing labels keep the order
/// total and stable.
fn display_key(slot: &Slot, catalog: &Catalog) -> (bool, bool, NaiveDate, bool, NaiveTime, String, String) {
    let date = parse_date_label(&slot.date_label);
    let time = parse_time_label(&slot.time_label);

    (
        !catalog.contains(slot),
        date.is_none(),
        date.unwrap_or(NaiveDate::MIN),
        time.is_none(),
        time.unwrap_or(NaiveTime::MIN),
        slot.date_label.clone(),
        slot.time_label.clone(),
    )
}

/// Extracts the calendar date from a label such as `"Thursday 24/04/2025"`.
///
/// The date is the last whitespace-separated token, `DD/MM/YYYY`. A bare
/// `DD/MM` is accepted too and pinned to a fixed year so that labels missing
/// the year still order by day and month.
fn parse_date_label(date_label: &str) -> Option<NaiveDate> {
    let token = date_label.split_whitespace().last()?;
    if let Ok(date) = NaiveDate::parse_from_str(token, "%d/%m/%Y") {
        return Some(date);
    }
    NaiveDate::parse_from_str(&format!("{token}/2000"), "%d/%m/%Y").ok()
}

/// Parses a time label such as `"8:00"` or `"14:00"`.
fn parse_time_label(time_label: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time_label.trim(), "%H:%M").ok()
}
