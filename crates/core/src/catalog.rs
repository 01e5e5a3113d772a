//! The fixed schedule of slots offered for voting.
//!
//! The catalog is read-only configuration data: an ordered list of dates,
//! each with an ordered list of time labels. Order matters only for display.
//! An empty catalog means there is nothing to vote on and the presentation
//! layer skips the form entirely.

use serde::{Deserialize, Serialize};

use crate::models::slot::Slot;

/// One votable date and its offered time labels, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub date_label: String,
    pub time_labels: Vec<String>,
}

/// Ordered collection of every (date, time) pair open for voting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub days: Vec<ScheduleDay>,
}

impl Catalog {
    pub fn new(days: Vec<ScheduleDay>) -> Self {
        Self { days }
    }

    /// The hardcoded schedule for the current event.
    pub fn default_event() -> Self {
        let full_day = ["8:00", "9:00", "10:00", "11:00", "14:00", "15:00", "16:00"];
        let morning = ["8:00", "9:00", "10:00", "11:00"];

        Self::new(vec![
            ScheduleDay::from_labels("Thursday 24/04/2025", &full_day),
            ScheduleDay::from_labels("Friday 25/04/2025", &morning),
            ScheduleDay::from_labels("Monday 28/04/2025", &full_day),
            ScheduleDay::from_labels("Tuesday 29/04/2025", &morning),
        ])
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|day| day.time_labels.is_empty())
    }

    /// Whether the slot is part of the current schedule.
    pub fn contains(&self, slot: &Slot) -> bool {
        self.days.iter().any(|day| {
            day.date_label == slot.date_label
                && day.time_labels.iter().any(|t| *t == slot.time_label)
        })
    }

    /// All slots in catalog display order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.days.iter().flat_map(|day| {
            day.time_labels
                .iter()
                .map(|time| Slot::new(day.date_label.clone(), time.clone()))
        })
    }
}

impl ScheduleDay {
    pub fn from_labels(date_label: &str, time_labels: &[&str]) -> Self {
        Self {
            date_label: date_label.to_string(),
            time_labels: time_labels.iter().map(|t| t.to_string()).collect(),
        }
    }
}
