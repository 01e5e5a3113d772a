use serde::{Deserialize, Serialize};

/// One schedulable option: a date label paired with a time label.
///
/// Labels are the display strings offered by the catalog, e.g.
/// `("Thursday 24/04/2025", "8:00")`. Ordering is derived so selections can
/// be collected into a `BTreeSet`, which also dedupes repeated submissions
/// of the same slot before they reach storage.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub date_label: String,
    pub time_label: String,
}

impl Slot {
    pub fn new(date_label: impl Into<String>, time_label: impl Into<String>) -> Self {
        Self {
            date_label: date_label.into(),
            time_label: time_label.into(),
        }
    }
}
