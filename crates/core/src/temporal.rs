//! Points in time that money values and rates can be stamped with.

use std::fmt::Debug;
use std::hash::Hash;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// A point-in-time representation.
///
/// Money and rate values only ever compare and hash their timestamps; `now`
/// is needed by converters that fall back to the current time.
pub trait Temporal: Clone + Eq + Ord + Hash + Debug {
    /// Returns the current point in time.
    fn now() -> Self;
}

impl Temporal for DateTime<Utc> {
    fn now() -> Self {
        Utc::now()
    }
}

impl Temporal for DateTime<FixedOffset> {
    fn now() -> Self {
        Utc::now().fixed_offset()
    }
}

impl Temporal for NaiveDateTime {
    fn now() -> Self {
        Utc::now().naive_utc()
    }
}

/// Calendar date, as used for end-of-day rates.
impl Temporal for NaiveDate {
    fn now() -> Self {
        Utc::now().date_naive()
    }
}
