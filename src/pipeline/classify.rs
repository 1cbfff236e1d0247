use chrono::{DateTime, Utc};
use serde::Serialize;

/// Display category for a time-bound record.
///
/// Derived from the record's date and the caller's clock at every call;
/// never persisted. Two renders of the same event can disagree when real
/// time crosses its start instant mid-session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
pub enum EventCategory {
    #[strum(to_string = "Upcoming")]
    Upcoming,
    #[strum(to_string = "Past Event")]
    Past,
}

/// `Upcoming` iff `start` is strictly after `at`, else `Past`.
pub fn classify(start: DateTime<Utc>, at: DateTime<Utc>) -> EventCategory {
    if start > at {
        EventCategory::Upcoming
    } else {
        EventCategory::Past
    }
}

/// Like [`classify`], with dateless rows landing in the archive.
pub fn classify_opt(start: Option<DateTime<Utc>>, at: DateTime<Utc>) -> EventCategory {
    match start {
        Some(start) => classify(start, at),
        None => EventCategory::Past,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    #[test]
    fn tomorrow_is_upcoming_and_flips_after_the_date() {
        let start = Utc::now();
        let day_before = start - TimeDelta::days(1);
        let day_after = start + TimeDelta::days(1);

        assert_eq!(classify(start, day_before), EventCategory::Upcoming);
        assert_eq!(classify(start, day_after), EventCategory::Past);
    }

    #[test]
    fn the_exact_instant_is_past() {
        let at = Utc::now();
        assert_eq!(classify(at, at), EventCategory::Past);
    }

    #[test]
    fn dateless_rows_are_past() {
        assert_eq!(classify_opt(None, Utc::now()), EventCategory::Past);
    }

    #[test]
    fn labels_match_the_badges() {
        assert_eq!(EventCategory::Upcoming.to_string(), "Upcoming");
        assert_eq!(EventCategory::Past.to_string(), "Past Event");
    }
}
