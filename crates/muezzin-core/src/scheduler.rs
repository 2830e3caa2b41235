//! Next-event lookup and countdown arithmetic.
//!
//! [`find_next`] is a pure function of its two inputs -- no clock reads, no
//! IO. The caller injects the reference instant, which keeps tests free of
//! wall-clock mocking.

use std::fmt;

use chrono::{DateTime, Duration, LocalResult, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::ValidationError;
use crate::event::{EventSet, NamedEvent};

/// Remaining time decomposed into non-negative whole components.
///
/// Integer division with remainder; the sub-second remainder is dropped,
/// not rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    pub fn from_duration(d: Duration) -> Self {
        let total = d.num_seconds().max(0);
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// The next upcoming event and the time remaining until it.
#[derive(Debug, Clone, Serialize)]
pub struct NextEvent {
    pub event: NamedEvent,
    pub remaining: Countdown,
}

/// Find the first event in display order strictly later than `now`.
///
/// "First" means first in the caller-supplied ordering, not earliest
/// chronologically; the set is assumed pre-sorted by time-of-day and is not
/// re-sorted here. An event at exactly `now` counts as already passed.
///
/// Returns `Ok(None)` once every event has passed. There is no rollover to
/// the next calendar day: callers wanting a next-day fallback re-invoke with
/// tomorrow's [`EventSet`].
pub fn find_next(
    set: &EventSet,
    now: DateTime<Tz>,
) -> Result<Option<NextEvent>, ValidationError> {
    // Deserialized sets can bypass the validated constructor.
    if set.events().is_empty() {
        return Err(ValidationError::EmptyEventSet);
    }

    let tz = now.timezone();
    for event in set.events() {
        let local = set.date().and_time(event.time);
        let instant = match tz.from_local_datetime(&local) {
            LocalResult::Single(t) => t,
            // DST fold: take the earlier of the two instants.
            LocalResult::Ambiguous(earlier, _) => earlier,
            // A local time erased by a DST gap never occurs that day.
            LocalResult::None => continue,
        };
        if instant > now {
            return Ok(Some(NextEvent {
                event: event.clone(),
                remaining: Countdown::from_duration(instant - now),
            }));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use chrono_tz::Tz;
    use proptest::prelude::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    fn sample_set(tz: Tz) -> EventSet {
        let events = vec![
            NamedEvent::new("Fajr", 6, 0).unwrap(),
            NamedEvent::new("Dhuhr", 12, 30).unwrap(),
            NamedEvent::new("Maghrib", 18, 45).unwrap(),
        ];
        EventSet::new(date(), tz, events).unwrap()
    }

    fn at(tz: Tz, h: u32, m: u32, s: u32) -> DateTime<Tz> {
        tz.from_local_datetime(&date().and_time(NaiveTime::from_hms_opt(h, m, s).unwrap()))
            .single()
            .unwrap()
    }

    #[test]
    fn returns_first_upcoming_event() {
        let set = sample_set(Tz::UTC);
        let next = find_next(&set, at(Tz::UTC, 11, 0, 0)).unwrap().unwrap();
        assert_eq!(next.event.name, "Dhuhr");
        assert_eq!(
            next.remaining,
            Countdown {
                hours: 1,
                minutes: 30,
                seconds: 0
            }
        );
    }

    #[test]
    fn before_first_event_counts_down_to_it() {
        let set = sample_set(Tz::UTC);
        let next = find_next(&set, at(Tz::UTC, 4, 59, 30)).unwrap().unwrap();
        assert_eq!(next.event.name, "Fajr");
        assert_eq!(next.remaining.total_seconds(), 3630);
    }

    #[test]
    fn after_last_event_returns_none() {
        let set = sample_set(Tz::UTC);
        assert!(find_next(&set, at(Tz::UTC, 19, 0, 0)).unwrap().is_none());
    }

    #[test]
    fn event_at_exactly_now_is_passed() {
        // Strict inequality: at 12:30:00 sharp Dhuhr is over, Maghrib is next.
        let set = sample_set(Tz::UTC);
        let next = find_next(&set, at(Tz::UTC, 12, 30, 0)).unwrap().unwrap();
        assert_eq!(next.event.name, "Maghrib");
        assert_eq!(
            next.remaining,
            Countdown {
                hours: 6,
                minutes: 15,
                seconds: 0
            }
        );
    }

    #[test]
    fn caller_order_wins_over_chronological_order() {
        let events = vec![
            NamedEvent::new("Maghrib", 18, 45).unwrap(),
            NamedEvent::new("Fajr", 6, 0).unwrap(),
        ];
        let set = EventSet::new(date(), Tz::UTC, events).unwrap();
        let next = find_next(&set, at(Tz::UTC, 5, 0, 0)).unwrap().unwrap();
        assert_eq!(next.event.name, "Maghrib");
    }

    #[test]
    fn evaluates_in_the_reference_timezone() {
        let tz: Tz = "Africa/Tunis".parse().unwrap();
        let set = sample_set(tz);
        let next = find_next(&set, at(tz, 18, 44, 59)).unwrap().unwrap();
        assert_eq!(next.event.name, "Maghrib");
        assert_eq!(next.remaining.total_seconds(), 1);
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let set = sample_set(Tz::UTC);
        let now = at(Tz::UTC, 11, 0, 0);
        let a = find_next(&set, now).unwrap().unwrap();
        let b = find_next(&set, now).unwrap().unwrap();
        assert_eq!(a.event, b.event);
        assert_eq!(a.remaining, b.remaining);
    }

    #[test]
    fn subsecond_remainder_is_truncated() {
        let d = Duration::milliseconds(5_400_999);
        let c = Countdown::from_duration(d);
        assert_eq!((c.hours, c.minutes, c.seconds), (1, 30, 0));
    }

    #[test]
    fn display_is_zero_padded() {
        let c = Countdown {
            hours: 1,
            minutes: 5,
            seconds: 9,
        };
        assert_eq!(c.to_string(), "01:05:09");
    }

    proptest! {
        #[test]
        fn decomposition_reassembles_truncated_seconds(
            secs in 0i64..200_000,
            millis in 0i64..1_000,
        ) {
            let c = Countdown::from_duration(Duration::milliseconds(secs * 1_000 + millis));
            prop_assert!((0..=59).contains(&c.minutes));
            prop_assert!((0..=59).contains(&c.seconds));
            prop_assert!(c.hours >= 0);
            prop_assert_eq!(c.total_seconds(), secs);
        }
    }
}
