//! Prayer-day event model.
//!
//! A [`NamedEvent`] is one named time-of-day; an [`EventSet`] is the ordered
//! collection of them for a single calendar day in a single timezone. The
//! set's order is the caller-supplied display/lookup order and is never
//! re-sorted here.

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One named daily event, e.g. `Fajr` at 05:12.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEvent {
    pub name: String,
    pub time: NaiveTime,
}

impl NamedEvent {
    /// Create an event from hour/minute components.
    ///
    /// Fails when hour is not in `0..=23` or minute not in `0..=59`.
    pub fn new(name: impl Into<String>, hour: u32, minute: u32) -> Result<Self, ValidationError> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or(ValidationError::TimeOutOfRange { hour, minute })?;
        Ok(Self {
            name: name.into(),
            time,
        })
    }

    /// Parse an event from the provider wire shape `"HH:MM"`.
    ///
    /// Some AlAdhan responses annotate the clock with the zone, e.g.
    /// `"04:57 (EET)"`; the annotation is ignored.
    pub fn parse(name: impl Into<String>, raw: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: name.into(),
            time: parse_clock(raw)?,
        })
    }
}

/// Parse a `"HH:MM"` clock string, tolerating a trailing `" (TZ)"` suffix.
pub fn parse_clock(raw: &str) -> Result<NaiveTime, ValidationError> {
    let bad = || ValidationError::BadTimeString(raw.to_string());
    let clock = raw.split_whitespace().next().ok_or_else(bad)?;
    let (h, m) = clock.split_once(':').ok_or_else(bad)?;
    let hour: u32 = h.parse().map_err(|_| bad())?;
    let minute: u32 = m.parse().map_err(|_| bad())?;
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or(ValidationError::TimeOutOfRange { hour, minute })
}

/// Ordered events for one calendar day in one timezone.
///
/// Constructed fresh for each evaluation and replaced, never mutated. All
/// events share the set's date and timezone; the scheduler never compares
/// events across differing timezones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSet {
    date: NaiveDate,
    tz: Tz,
    events: Vec<NamedEvent>,
}

impl EventSet {
    /// Build a set from caller-ordered events. Fails on an empty list.
    pub fn new(date: NaiveDate, tz: Tz, events: Vec<NamedEvent>) -> Result<Self, ValidationError> {
        if events.is_empty() {
            return Err(ValidationError::EmptyEventSet);
        }
        Ok(Self { date, tz, events })
    }

    /// Internal constructor for sets that are non-empty by construction.
    pub(crate) fn from_parts(date: NaiveDate, tz: Tz, events: Vec<NamedEvent>) -> Self {
        debug_assert!(!events.is_empty());
        Self { date, tz, events }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Events in display/lookup order.
    pub fn events(&self) -> &[NamedEvent] {
        &self.events
    }
}
