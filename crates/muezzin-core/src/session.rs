//! Explicit session state for a render/poll loop.
//!
//! The session owns what the surrounding UI used to keep in ambient global
//! state: the active settings, the cached geocoding result, the current day
//! schedule and the last refresh instant. Lifecycle: created at session
//! start, updated on user action or timer tick, dropped at session end. No
//! internal threads -- the caller drives every transition.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::method::CalculationMethod;
use crate::providers::{DaySchedule, GeocodedLocation, ProviderClient};

/// User-chosen parameters for lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Free-text location passed to the geocoder.
    pub location: String,
    pub method: CalculationMethod,
    /// Optional IANA zone override; the provider resolves the zone from the
    /// coordinate when unset.
    pub timezone: Option<Tz>,
    /// Schedule re-fetch cadence for watch mode, in seconds.
    pub refresh_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            location: "Douglasville, GA".to_string(),
            method: CalculationMethod::default(),
            timezone: None,
            refresh_secs: 900,
        }
    }
}

/// Per-run state around the provider clients.
#[derive(Debug, Clone)]
pub struct Session {
    pub settings: Settings,
    location: Option<GeocodedLocation>,
    schedule: Option<DaySchedule>,
    last_update: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            location: None,
            schedule: None,
            last_update: None,
        }
    }

    /// The geocoded location, once a refresh has resolved it.
    pub fn location(&self) -> Option<&GeocodedLocation> {
        self.location.as_ref()
    }

    /// The most recently fetched schedule.
    pub fn schedule(&self) -> Option<&DaySchedule> {
        self.schedule.as_ref()
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    /// Change the location query, invalidating the cached geocode.
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.settings.location = location.into();
        self.location = None;
    }

    /// Geocode the configured location (cached across refreshes) and fetch
    /// the schedule for `date`.
    ///
    /// A geocoding miss aborts before the timings call and leaves any
    /// previously fetched schedule in place.
    pub async fn refresh(
        &mut self,
        client: &ProviderClient,
        date: NaiveDate,
    ) -> Result<&DaySchedule, CoreError> {
        let location = match &self.location {
            Some(l) => l.clone(),
            None => {
                let resolved = client.geocode(&self.settings.location).await?;
                self.location.insert(resolved).clone()
            }
        };

        let schedule = client
            .timings(&location, date, self.settings.method, self.settings.timezone)
            .await?;
        self.last_update = Some(Utc::now());
        Ok(&*self.schedule.insert(schedule))
    }
}
