//! Prayer timings lookup via the AlAdhan API.
//!
//! The API is the source of truth for the astronomical calculation and for
//! timezone-correct date resolution; this client only carries parameters
//! through and parses the response.

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::{GeocodedLocation, ProviderClient};
use crate::error::ProviderError;
use crate::event::{self, EventSet, NamedEvent};
use crate::method::CalculationMethod;

/// Canonical display order for a day's events.
pub const PRAYER_ORDER: [&str; 6] = ["Fajr", "Sunrise", "Dhuhr", "Asr", "Maghrib", "Isha"];

/// One day's prayer schedule as returned by the provider.
#[derive(Debug, Clone, Serialize)]
pub struct DaySchedule {
    /// Gregorian date the timings apply to.
    pub date: NaiveDate,
    /// Provider's human-readable Gregorian date, e.g. "07 Mar 2025".
    pub readable_date: String,
    /// Hijri calendar date, display only.
    pub hijri: HijriDate,
    /// Timezone the provider resolved for the coordinate.
    pub timezone: Tz,
    pub timings: PrayerTimings,
}

/// Islamic lunar calendar date, supplied by the provider for display.
#[derive(Debug, Clone, Serialize)]
pub struct HijriDate {
    pub date: String,
    pub month: String,
    pub year: String,
}

/// The six displayed times-of-day, already parsed.
#[derive(Debug, Clone, Serialize)]
pub struct PrayerTimings {
    pub fajr: NaiveTime,
    pub sunrise: NaiveTime,
    pub dhuhr: NaiveTime,
    pub asr: NaiveTime,
    pub maghrib: NaiveTime,
    pub isha: NaiveTime,
}

impl DaySchedule {
    /// The day's events in canonical display order, ready for the scheduler.
    pub fn event_set(&self) -> EventSet {
        let t = &self.timings;
        let times = [t.fajr, t.sunrise, t.dhuhr, t.asr, t.maghrib, t.isha];
        let events = PRAYER_ORDER
            .iter()
            .zip(times)
            .map(|(name, time)| NamedEvent {
                name: (*name).to_string(),
                time,
            })
            .collect();
        EventSet::from_parts(self.date, self.timezone, events)
    }
}

#[derive(Deserialize)]
struct WireData {
    timings: WireTimings,
    date: WireDate,
    meta: WireMeta,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireTimings {
    fajr: String,
    sunrise: String,
    dhuhr: String,
    asr: String,
    maghrib: String,
    isha: String,
}

#[derive(Deserialize)]
struct WireDate {
    readable: String,
    hijri: WireHijri,
}

#[derive(Deserialize)]
struct WireHijri {
    date: String,
    month: WireHijriMonth,
    year: String,
}

#[derive(Deserialize)]
struct WireHijriMonth {
    en: String,
}

#[derive(Deserialize)]
struct WireMeta {
    timezone: String,
}

impl ProviderClient {
    /// Fetch prayer timings for a coordinate and date.
    ///
    /// `timezone` overrides the provider's coordinate-derived zone via the
    /// `timezonestring` parameter when set.
    pub async fn timings(
        &self,
        location: &GeocodedLocation,
        date: NaiveDate,
        method: CalculationMethod,
        timezone: Option<Tz>,
    ) -> Result<DaySchedule, ProviderError> {
        let url = format!(
            "{}/v1/timings/{}",
            self.timings_base(),
            date.format("%d-%m-%Y")
        );
        let mut query = vec![
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("method", method.id().to_string()),
        ];
        if let Some(tz) = timezone {
            query.push(("timezonestring", tz.name().to_string()));
        }

        let body: serde_json::Value = self
            .http()
            .get(&url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // The API reports failures inside a 200 response body.
        let code = body.get("code").and_then(|c| c.as_u64()).unwrap_or(0);
        if code != 200 {
            let status = body
                .get("status")
                .and_then(|s| s.as_str())
                .unwrap_or("unknown")
                .to_string();
            return Err(ProviderError::Api { code, status });
        }

        let data = body
            .get("data")
            .cloned()
            .ok_or_else(|| ProviderError::Schema("missing 'data' field".to_string()))?;
        let data: WireData = serde_json::from_value(data)
            .map_err(|e| ProviderError::Schema(e.to_string()))?;

        Self::parse_schedule(date, data)
    }

    fn parse_schedule(date: NaiveDate, data: WireData) -> Result<DaySchedule, ProviderError> {
        let schema = |e: crate::error::ValidationError| ProviderError::Schema(e.to_string());
        let t = &data.timings;
        let timings = PrayerTimings {
            fajr: event::parse_clock(&t.fajr).map_err(schema)?,
            sunrise: event::parse_clock(&t.sunrise).map_err(schema)?,
            dhuhr: event::parse_clock(&t.dhuhr).map_err(schema)?,
            asr: event::parse_clock(&t.asr).map_err(schema)?,
            maghrib: event::parse_clock(&t.maghrib).map_err(schema)?,
            isha: event::parse_clock(&t.isha).map_err(schema)?,
        };
        let timezone: Tz = data
            .meta
            .timezone
            .parse()
            .map_err(|_| ProviderError::Schema(format!("bad timezone '{}'", data.meta.timezone)))?;

        Ok(DaySchedule {
            date,
            readable_date: data.date.readable,
            hijri: HijriDate {
                date: data.date.hijri.date,
                month: data.date.hijri.month.en,
                year: data.date.hijri.year,
            },
            timezone,
            timings,
        })
    }
}
