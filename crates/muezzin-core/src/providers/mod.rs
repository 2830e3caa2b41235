//! HTTP clients for the external providers.
//!
//! Two services are consumed: the OpenStreetMap Nominatim geocoder and the
//! AlAdhan prayer-time API. Both share one [`reqwest::Client`] with a static
//! User-Agent and a request timeout. Base URLs are injectable so tests can
//! point the client at a local mock server.

pub mod geocode;
pub mod timings;

pub use geocode::GeocodedLocation;
pub use timings::{DaySchedule, HijriDate, PrayerTimings, PRAYER_ORDER};

use std::time::Duration;

use crate::error::ProviderError;

/// Nominatim asks API consumers to identify themselves.
const USER_AGENT: &str = "muezzin/0.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

const NOMINATIM_BASE: &str = "https://nominatim.openstreetmap.org";
const ALADHAN_BASE: &str = "https://api.aladhan.com";

/// Client for both external providers.
pub struct ProviderClient {
    http: reqwest::Client,
    geocode_base: String,
    timings_base: String,
}

impl ProviderClient {
    /// Client against the production endpoints.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_base_urls(NOMINATIM_BASE, ALADHAN_BASE)
    }

    /// Client against explicit base URLs. Used by tests.
    pub fn with_base_urls(
        geocode_base: impl Into<String>,
        timings_base: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            geocode_base: geocode_base.into(),
            timings_base: timings_base.into(),
        })
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn geocode_base(&self) -> &str {
        &self.geocode_base
    }

    pub(crate) fn timings_base(&self) -> &str {
        &self.timings_base
    }
}
