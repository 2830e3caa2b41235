//! Free-text location lookup via the Nominatim search API.

use serde::{Deserialize, Serialize};

use super::ProviderClient;
use crate::error::ProviderError;

/// Coordinates and canonical name resolved from a free-text query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

/// One Nominatim search hit. Coordinates arrive as strings on the wire.
#[derive(Deserialize)]
struct NominatimHit {
    lat: String,
    lon: String,
    display_name: String,
}

impl ProviderClient {
    /// Resolve a free-text location to coordinates.
    ///
    /// Fails with [`ProviderError::LocationNotFound`] when the geocoder
    /// returns no hits; callers must not proceed to the timings lookup in
    /// that case.
    pub async fn geocode(&self, query: &str) -> Result<GeocodedLocation, ProviderError> {
        let url = format!("{}/search", self.geocode_base());
        let hits: Vec<NominatimHit> = self
            .http()
            .get(&url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let hit = hits
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::LocationNotFound {
                query: query.to_string(),
            })?;

        let latitude = hit
            .lat
            .parse()
            .map_err(|_| ProviderError::Schema(format!("bad latitude '{}'", hit.lat)))?;
        let longitude = hit
            .lon
            .parse()
            .map_err(|_| ProviderError::Schema(format!("bad longitude '{}'", hit.lon)))?;

        Ok(GeocodedLocation {
            latitude,
            longitude,
            display_name: hit.display_name,
        })
    }
}
