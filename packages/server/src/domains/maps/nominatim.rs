//! Nominatim (OpenStreetMap) geocoding client.

use anyhow::anyhow;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::common::Coordinates;
use crate::domains::maps::errors::MapsError;
use crate::domains::maps::types::PlaceSuggestion;
use crate::kernel::traits::BaseGeocoder;

/// Inputs shorter than this never reach the provider.
const MIN_QUERY_LEN: usize = 3;

/// Nominatim API response entry
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

/// Geocoder backed by a Nominatim instance.
///
/// Nominatim's usage policy requires an identifying User-Agent on every
/// request; the configured value is sent verbatim.
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl NominatimGeocoder {
    pub fn new(base_url: impl Into<String>, user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            user_agent: user_agent.into(),
            timeout,
        }
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<NominatimPlace>, MapsError> {
        let url = format!(
            "{}/search?q={}&format=json&limit={}",
            self.base_url,
            urlencoding::encode(query),
            limit
        );

        let places = self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<NominatimPlace>>()
            .await?;

        Ok(places)
    }
}

fn parse_place(place: &NominatimPlace) -> Result<Coordinates, MapsError> {
    let lat: f64 = place
        .lat
        .parse()
        .map_err(|e| MapsError::UpstreamUnavailable(anyhow!("invalid latitude in response: {e}")))?;
    let lng: f64 = place
        .lon
        .parse()
        .map_err(|e| MapsError::UpstreamUnavailable(anyhow!("invalid longitude in response: {e}")))?;
    Ok(Coordinates::new(lat, lng))
}

#[async_trait]
impl BaseGeocoder for NominatimGeocoder {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Coordinates, MapsError> {
        let places = self.search(address, 1).await?;

        let place = places.first().ok_or_else(|| {
            warn!(address, "address not found by geocoding provider");
            MapsError::NotFound {
                query: address.to_string(),
            }
        })?;

        let coordinates = parse_place(place)?;
        debug!(address, %coordinates, "geocoded");
        Ok(coordinates)
    }

    #[instrument(skip(self))]
    async fn suggest(&self, input: &str) -> Result<Vec<PlaceSuggestion>, MapsError> {
        if input.trim().len() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let places = self.search(input, 5).await?;

        // Malformed entries are skipped, not fatal
        let suggestions = places
            .iter()
            .filter_map(|place| {
                let coordinates = parse_place(place).ok()?;
                Some(PlaceSuggestion {
                    label: place.display_name.clone(),
                    lat: coordinates.lat,
                    lng: coordinates.lng,
                })
            })
            .collect();

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place() {
        let place = NominatimPlace {
            lat: "51.5237".to_string(),
            lon: "-0.1586".to_string(),
            display_name: "Baker Street, London".to_string(),
        };
        let coordinates = parse_place(&place).unwrap();
        assert!((coordinates.lat - 51.5237).abs() < 1e-9);
        assert!((coordinates.lng - -0.1586).abs() < 1e-9);
    }

    #[test]
    fn test_parse_place_rejects_garbage() {
        let place = NominatimPlace {
            lat: "not-a-number".to_string(),
            lon: "-0.1586".to_string(),
            display_name: "nowhere".to_string(),
        };
        assert!(matches!(
            parse_place(&place),
            Err(MapsError::UpstreamUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_suggest_short_input_skips_provider() {
        // Provider URL is unroutable; a short input must not hit it at all.
        let geocoder = NominatimGeocoder::new(
            "http://127.0.0.1:9",
            "test-agent",
            Duration::from_millis(100),
        );
        let suggestions = geocoder.suggest("ab").await.unwrap();
        assert!(suggestions.is_empty());
    }
}
