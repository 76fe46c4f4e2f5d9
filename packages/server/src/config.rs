use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL of the Nominatim geocoding service
    pub nominatim_base_url: String,
    /// Base URL of the OSRM routing service
    pub osrm_base_url: String,
    /// User-Agent sent to Nominatim (required by their usage policy)
    pub geocoder_user_agent: String,
    /// Timeout for a single geocoding request
    pub geocode_timeout: Duration,
    /// Timeout for a single routing request
    pub route_timeout: Duration,
    /// Dispatch search radius around the pickup point, in kilometers
    pub dispatch_radius_km: f64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            nominatim_base_url: env::var("NOMINATIM_BASE_URL")
                .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string()),
            osrm_base_url: env::var("OSRM_BASE_URL")
                .unwrap_or_else(|_| "https://router.project-osrm.org".to_string()),
            geocoder_user_agent: env::var("GEOCODER_USER_AGENT")
                .unwrap_or_else(|_| "RideLoop/1.0 (dispatch server)".to_string()),
            geocode_timeout: Duration::from_secs(
                env::var("GEOCODE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "8".to_string())
                    .parse()
                    .context("GEOCODE_TIMEOUT_SECS must be a valid number")?,
            ),
            route_timeout: Duration::from_secs(
                env::var("ROUTE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .context("ROUTE_TIMEOUT_SECS must be a valid number")?,
            ),
            dispatch_radius_km: env::var("DISPATCH_RADIUS_KM")
                .unwrap_or_else(|_| "5.0".to_string())
                .parse()
                .context("DISPATCH_RADIUS_KM must be a valid number")?,
        })
    }
}
