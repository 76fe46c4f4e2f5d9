use thiserror::Error;

/// Errors surfaced by geocoding and routing.
#[derive(Error, Debug)]
pub enum MapsError {
    /// The provider answered but had no match for the query.
    #[error("no results for \"{query}\"")]
    NotFound { query: String },

    /// The routing provider answered but found no drivable route.
    #[error("no route found between the given points")]
    NoRoute,

    /// The provider could not be reached, timed out, or answered garbage.
    #[error("upstream provider unavailable: {0}")]
    UpstreamUnavailable(#[source] anyhow::Error),
}

impl From<reqwest::Error> for MapsError {
    fn from(err: reqwest::Error) -> Self {
        MapsError::UpstreamUnavailable(err.into())
    }
}

impl MapsError {
    /// True when the failure is the caller's query, not the provider.
    pub fn is_not_found(&self) -> bool {
        matches!(self, MapsError::NotFound { .. })
    }
}
