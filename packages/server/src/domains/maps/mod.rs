//! Geographic resolution - address geocoding, route estimation, autocomplete.
//!
//! Provider clients (Nominatim, OSRM) are infrastructure behind the kernel's
//! `BaseGeocoder` / `BaseRouteProvider` traits; `service` is the domain facade
//! the rest of the application calls.

pub mod errors;
pub mod geo;
pub mod nominatim;
pub mod osrm;
pub mod service;
pub mod types;

pub use errors::MapsError;
pub use nominatim::NominatimGeocoder;
pub use osrm::OsrmRouter;
pub use types::{PlaceSuggestion, RouteEstimate, TripResolution};
