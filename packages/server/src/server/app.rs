//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tokio::sync::mpsc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::captains::{run_captain_worker, CaptainEvent, CaptainLocationRegistry};
use crate::domains::maps::{NominatimGeocoder, OsrmRouter};
use crate::domains::rides::InMemoryRideRepository;
use crate::kernel::{ServerDeps, StreamHub, StreamNotifier};
use crate::server::routes::{
    accept_ride_handler, attach_payment_handler, coordinates_handler, create_ride_handler,
    distance_time_handler, end_ride_handler, fare_handler, health_handler, ride_otp_handler,
    start_ride_handler, stream_handler, suggestions_handler, update_location_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: Arc<ServerDeps>,
    pub stream_hub: StreamHub,
    pub captain_events: mpsc::Sender<CaptainEvent>,
}

/// Build the Axum application router and start the captain event worker.
///
/// Must be called from within a tokio runtime.
pub fn build_app(config: &Config) -> Router {
    let stream_hub = StreamHub::new();
    let registry = Arc::new(CaptainLocationRegistry::new());

    let deps = ServerDeps::new(
        Arc::new(InMemoryRideRepository::new()),
        registry.clone(),
        Arc::new(NominatimGeocoder::new(
            &config.nominatim_base_url,
            &config.geocoder_user_agent,
            config.geocode_timeout,
        )),
        Arc::new(OsrmRouter::new(&config.osrm_base_url, config.route_timeout)),
        Arc::new(StreamNotifier::new(stream_hub.clone())),
        config.dispatch_radius_km,
    );

    // All inbound captain events funnel through one channel into the
    // registry worker; handlers only ever hold the sender.
    let (captain_events, event_rx) = mpsc::channel(1024);
    tokio::spawn(run_captain_worker(event_rx, registry));

    let state = AxumAppState {
        deps: Arc::new(deps),
        stream_hub,
        captain_events,
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/rides", post(create_ride_handler))
        .route("/api/rides/fare", get(fare_handler))
        .route("/api/rides/:id/otp", get(ride_otp_handler))
        .route("/api/rides/:id/accept", post(accept_ride_handler))
        .route("/api/rides/:id/start", post(start_ride_handler))
        .route("/api/rides/:id/end", post(end_ride_handler))
        .route("/api/rides/:id/payment", post(attach_payment_handler))
        .route("/api/maps/coordinates", get(coordinates_handler))
        .route("/api/maps/distance-time", get(distance_time_handler))
        .route("/api/maps/suggestions", get(suggestions_handler))
        .route("/api/captains/location", post(update_location_handler))
        .route("/api/streams/:role/:id", get(stream_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
