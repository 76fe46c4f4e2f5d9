// TestDependencies - mock implementations for testing
//
// Provides mock providers that can be injected into ServerDeps for tests.

use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::common::{ConnectionHandle, Coordinates};
use crate::domains::captains::CaptainLocationRegistry;
use crate::domains::maps::{MapsError, PlaceSuggestion, RouteEstimate};
use crate::domains::rides::InMemoryRideRepository;
use crate::kernel::deps::ServerDeps;
use crate::kernel::traits::{BaseGeocoder, BaseNotifier, BaseRouteProvider};

// =============================================================================
// Mock Geocoder
// =============================================================================

#[derive(Default)]
pub struct MockGeocoder {
    locations: Mutex<HashMap<String, Coordinates>>,
    suggestions: Mutex<Vec<PlaceSuggestion>>,
    fail: Mutex<bool>,
}

impl MockGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `address` resolve to `coordinates`.
    pub fn add_location(&self, address: &str, coordinates: Coordinates) {
        self.locations
            .lock()
            .unwrap()
            .insert(address.to_string(), coordinates);
    }

    pub fn set_suggestions(&self, suggestions: Vec<PlaceSuggestion>) {
        *self.suggestions.lock().unwrap() = suggestions;
    }

    /// Simulate the provider being unreachable.
    pub fn fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }
}

#[async_trait]
impl BaseGeocoder for MockGeocoder {
    async fn geocode(&self, address: &str) -> Result<Coordinates, MapsError> {
        if *self.fail.lock().unwrap() {
            return Err(MapsError::UpstreamUnavailable(anyhow!(
                "mock geocoder offline"
            )));
        }
        self.locations
            .lock()
            .unwrap()
            .get(address)
            .copied()
            .ok_or_else(|| MapsError::NotFound {
                query: address.to_string(),
            })
    }

    async fn suggest(&self, _input: &str) -> Result<Vec<PlaceSuggestion>, MapsError> {
        if *self.fail.lock().unwrap() {
            return Err(MapsError::UpstreamUnavailable(anyhow!(
                "mock geocoder offline"
            )));
        }
        Ok(self.suggestions.lock().unwrap().clone())
    }
}

// =============================================================================
// Mock Route Provider
// =============================================================================

/// Route provider with a configurable answer. With no route configured it
/// reports `NoRoute`, which exercises the great-circle fallback.
#[derive(Default)]
pub struct MockRouteProvider {
    route: Mutex<Option<RouteEstimate>>,
    fail: Mutex<bool>,
    calls: Mutex<u32>,
}

impl MockRouteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_route(&self, route: RouteEstimate) {
        *self.route.lock().unwrap() = Some(route);
    }

    pub fn fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl BaseRouteProvider for MockRouteProvider {
    async fn route(
        &self,
        _origin: Coordinates,
        _destination: Coordinates,
    ) -> Result<RouteEstimate, MapsError> {
        *self.calls.lock().unwrap() += 1;
        if *self.fail.lock().unwrap() {
            return Err(MapsError::UpstreamUnavailable(anyhow!(
                "mock router offline"
            )));
        }
        let route = *self.route.lock().unwrap();
        route.ok_or(MapsError::NoRoute)
    }
}

// =============================================================================
// Recording Notifier
// =============================================================================

#[derive(Debug, Clone)]
pub struct PushRecord {
    pub handle: ConnectionHandle,
    pub event: String,
    pub payload: serde_json::Value,
}

/// Notifier that records every push instead of delivering it.
#[derive(Default)]
pub struct RecordingNotifier {
    pushes: Mutex<Vec<PushRecord>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pushes(&self) -> Vec<PushRecord> {
        self.pushes.lock().unwrap().clone()
    }

    /// Block until at least `count` pushes arrived. Broadcasts are spawned
    /// fire-and-forget, so tests poll rather than join.
    pub async fn wait_for(&self, count: usize) -> Vec<PushRecord> {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        loop {
            let pushes = self.pushes();
            if pushes.len() >= count {
                return pushes;
            }
            if tokio::time::Instant::now() > deadline {
                panic!("expected {count} pushes, got {}", pushes.len());
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }
}

#[async_trait]
impl BaseNotifier for RecordingNotifier {
    async fn push(&self, handle: &ConnectionHandle, event: &str, payload: serde_json::Value) {
        self.pushes.lock().unwrap().push(PushRecord {
            handle: handle.clone(),
            event: event.to_string(),
            payload,
        });
    }
}

// =============================================================================
// Test harness
// =============================================================================

/// A ServerDeps wired entirely to in-memory state and mocks, plus handles
/// to the mocks for configuration and assertions.
pub struct TestDeps {
    pub deps: ServerDeps,
    pub rides: Arc<InMemoryRideRepository>,
    pub captains: Arc<CaptainLocationRegistry>,
    pub geocoder: Arc<MockGeocoder>,
    pub route_provider: Arc<MockRouteProvider>,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn test_deps() -> TestDeps {
    let rides = Arc::new(InMemoryRideRepository::new());
    let captains = Arc::new(CaptainLocationRegistry::new());
    let geocoder = Arc::new(MockGeocoder::new());
    let route_provider = Arc::new(MockRouteProvider::new());
    let notifier = Arc::new(RecordingNotifier::new());

    let deps = ServerDeps::new(
        rides.clone(),
        captains.clone(),
        geocoder.clone(),
        route_provider.clone(),
        notifier.clone(),
        5.0,
    );

    TestDeps {
        deps,
        rides,
        captains,
        geocoder,
        route_provider,
        notifier,
    }
}
