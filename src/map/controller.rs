use std::time::{Duration, Instant};

use crate::geometry::LngLat;
use crate::store::{KeyStore, keys};

use super::guard::{BoundaryGuard, Verdict};
use super::host::{Haptics, Impact, MapEvent, MapHost};

/// Repeat geolocate taps inside this window are ignored
const GEOLOCATE_THROTTLE: Duration = Duration::from_secs(3);

/// How a geolocate request was answered
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeolocateOutcome {
    /// Too soon after the previous request
    Throttled,
    /// Flew to the cached last-known location while a fresh fix is pending
    FlewToCached(LngLat),
    /// No cache; nothing to show until a fix arrives
    AwaitingFix,
}

/// Owns the boundary guard and the cross-cutting viewport state: the
/// "programmatic move in progress" flag and the geolocate throttle.
///
/// The embedder forwards every map widget event through `handle_event`;
/// scripted navigation goes through `fly_to` so the guard knows to stand
/// down until the animation settles.
#[derive(Debug)]
pub struct MapController {
    guard: BoundaryGuard,
    programmatic_move: bool,
    last_geolocate: Option<Instant>,
}

impl MapController {
    pub fn new(guard: BoundaryGuard) -> Self {
        Self {
            guard,
            programmatic_move: false,
            last_geolocate: None,
        }
    }

    pub fn guard(&self) -> &BoundaryGuard {
        &self.guard
    }

    pub fn is_programmatic_move(&self) -> bool {
        self.programmatic_move
    }

    /// Scripted navigation (e.g. jumping to a report far from the current
    /// view). Sets the bypass flag; the widget's `MoveEnd` clears it.
    pub fn fly_to(&mut self, target: LngLat, host: &mut dyn MapHost) {
        self.programmatic_move = true;
        host.fly_to(target);
    }

    /// Feed one map widget event through the guard.
    ///
    /// Returns the guard's verdict for `Move` events, `None` for the
    /// start/end markers.
    pub fn handle_event(
        &mut self,
        event: MapEvent,
        host: &mut dyn MapHost,
        haptics: &mut dyn Haptics,
    ) -> Option<Verdict> {
        match event {
            MapEvent::MoveStart => None,
            MapEvent::Move(center) => {
                Some(
                    self.guard
                        .enforce(center, self.programmatic_move, host, haptics),
                )
            }
            MapEvent::MoveEnd => {
                self.programmatic_move = false;
                None
            }
        }
    }

    /// Handle a geolocate tap.
    ///
    /// Optimistic: if a cached last-known location exists, fly there
    /// immediately rather than waiting for the device fix. `now` is passed
    /// in so the throttle window is testable.
    pub fn request_geolocate(
        &mut self,
        now: Instant,
        store: &dyn KeyStore,
        host: &mut dyn MapHost,
        haptics: &mut dyn Haptics,
    ) -> GeolocateOutcome {
        if let Some(last) = self.last_geolocate
            && now.duration_since(last) < GEOLOCATE_THROTTLE
        {
            return GeolocateOutcome::Throttled;
        }
        self.last_geolocate = Some(now);

        if let Some(cached) = read_cached_location(store) {
            self.fly_to(cached, host);
            haptics.impact(Impact::Medium);
            GeolocateOutcome::FlewToCached(cached)
        } else {
            GeolocateOutcome::AwaitingFix
        }
    }

    /// A fresh device fix arrived: refresh the cache and fly to it
    pub fn geolocate_fix(
        &mut self,
        coords: LngLat,
        store: &mut dyn KeyStore,
        host: &mut dyn MapHost,
        haptics: &mut dyn Haptics,
    ) {
        write_cached_location(store, coords);
        self.fly_to(coords, host);
        haptics.impact(Impact::Medium);
    }

    /// The device fix failed. The error is only worth surfacing when the
    /// user saw nothing (no cached flight happened).
    pub fn geolocate_failed(&self, store: &dyn KeyStore) -> bool {
        read_cached_location(store).is_none()
    }
}

/// Cache format matches the WebView client: a JSON `[lng, lat]` array
fn read_cached_location(store: &dyn KeyStore) -> Option<LngLat> {
    let raw = store.get(keys::LAST_KNOWN_LOC)?;
    let coords: [f64; 2] = serde_json::from_str(&raw).ok()?;
    Some(LngLat::new(coords[0], coords[1]))
}

fn write_cached_location(store: &mut dyn KeyStore, coords: LngLat) {
    if let Ok(raw) = serde_json::to_string(&[coords.lng, coords.lat]) {
        store.set(keys::LAST_KNOWN_LOC, &raw);
    }
}
