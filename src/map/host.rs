use crate::geometry::LngLat;

/// The seam in front of the embedded map widget.
///
/// `set_center` repositions instantly (the guard uses it to revert a bad
/// pan); `fly_to` is the animated variant the widget exposes for scripted
/// navigation. Both end with the widget emitting `MoveEnd`.
pub trait MapHost {
    fn center(&self) -> LngLat;
    fn set_center(&mut self, center: LngLat);
    fn fly_to(&mut self, center: LngLat);
}

/// Movement events reported by the map widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    MoveStart,
    Move(LngLat),
    MoveEnd,
}

/// Tactile feedback strengths, mirroring the Telegram WebApp haptics API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    Light,
    Medium,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Success,
    Warning,
    Error,
}

pub trait Haptics {
    fn impact(&mut self, kind: Impact);
    fn notify(&mut self, kind: Notification);
}

/// Haptics sink for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn impact(&mut self, _kind: Impact) {}
    fn notify(&mut self, _kind: Notification) {}
}

/// A `MapHost` that just tracks its center; used by the CLI replay and
/// available to embedders for tests.
#[derive(Debug, Clone)]
pub struct RecordingHost {
    center: LngLat,
    /// Every center the host was commanded to, in order
    pub commands: Vec<LngLat>,
}

impl RecordingHost {
    pub fn new(center: LngLat) -> Self {
        Self {
            center,
            commands: Vec::new(),
        }
    }
}

impl MapHost for RecordingHost {
    fn center(&self) -> LngLat {
        self.center
    }

    fn set_center(&mut self, center: LngLat) {
        self.center = center;
        self.commands.push(center);
    }

    fn fly_to(&mut self, center: LngLat) {
        self.center = center;
        self.commands.push(center);
    }
}
