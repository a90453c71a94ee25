pub mod controller;
pub mod guard;
pub mod host;

pub use controller::{GeolocateOutcome, MapController};
pub use guard::{BoundaryGuard, Verdict};
pub use host::{Haptics, Impact, MapEvent, MapHost, NoHaptics, Notification, RecordingHost};
