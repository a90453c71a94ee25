use crate::geometry::LngLat;
use crate::region::Region;

use super::host::{Haptics, MapHost, Notification};

/// What the guard decided about a reported move
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// Center is inside the region; it became the new rollback target
    Accepted,
    /// Center left the region; the map was snapped back to this point
    Snapped(LngLat),
    /// A programmatic move was in flight, no classification performed
    Bypassed,
}

/// Keeps the map viewport inside the allowed region.
///
/// Holds the one piece of state the check needs: the most recent center
/// known to be inside the border. Every rejected pan rolls back to it, so
/// it is only ever overwritten by a center that itself passed the check.
#[derive(Debug, Clone)]
pub struct BoundaryGuard {
    region: Region,
    last_valid_center: LngLat,
}

impl BoundaryGuard {
    /// `initial_center` must be an in-region point; it seeds the rollback
    /// slot before any move has been accepted.
    pub fn new(region: Region, initial_center: LngLat) -> Self {
        Self {
            region,
            last_valid_center: initial_center,
        }
    }

    pub fn last_valid_center(&self) -> LngLat {
        self.last_valid_center
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Classify a reported center and snap back if it left the region.
    ///
    /// `programmatic` is the in-flight scripted-move flag: while set the
    /// guard stays out of the way entirely, so a fly-to may cross outside
    /// the border without being fought.
    pub fn enforce(
        &mut self,
        new_center: LngLat,
        programmatic: bool,
        host: &mut dyn MapHost,
        haptics: &mut dyn Haptics,
    ) -> Verdict {
        if programmatic {
            return Verdict::Bypassed;
        }

        if self.region.contains(new_center) {
            self.last_valid_center = new_center;
            Verdict::Accepted
        } else {
            host.set_center(self.last_valid_center);
            haptics.notify(Notification::Error);
            Verdict::Snapped(self.last_valid_center)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Ring;
    use crate::map::host::RecordingHost;

    fn square_region() -> Region {
        Region::new(Ring::new(vec![
            LngLat::new(0.0, 0.0),
            LngLat::new(10.0, 0.0),
            LngLat::new(10.0, 10.0),
            LngLat::new(0.0, 10.0),
        ]))
        .unwrap()
    }

    struct CountingHaptics {
        errors: usize,
    }

    impl Haptics for CountingHaptics {
        fn impact(&mut self, _kind: crate::map::host::Impact) {}
        fn notify(&mut self, kind: Notification) {
            if kind == Notification::Error {
                self.errors += 1;
            }
        }
    }

    #[test]
    fn test_accept_updates_rollback_target() {
        let start = LngLat::new(5.0, 5.0);
        let mut guard = BoundaryGuard::new(square_region(), start);
        let mut host = RecordingHost::new(start);
        let mut haptics = CountingHaptics { errors: 0 };

        let moved = LngLat::new(7.0, 3.0);
        let verdict = guard.enforce(moved, false, &mut host, &mut haptics);

        assert_eq!(verdict, Verdict::Accepted);
        assert_eq!(guard.last_valid_center(), moved);
        assert!(host.commands.is_empty());
        assert_eq!(haptics.errors, 0);
    }

    #[test]
    fn test_reject_snaps_back_and_keeps_target() {
        let start = LngLat::new(5.0, 5.0);
        let mut guard = BoundaryGuard::new(square_region(), start);
        let mut host = RecordingHost::new(start);
        let mut haptics = CountingHaptics { errors: 0 };

        let outside = LngLat::new(15.0, 5.0);
        let verdict = guard.enforce(outside, false, &mut host, &mut haptics);

        assert_eq!(verdict, Verdict::Snapped(start));
        assert_eq!(guard.last_valid_center(), start);
        assert_eq!(host.commands, vec![start]);
        assert_eq!(host.center(), start);
        assert_eq!(haptics.errors, 1);
    }

    #[test]
    fn test_programmatic_flag_bypasses_everything() {
        let start = LngLat::new(5.0, 5.0);
        let mut guard = BoundaryGuard::new(square_region(), start);
        let mut host = RecordingHost::new(start);
        let mut haptics = CountingHaptics { errors: 0 };

        // Outside the region, but the flag is set: no snap, no haptic,
        // rollback target untouched
        let verdict = guard.enforce(LngLat::new(50.0, 50.0), true, &mut host, &mut haptics);
        assert_eq!(verdict, Verdict::Bypassed);
        assert_eq!(guard.last_valid_center(), start);
        assert!(host.commands.is_empty());
        assert_eq!(haptics.errors, 0);

        // Inside as well: still bypassed, target not updated
        let verdict = guard.enforce(LngLat::new(6.0, 6.0), true, &mut host, &mut haptics);
        assert_eq!(verdict, Verdict::Bypassed);
        assert_eq!(guard.last_valid_center(), start);
    }

    #[test]
    fn test_rollback_target_follows_accepted_moves() {
        let start = LngLat::new(5.0, 5.0);
        let mut guard = BoundaryGuard::new(square_region(), start);
        let mut host = RecordingHost::new(start);
        let mut haptics = CountingHaptics { errors: 0 };

        let a = LngLat::new(2.0, 2.0);
        guard.enforce(a, false, &mut host, &mut haptics);
        let b = LngLat::new(8.0, 8.0);
        guard.enforce(b, false, &mut host, &mut haptics);

        // Reject now rolls back to the latest accepted center, not the seed
        let verdict = guard.enforce(LngLat::new(-5.0, 5.0), false, &mut host, &mut haptics);
        assert_eq!(verdict, Verdict::Snapped(b));
        assert_eq!(host.center(), b);
    }
}
