//! Head position tracking shared by all scheduling policies.

use crate::log_seeks;
use crate::models::{Cylinder, SeekPlan};

/// Tracks the head position, accumulated movement, and visited path over a
/// single simulation.
///
/// Every move goes through [`HeadState::seek_to`], so the invariant
/// `total_movement == Σ |path[i] - path[i-1]|` holds by construction.
#[derive(Debug)]
pub struct HeadState {
    position: Cylinder,
    total_movement: u64,
    path: Vec<Cylinder>,
}

impl HeadState {
    /// Create a tracker with the head parked at `start`.
    ///
    /// The path always begins with the starting position.
    pub fn new(start: Cylinder) -> Self {
        Self {
            position: start,
            total_movement: 0,
            path: vec![start],
        }
    }

    /// Current head position.
    pub fn position(&self) -> Cylinder {
        self.position
    }

    /// Move the head to `target`, paying the absolute seek distance.
    ///
    /// Returns the distance travelled. A seek to the current position is
    /// legal: it costs nothing but is still recorded in the path (a request
    /// for the cylinder the head is already on is serviced, not skipped).
    pub fn seek_to(&mut self, target: Cylinder) -> u64 {
        let distance = u64::from(self.position.abs_diff(target));
        self.total_movement += distance;
        self.position = target;
        self.path.push(target);
        distance
    }

    /// Consume the tracker and produce the final plan.
    pub fn into_plan(self) -> SeekPlan {
        SeekPlan {
            total_movement: self.total_movement,
            path: self.path,
        }
    }
}

/// Service `requests` in the given order, logging each seek at high verbosity.
pub(crate) fn service_in_order(head: &mut HeadState, requests: &[Cylinder], verbosity: u8) {
    for &request in requests {
        let from = head.position();
        let moved = head.seek_to(request);
        log_seeks!(verbosity, "  seek {} -> {} ({} cylinders)", from, request, moved);
    }
}
