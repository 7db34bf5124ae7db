//! First-come-first-served scheduling.

use crate::models::{Cylinder, SeekPlan};

use super::state::HeadState;

/// Simulate FCFS: service requests strictly in arrival order.
///
/// No reordering and no validation; out-of-range requests are serviced
/// as given. This is a total function with no failure modes: an empty
/// request sequence yields zero movement and a path of just `start`.
pub fn schedule_fcfs(start: Cylinder, requests: &[Cylinder]) -> SeekPlan {
    let mut head = HeadState::new(start);
    for &request in requests {
        let _ = head.seek_to(request);
    }
    head.into_plan()
}
