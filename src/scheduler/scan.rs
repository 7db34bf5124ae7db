//! SCAN (elevator) scheduling.

use crate::config::DiskConfig;
use crate::log_sweeps;
use crate::models::{Cylinder, Direction, SeekPlan};

use super::state::{service_in_order, HeadState};

/// Simulate SCAN: sweep in the initial direction servicing every request
/// encountered, travel all the way to the disk edge, then sweep back for
/// the remaining requests.
///
/// The boundary stop at `max_cylinders - 1` (or 0 for [`Direction::Down`])
/// is inserted even when there are no requests ahead of the start position;
/// it is skipped only when the last serviced request already sits exactly on
/// the boundary. The full sweep to the edge is what distinguishes SCAN from
/// the shorter LOOK variant.
///
/// Only membership of `requests` matters; the input is sorted internally.
pub fn schedule_scan(
    config: &DiskConfig,
    start: Cylinder,
    requests: &[Cylinder],
    direction: Direction,
) -> SeekPlan {
    let mut head = HeadState::new(start);
    let mut sorted = requests.to_vec();
    sorted.sort_unstable();

    match direction {
        Direction::Up => {
            let ahead: Vec<Cylinder> = sorted.iter().copied().filter(|&r| r >= start).collect();
            let behind: Vec<Cylinder> =
                sorted.iter().rev().copied().filter(|&r| r < start).collect();
            log_sweeps!(
                config.verbosity,
                "SCAN up from {}: {} ahead, {} behind",
                start,
                ahead.len(),
                behind.len()
            );

            service_in_order(&mut head, &ahead, config.verbosity);

            let edge = config.edge();
            if ahead.last() != Some(&edge) {
                log_sweeps!(config.verbosity, "SCAN: forced boundary stop at {}", edge);
                let _ = head.seek_to(edge);
            }

            service_in_order(&mut head, &behind, config.verbosity);
        }
        Direction::Down => {
            let ahead: Vec<Cylinder> =
                sorted.iter().rev().copied().filter(|&r| r <= start).collect();
            let behind: Vec<Cylinder> = sorted.iter().copied().filter(|&r| r > start).collect();
            log_sweeps!(
                config.verbosity,
                "SCAN down from {}: {} ahead, {} behind",
                start,
                ahead.len(),
                behind.len()
            );

            service_in_order(&mut head, &ahead, config.verbosity);

            if ahead.last() != Some(&0) {
                log_sweeps!(config.verbosity, "SCAN: forced boundary stop at 0");
                let _ = head.seek_to(0);
            }

            service_in_order(&mut head, &behind, config.verbosity);
        }
    }

    head.into_plan()
}
