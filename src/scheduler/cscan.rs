//! C-SCAN (circular SCAN) scheduling.

use crate::config::DiskConfig;
use crate::log_sweeps;
use crate::models::{Cylinder, Direction, SeekPlan};

use super::state::{service_in_order, HeadState};

/// Simulate C-SCAN: same forward sweep and forced boundary stop as SCAN,
/// then a single wrap jump straight to the opposite boundary (cost
/// `max_cylinders - 1`, recorded as a path point) before servicing the
/// remaining requests from the new boundary.
///
/// The wrap jump is unconditional: it happens even when no requests remain
/// on the other side, leaving the wrap stop as the final path entry.
///
/// For [`Direction::Down`] the remainder (requests above the start) is
/// serviced in descending order from the high boundary, nearest first.
/// The up/down branches are deliberately asymmetric here.
///
/// Only membership of `requests` matters; the input is sorted internally.
pub fn schedule_cscan(
    config: &DiskConfig,
    start: Cylinder,
    requests: &[Cylinder],
    direction: Direction,
) -> SeekPlan {
    let mut head = HeadState::new(start);
    let mut sorted = requests.to_vec();
    sorted.sort_unstable();

    let edge = config.edge();

    match direction {
        Direction::Up => {
            let ahead: Vec<Cylinder> = sorted.iter().copied().filter(|&r| r >= start).collect();
            let remainder: Vec<Cylinder> = sorted.iter().copied().filter(|&r| r < start).collect();
            log_sweeps!(
                config.verbosity,
                "C-SCAN up from {}: {} ahead, {} after wrap",
                start,
                ahead.len(),
                remainder.len()
            );

            service_in_order(&mut head, &ahead, config.verbosity);

            if ahead.last() != Some(&edge) {
                log_sweeps!(config.verbosity, "C-SCAN: forced boundary stop at {}", edge);
                let _ = head.seek_to(edge);
            }

            log_sweeps!(config.verbosity, "C-SCAN: wrap jump {} -> 0", edge);
            let _ = head.seek_to(0);

            service_in_order(&mut head, &remainder, config.verbosity);
        }
        Direction::Down => {
            let ahead: Vec<Cylinder> =
                sorted.iter().rev().copied().filter(|&r| r <= start).collect();
            let remainder: Vec<Cylinder> =
                sorted.iter().rev().copied().filter(|&r| r > start).collect();
            log_sweeps!(
                config.verbosity,
                "C-SCAN down from {}: {} ahead, {} after wrap",
                start,
                ahead.len(),
                remainder.len()
            );

            service_in_order(&mut head, &ahead, config.verbosity);

            if ahead.last() != Some(&0) {
                log_sweeps!(config.verbosity, "C-SCAN: forced boundary stop at 0");
                let _ = head.seek_to(0);
            }

            log_sweeps!(config.verbosity, "C-SCAN: wrap jump 0 -> {}", edge);
            let _ = head.seek_to(edge);

            service_in_order(&mut head, &remainder, config.verbosity);
        }
    }

    head.into_plan()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(max_cylinders: Cylinder) -> DiskConfig {
        DiskConfig {
            max_cylinders,
            ..DiskConfig::default()
        }
    }

    #[test]
    fn test_cscan_up_scenario() {
        let config = make_config(200);
        let plan = schedule_cscan(&config, 50, &[10, 190, 50], Direction::Up);
        // ahead = [50, 190], remainder = [10]
        // 50->50 (0), 50->190 (140), boundary 190->199 (9),
        // wrap 199->0 (199), 0->10 (10) = 358
        assert_eq!(plan.total_movement, 358);
        assert_eq!(plan.path, vec![50, 50, 190, 199, 0, 10]);
        assert_eq!(plan.movement_from_path(), plan.total_movement);
    }

    #[test]
    fn test_cscan_down_scenario() {
        let config = make_config(200);
        let plan = schedule_cscan(&config, 50, &[10, 190, 50], Direction::Down);
        // ahead = [50, 10] descending, remainder = [190] descending
        // 50->50 (0), 50->10 (40), boundary 10->0 (10),
        // wrap 0->199 (199), 199->190 (9) = 258
        assert_eq!(plan.total_movement, 258);
        assert_eq!(plan.path, vec![50, 50, 10, 0, 199, 190]);
        assert_eq!(plan.movement_from_path(), plan.total_movement);
    }

    #[test]
    fn test_cscan_down_remainder_is_descending() {
        let config = make_config(200);
        let plan = schedule_cscan(&config, 50, &[10, 60, 70], Direction::Down);
        // Remainder above the start is serviced nearest-to-boundary first:
        // 70 before 60, starting from the wrap stop at 199.
        assert_eq!(plan.path, vec![50, 10, 0, 199, 70, 60]);
        // 40 + 10 + 199 + 129 + 10 = 388
        assert_eq!(plan.total_movement, 388);
    }

    #[test]
    fn test_cscan_wrap_is_unconditional() {
        let config = make_config(200);
        // Every request is ahead of the start; the head still wraps.
        let plan = schedule_cscan(&config, 0, &[5], Direction::Up);
        assert_eq!(plan.path, vec![0, 5, 199, 0]);
        // 5 + 194 + 199 = 398
        assert_eq!(plan.total_movement, 398);
        assert_eq!(plan.path.last(), Some(&0));
    }

    #[test]
    fn test_cscan_pays_exactly_one_wrap_cost() {
        let config = make_config(5000);
        let with_remainder = schedule_cscan(&config, 2500, &[100, 3000], Direction::Up);
        let without_remainder = schedule_cscan(&config, 2500, &[3000], Direction::Up);
        // Both pay the 4999-cylinder wrap exactly once; they differ only by
        // the 100-cylinder seek after the wrap.
        assert_eq!(
            with_remainder.total_movement,
            without_remainder.total_movement + 100
        );
    }

    #[test]
    fn test_cscan_empty_requests_still_wraps() {
        let config = make_config(5000);
        let plan = schedule_cscan(&config, 0, &[], Direction::Up);
        // Forced edge stop (4999) plus the wrap back (4999).
        assert_eq!(plan.total_movement, 9998);
        assert_eq!(plan.path, vec![0, 4999, 0]);

        let plan = schedule_cscan(&config, 0, &[], Direction::Down);
        // Already at 0, so the boundary stop is free; wrap still happens.
        assert_eq!(plan.total_movement, 4999);
        assert_eq!(plan.path, vec![0, 0, 4999]);
    }

    #[test]
    fn test_cscan_no_duplicate_boundary_stop() {
        let config = make_config(200);
        let plan = schedule_cscan(&config, 50, &[199], Direction::Up);
        // Request already on the edge; straight to the wrap.
        assert_eq!(plan.path, vec![50, 199, 0]);
        assert_eq!(plan.total_movement, 149 + 199);
    }

    #[test]
    fn test_cscan_total_invariant_under_permutation() {
        let config = make_config(5000);
        let a = schedule_cscan(&config, 1000, &[10, 4500, 999, 1000, 3000], Direction::Down);
        let b = schedule_cscan(&config, 1000, &[999, 3000, 4500, 10, 1000], Direction::Down);
        assert_eq!(a, b);
    }

    #[test]
    fn test_cscan_is_deterministic() {
        let config = make_config(5000);
        let requests = vec![4999, 0, 2500, 17];
        let first = schedule_cscan(&config, 1000, &requests, Direction::Up);
        let second = schedule_cscan(&config, 1000, &requests, Direction::Up);
        assert_eq!(first, second);
    }
}
