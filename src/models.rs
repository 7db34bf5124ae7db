//! Core data types for the disk scheduling simulator.

/// An addressable disk track, numbered from 0.
pub type Cylinder = u32;

/// Initial travel direction for the sweeping policies (SCAN / C-SCAN).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Sweep toward the highest cylinder first.
    #[default]
    Up,
    /// Sweep toward cylinder 0 first.
    Down,
}

/// Result of a single scheduling simulation.
///
/// `path` records every position the head occupies, starting with the
/// initial position, one entry per serviced request plus any synthetic
/// boundary or wrap stops. `total_movement` is always exactly the sum of
/// absolute differences between consecutive path entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeekPlan {
    /// Total head movement in cylinders.
    pub total_movement: u64,
    /// Every position the head occupied, in service order.
    pub path: Vec<Cylinder>,
}

impl SeekPlan {
    /// Recompute the movement total from the recorded path.
    ///
    /// This always equals [`SeekPlan::total_movement`]; it exists so callers
    /// (and tests) can reconcile the accumulator against the path.
    pub fn movement_from_path(&self) -> u64 {
        self.path
            .windows(2)
            .map(|pair| u64::from(pair[0].abs_diff(pair[1])))
            .sum()
    }
}
