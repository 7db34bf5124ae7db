//! Configuration types for the simulator.

use crate::models::Cylinder;

/// Configuration for a disk scheduling simulation.
///
/// Passed by reference into every scheduler call so the core can be tested
/// with arbitrary disk sizes; there are no process-wide constants.
#[derive(Clone, Debug)]
pub struct DiskConfig {
    /// Number of addressable cylinders; valid positions are `[0, max_cylinders)`.
    pub max_cylinders: Cylinder,
    /// Number of random requests generated per simulation run.
    pub num_requests: usize,
    /// Logging verbosity (0 = silent).
    pub verbosity: u8,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            max_cylinders: 5000,
            num_requests: 1000,
            verbosity: 0,
        }
    }
}

impl DiskConfig {
    /// Highest addressable cylinder (`max_cylinders - 1`).
    pub fn edge(&self) -> Cylinder {
        self.max_cylinders - 1
    }
}
