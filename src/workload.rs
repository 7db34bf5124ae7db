//! Random request workload generation.

use rand::Rng;

use crate::config::DiskConfig;
use crate::models::Cylinder;

/// Generate `config.num_requests` uniformly random cylinders in
/// `[0, config.max_cylinders)` using the thread-local RNG.
pub fn generate_requests(config: &DiskConfig) -> Vec<Cylinder> {
    generate_requests_with_rng(config, &mut rand::rng())
}

/// Generate a workload from a caller-supplied RNG, so deterministic runs
/// (and tests) can seed it.
pub fn generate_requests_with_rng<R: Rng + ?Sized>(
    config: &DiskConfig,
    rng: &mut R,
) -> Vec<Cylinder> {
    (0..config.num_requests)
        .map(|_| rng.random_range(0..config.max_cylinders))
        .collect()
}
