//! Disk-head scheduling simulator.
//!
//! Models the classic single-head disk scheduling problem: given a starting
//! head position and a sequence of cylinder requests, compute the total head
//! movement and the exact path traversed under three policies:
//!
//! - FCFS: service requests in arrival order ([`schedule_fcfs`])
//! - SCAN: elevator sweep to the disk edge, then back ([`schedule_scan`])
//! - C-SCAN: sweep to the edge, wrap to the opposite boundary, sweep again
//!   ([`schedule_cscan`])
//!
//! The policies are pure functions over their inputs; workload generation,
//! reporting and chart rendering live in their own modules and are only used
//! by the `platter` binary.

pub mod chart;
pub mod config;
pub mod logging;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod workload;

pub use config::DiskConfig;
pub use models::{Cylinder, Direction, SeekPlan};
pub use scheduler::{schedule_cscan, schedule_fcfs, schedule_scan};
pub use workload::{generate_requests, generate_requests_with_rng};
