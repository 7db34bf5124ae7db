//! Disk-head scheduling policies.
//!
//! Each policy is an independent pure function from a starting position and
//! a request sequence to a [`crate::models::SeekPlan`]; they share only the
//! movement-accounting convention in [`state::HeadState`].

mod cscan;
mod fcfs;
mod scan;
mod state;

pub use cscan::schedule_cscan;
pub use fcfs::schedule_fcfs;
pub use scan::schedule_scan;
pub use state::HeadState;
