//! Console reporting for simulation runs.

use crate::config::DiskConfig;
use crate::models::Cylinder;

/// Format an integer with comma-grouped thousands (`1234567` -> `"1,234,567"`).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Print the run banner: disk geometry, workload size, starting position.
pub fn print_banner(config: &DiskConfig, start: Cylinder) {
    println!("Disk scheduling simulation");
    println!(
        "Disk of {} cylinders (0-{}).",
        config.max_cylinders,
        config.edge()
    );
    println!("{} random requests.", config.num_requests);
    println!("Initial head position: {}\n", start);
}

/// Print the total head movement for each policy.
pub fn print_totals(fcfs: u64, scan: u64, cscan: u64) {
    println!("--- Total head movement ---");
    println!("FCFS:   {} cylinders", group_thousands(fcfs));
    println!("SCAN:   {} cylinders", group_thousands(scan));
    println!("C-SCAN: {} cylinders\n", group_thousands(cscan));
}
