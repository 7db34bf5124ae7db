use std::env;
use std::path::Path;
use std::process::exit;

use platter::chart::{self, HEAD_MOVEMENT_CHART, PERFORMANCE_CHART};
use platter::{
    generate_requests, report, schedule_cscan, schedule_fcfs, schedule_scan, Cylinder, Direction,
    DiskConfig,
};

fn usage(program: &str, config: &DiskConfig) {
    eprintln!(
        "Error: a valid starting head position is required (0 - {}).",
        config.edge()
    );
    eprintln!("Usage: {} <start_position>", program);
}

/// Parse and validate the single positional argument.
fn parse_start(args: &[String], config: &DiskConfig) -> Option<Cylinder> {
    if args.len() != 2 {
        return None;
    }
    args[1]
        .parse::<Cylinder>()
        .ok()
        .filter(|&start| start < config.max_cylinders)
}

fn main() {
    let config = DiskConfig::default();
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("platter");

    let Some(start) = parse_start(&args, &config) else {
        usage(program, &config);
        exit(1);
    };

    report::print_banner(&config, start);

    let requests = generate_requests(&config);

    let fcfs = schedule_fcfs(start, &requests);
    let scan = schedule_scan(&config, start, &requests, Direction::Up);
    let cscan = schedule_cscan(&config, start, &requests, Direction::Up);

    report::print_totals(
        fcfs.total_movement,
        scan.total_movement,
        cscan.total_movement,
    );

    // Chart failures are reported but do not discard the numbers above.
    println!("Rendering charts...");
    let rendered = chart::render_performance(
        fcfs.total_movement,
        scan.total_movement,
        cscan.total_movement,
        Path::new(PERFORMANCE_CHART),
    )
    .and_then(|_| {
        chart::render_head_movement(&config, &fcfs, &scan, &cscan, Path::new(HEAD_MOVEMENT_CHART))
    });

    match rendered {
        Ok(()) => println!(
            "Saved '{}' and '{}'.",
            PERFORMANCE_CHART, HEAD_MOVEMENT_CHART
        ),
        Err(err) => eprintln!("Failed to render charts: {}", err),
    }
}
