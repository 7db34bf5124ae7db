//! SVG chart rendering for simulation results.
//!
//! Produces two artifacts: a three-panel line chart of the head paths and a
//! bar chart comparing the total movement of the three policies.

use std::path::Path;

use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::TextStyle;
use thiserror::Error;

use crate::config::DiskConfig;
use crate::models::SeekPlan;
use crate::report::group_thousands;

/// Default file name for the head-path line charts.
pub const HEAD_MOVEMENT_CHART: &str = "head_movement_comparison.svg";
/// Default file name for the totals bar chart.
pub const PERFORMANCE_CHART: &str = "performance_comparison.svg";

/// Errors that can occur while rendering charts.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to render chart: {0}")]
    Render(String),
}

fn draw_err(err: impl std::error::Error) -> ChartError {
    ChartError::Render(err.to_string())
}

/// Render the head path of each policy as three stacked line charts
/// (y = cylinder, x = service order), each captioned with its total.
pub fn render_head_movement(
    config: &DiskConfig,
    fcfs: &SeekPlan,
    scan: &SeekPlan,
    cscan: &SeekPlan,
    out_path: &Path,
) -> Result<(), ChartError> {
    let root = SVGBackend::new(out_path, (1000, 1500)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    let panels = root.split_evenly((3, 1));

    let series = [
        ("FCFS", fcfs, RED),
        ("SCAN", scan, GREEN),
        ("C-SCAN", cscan, BLUE),
    ];

    for (panel, (name, plan, color)) in panels.iter().zip(series.iter()) {
        let caption = format!(
            "{} (total: {} cylinders)",
            name,
            group_thousands(plan.total_movement)
        );
        let mut chart = ChartBuilder::on(panel)
            .caption(caption, ("sans-serif", 22))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0u32..plan.path.len() as u32, 0u32..config.max_cylinders)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc("Service order")
            .y_desc("Cylinder")
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(LineSeries::new(
                plan.path
                    .iter()
                    .enumerate()
                    .map(|(order, &cylinder)| (order as u32, cylinder)),
                color,
            ))
            .map_err(draw_err)?;
    }

    root.present().map_err(draw_err)?;
    Ok(())
}

/// Render the three movement totals as a bar chart with value labels.
pub fn render_performance(
    fcfs_total: u64,
    scan_total: u64,
    cscan_total: u64,
    out_path: &Path,
) -> Result<(), ChartError> {
    let root = SVGBackend::new(out_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let totals = [
        ("FCFS", fcfs_total, RED),
        ("SCAN", scan_total, GREEN),
        ("C-SCAN", cscan_total, BLUE),
    ];

    // Leave headroom above the tallest bar for its value label.
    let peak = totals.iter().map(|&(_, total, _)| total).max().unwrap_or(0);
    let y_max = (peak + peak / 5).max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption("Algorithm performance comparison", ("sans-serif", 26))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d((0u32..3u32).into_segmented(), 0u64..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|position| match position {
            SegmentValue::CenterOf(0) => "FCFS".to_string(),
            SegmentValue::CenterOf(1) => "SCAN".to_string(),
            SegmentValue::CenterOf(2) => "C-SCAN".to_string(),
            _ => String::new(),
        })
        .x_desc("Algorithm")
        .y_desc("Total head movement (cylinders)")
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(totals.iter().enumerate().map(|(index, &(_, total, color))| {
            let index = index as u32;
            Rectangle::new(
                [
                    (SegmentValue::Exact(index), 0),
                    (SegmentValue::Exact(index + 1), total),
                ],
                color.filled(),
            )
        }))
        .map_err(draw_err)?;

    let label_style = TextStyle::from(("sans-serif", 15).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(totals.iter().enumerate().map(|(index, &(_, total, _))| {
            Text::new(
                group_thousands(total),
                (SegmentValue::CenterOf(index as u32), total),
                label_style.clone(),
            )
        }))
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;
    use crate::scheduler::{schedule_cscan, schedule_fcfs, schedule_scan};

    #[test]
    fn test_render_both_charts() {
        let config = DiskConfig {
            max_cylinders: 200,
            num_requests: 3,
            verbosity: 0,
        };
        let requests = vec![10, 190, 50];
        let fcfs = schedule_fcfs(50, &requests);
        let scan = schedule_scan(&config, 50, &requests, Direction::Up);
        let cscan = schedule_cscan(&config, 50, &requests, Direction::Up);

        let dir = tempfile::tempdir().unwrap();
        let movement_path = dir.path().join(HEAD_MOVEMENT_CHART);
        let performance_path = dir.path().join(PERFORMANCE_CHART);

        render_head_movement(&config, &fcfs, &scan, &cscan, &movement_path).unwrap();
        render_performance(
            fcfs.total_movement,
            scan.total_movement,
            cscan.total_movement,
            &performance_path,
        )
        .unwrap();

        assert!(movement_path.metadata().unwrap().len() > 0);
        assert!(performance_path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn test_render_performance_all_zero_totals() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("zeros.svg");
        render_performance(0, 0, 0, &out).unwrap();
        assert!(out.metadata().unwrap().len() > 0);
    }
}
