use std::{
    fs,
    path::{Path, PathBuf},
};

use common::{
    error::PlotError,
    graph::{Direction, Sample},
};
use itertools::Itertools;
use plotters::prelude::*;
use tracing::debug;

const CHART_SIZE: (u32, u32) = (1000, 600);
const TITLE_FONT_SIZE: u32 = 32;
const AXIS_LABEL_FONT_SIZE: u32 = 20;
const TICK_LABEL_FONT_SIZE: u32 = 16;
const BAR_WIDTH: f64 = 0.6;

const READ_COLOR: RGBColor = RGBColor(66, 133, 244);
const WRITE_COLOR: RGBColor = RGBColor(52, 168, 83);

pub(crate) struct BarChartSpec<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub samples: &'a [Sample],
}

/// Renders one bar chart per non-empty direction group and returns the
/// written artifact paths, `<out_dir>/<name>-<direction>.svg`.
///
/// The chart is drawn into memory first and only written out when drawing
/// succeeded, so an artifact on disk is always complete. Existing artifacts
/// are overwritten. No samples in any direction is an error.
pub(crate) fn render_direction_charts(
    spec: &BarChartSpec<'_>,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, PlotError> {
    if spec.samples.is_empty() {
        return Err(PlotError::Render {
            name: spec.name.to_owned(),
            reason: "no samples in any direction".to_owned(),
        });
    }
    let groups = spec
        .samples
        .iter()
        .into_group_map_by(|sample| sample.direction);

    let render_err = |reason: String| PlotError::Render {
        name: spec.name.to_owned(),
        reason,
    };

    if !out_dir.exists() {
        fs::create_dir_all(out_dir).map_err(|err| render_err(err.to_string()))?;
    }

    let mut paths = Vec::new();
    for direction in Direction::ALL {
        let Some(samples) = groups.get(direction) else {
            continue;
        };

        let mut svg = String::new();
        draw_bars(spec, *direction, samples, &mut svg)
            .map_err(|err| render_err(err.to_string()))?;

        let path = out_dir.join(format!("{}-{}.svg", spec.name, direction));
        fs::write(&path, svg).map_err(|err| render_err(err.to_string()))?;
        debug!("wrote {}", path.display());
        paths.push(path);
    }
    Ok(paths)
}

fn draw_bars(
    spec: &BarChartSpec<'_>,
    direction: Direction,
    samples: &[&Sample],
    svg: &mut String,
) -> Result<(), Box<dyn std::error::Error>> {
    let max = samples.iter().fold(0.0f64, |acc, s| acc.max(s.value));
    let (y_max, step) = y_axis(max);
    let jobs: Vec<&str> = samples.iter().map(|s| s.job.as_str()).collect();
    let count = samples.len();

    let root = SVGBackend::with_string(svg, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} ({direction})", spec.title),
            ("sans-serif", TITLE_FONT_SIZE),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5..count as f64 - 0.5, 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(count)
        .x_label_formatter(&|x| {
            let idx = x.round();
            if idx >= 0.0 && (x - idx).abs() < 0.3 {
                jobs.get(idx as usize).map(|j| (*j).to_owned()).unwrap_or_default()
            } else {
                String::new()
            }
        })
        .y_labels(((y_max / step).round() as usize).saturating_add(1))
        .x_desc(spec.x_label)
        .y_desc(spec.y_label)
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    let color = match direction {
        Direction::Read => READ_COLOR,
        Direction::Write => WRITE_COLOR,
    };
    chart.draw_series(samples.iter().enumerate().map(|(idx, sample)| {
        let x = idx as f64;
        Rectangle::new(
            [(x - BAR_WIDTH / 2.0, 0.0), (x + BAR_WIDTH / 2.0, sample.value)],
            color.filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// Axis upper bound and tick step, both derived from the observed maximum of
/// the direction group. Plots from different runs therefore do not share a
/// scale. An all-zero group still gets a drawable axis.
fn y_axis(max: f64) -> (f64, f64) {
    if max <= 0.0 {
        return (1.0, 0.25);
    }
    let step = nice_step(max);
    let upper = step * ((max / step).floor() + 1.0);
    (upper, step)
}

/// Rounds `max / 8` up to the nearest 1/2/5 multiple of a power of ten, which
/// keeps the axis at a handful of readable ticks.
fn nice_step(max: f64) -> f64 {
    let raw = max / 8.0;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let residual = raw / magnitude;
    let step = if residual > 5.0 {
        10.0
    } else if residual > 2.0 {
        5.0
    } else if residual > 1.0 {
        2.0
    } else {
        1.0
    };
    step * magnitude
}
