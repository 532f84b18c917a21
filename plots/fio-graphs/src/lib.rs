use std::path::{Path, PathBuf};

use common::{
    error::PlotError,
    graph::{Graph, Sample},
    metric::MetricKind,
};
use fio::result::FioResult;
use tracing::debug;

mod extract;
mod render;

pub use extract::{avg_latency_samples, bandwidth_samples, iops_samples};

use render::BarChartSpec;

/// Average bandwidth per job, split by I/O direction.
#[derive(Debug, Clone)]
pub struct BandwidthGraph {
    samples: Vec<Sample>,
}

impl BandwidthGraph {
    pub fn from_result(result: &FioResult) -> Self {
        Self {
            samples: extract::bandwidth_samples(result),
        }
    }
}

impl Graph for BandwidthGraph {
    fn name(&self) -> &'static str {
        MetricKind::Bandwidth.name()
    }

    fn x_label(&self) -> &'static str {
        "Job"
    }

    fn y_label(&self) -> &'static str {
        "KiB/s"
    }

    fn samples(&self) -> &[Sample] {
        &self.samples
    }

    fn render(&self, out_dir: &Path) -> Result<Vec<PathBuf>, PlotError> {
        render::render_direction_charts(
            &BarChartSpec {
                name: self.name(),
                title: "Bandwidth - higher is better",
                x_label: self.x_label(),
                y_label: self.y_label(),
                samples: &self.samples,
            },
            out_dir,
        )
    }
}

/// Average operations per second per job, split by I/O direction.
#[derive(Debug, Clone)]
pub struct IopsGraph {
    samples: Vec<Sample>,
}

impl IopsGraph {
    pub fn from_result(result: &FioResult) -> Self {
        Self {
            samples: extract::iops_samples(result),
        }
    }
}

impl Graph for IopsGraph {
    fn name(&self) -> &'static str {
        MetricKind::Iops.name()
    }

    fn x_label(&self) -> &'static str {
        "Job"
    }

    fn y_label(&self) -> &'static str {
        "IOPS"
    }

    fn samples(&self) -> &[Sample] {
        &self.samples
    }

    fn render(&self, out_dir: &Path) -> Result<Vec<PathBuf>, PlotError> {
        render::render_direction_charts(
            &BarChartSpec {
                name: self.name(),
                title: "IOPS - higher is better",
                x_label: self.x_label(),
                y_label: self.y_label(),
                samples: &self.samples,
            },
            out_dir,
        )
    }
}

/// Average total latency per job, split by I/O direction.
#[derive(Debug, Clone)]
pub struct AvgLatencyGraph {
    samples: Vec<Sample>,
}

impl AvgLatencyGraph {
    pub fn from_result(result: &FioResult) -> Self {
        Self {
            samples: extract::avg_latency_samples(result),
        }
    }
}

impl Graph for AvgLatencyGraph {
    fn name(&self) -> &'static str {
        MetricKind::AvgLatency.name()
    }

    fn x_label(&self) -> &'static str {
        "Job"
    }

    fn y_label(&self) -> &'static str {
        "ns"
    }

    fn samples(&self) -> &[Sample] {
        &self.samples
    }

    fn render(&self, out_dir: &Path) -> Result<Vec<PathBuf>, PlotError> {
        render::render_direction_charts(
            &BarChartSpec {
                name: self.name(),
                title: "Average Latency - lower is better",
                x_label: self.x_label(),
                y_label: self.y_label(),
                samples: &self.samples,
            },
            out_dir,
        )
    }
}

/// Builds the graph for the metric named `kind` from the document at `path`.
///
/// The kind string is resolved against the metric registry before any file
/// access, so an unknown kind fails without touching the filesystem. Loader
/// errors propagate unchanged.
pub fn dispatch(path: &Path, kind: &str) -> Result<Box<dyn Graph>, PlotError> {
    let kind: MetricKind = kind.parse()?;
    build_graph(path, kind)
}

/// Typed entry point for callers that already hold a [`MetricKind`].
pub fn build_graph(path: &Path, kind: MetricKind) -> Result<Box<dyn Graph>, PlotError> {
    let result = fio::load_result(path)?;
    debug!(
        "loaded {} jobs from {} for a {kind} graph",
        result.jobs.len(),
        path.display()
    );
    Ok(match kind {
        MetricKind::Bandwidth => Box::new(BandwidthGraph::from_result(&result)),
        MetricKind::Iops => Box::new(IopsGraph::from_result(&result)),
        MetricKind::AvgLatency => Box::new(AvgLatencyGraph::from_result(&result)),
    })
}
