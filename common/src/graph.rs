use core::fmt;
use std::path::{Path, PathBuf};

use crate::error::PlotError;

/// I/O direction a job reports statistics for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Read,
    Write,
}

impl Direction {
    /// Read before write, the order samples are emitted and rendered in.
    pub const ALL: &[Direction] = &[Direction::Read, Direction::Write];

    pub fn name(&self) -> &'static str {
        match *self {
            Direction::Read => "read",
            Direction::Write => "write",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One plotted data point: the job it came from, the I/O direction, and the
/// measured value.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub job: String,
    pub direction: Direction,
    pub value: f64,
}

/// Contract shared by all metric graphs.
///
/// A graph owns the samples extracted for its metric and renders one artifact
/// per non-empty direction group into `out_dir`, returning the written paths.
/// Rendering a graph with no samples at all is an error, not an empty plot.
pub trait Graph: fmt::Debug + Send + Sync {
    /// Stable name, used as the artifact file stem.
    fn name(&self) -> &'static str;
    fn x_label(&self) -> &'static str;
    fn y_label(&self) -> &'static str;
    fn samples(&self) -> &[Sample];
    fn render(&self, out_dir: &Path) -> Result<Vec<PathBuf>, PlotError>;
}
