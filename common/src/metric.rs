use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlotError;

/// The measured quantity a graph is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricKind {
    Bandwidth,
    Iops,
    #[serde(rename = "average-latency")]
    AvgLatency,
}

/// Name -> kind table shared by the CLI usage string and the dispatcher.
/// Initialized once, read-only thereafter.
pub const METRIC_NAMES: &[(&str, MetricKind)] = &[
    ("bandwidth", MetricKind::Bandwidth),
    ("iops", MetricKind::Iops),
    ("average-latency", MetricKind::AvgLatency),
];

impl MetricKind {
    pub const ALL: &[MetricKind] = &[
        MetricKind::Bandwidth,
        MetricKind::Iops,
        MetricKind::AvgLatency,
    ];

    /// Stable name, also used in artifact file names.
    pub fn name(&self) -> &'static str {
        match *self {
            MetricKind::Bandwidth => "bandwidth",
            MetricKind::Iops => "iops",
            MetricKind::AvgLatency => "average-latency",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricKind {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        METRIC_NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| PlotError::UnknownMetricKind(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_registered_name() {
        for (name, kind) in METRIC_NAMES {
            assert_eq!(name.parse::<MetricKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn name_matches_registry() {
        for kind in MetricKind::ALL {
            let (name, _) = METRIC_NAMES
                .iter()
                .find(|(_, k)| k == kind)
                .expect("kind missing from registry");
            assert_eq!(kind.name(), *name);
        }
    }

    #[test]
    fn rejects_unknown_name() {
        let err = "bw".parse::<MetricKind>().unwrap_err();
        assert!(matches!(err, PlotError::UnknownMetricKind(s) if s == "bw"));
    }

    #[test]
    fn rejects_case_variants() {
        assert!("Bandwidth".parse::<MetricKind>().is_err());
    }
}
