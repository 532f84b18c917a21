use std::path::PathBuf;

use thiserror::Error;

/// Failures of the load -> extract -> render pipeline.
///
/// `Io` and `Schema` are separate variants on purpose: the first is an
/// environment problem (unreadable file), the second a data-contract problem
/// (the file is not a fio result document), and callers report them
/// differently. Errors are propagated to the caller, never logged here.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path:?} is not a fio result document: {reason}")]
    Schema { path: PathBuf, reason: String },
    #[error("unknown metric kind '{0}'")]
    UnknownMetricKind(String),
    #[error("could not render {name}: {reason}")]
    Render { name: String, reason: String },
}
