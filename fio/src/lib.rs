use std::{fs, path::Path};

use common::error::PlotError;

pub mod result;

use result::FioResult;

/// Loads and deserializes a fio JSON result document.
///
/// fio prints warnings ahead of the JSON body when a run misbehaves, so
/// everything before the first line starting with `{` is skipped. Read
/// failures map to [`PlotError::Io`], anything that does not deserialize
/// against [`FioResult`] to [`PlotError::Schema`].
pub fn load_result(path: &Path) -> Result<FioResult, PlotError> {
    let raw = fs::read_to_string(path).map_err(|source| PlotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let body = json_body(&raw).ok_or_else(|| PlotError::Schema {
        path: path.to_path_buf(),
        reason: "no JSON object found".to_owned(),
    })?;
    serde_json::from_str(body).map_err(|err| PlotError::Schema {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

fn json_body(raw: &str) -> Option<&str> {
    let mut offset = 0;
    for line in raw.split_inclusive('\n') {
        if line.trim_start().starts_with('{') {
            return Some(&raw[offset..]);
        }
        offset += line.len();
    }
    None
}
