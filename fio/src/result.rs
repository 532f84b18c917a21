use serde::{Deserialize, Serialize};

/// Root of a fio `--output-format=json` document.
///
/// Field names are owned by fio; unknown fields are ignored so newer fio
/// versions still parse. A document without `jobs` is rejected.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FioResult {
    #[serde(rename = "fio version")]
    pub fio_version: Option<String>,
    pub jobs: Vec<Job>,
}

/// One benchmarked job, in document order. `jobname` is the plot category
/// label. A direction the job did not exercise may be missing entirely.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub jobname: String,
    #[serde(rename = "job options")]
    pub job_options: Option<JobOptions>,
    pub read: Option<DirectionStats>,
    pub write: Option<DirectionStats>,
}

/// The per-job options fio echoes back that identify the workload.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOptions {
    pub name: Option<String>,
    pub rw: Option<String>,
    pub bs: Option<String>,
    pub ioengine: Option<String>,
    pub iodepth: Option<String>,
    pub numjobs: Option<String>,
    pub runtime: Option<String>,
    pub ramp_time: Option<String>,
}

/// Aggregate statistics for one I/O direction of one job.
///
/// Only the averages (and their deviations) are modeled. A missing field
/// means fio did not report it; a reported zero is a real measurement, the
/// format cannot distinguish an idle direction from one that measured zero.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionStats {
    pub bw_mean: Option<f64>,
    pub bw_dev: Option<f64>,
    pub iops_mean: Option<f64>,
    pub iops_stddev: Option<f64>,
    pub lat_ns: Option<LatStats>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatStats {
    pub mean: f64,
    pub stddev: Option<f64>,
    #[serde(rename = "N")]
    pub n: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_document() {
        let raw = r#"{
            "fio version": "fio-3.36",
            "jobs": [
                {
                    "jobname": "seq-read",
                    "job options": { "rw": "read", "bs": "4k" },
                    "read": {
                        "bw_mean": 512000.5,
                        "bw_dev": 120.0,
                        "iops_mean": 125000.0,
                        "iops_stddev": 42.0,
                        "lat_ns": { "mean": 8123.4, "stddev": 17.2, "N": 100 }
                    }
                }
            ]
        }"#;
        let result: FioResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.fio_version.as_deref(), Some("fio-3.36"));
        assert_eq!(result.jobs.len(), 1);

        let job = &result.jobs[0];
        assert_eq!(job.jobname, "seq-read");
        assert_eq!(job.job_options.as_ref().unwrap().rw.as_deref(), Some("read"));
        assert!(job.write.is_none());

        let read = job.read.as_ref().unwrap();
        assert_eq!(read.bw_mean, Some(512000.5));
        assert_eq!(read.lat_ns.as_ref().unwrap().mean, 8123.4);
    }

    #[test]
    fn ignores_unmodeled_fields() {
        let raw = r#"{
            "fio version": "fio-3.36",
            "timestamp": 1714000000,
            "global options": { "filename": "/dev/nvme0n1" },
            "jobs": []
        }"#;
        let result: FioResult = serde_json::from_str(raw).unwrap();
        assert!(result.jobs.is_empty());
    }

    #[test]
    fn missing_jobs_is_an_error() {
        assert!(serde_json::from_str::<FioResult>(r#"{"fio version": "fio-3.36"}"#).is_err());
    }

    #[test]
    fn empty_direction_object_parses() {
        let raw = r#"{"jobs": [{"jobname": "idle", "read": {}}]}"#;
        let result: FioResult = serde_json::from_str(raw).unwrap();
        let read = result.jobs[0].read.as_ref().unwrap();
        assert!(read.bw_mean.is_none());
        assert!(read.lat_ns.is_none());
    }
}
