use common::graph::{Direction, Sample};
use fio::result::{DirectionStats, FioResult};

/// Average bandwidth (KiB/s) per job and direction.
pub fn bandwidth_samples(result: &FioResult) -> Vec<Sample> {
    collect(result, |stats| stats.bw_mean)
}

/// Average IOPS per job and direction.
pub fn iops_samples(result: &FioResult) -> Vec<Sample> {
    collect(result, |stats| stats.iops_mean)
}

/// Average total latency (ns) per job and direction.
pub fn avg_latency_samples(result: &FioResult) -> Vec<Sample> {
    collect(result, |stats| stats.lat_ns.as_ref().map(|lat| lat.mean))
}

/// Walks jobs in document order, read before write within a job. A missing
/// field means the direction was not reported and yields no sample; a
/// reported zero is emitted as-is.
fn collect(
    result: &FioResult,
    field: impl Fn(&DirectionStats) -> Option<f64>,
) -> Vec<Sample> {
    let mut samples = Vec::new();
    for job in &result.jobs {
        let directions = [
            (Direction::Read, job.read.as_ref()),
            (Direction::Write, job.write.as_ref()),
        ];
        for (direction, stats) in directions {
            if let Some(value) = stats.and_then(&field) {
                samples.push(Sample {
                    job: job.jobname.clone(),
                    direction,
                    value,
                });
            }
        }
    }
    samples
}

#[cfg(test)]
mod tests {
    use fio::result::{Job, LatStats};

    use super::*;

    fn job(name: &str, read: Option<DirectionStats>, write: Option<DirectionStats>) -> Job {
        Job {
            jobname: name.to_owned(),
            read,
            write,
            ..Default::default()
        }
    }

    fn stats(bw: Option<f64>, iops: Option<f64>, lat: Option<f64>) -> DirectionStats {
        DirectionStats {
            bw_mean: bw,
            iops_mean: iops,
            lat_ns: lat.map(|mean| LatStats {
                mean,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn doc(jobs: Vec<Job>) -> FioResult {
        FioResult {
            jobs,
            ..Default::default()
        }
    }

    #[test]
    fn preserves_document_order_read_before_write() {
        let result = doc(vec![
            job(
                "b-first",
                Some(stats(Some(100.0), None, None)),
                Some(stats(Some(200.0), None, None)),
            ),
            job("a-second", Some(stats(Some(300.0), None, None)), None),
        ]);
        let samples = bandwidth_samples(&result);
        let seen: Vec<(&str, Direction, f64)> = samples
            .iter()
            .map(|s| (s.job.as_str(), s.direction, s.value))
            .collect();
        assert_eq!(
            seen,
            vec![
                ("b-first", Direction::Read, 100.0),
                ("b-first", Direction::Write, 200.0),
                ("a-second", Direction::Read, 300.0),
            ]
        );
    }

    #[test]
    fn write_only_job_yields_one_write_sample() {
        let result = doc(vec![job(
            "wr",
            None,
            Some(stats(Some(4096.0), None, None)),
        )]);
        let samples = bandwidth_samples(&result);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].direction, Direction::Write);
    }

    #[test]
    fn measured_zero_is_emitted() {
        let result = doc(vec![job("idle", Some(stats(None, Some(0.0), None)), None)]);
        let samples = iops_samples(&result);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].value, 0.0);
    }

    #[test]
    fn absent_field_yields_no_sample() {
        // direction present, but the bandwidth field itself is missing
        let result = doc(vec![job("ro", Some(stats(None, Some(5.0), None)), None)]);
        assert!(bandwidth_samples(&result).is_empty());
    }

    #[test]
    fn extractors_read_their_own_field() {
        let result = doc(vec![job(
            "mix",
            Some(stats(Some(1.0), Some(2.0), Some(3.0))),
            None,
        )]);
        assert_eq!(bandwidth_samples(&result)[0].value, 1.0);
        assert_eq!(iops_samples(&result)[0].value, 2.0);
        assert_eq!(avg_latency_samples(&result)[0].value, 3.0);
    }

    #[test]
    fn extraction_is_deterministic() {
        let result = doc(vec![
            job(
                "j1",
                Some(stats(Some(10.0), None, None)),
                Some(stats(Some(20.0), None, None)),
            ),
            job("j2", Some(stats(Some(30.0), None, None)), None),
        ]);
        assert_eq!(bandwidth_samples(&result), bandwidth_samples(&result));
    }

    #[test]
    fn empty_document_yields_no_samples() {
        let result = doc(Vec::new());
        assert!(bandwidth_samples(&result).is_empty());
        assert!(iops_samples(&result).is_empty());
        assert!(avg_latency_samples(&result).is_empty());
    }
}
