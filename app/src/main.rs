use std::{fs::create_dir_all, path::PathBuf};

use clap::Parser;
use common::metric::{METRIC_NAMES, MetricKind};
use eyre::{Result, bail};
use fio_graphs::build_graph;
use tracing::debug;
use tracing_subscriber::{
    EnvFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Create plots from fio output files.
#[derive(Parser)]
#[command(name = "fio-plotter")]
struct Cli {
    /// fio JSON result file
    input_file: PathBuf,
    /// Metric to plot: bandwidth, iops or average-latency
    graph_type: String,
    /// Directory the plot artifacts are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());
    tracing_subscriber::registry()
        .with(EnvFilter::new(format!(
            "fio_plotter={log_level},fio_graphs={log_level},fio={log_level}"
        )))
        .with(layer().compact())
        .init();

    if !args.input_file.exists() {
        bail!("file '{}' does not exist", args.input_file.display());
    }
    let kind: MetricKind = match args.graph_type.parse() {
        Ok(kind) => kind,
        Err(_) => {
            let known: Vec<&str> = METRIC_NAMES.iter().map(|(name, _)| *name).collect();
            bail!("GRAPH_TYPE must be one of: {}", known.join("|"));
        }
    };

    create_dir_all(&args.output_dir)?;
    let graph = build_graph(&args.input_file, kind)?;
    debug!("extracted {} samples", graph.samples().len());

    for path in graph.render(&args.output_dir)? {
        println!("{}", path.display());
    }
    Ok(())
}
