use std::{
    io::{BufWriter, Write},
    path::PathBuf,
    time::Duration,
};

use aod::{log::build_logger_for_verbosity, prelude::*};
use anyhow::Context;
use glob::glob;
use log::{LevelFilter, info};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Computes alpha, alpha_od and alpha of the square of graphs in PACE format")]
struct Opts {
    /// Glob patterns of instance files; reads a single graph from stdin if omitted
    instances: Vec<String>,

    /// Graphs with more nodes are reported as too large
    #[structopt(long, default_value = "40")]
    max_nodes: NumNodes,

    /// Time limit per ILP model in seconds
    #[structopt(long)]
    timeout: Option<f64>,

    /// Do not re-validate solutions extracted from the ILP
    #[structopt(long)]
    no_verify: bool,

    /// Instead of solving, write the k-th power of each graph in PACE format
    #[structopt(long)]
    power: Option<NumNodes>,

    /// Include a maximum odd independent set in the report
    #[structopt(short, long)]
    witness: bool,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

impl Opts {
    fn solver_config(&self) -> anyhow::Result<SolverConfig> {
        let timeout = self
            .timeout
            .map(Duration::try_from_secs_f64)
            .transpose()
            .context("Invalid timeout")?;

        Ok(SolverConfig::default()
            .with_max_nodes(self.max_nodes)
            .with_timeout(timeout)
            .with_verification(!self.no_verify))
    }

    fn instance_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for pattern in &self.instances {
            let matches = glob(pattern).with_context(|| format!("Invalid pattern {pattern}"))?;
            for path in matches {
                files.push(path?);
            }
        }
        Ok(files)
    }
}

fn process<W: Write>(
    opts: &Opts,
    config: &SolverConfig,
    graph: AdjArray,
    name: Option<String>,
    writer: &mut W,
) -> anyhow::Result<()> {
    if let Some(k) = opts.power {
        let power = graph.power(k)?;
        info!(
            "G^{k} has {} nodes and {} edges",
            power.number_of_nodes(),
            power.number_of_edges()
        );
        let comment = format!("power k={k} of {}", name.as_deref().unwrap_or("stdin"));
        power.try_write_pace_with_comments(&mut *writer, &[comment.as_str()])?;
        return Ok(());
    }

    let mut report = GraphReport::compute::<DefaultBackend, _>(&graph, config)?;
    if let Some(name) = name {
        report = report.with_name(name);
    }
    if !opts.witness {
        report = report.without_witness();
    }

    serde_json::to_writer(&mut *writer, &report)?;
    writeln!(writer)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let config = opts.solver_config()?;
    let mut writer = BufWriter::new(std::io::stdout().lock());

    if opts.instances.is_empty() {
        let graph = AdjArray::try_read_pace(std::io::stdin().lock())
            .context("Failed to read graph from stdin")?;
        process(&opts, &config, graph, None, &mut writer)?;
    } else {
        let files = opts.instance_files()?;
        info!("Found {} instance files", files.len());

        for path in files {
            let graph = AdjArray::try_read_pace_file(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            process(
                &opts,
                &config,
                graph,
                Some(path.display().to_string()),
                &mut writer,
            )?;
        }
    }

    writer.flush()?;
    Ok(())
}
