use std::{
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use ::log::{LevelFilter, info, warn};
use aod::{prelude::*, *};
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use rayon::prelude::*;

use structopt::*;

#[derive(Debug, StructOpt)]
#[structopt(about = "Cross-checks the exact solvers on random G(n,p) graphs")]
struct Opt {
    #[structopt(short, long, default_value = "10000")]
    repeats: u64,

    #[structopt(long, default_value = "2")]
    min_nodes: NumNodes,

    #[structopt(long, default_value = "12")]
    max_nodes: NumNodes,

    /// Average degrees of the generated graphs
    #[structopt(short = "d", long, use_delimiter = true, default_value = "1,2,3,5")]
    avg_deg: Vec<f64>,

    #[structopt(short, long, default_value = "0")]
    seed: u64,

    /// Directory into which graphs exposing a disagreement are written
    #[structopt(short = "w", long)]
    write_buggy: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

#[derive(Default)]
struct Stats {
    completed: AtomicU64,
    mismatches: AtomicU64,
    equal_alpha: AtomicU64,
    equal_square: AtomicU64,
    time_ilp_ms: AtomicU64,
    time_naive_ms: AtomicU64,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();
    aod::log::build_logger_for_verbosity(LevelFilter::Warn, opt.verbose);
    utils::signal_handling::initialize();

    anyhow::ensure!(
        opt.min_nodes <= opt.max_nodes && opt.max_nodes <= NAIVE_MAX_NODES,
        "Node range must lie within 0..={NAIVE_MAX_NODES}"
    );

    if let Some(dir) = &opt.write_buggy {
        std::fs::create_dir_all(dir)?;
    }

    let params = (opt.min_nodes..=opt.max_nodes)
        .cartesian_product(opt.avg_deg.iter().copied())
        .map(|(n, d)| (n, (d / (n.max(2) - 1) as f64).clamp(0.0, 1.0)))
        .collect_vec();
    anyhow::ensure!(!params.is_empty(), "No average degree given");

    let total_instances = opt.repeats * params.len() as u64;
    let stats = Stats::default();
    let config = SolverConfig::default().with_max_nodes(opt.max_nodes);

    (0..total_instances)
        .into_par_iter()
        .try_for_each(|i| -> anyhow::Result<()> {
            if utils::signal_handling::received_ctrl_c() {
                return Ok(());
            }

            let mut rng = Pcg64Mcg::seed_from_u64(opt.seed.wrapping_add(i));
            let (n, p) = params[rng.gen_range(0..params.len())];
            let graph = AdjArray::random_gnp(&mut rng, n, p);

            process_graph(&opt, &config, &graph, &stats)?;

            let counter = stats.completed.fetch_add(1, Ordering::Relaxed) + 1;
            if counter % 1000 == 0 {
                println!(
                    "Completed {:>7} of {:>7} | mismatches: {} | ILP: {:>6}ms naive: {:>6}ms",
                    counter,
                    total_instances,
                    stats.mismatches.load(Ordering::Relaxed),
                    stats.time_ilp_ms.load(Ordering::Relaxed),
                    stats.time_naive_ms.load(Ordering::Relaxed),
                );
            }

            Ok(())
        })?;

    let completed = stats.completed.load(Ordering::Relaxed);
    let mismatches = stats.mismatches.load(Ordering::Relaxed);
    info!(
        "alpha = alpha_od in {} and alpha_od = alpha(G^2) in {} of {completed} graphs",
        stats.equal_alpha.load(Ordering::Relaxed),
        stats.equal_square.load(Ordering::Relaxed),
    );

    anyhow::ensure!(
        mismatches == 0,
        "{mismatches} of {completed} graphs exposed a disagreement"
    );
    println!("All {completed} graphs passed");
    Ok(())
}

fn process_graph(
    opt: &Opt,
    config: &SolverConfig,
    graph: &AdjArray,
    stats: &Stats,
) -> anyhow::Result<()> {
    let time = Instant::now();
    let report = GraphReport::compute::<DefaultBackend, _>(graph, config)?;
    stats
        .time_ilp_ms
        .fetch_add(time.elapsed().as_millis() as u64, Ordering::Relaxed);

    let time = Instant::now();
    let naive = alpha_od_bruteforce(graph)?;
    stats
        .time_naive_ms
        .fetch_add(time.elapsed().as_millis() as u64, Ordering::Relaxed);

    let valid_witness = report
        .witness
        .as_ref()
        .is_some_and(|w| is_odd_independent_set(graph, w.iter().copied()));

    let mismatched = report.alpha_od != Alpha::Exact(naive)
        || !valid_witness
        || !report.satisfies_inequality_chain();

    if report.alpha_equals_alpha_od == Some(true) {
        stats.equal_alpha.fetch_add(1, Ordering::Relaxed);
    }
    if report.alpha_od_equals_alpha_square == Some(true) {
        stats.equal_square.fetch_add(1, Ordering::Relaxed);
    }

    if !mismatched {
        return Ok(());
    }

    stats.mismatches.fetch_add(1, Ordering::Relaxed);
    warn!(
        "Mismatch for n = {}, m = {}, alpha_od = {}, naive = {naive}, alpha = {}, alpha(G^2) = {} | digest = {}",
        report.nodes, report.edges, report.alpha_od, report.alpha, report.alpha_square, report.digest
    );

    if let Some(dir) = &opt.write_buggy {
        let filename = dir.join(format!(
            "n{:>03}_m{:>04}_od{naive:>03}_{}.gr",
            report.nodes, report.edges, report.digest
        ));
        graph.try_write_pace_file(&filename)?;
        info!("Wrote {}", filename.display());
    }

    Ok(())
}
