//! Command line front end: generates a random connected graph, compares both bridge finders on
//! it, repairs it into an Eulerian graph and runs Fleury's algorithm with either oracle.

use std::{
    io::Write,
    time::{Duration, Instant},
};

use clap::Parser;
use eulerbridge::{algo::*, gens::*, prelude::*};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use thiserror::Error;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const RULE_THICK: &str = "====================================";
const RULE_THIN: &str = "------------------------------------";

#[derive(Parser, Debug, Clone)]
#[command(name = "eulerbridge", version)]
#[command(
    about = "Compare naive and Tarjan bridge detection with Fleury's algorithm",
    long_about = None
)]
pub struct Args {
    /// Number of vertices of the random graph (at least 2)
    pub vertices: NumNodes,

    /// Print both Euler walks and time each Fleury run with and without printing
    #[arg(short, long)]
    pub show: bool,

    /// Seed of the random number generator; drawn randomly if absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start vertex of Fleury's algorithm
    #[arg(long, default_value_t = 0)]
    pub start: Node,

    /// Trailing argument that is accepted but ignored; only `-s` enables show mode
    #[arg(hide = true)]
    pub marker: Option<String>,
}

impl Args {
    /// Returns *true* if the walks are to be printed, either by the flag or by a trailing `-s`
    pub fn show_walks(&self) -> bool {
        self.show || self.marker.as_deref() == Some("-s")
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("the graph must have at least 2 vertices (got {0})")]
    TooFewVertices(NumNodes),

    #[error("start vertex {start} is out of range for a graph with {vertices} vertices")]
    StartOutOfRange { start: Node, vertices: NumNodes },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of the Eulerian check on the generated graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    AlreadyEulerian,
    Repaired { added_edges: usize },
    CompleteFallback,
}

/// What a run computed, besides the printed report
#[derive(Debug, Clone)]
pub struct Summary {
    pub edges: NumEdges,
    pub naive_bridges: NumEdges,
    pub tarjan_bridges: NumEdges,
    pub verdict: Verdict,
    pub naive_walk: EulerWalk,
    pub tarjan_walk: EulerWalk,
    pub walks_valid: bool,
}

/// Installs a stderr logger filtered by `RUST_LOG` (default `warn`), keeping stdout for the report
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Runs the whole benchmark and writes the report to `out`
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<Summary, CliError> {
    let n = args.vertices;
    if n < 2 {
        return Err(CliError::TooFewVertices(n));
    }
    if args.start >= n {
        return Err(CliError::StartOutOfRange {
            start: args.start,
            vertices: n,
        });
    }

    if let Some(marker) = &args.marker {
        debug!(marker, "ignoring trailing argument");
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, n, "starting run");
    let rng = &mut Pcg64Mcg::seed_from_u64(seed);

    // generation
    let timer = Instant::now();
    let m = (n - 1) + rng.random_range(0..n);
    let mut graph =
        AdjArrayUndir::from_edges(n, RandomConnected::new().nodes(n).edges(m).generate(rng));
    let gen_time = timer.elapsed();

    writeln!(out, "{RULE_THICK}")?;
    writeln!(out, "Random graph generated:")?;
    writeln!(out, "Number of vertices: {n}")?;
    writeln!(out, "Number of edges: {}", graph.number_of_edges())?;
    writeln!(out, "Graph generation time: {:.6} ms", millis(gen_time))?;

    // bridge census
    info!("counting bridges");
    let mut naive_counter = WorkCounter::default();
    let timer = Instant::now();
    let naive_bridges = graph.count_bridges_naive(&mut naive_counter);
    let naive_time = timer.elapsed();

    let mut tarjan_counter = WorkCounter::default();
    let timer = Instant::now();
    let tarjan_bridges = graph.compute_bridges_with(&mut tarjan_counter).len() as NumEdges;
    let tarjan_time = timer.elapsed();

    for (name, bridges, time, counter) in [
        ("Naive", naive_bridges, naive_time, naive_counter),
        ("Tarjan", tarjan_bridges, tarjan_time, tarjan_counter),
    ] {
        writeln!(out, "{RULE_THIN}")?;
        writeln!(out, "{name} method (bridges):")?;
        writeln!(out, "Bridges found: {bridges}")?;
        writeln!(out, "Execution time: {:.6} ms", millis(time))?;
        writeln!(out, "Work: {counter}")?;
    }
    writeln!(out, "{RULE_THICK}")?;

    // eulerian repair
    let edges = graph.number_of_edges();
    let verdict = if graph.is_eulerian() {
        writeln!(out, "The original graph is already Eulerian.")?;
        Verdict::AlreadyEulerian
    } else {
        writeln!(out, "The graph is not Eulerian. Trying to make it Eulerian...")?;
        match graph.make_eulerian() {
            Some(added) => {
                writeln!(
                    out,
                    "Graph successfully made Eulerian by adding {} edges.",
                    added.len()
                )?;
                Verdict::Repaired {
                    added_edges: added.len(),
                }
            }
            None => {
                writeln!(out, "Could not make the graph Eulerian with the pairing strategy.")?;
                writeln!(out, "Using the complete Eulerian graph as a substitute.")?;
                graph = AdjArrayUndir::complete_eulerian(n);
                writeln!(
                    out,
                    "Complete Eulerian graph generated with {} edges.",
                    graph.number_of_edges()
                )?;
                Verdict::CompleteFallback
            }
        }
    };

    // fleury
    writeln!(out, "{RULE_THICK}")?;
    writeln!(
        out,
        "Running Fleury's algorithm from vertex {} to find an Euler path:",
        args.start
    )?;

    info!("running fleury with the naive oracle");
    let naive_walk = fleury_section(out, "Naive", &graph, args, NaiveOracle::new())?;
    info!("running fleury with the tarjan oracle");
    let tarjan_walk = fleury_section(out, "Tarjan", &graph, args, TarjanOracle::new())?;

    let walks_valid = naive_walk.is_euler_walk_of(&graph) && tarjan_walk.is_euler_walk_of(&graph);
    writeln!(out, "{RULE_THIN}")?;
    writeln!(
        out,
        "Walks identical: {}",
        if naive_walk == tarjan_walk { "yes" } else { "no" }
    )?;
    writeln!(out, "Walks valid: {}", if walks_valid { "yes" } else { "no" })?;
    if !walks_valid {
        warn!(seed, "fleury did not produce an Euler walk");
    }

    Ok(Summary {
        edges,
        naive_bridges,
        tarjan_bridges,
        verdict,
        naive_walk,
        tarjan_walk,
        walks_valid,
    })
}

/// Runs Fleury on a clone of `graph` and reports it. In show mode the walk is printed as part
/// of the timed run, followed by a second timed run on a fresh clone without printing.
fn fleury_section<W, O>(
    out: &mut W,
    name: &str,
    graph: &AdjArrayUndir,
    args: &Args,
    oracle: O,
) -> Result<EulerWalk, CliError>
where
    W: Write,
    O: BridgeOracle<AdjArrayUndir> + Clone,
{
    writeln!(out, "{RULE_THIN}")?;
    writeln!(out, "{name} Fleury:")?;

    let mut fleury = Fleury::new(graph.clone(), oracle.clone());
    let timer = Instant::now();
    let walk = fleury.run(args.start);
    if args.show_walks() {
        writeln!(out, "Euler walk: {walk}")?;
        out.flush()?;
    }
    let time = timer.elapsed();

    if args.show_walks() {
        let mut quiet = Fleury::new(graph.clone(), oracle);
        let timer = Instant::now();
        quiet.run(args.start);
        let quiet_time = timer.elapsed();

        writeln!(out, "Execution time (with print): {:.6} ms", millis(time))?;
        writeln!(out, "Execution time (without print): {:.6} ms", millis(quiet_time))?;
    } else {
        writeln!(out, "Execution time: {:.6} ms", millis(time))?;
    }
    writeln!(out, "Work: {}", fleury.oracle().counter())?;

    Ok(walk)
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(vertices: NumNodes, seed: u64) -> Args {
        Args {
            vertices,
            show: false,
            seed: Some(seed),
            start: 0,
            marker: None,
        }
    }

    fn run_to_string(args: &Args) -> (Summary, String) {
        let mut out = Vec::new();
        let summary = run(args, &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_arguments() {
        let args = Args::try_parse_from(["eulerbridge", "12", "-s", "--seed", "5", "--start", "3"])
            .unwrap();
        assert_eq!(args.vertices, 12);
        assert!(args.show);
        assert_eq!(args.seed, Some(5));
        assert_eq!(args.start, 3);

        let args = Args::try_parse_from(["eulerbridge", "4"]).unwrap();
        assert!(!args.show);
        assert_eq!(args.seed, None);
        assert_eq!(args.start, 0);

        let args = Args::try_parse_from(["eulerbridge", "10", "verbose"]).unwrap();
        assert_eq!(args.vertices, 10);
        assert!(!args.show);
        assert_eq!(args.marker.as_deref(), Some("verbose"));

        let args = Args::try_parse_from(["eulerbridge", "10", "-s"]).unwrap();
        assert!(args.show);
        assert_eq!(args.marker, None);

        // a literal `-s` after `--` ends up in the trailing slot
        let args = Args::try_parse_from(["eulerbridge", "10", "--", "-s"]).unwrap();
        assert!(!args.show);
        assert!(args.show_walks());

        assert!(!Args::try_parse_from(["eulerbridge", "10", "verbose"]).unwrap().show_walks());

        assert!(Args::try_parse_from(["eulerbridge"]).is_err());
        assert!(Args::try_parse_from(["eulerbridge", "four"]).is_err());
        assert!(Args::try_parse_from(["eulerbridge", "-3"]).is_err());
    }

    #[test]
    fn too_few_vertices() {
        for vertices in [0, 1] {
            let mut out = Vec::new();
            assert!(matches!(
                run(&args(vertices, 1), &mut out),
                Err(CliError::TooFewVertices(v)) if v == vertices
            ));
            assert!(out.is_empty());
        }
    }

    #[test]
    fn start_out_of_range() {
        let mut out = Vec::new();
        let mut args = args(5, 1);
        args.start = 5;

        assert!(matches!(
            run(&args, &mut out),
            Err(CliError::StartOutOfRange { start: 5, vertices: 5 })
        ));
    }

    #[test]
    fn two_vertices_fall_back_to_empty_graph() {
        let (summary, report) = run_to_string(&args(2, 0));

        assert_eq!(summary.edges, 1);
        assert_eq!(summary.naive_bridges, 1);
        assert_eq!(summary.tarjan_bridges, 1);
        assert_eq!(summary.verdict, Verdict::CompleteFallback);
        assert_eq!(summary.naive_walk, EulerWalk(vec![0]));
        assert_eq!(summary.tarjan_walk, EulerWalk(vec![0]));
        assert!(summary.walks_valid);

        assert!(report.contains("Number of vertices: 2"));
        assert!(report.contains("Number of edges: 1"));
        assert!(report.contains("Complete Eulerian graph generated with 0 edges."));
        assert!(report.contains("Walks identical: yes"));
    }

    #[test]
    fn seeded_runs_are_deterministic() {
        for seed in [1, 2, 3] {
            let (a, report_a) = run_to_string(&args(40, seed));
            let (b, report_b) = run_to_string(&args(40, seed));

            assert_eq!(a.edges, b.edges);
            assert_eq!(a.verdict, b.verdict);
            assert_eq!(a.naive_walk, b.naive_walk);

            let census = |r: &str| {
                r.lines()
                    .filter(|l| l.starts_with("Bridges found") || l.starts_with("Number of"))
                    .map(str::to_owned)
                    .collect::<Vec<_>>()
            };
            assert_eq!(census(&report_a), census(&report_b));
        }
    }

    #[test]
    fn reports_identical_valid_walks() {
        for seed in 0..10 {
            let (summary, report) = run_to_string(&args(25, seed));

            assert_eq!(summary.naive_bridges, summary.tarjan_bridges);
            assert_eq!(summary.naive_walk, summary.tarjan_walk);
            assert!(summary.walks_valid);
            assert!(report.contains("Walks identical: yes"));
            assert!(report.contains("Walks valid: yes"));
        }
    }

    #[test]
    fn show_mode_prints_walks() {
        let mut args = args(10, 7);
        args.show = true;
        args.start = 4;

        let (summary, report) = run_to_string(&args);

        assert_eq!(summary.naive_walk.nodes().first(), Some(&4));
        assert!(summary.walks_valid);
        assert!(report.contains(&format!("Euler walk: {}", summary.naive_walk)));
        assert_eq!(report.matches("Execution time (with print)").count(), 2);
        assert_eq!(report.matches("Execution time (without print)").count(), 2);
    }

    /// Buffer that records how often it was flushed
    #[derive(Default)]
    struct FlushLog {
        data: Vec<u8>,
        flushes: usize,
    }

    impl Write for FlushLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.data.write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn printed_walks_are_flushed() {
        let mut out = FlushLog::default();
        run(&args(8, 3), &mut out).unwrap();
        assert_eq!(out.flushes, 0);

        let mut show = args(8, 3);
        show.marker = Some("-s".into());
        let mut out = FlushLog::default();
        run(&show, &mut out).unwrap();

        // once per Fleury run, inside the timed section
        assert_eq!(out.flushes, 2);
        assert_eq!(String::from_utf8(out.data).unwrap().matches("Euler walk: ").count(), 2);
    }
}
