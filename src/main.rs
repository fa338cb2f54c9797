mod cli;

use std::{
    io::{BufWriter, Write},
    process::ExitCode,
};

use clap::Parser;
use cli::{Args, Summary, Verdict};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // help and version are reported through `Err` as well
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    cli::init_logging();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = cli::run(&args, &mut out).and_then(|summary| {
        out.flush()?;
        Ok(summary)
    });
    match result {
        Ok(summary) => ExitCode::from(finish(&summary)),
        Err(e) => {
            let _ = out.flush();
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Logs the outcome of a completed run; invalid walks turn into a failing exit code
fn finish(summary: &Summary) -> u8 {
    let added_edges = match summary.verdict {
        Verdict::Repaired { added_edges } => added_edges,
        Verdict::AlreadyEulerian | Verdict::CompleteFallback => 0,
    };
    info!(
        edges = summary.edges,
        naive_bridges = summary.naive_bridges,
        tarjan_bridges = summary.tarjan_bridges,
        verdict = ?summary.verdict,
        added_edges,
        walk_len = summary.naive_walk.len(),
        walks_identical = summary.naive_walk == summary.tarjan_walk,
        "run finished"
    );

    if summary.walks_valid {
        0
    } else {
        error!("at least one walk is not an Euler walk of the graph");
        1
    }
}
