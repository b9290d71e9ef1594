use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Builder;
use log::error;

use u_cpusim::config::SimulationConfig;
use u_cpusim::models::Workload;
use u_cpusim::report;
use u_cpusim::simulator::{PolicyKind, RunStatistics, Simulator};

/// Simulate CPU scheduling policies over a process workload.
#[derive(Debug, Parser)]
#[command(name = "cpusim", version, about)]
struct Args {
    /// Workload file: whitespace-separated `id burst arrival` triples
    input: PathBuf,

    /// JSON configuration file (quantum, policies)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Round Robin quantum in ticks (overrides the configuration)
    #[arg(short, long)]
    quantum: Option<u32>,

    /// Policy to run: sjf, rr or srtf (repeatable; default all)
    #[arg(short, long = "policy")]
    policies: Vec<PolicyKind>,

    /// Also print completion tick, dispatches and CPU utilization
    #[arg(long)]
    kpi: bool,

    /// Emit JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> u_cpusim::Result<()> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(quantum) = args.quantum {
        config = config.with_quantum(quantum);
    }
    if !args.policies.is_empty() {
        config = config.with_policies(args.policies.iter().copied());
    }
    config.validate()?;

    let workload = Workload::from_file(&args.input)?;
    let runs = Simulator::new(config).run(&workload)?;

    if args.json {
        println!(
            "{}",
            report::render_json(&runs).map_err(u_cpusim::Error::Report)?
        );
        return Ok(());
    }

    for run in &runs {
        println!("{}", report::render_run(run));
        if args.kpi {
            println!("{}", report::render_statistics(&RunStatistics::calculate(run)));
        }
    }
    Ok(())
}
