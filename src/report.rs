//! Rendering of finished runs.
//!
//! Simulation and presentation are separate: the dispatcher only produces a
//! [`SimulationRun`]; this module turns it into console text or JSON.
//!
//! # Console Layout
//!
//! ```text
//! Shortest Job First Scheduling
//! 0 A	Process Terminated
//! 5 B	Process Terminated
//! 8 C	Process Terminated
//! 16	Complete
//!
//! Process ID   Turnaround Time   Waiting Time
//! A            5                 0
//! B            7                 4
//! C            14                6
//! Average      8.67              3.33
//! ```
//!
//! Each dispatch line shows the tick and process that took the CPU, followed
//! by the event that ended that slice.

use std::fmt::Write;

use serde::Serialize;

use crate::simulator::{RunStatistics, SimulationRun, TraceEvent, TraceEventKind};

const ID_WIDTH: usize = 13;
const TURNAROUND_WIDTH: usize = 18;

/// Renders the trace and summary table of one run.
pub fn render_run(run: &SimulationRun) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} Scheduling", run.policy);
    render_trace(&mut out, &run.trace);
    out.push('\n');
    render_table(&mut out, run);
    out
}

/// Renders several runs separated by blank lines.
pub fn render_runs(runs: &[SimulationRun]) -> String {
    runs.iter()
        .map(render_run)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Renders the aggregate indicators of a run.
pub fn render_statistics(stats: &RunStatistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Completion tick: {}", stats.completion_tick);
    let _ = writeln!(out, "Dispatches:      {}", stats.dispatch_count);
    let _ = writeln!(out, "CPU utilization: {:.2}%", stats.cpu_utilization * 100.0);
    if let Some(response) = stats.average_response {
        let _ = writeln!(out, "Avg response:    {response:.2}");
    }
    out
}

#[derive(Serialize)]
struct RunReport<'a> {
    #[serde(flatten)]
    run: &'a SimulationRun,
    statistics: RunStatistics,
}

/// Serializes runs, each with its aggregate indicators, as pretty JSON.
pub fn render_json(runs: &[SimulationRun]) -> serde_json::Result<String> {
    let reports: Vec<RunReport<'_>> = runs
        .iter()
        .map(|run| RunReport {
            run,
            statistics: RunStatistics::calculate(run),
        })
        .collect();
    serde_json::to_string_pretty(&reports)
}

fn render_trace(out: &mut String, trace: &[TraceEvent]) {
    let mut line_open = false;
    for event in trace {
        match (event.kind, event.process_id.as_deref()) {
            (TraceEventKind::Dispatched, Some(id)) => {
                if line_open {
                    out.push('\n');
                }
                let _ = write!(out, "{} {}", event.tick, id);
                line_open = true;
            }
            (TraceEventKind::Complete, _) => {
                if line_open {
                    out.push('\n');
                    line_open = false;
                }
                let _ = writeln!(out, "{}\tComplete", event.tick);
            }
            (kind, _) => {
                if let Some(annotation) = kind.annotation() {
                    let _ = writeln!(out, "\t{annotation}");
                    line_open = false;
                }
            }
        }
    }
    if line_open {
        out.push('\n');
    }
}

fn render_table(out: &mut String, run: &SimulationRun) {
    let _ = writeln!(
        out,
        "{:<id_w$}{:<ta_w$}{}",
        "Process ID",
        "Turnaround Time",
        "Waiting Time",
        id_w = ID_WIDTH,
        ta_w = TURNAROUND_WIDTH
    );
    for s in run.stats.iter() {
        let _ = writeln!(
            out,
            "{:<id_w$}{:<ta_w$}{}",
            s.id,
            s.turnaround_time,
            s.wait_time,
            id_w = ID_WIDTH,
            ta_w = TURNAROUND_WIDTH
        );
    }
    match (run.stats.average_turnaround(), run.stats.average_wait()) {
        (Some(turnaround), Some(wait)) => {
            let _ = writeln!(
                out,
                "{:<id_w$}{:<ta_w$.2}{:.2}",
                "Average",
                turnaround,
                wait,
                id_w = ID_WIDTH,
                ta_w = TURNAROUND_WIDTH
            );
        }
        _ => {
            let _ = writeln!(out, "No processes");
        }
    }
}
