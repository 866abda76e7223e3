//! Plain-text rendering of simulation traces.
//!
//! The engine itself never writes output; these helpers turn a finished
//! trace into text for whatever front end displays it.

use std::fmt::{self, Write};

use crate::models::SimulationTrace;
use crate::simulator::TraceKpi;

/// Renders one line per execution interval followed by the averages.
///
/// ```text
/// Process 1 - Start: 0, Finish: 5, Waiting Time: 0
/// Process 2 - Start: 5, Finish: 8, Waiting Time: 4
///
/// Average Waiting Time: 2
/// Average Turnaround Time: 6
/// ```
///
/// The waiting time on each line is that process's final waiting time.
pub fn render_trace(trace: &SimulationTrace) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_trace(&mut out, trace);
    out
}

/// Writes the [`render_trace`] text into any formatter sink.
pub fn write_trace(out: &mut impl Write, trace: &SimulationTrace) -> fmt::Result {
    for interval in &trace.intervals {
        let waiting = trace
            .metrics_for(interval.process_id)
            .map(|m| m.waiting_time)
            .unwrap_or(0);
        writeln!(
            out,
            "Process {} - Start: {}, Finish: {}, Waiting Time: {}",
            interval.process_id, interval.start_time, interval.finish_time, waiting
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Average Waiting Time: {}", trace.average_waiting_time)?;
    writeln!(
        out,
        "Average Turnaround Time: {}",
        trace.average_turnaround_time
    )
}

/// Renders a side-by-side summary of several traces.
pub fn render_comparison(traces: &[SimulationTrace]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_comparison(&mut out, traces);
    out
}

/// Writes the [`render_comparison`] table into any formatter sink.
pub fn write_comparison(out: &mut impl Write, traces: &[SimulationTrace]) -> fmt::Result {
    writeln!(
        out,
        "{:<20} {:>12} {:>15} {:>9} {:>9}",
        "Policy", "Avg Waiting", "Avg Turnaround", "Makespan", "Switches"
    )?;

    for trace in traces {
        let kpi = TraceKpi::calculate(trace);
        writeln!(
            out,
            "{:<20} {:>12.2} {:>15.2} {:>9} {:>9}",
            trace.policy.label(),
            trace.average_waiting_time,
            trace.average_turnaround_time,
            kpi.makespan,
            kpi.context_switches
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessRegistry;
    use crate::policies::Policy;
    use crate::simulator::{compare_policies, simulate};

    fn scenario() -> ProcessRegistry {
        ProcessRegistry::new()
            .with_process(0, 5, 0)
            .with_process(1, 3, 0)
            .with_process(2, 1, 0)
    }

    #[test]
    fn test_render_fcfs() {
        let trace = simulate(&scenario(), Policy::Fcfs).unwrap();
        let text = render_trace(&trace);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Process 1 - Start: 0, Finish: 5, Waiting Time: 0");
        assert_eq!(lines[1], "Process 2 - Start: 5, Finish: 8, Waiting Time: 4");
        assert_eq!(lines[2], "Process 3 - Start: 8, Finish: 9, Waiting Time: 6");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Average Waiting Time: 3.3333333333333335");
        assert_eq!(lines[5], "Average Turnaround Time: 6.333333333333333");
    }

    #[test]
    fn test_render_round_robin_repeats_process() {
        let trace = simulate(&scenario(), Policy::RoundRobin { quantum: 2 }).unwrap();
        let text = render_trace(&trace);
        let p1_lines = text.lines().filter(|l| l.starts_with("Process 1 ")).count();
        assert_eq!(p1_lines, 3);
        assert!(text.contains("Process 3 - Start: 4, Finish: 5, Waiting Time: 2"));
    }

    #[test]
    fn test_write_trace_into_sink() {
        let trace = simulate(&scenario(), Policy::Fcfs).unwrap();
        let mut out = String::from("FCFS\n");
        write_trace(&mut out, &trace).unwrap();
        assert_eq!(out, format!("FCFS\n{}", render_trace(&trace)));
    }

    #[test]
    fn test_render_comparison() {
        let traces = compare_policies(&scenario(), 2).unwrap();
        let text = render_comparison(&traces);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("Policy"));
        assert!(lines[1].starts_with("FCFS"));
        assert!(lines[1].contains("3.33"));
        assert!(lines[6].starts_with("Priority"));
    }
}
