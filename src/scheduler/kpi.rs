//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling performance indicators from a set of
//! computed process records.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Avg Waiting Time | Mean time spent ready but not running |
//! | Avg Turnaround Time | Mean time from arrival to completion |
//! | Max Waiting Time | Longest single wait |
//! | CPU Utilization | Busy time / makespan |
//! | Throughput | Processes completed per time unit |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{Process, Schedule};

/// Schedule performance indicators.
///
/// Times are in the same units as the process records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of processes measured.
    pub process_count: usize,
    /// Latest completion time.
    pub makespan: i64,
    /// Sum of waiting times.
    pub total_waiting_time: i64,
    /// Sum of turnaround times.
    pub total_turnaround_time: i64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Largest waiting time of any single process.
    pub max_waiting_time: i64,
    /// Busy time over makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Processes per time unit over the makespan.
    pub throughput: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from computed process records.
    ///
    /// Empty input yields all zeros. Records that were never computed
    /// contribute zeros as well.
    pub fn calculate(processes: &[Process]) -> Self {
        let process_count = processes.len();
        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut max_waiting: i64 = 0;

        for p in processes {
            total_waiting = total_waiting.wrapping_add(p.waiting_time);
            total_turnaround = total_turnaround.wrapping_add(p.turnaround_time);
            max_waiting = max_waiting.max(p.waiting_time);
        }

        let timeline = Schedule::from_processes(processes);

        let makespan = timeline.makespan();

        let (avg_waiting_time, avg_turnaround_time) = if process_count == 0 {
            (0.0, 0.0)
        } else {
            (
                total_waiting as f64 / process_count as f64,
                total_turnaround as f64 / process_count as f64,
            )
        };

        let throughput = if makespan <= 0 {
            0.0
        } else {
            process_count as f64 / makespan as f64
        };

        Self {
            process_count,
            makespan,
            total_waiting_time: total_waiting,
            total_turnaround_time: total_turnaround,
            avg_waiting_time,
            avg_turnaround_time,
            max_waiting_time: max_waiting,
            cpu_utilization: timeline.cpu_utilization().unwrap_or(0.0),
            throughput,
        }
    }
}
