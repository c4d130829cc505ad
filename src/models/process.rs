//! Process record.
//!
//! A process is a unit of CPU work with a known arrival time and burst
//! length. Derived timing fields stay at zero until a scheduling pass
//! fills them in.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// A process to be scheduled on a single CPU.
///
/// # Time Representation
/// All times are integer time units relative to the simulation epoch (t=0).
/// The consumer decides what one unit means (ms, ticks, ...).
///
/// # Derived Fields
/// `completion_time`, `turnaround_time` and `waiting_time` are zero until
/// the owning scheduler computes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Caller-assigned identifier. Not checked for uniqueness.
    pub id: i32,
    /// Time at which the process becomes runnable.
    pub arrival_time: i64,
    /// Total CPU time the process needs.
    pub burst_time: i64,
    /// CPU time still owed. Starts at `burst_time`; FCFS never reads it.
    pub remaining_time: i64,
    /// Scheduling priority. Ignored by FCFS.
    pub priority: i32,
    /// Time at which the process finishes.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
}

impl Process {
    /// Creates a process with priority 0 and zeroed derived fields.
    pub fn new(id: i32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            priority: 0,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Time at which the process got the CPU (`completion - burst`).
    ///
    /// Only meaningful after computation.
    #[inline]
    pub fn start_time(&self) -> i64 {
        self.completion_time.wrapping_sub(self.burst_time)
    }

    /// Delay between arrival and first run.
    ///
    /// Non-preemptive, so this equals `waiting_time` once computed.
    #[inline]
    pub fn response_time(&self) -> i64 {
        self.start_time().wrapping_sub(self.arrival_time)
    }

    /// Clears the derived fields and restores `remaining_time` to the burst.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.completion_time = 0;
        self.turnaround_time = 0;
        self.waiting_time = 0;
    }

    /// Whether a scheduling pass has filled in the derived fields.
    ///
    /// A zero-length burst arriving at t=0 computes to all zeros and is
    /// indistinguishable from an uncomputed record.
    pub fn is_computed(&self) -> bool {
        self.completion_time != 0 || self.turnaround_time != 0 || self.waiting_time != 0
    }
}
