//! Execution timeline model.
//!
//! A schedule is the ordered list of CPU slots produced by a scheduling
//! pass: which process held the CPU, and over which interval. Idle gaps
//! are implicit between consecutive slots.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3 (Gantt charts)

use serde::{Deserialize, Serialize};

use super::Process;

/// A CPU timeline (Gantt chart) in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// CPU slots, ordered by start time.
    pub slots: Vec<Slot>,
}

/// One contiguous interval during which a process held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Process that ran.
    pub process_id: i32,
    /// Start of the interval.
    pub start: i64,
    /// End of the interval (exclusive).
    pub end: i64,
}

impl Slot {
    /// Creates a new slot.
    pub fn new(process_id: i32, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end.wrapping_sub(self.start)
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a timeline from computed processes, one slot per process in
    /// stored order, spanning `start_time()..completion_time`.
    pub fn from_processes(processes: &[Process]) -> Self {
        Self {
            slots: processes
                .iter()
                .map(|p| Slot::new(p.id, p.start_time(), p.completion_time))
                .collect(),
        }
    }

    /// Appends a slot. Callers push slots in execution order.
    pub fn add_slot(&mut self, slot: Slot) {
        self.slots.push(slot);
    }

    /// Latest end time across all slots (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.slots.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total time the CPU spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.slots
            .iter()
            .map(Slot::duration)
            .fold(0, i64::wrapping_add)
    }

    /// Total time the CPU sat idle between t=0 and the makespan.
    ///
    /// Counts the gap before the first slot and every gap between
    /// consecutive slots.
    pub fn idle_time(&self) -> i64 {
        let mut cursor = 0;
        let mut idle: i64 = 0;
        for slot in &self.slots {
            if slot.start > cursor {
                idle = idle.wrapping_add(slot.start.wrapping_sub(cursor));
            }
            cursor = cursor.max(slot.end);
        }
        idle
    }

    /// Fraction of the makespan the CPU was busy.
    ///
    /// Returns `None` if the makespan is not positive.
    pub fn cpu_utilization(&self) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// Finds the slot for a given process.
    pub fn slot_for_process(&self, process_id: i32) -> Option<&Slot> {
        self.slots.iter().find(|s| s.process_id == process_id)
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
