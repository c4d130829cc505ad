//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by `(arrival_time, id)` ascending.
//! 2. Walk the sorted list with a single clock starting at t=0.
//! 3. If the clock is behind a process's arrival, the CPU idles until it arrives.
//! 4. The process runs to completion; the clock advances to its completion time.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use log::{debug, trace};

use super::ScheduleKpi;
use crate::models::{Process, Schedule};

/// Non-preemptive FCFS scheduler over an owned set of processes.
///
/// Inputs are not validated: negative times, zero bursts and duplicate
/// ids are scheduled as given. Use [`crate::validation::validate_processes`]
/// beforehand when that matters.
///
/// # Overflow
/// Time arithmetic wraps on `i64` overflow instead of panicking, so a pass
/// always completes. Results are only meaningful while completion times
/// stay below `i64::MAX`.
///
/// # Example
///
/// ```
/// use u_fcfs::scheduler::FcfsScheduler;
///
/// let mut scheduler = FcfsScheduler::new();
/// scheduler.add_process(1, 0, 7);
/// scheduler.add_process(2, 2, 4);
/// scheduler.add_process(3, 4, 1);
/// scheduler.add_process(4, 5, 4);
///
/// scheduler.compute_fcfs();
///
/// let p2 = scheduler.process(2).unwrap();
/// assert_eq!(p2.completion_time, 11);
/// assert_eq!(p2.waiting_time, 5);
/// assert!((scheduler.average_waiting_time() - 4.75).abs() < 1e-10);
/// assert!((scheduler.average_turnaround_time() - 8.75).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FcfsScheduler {
    processes: Vec<Process>,
}

impl FcfsScheduler {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler that owns the given processes.
    ///
    /// Each record goes through [`add`](Self::add), so derived fields start
    /// at zero even if the input was computed before.
    pub fn from_processes(processes: Vec<Process>) -> Self {
        let mut scheduler = Self {
            processes: Vec::with_capacity(processes.len()),
        };
        processes.into_iter().for_each(|p| scheduler.add(p));
        scheduler
    }

    /// Registers a process with priority 0.
    pub fn add_process(&mut self, id: i32, arrival_time: i64, burst_time: i64) {
        self.add(Process::new(id, arrival_time, burst_time));
    }

    /// Registers a process with an explicit priority.
    pub fn add_process_with_priority(
        &mut self,
        id: i32,
        arrival_time: i64,
        burst_time: i64,
        priority: i32,
    ) {
        self.add(Process::new(id, arrival_time, burst_time).with_priority(priority));
    }

    /// Registers a pre-built process record.
    ///
    /// Derived fields are cleared and `remaining_time` reset to the burst.
    pub fn add(&mut self, mut process: Process) {
        process.reset();
        self.processes.push(process);
    }

    /// Computes completion, turnaround and waiting times for every process.
    ///
    /// Reorders the stored processes into execution order. Running it again
    /// on unchanged input reproduces the same fields.
    pub fn compute_fcfs(&mut self) {
        if self.processes.is_empty() {
            return;
        }

        // Stable sort; the id tie-break makes the order independent of registration order.
        self.processes
            .sort_by(|a, b| (a.arrival_time, a.id).cmp(&(b.arrival_time, b.id)));

        let mut current_time: i64 = 0;
        for p in &mut self.processes {
            if current_time < p.arrival_time {
                trace!(
                    "CPU idle from {} to {} waiting for P{}",
                    current_time,
                    p.arrival_time,
                    p.id
                );
                current_time = p.arrival_time;
            }

            p.completion_time = current_time.wrapping_add(p.burst_time);
            p.turnaround_time = p.completion_time.wrapping_sub(p.arrival_time);
            p.waiting_time = p.turnaround_time.wrapping_sub(p.burst_time);
            trace!(
                "P{} runs {}..{} (waited {})",
                p.id,
                current_time,
                p.completion_time,
                p.waiting_time
            );

            current_time = p.completion_time;
        }

        debug!(
            "FCFS pass scheduled {} processes, finished at t={}",
            self.processes.len(),
            current_time
        );
    }

    /// Mean waiting time (0.0 when empty).
    ///
    /// Reads the stored fields as-is: before [`compute_fcfs`](Self::compute_fcfs)
    /// has run, this is 0.0.
    pub fn average_waiting_time(&self) -> f64 {
        self.average_of(|p| p.waiting_time)
    }

    /// Mean turnaround time (0.0 when empty).
    ///
    /// Like [`average_waiting_time`](Self::average_waiting_time), only
    /// meaningful after computation.
    pub fn average_turnaround_time(&self) -> f64 {
        self.average_of(|p| p.turnaround_time)
    }

    fn average_of(&self, field: impl Fn(&Process) -> i64) -> f64 {
        if self.processes.is_empty() {
            return 0.0;
        }
        let total: i128 = self.processes.iter().map(|p| i128::from(field(p))).sum();
        total as f64 / self.processes.len() as f64
    }

    /// Processes in stored order (execution order after computation).
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Finds the first process with the given id.
    pub fn process(&self, id: i32) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Number of registered processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether no process has been registered.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Consumes the scheduler and returns its processes.
    pub fn into_processes(self) -> Vec<Process> {
        self.processes
    }

    /// Builds the CPU timeline from the computed fields, one slot per process.
    pub fn schedule(&self) -> Schedule {
        Schedule::from_processes(&self.processes)
    }

    /// Summary metrics for the current processes.
    pub fn kpi(&self) -> ScheduleKpi {
        ScheduleKpi::calculate(&self.processes)
    }
}

impl FromIterator<Process> for FcfsScheduler {
    fn from_iter<I: IntoIterator<Item = Process>>(iter: I) -> Self {
        Self::from_processes(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn textbook_scheduler() -> FcfsScheduler {
        let mut s = FcfsScheduler::new();
        s.add_process(1, 0, 7);
        s.add_process(2, 2, 4);
        s.add_process(3, 4, 1);
        s.add_process(4, 5, 4);
        s
    }

    fn random_scheduler(seed: u64, n: usize) -> FcfsScheduler {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut s = FcfsScheduler::new();
        for id in 0..n as i32 {
            s.add_process(id, rng.random_range(0..50), rng.random_range(1..10));
        }
        s
    }

    /// (id, completion, turnaround, waiting) in stored order.
    fn fields(s: &FcfsScheduler) -> Vec<(i32, i64, i64, i64)> {
        s.processes()
            .iter()
            .map(|p| (p.id, p.completion_time, p.turnaround_time, p.waiting_time))
            .collect()
    }

    #[test]
    fn test_single_process() {
        let mut s = FcfsScheduler::new();
        s.add_process(1, 0, 5);
        s.compute_fcfs();

        let p = &s.processes()[0];
        assert_eq!(p.completion_time, 5);
        assert_eq!(p.turnaround_time, 5);
        assert_eq!(p.waiting_time, 0);
    }

    #[test]
    fn test_textbook_example() {
        let mut s = textbook_scheduler();
        s.compute_fcfs();

        assert_eq!(
            fields(&s),
            vec![(1, 7, 7, 0), (2, 11, 9, 5), (3, 12, 8, 7), (4, 16, 11, 7)]
        );
        assert!((s.average_waiting_time() - 4.75).abs() < 1e-10);
        assert!((s.average_turnaround_time() - 8.75).abs() < 1e-10);
    }

    #[test]
    fn test_cpu_idles_until_arrival() {
        let mut s = FcfsScheduler::new();
        s.add_process(1, 0, 2);
        s.add_process(2, 5, 3);
        s.compute_fcfs();

        let p2 = s.process(2).unwrap();
        assert_eq!(p2.start_time(), 5);
        assert_eq!(p2.completion_time, 8);
        assert_eq!(p2.waiting_time, 0);
        assert_eq!(s.schedule().idle_time(), 3);
    }

    #[test]
    fn test_first_arrival_after_zero() {
        let mut s = FcfsScheduler::new();
        s.add_process(1, 3, 2);
        s.compute_fcfs();

        let p = s.process(1).unwrap();
        assert_eq!(p.completion_time, 5);
        assert_eq!(p.turnaround_time, 2);
        assert_eq!(p.waiting_time, 0);
    }

    #[test]
    fn test_arrival_tie_broken_by_id() {
        let mut s = FcfsScheduler::new();
        s.add_process(5, 0, 2);
        s.add_process(3, 0, 4);
        s.compute_fcfs();

        let order: Vec<i32> = s.processes().iter().map(|p| p.id).collect();
        assert_eq!(order, vec![3, 5]);
        assert_eq!(s.process(3).unwrap().completion_time, 4);
        assert_eq!(s.process(5).unwrap().completion_time, 6);
        assert_eq!(s.process(5).unwrap().waiting_time, 4);
    }

    #[test]
    fn test_sort_reorders_storage() {
        let mut s = FcfsScheduler::new();
        s.add_process(1, 10, 1);
        s.add_process(2, 0, 1);
        s.add_process(3, 5, 1);
        s.compute_fcfs();

        let order: Vec<i32> = s.processes().iter().map(|p| p.id).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_empty_scheduler() {
        let mut s = FcfsScheduler::new();
        s.compute_fcfs();
        assert!(s.is_empty());
        assert_eq!(s.average_waiting_time(), 0.0);
        assert_eq!(s.average_turnaround_time(), 0.0);
        assert_eq!(s.schedule().slot_count(), 0);
    }

    #[test]
    fn test_averages_before_compute_are_zero() {
        let s = textbook_scheduler();
        assert_eq!(s.len(), 4);
        assert_eq!(s.average_waiting_time(), 0.0);
        assert_eq!(s.average_turnaround_time(), 0.0);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let mut s = random_scheduler(7, 25);
        s.compute_fcfs();
        let first = fields(&s);
        s.compute_fcfs();
        assert_eq!(fields(&s), first);
    }

    #[test]
    fn test_registration_order_does_not_matter() {
        let mut forward = random_scheduler(11, 20);
        let mut reversed: FcfsScheduler = forward.processes().iter().rev().cloned().collect();

        forward.compute_fcfs();
        reversed.compute_fcfs();
        assert_eq!(fields(&forward), fields(&reversed));
    }

    #[test]
    fn test_random_invariants() {
        for seed in 0..20 {
            let mut s = random_scheduler(seed, 30);
            s.compute_fcfs();

            let mut cpu_free = 0;
            for pair in s.processes().windows(2) {
                assert!(
                    (pair[0].arrival_time, pair[0].id) <= (pair[1].arrival_time, pair[1].id)
                );
            }
            for p in s.processes() {
                assert_eq!(
                    p.completion_time,
                    p.waiting_time + p.arrival_time + p.burst_time
                );
                assert_eq!(p.start_time(), p.arrival_time.max(cpu_free));
                assert!(p.completion_time >= p.arrival_time);
                assert!(p.waiting_time >= 0);
                cpu_free = p.completion_time;
            }
        }
    }

    #[test]
    fn test_priority_is_ignored() {
        let mut s = FcfsScheduler::new();
        s.add_process_with_priority(1, 0, 3, 0);
        s.add_process_with_priority(2, 1, 3, 100);
        s.compute_fcfs();

        let order: Vec<i32> = s.processes().iter().map(|p| p.id).collect();
        assert_eq!(order, vec![1, 2]);
        assert_eq!(s.process(2).unwrap().priority, 100);
        assert_eq!(s.process(2).unwrap().remaining_time, 3);
    }

    #[test]
    fn test_malformed_input_is_not_rejected() {
        let mut s = FcfsScheduler::new();
        s.add_process(1, 0, -2);
        s.add_process(1, 0, 0);
        s.compute_fcfs();

        // Both id 1 at t=0: stable sort keeps registration order.
        let negative = &s.processes()[0];
        assert_eq!(negative.burst_time, -2);
        assert_eq!(negative.completion_time, -2);
        assert_eq!(negative.start_time(), 0);
        assert!(negative.completion_time < negative.start_time());
        assert_eq!(negative.waiting_time, 0);

        // Clock went back to -2, so the CPU "idles" forward to arrival at 0.
        let zero = &s.processes()[1];
        assert_eq!(zero.completion_time, 0);
        assert_eq!(zero.turnaround_time, 0);
        assert_eq!(zero.waiting_time, 0);
    }

    #[test]
    fn test_schedule_matches_processes() {
        let mut s = textbook_scheduler();
        s.compute_fcfs();

        let schedule = s.schedule();
        assert_eq!(schedule.slot_count(), 4);
        assert_eq!(schedule.makespan(), 16);
        assert_eq!(schedule.idle_time(), 0);

        let slot = schedule.slot_for_process(3).unwrap();
        assert_eq!((slot.start, slot.end), (11, 12));
    }

    #[test]
    fn test_kpi_from_scheduler() {
        let mut s = textbook_scheduler();
        s.compute_fcfs();

        let kpi = s.kpi();
        assert_eq!(kpi.process_count, 4);
        assert!((kpi.avg_waiting_time - s.average_waiting_time()).abs() < 1e-10);
        assert!((kpi.avg_turnaround_time - s.average_turnaround_time()).abs() < 1e-10);
    }

    #[test]
    fn test_registration_clears_derived_fields() {
        let mut done = FcfsScheduler::new();
        done.add_process(1, 0, 7);
        done.add_process(2, 2, 4);
        done.compute_fcfs();
        assert!((done.average_waiting_time() - 2.5).abs() < 1e-10);

        let reloaded = FcfsScheduler::from_processes(done.into_processes());
        assert_eq!(reloaded.average_waiting_time(), 0.0);
        assert_eq!(reloaded.average_turnaround_time(), 0.0);
        assert!(reloaded.processes().iter().all(|p| !p.is_computed()));
    }

    #[test]
    fn test_add_resets_hand_set_fields() {
        let mut p = Process::new(1, 0, 5);
        p.completion_time = 100;
        p.turnaround_time = 100;
        p.waiting_time = 95;
        p.remaining_time = 2;

        let mut s = FcfsScheduler::new();
        s.add(p.clone());
        let stored = &s.processes()[0];
        assert_eq!(stored.completion_time, 0);
        assert_eq!(stored.turnaround_time, 0);
        assert_eq!(stored.waiting_time, 0);
        assert_eq!(stored.remaining_time, 5);
        assert_eq!(s.average_waiting_time(), 0.0);

        let collected: FcfsScheduler = std::iter::once(p).collect();
        assert_eq!(collected.processes()[0].completion_time, 0);
    }

    #[test]
    fn test_overflow_wraps_instead_of_panicking() {
        let mut s = FcfsScheduler::new();
        s.add_process(1, i64::MAX, 1);
        s.add_process(2, i64::MAX, i64::MAX);
        s.compute_fcfs();

        let p = s.process(1).unwrap();
        assert_eq!(p.completion_time, i64::MIN);
        assert_eq!(p.turnaround_time, 1);
        assert_eq!(p.waiting_time, 0);

        assert!(s.average_waiting_time().is_finite());
        assert!(s.average_turnaround_time().is_finite());
        let kpi = s.kpi();
        assert_eq!(kpi.process_count, 2);
        let _ = s.schedule().idle_time();
    }

    #[test]
    fn test_into_processes() {
        let mut s = textbook_scheduler();
        s.compute_fcfs();
        let processes = s.into_processes();
        assert_eq!(processes.len(), 4);
        assert_eq!(processes[3].completion_time, 16);
    }
}
