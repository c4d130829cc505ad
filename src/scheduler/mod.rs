//! FCFS scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `FcfsScheduler` runs processes strictly in arrival order, each to
//! completion, idling the CPU when nothing has arrived yet. Ties on
//! arrival time go to the smaller id.
//!
//! # KPI
//!
//! `ScheduleKpi` computes standard CPU scheduling metrics: average
//! waiting and turnaround time, makespan, utilization, and throughput.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;

pub use fcfs::FcfsScheduler;
pub use kpi::ScheduleKpi;
