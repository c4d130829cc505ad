//! First-Come-First-Served CPU scheduling.
//!
//! Orders a fixed set of processes by arrival time, runs each to
//! completion on a single CPU, and derives completion, turnaround and
//! waiting times plus aggregate metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Schedule`, `Slot`
//! - **`scheduler`**: `FcfsScheduler` and `ScheduleKpi`
//! - **`validation`**: Opt-in input checks (duplicate IDs, negative times)
//!
//! # Example
//!
//! ```
//! use u_fcfs::scheduler::FcfsScheduler;
//!
//! let mut scheduler = FcfsScheduler::new();
//! scheduler.add_process(5, 0, 2);
//! scheduler.add_process(3, 0, 4);
//! scheduler.compute_fcfs();
//!
//! // Equal arrivals run in id order.
//! assert_eq!(scheduler.processes()[0].id, 3);
//! assert_eq!(scheduler.process(5).unwrap().waiting_time, 4);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod models;
pub mod scheduler;
pub mod validation;
