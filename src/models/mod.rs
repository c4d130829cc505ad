//! CPU scheduling domain models.
//!
//! Provides the data types for a single-CPU scheduling problem and its
//! solution.
//!
//! | Type | Role |
//! |------|------|
//! | Process | Input record, filled in with derived times |
//! | Schedule | Execution timeline (Gantt chart) |
//! | Slot | One process's interval on the CPU |

mod process;
mod schedule;

pub use process::Process;
pub use schedule::{Schedule, Slot};
