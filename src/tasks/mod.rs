//! Background Tasks Module
//!
//! Long-lived tasks that run for the duration of the process.
//!
//! # Tasks
//! - Cache sweep: removes expired banner entries at a fixed interval

mod sweep;

pub use sweep::spawn_sweep_task;
