//! Command handlers for the sch CLI
//!
//! Each command is implemented in a separate file as methods on `Scheduler`.

pub mod add;
pub mod done;
pub mod show;
