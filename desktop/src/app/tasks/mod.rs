//! # Async Tasks
//!
//! Background work on the process-wide Tokio runtime. The exchange desk only needs one kind:
//! the delayed job behind the simulated wallet connect.

pub mod timer;

pub use timer::TokioScheduler;
