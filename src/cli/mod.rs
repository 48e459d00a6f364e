//! Command Line Interface (CLI) layer.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! console rendering of the batch summary (`report`) and the orchestration
//! logic (`runner`). It wires user-provided options to the library
//! functionality exposed via `spritestrip::api`.
pub mod args;
pub mod errors;
pub mod report;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
