#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Inspect the processor hardware environment of the current process and emit diagnostic
//! reports about it.
//!
//! Diagnostic output about the processors a process is running on is a routine part of
//! startup logic in services and command-line tools: before the real work begins, the app
//! announces what hardware it found. This package provides that capability as a reusable
//! building block - a snapshot of the available processors, a human-readable report over
//! the snapshot, and a small orchestration helper that runs caller-supplied preparatory
//! stages before emitting the report.
//!
//! # Quick start
//!
//! The simplest scenario is printing a report about the processors available to the
//! current process:
//!
//! ```rust
//! // examples/processor_report.rs
//! # use cpu_report::SystemProcessors;
//! let processors = SystemProcessors::current();
//!
//! println!("{}", processors.report());
//! ```
//!
//! Example output:
//!
//! ```text
//! 8 processors in 1 memory region(s)
//!   processor 0: performance, 3400 MHz, node 0 - AMD Ryzen 7 PRO 5850U
//!   processor 1: performance, 3400 MHz, node 0 - AMD Ryzen 7 PRO 5850U
//!   ...
//! currently executing on processor 4
//! ```
//!
//! # Inspecting individual processors
//!
//! The snapshot exposes each processor for app logic that wants to make its own decisions:
//!
//! ```rust
//! # use cpu_report::SystemProcessors;
//! let processors = SystemProcessors::current();
//!
//! for processor in processors.processors() {
//!     println!(
//!         "processor {} is in memory region {}",
//!         processor.id(),
//!         processor.memory_region_id()
//!     );
//! }
//! ```
//!
//! # Staged startup
//!
//! Apps often want to run some preparatory work first and only then emit the hardware
//! diagnostics. [`run_stages()`] executes two caller-supplied stages in order, then writes
//! the processor report to the provided output:
//!
//! ```rust
//! // examples/staged_startup.rs
//! # use std::io;
//! # use cpu_report::{Stage, SystemProcessors, run_stages};
//! struct LoadConfig;
//!
//! impl Stage for LoadConfig {
//!     type Input = String;
//!
//!     fn execute(&self, path: Self::Input) {
//!         println!("loading configuration from {path}");
//!     }
//! }
//!
//! struct WarmCaches;
//!
//! impl Stage for WarmCaches {
//!     type Input = usize;
//!
//!     fn execute(&self, entry_count: Self::Input) {
//!         println!("warming {entry_count} cache entries");
//!     }
//! }
//!
//! run_stages(
//!     &LoadConfig,
//!     "app.toml".to_string(),
//!     &WarmCaches,
//!     1024,
//!     SystemProcessors::current(),
//!     &mut io::stdout(),
//! )
//! .unwrap();
//! ```
//!
//! # Operating system compatibility
//!
//! The processor snapshot is derived from native platform APIs on Linux. On other
//! operating systems a fallback implementation allows code to compile and run with
//! graceful degradation:
//!
//! * Processor count is determined via `std::thread::available_parallelism()`
//! * All processors are reported as being in a single memory region (region 0)
//! * All processors are marked as Performance class
//! * Frequency and model name are reported as unknown
//! * Current processor tracking uses stable thread-local IDs derived from thread IDs

mod primitive_types;
mod processor;
mod report;
mod stages;
mod system_processors;

pub use primitive_types::*;
pub use processor::*;
pub use report::*;
pub use stages::*;
pub use system_processors::SystemProcessors;

mod pal;
