//! Run two preparatory stages at startup, then emit a processor report to the terminal.
//!
//! This mirrors the typical structure of service startup logic: configuration first,
//! cache warmup second, hardware diagnostics last.

use std::io;

use cpu_report::{Stage, SystemProcessors, run_stages};

struct LoadConfig;

impl Stage for LoadConfig {
    type Input = String;

    fn execute(&self, path: Self::Input) {
        println!("loading configuration from {path}");
    }
}

struct WarmCaches;

impl Stage for WarmCaches {
    type Input = usize;

    fn execute(&self, entry_count: Self::Input) {
        println!("warming {entry_count} cache entries");
    }
}

fn main() {
    run_stages(
        &LoadConfig,
        "app.toml".to_string(),
        &WarmCaches,
        1024,
        SystemProcessors::current(),
        &mut io::stdout(),
    )
    .expect("writing to stdout failed");
}
