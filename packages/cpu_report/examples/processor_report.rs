//! We inspect every processor available to the current process and write a
//! human-readable report about them to the terminal.
//!
//! This obeys the operating system enforced processor selection constraints
//! assigned to the current process (which is always the case).

use cpu_report::SystemProcessors;

fn main() {
    let processors = SystemProcessors::current();

    println!("{}", processors.report());
}
