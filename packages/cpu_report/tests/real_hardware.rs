//! Integration tests for `cpu_report` against the real platform.
//!
//! These tests only assert properties that hold on any hardware, since they execute on
//! whatever machine happens to run the test suite.

#![cfg(not(miri))] // Tests use the real platform which cannot be executed under Miri.

use std::io;

use cpu_report::{Stage, SystemProcessors, run_stages};

#[test]
fn snapshot_has_at_least_one_processor() {
    let processors = SystemProcessors::current();

    // This code is executing on a processor, so the snapshot cannot be empty.
    assert!(processors.processor_count() >= 1);
    assert!(processors.memory_region_count() >= 1);
}

#[test]
fn current_processor_is_within_snapshot_range() {
    let processors = SystemProcessors::current();

    assert!(processors.current_processor_id() <= processors.max_processor_id());
}

#[test]
fn report_mentions_every_processor() {
    let processors = SystemProcessors::current();

    let rendered = processors.report().to_string();

    for processor in processors.processors() {
        let id = processor.id();
        assert!(
            rendered.contains(&format!("processor {id}:")),
            "report does not mention processor {id}"
        );
    }
}

#[test]
fn staged_startup_emits_announcement_and_report() {
    struct Record;

    impl Stage for Record {
        type Input = &'static str;

        fn execute(&self, _message: Self::Input) {}
    }

    let mut output = Vec::new();

    run_stages(
        &Record,
        "first",
        &Record,
        "second",
        SystemProcessors::current(),
        &mut output,
    )
    .unwrap();

    let output = String::from_utf8(output).unwrap();

    assert!(output.starts_with("running preparatory stages\n"));
    assert!(output.contains("\nprocessor info:\n"));
    assert!(output.contains("currently executing on processor"));
}

#[test]
fn write_errors_are_propagated() {
    struct Noop;

    impl Stage for Noop {
        type Input = ();

        fn execute(&self, (): Self::Input) {}
    }

    struct BrokenPipe;

    impl io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let result = run_stages(
        &Noop,
        (),
        &Noop,
        (),
        SystemProcessors::current(),
        &mut BrokenPipe,
    );

    assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
}
