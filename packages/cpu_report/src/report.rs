use std::fmt::{self, Display};

use itertools::Itertools;
use nonempty::NonEmpty;

use crate::{Processor, ProcessorId};

/// A human-readable diagnostic report about the processors available to the current process.
///
/// Obtained via [`SystemProcessors::report()`][crate::SystemProcessors::report] and
/// rendered via [`Display`]. The exact output format is diagnostic output for humans and
/// is not part of the API contract.
///
/// # Example
///
/// ```
/// use cpu_report::SystemProcessors;
///
/// let report = SystemProcessors::current().report();
/// println!("{report}");
/// ```
#[derive(Debug)]
pub struct ProcessorReport {
    processors: NonEmpty<Processor>,
    current_processor_id: ProcessorId,
}

impl ProcessorReport {
    #[must_use]
    pub(crate) fn new(processors: NonEmpty<Processor>, current_processor_id: ProcessorId) -> Self {
        Self {
            processors,
            current_processor_id,
        }
    }
}

impl Display for ProcessorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let memory_region_count = self
            .processors
            .iter()
            .map(Processor::memory_region_id)
            .unique()
            .count();

        writeln!(
            f,
            "{} processors in {} memory region(s)",
            self.processors.len(),
            memory_region_count
        )?;

        for processor in &self.processors {
            write!(
                f,
                "  processor {}: {}",
                processor.id(),
                processor.efficiency_class().label()
            )?;

            if let Some(frequency) = processor.frequency_mhz() {
                write!(f, ", {frequency} MHz")?;
            }

            write!(f, ", node {}", processor.memory_region_id())?;

            if let Some(model) = processor.model_name() {
                write!(f, " - {model}")?;
            }

            writeln!(f)?;
        }

        writeln!(
            f,
            "currently executing on processor {}",
            self.current_processor_id
        )
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;
    use crate::EfficiencyClass;
    use crate::pal::FakeProcessor;

    assert_impl_all!(ProcessorReport: Send, Sync, Debug);

    fn processor(fake: FakeProcessor) -> Processor {
        Processor::new(fake.into())
    }

    #[test]
    fn renders_every_processor_and_summary() {
        let report = ProcessorReport::new(
            NonEmpty::from_vec(vec![
                processor(FakeProcessor {
                    index: 0,
                    memory_region: 0,
                    efficiency_class: EfficiencyClass::Performance,
                    frequency_mhz: Some(3400),
                    model_name: Some("Imaginary 9000".to_string()),
                }),
                processor(FakeProcessor {
                    index: 1,
                    memory_region: 1,
                    efficiency_class: EfficiencyClass::Efficiency,
                    frequency_mhz: Some(2000),
                    model_name: Some("Imaginary 9000".to_string()),
                }),
            ])
            .unwrap(),
            1,
        );

        let rendered = report.to_string();

        assert!(rendered.contains("2 processors in 2 memory region(s)"));
        assert!(rendered.contains("processor 0: performance, 3400 MHz, node 0 - Imaginary 9000"));
        assert!(rendered.contains("processor 1: efficiency, 2000 MHz, node 1 - Imaginary 9000"));
        assert!(rendered.contains("currently executing on processor 1"));
    }

    #[test]
    fn omits_unknown_fields() {
        let report =
            ProcessorReport::new(NonEmpty::singleton(processor(FakeProcessor::with_index(7))), 7);

        let rendered = report.to_string();

        assert!(rendered.contains("processor 7: performance, node 0"));
        assert!(!rendered.contains("MHz"));
        assert!(!rendered.contains(" - "));
    }

    #[test]
    fn ends_with_trailing_newline() {
        // Callers print the report with `println!("{report}")` style statements; a clean
        // final line keeps that output tidy.
        let report =
            ProcessorReport::new(NonEmpty::singleton(processor(FakeProcessor::with_index(0))), 0);

        assert!(report.to_string().ends_with('\n'));
    }
}
