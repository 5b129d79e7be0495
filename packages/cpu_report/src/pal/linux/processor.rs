use derive_more::derive::Display;

use crate::pal::AbstractProcessor;
use crate::{EfficiencyClass, MemoryRegionId, ProcessorId};

/// A processor present on the system and available to the current process.
#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
#[display("processor {id} [node {memory_region_id}]")]
pub(crate) struct ProcessorImpl {
    pub(super) id: ProcessorId,
    pub(super) memory_region_id: MemoryRegionId,
    pub(super) efficiency_class: EfficiencyClass,

    /// Frequency rounded to the nearest MHz. Not reported by all kernels (e.g. many ARM
    /// systems omit the "cpu MHz" line from /proc/cpuinfo).
    pub(super) frequency_mhz: Option<u32>,

    pub(super) model_name: Option<String>,
}

impl AbstractProcessor for ProcessorImpl {
    fn id(&self) -> ProcessorId {
        self.id
    }

    fn memory_region_id(&self) -> MemoryRegionId {
        self.memory_region_id
    }

    fn efficiency_class(&self) -> EfficiencyClass {
        self.efficiency_class
    }

    fn frequency_mhz(&self) -> Option<u32> {
        self.frequency_mhz
    }

    fn model_name(&self) -> Option<&str> {
        self.model_name.as_deref()
    }
}

impl PartialOrd for ProcessorImpl {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ProcessorImpl {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn smoke_test() {
        let processor = ProcessorImpl {
            id: 2,
            memory_region_id: 3,
            efficiency_class: EfficiencyClass::Performance,
            frequency_mhz: Some(3400),
            model_name: Some("Imaginary 9000".to_string()),
        };

        assert_eq!(processor.id(), 2);
        assert_eq!(processor.memory_region_id(), 3);
        assert_eq!(processor.efficiency_class(), EfficiencyClass::Performance);
        assert_eq!(processor.frequency_mhz(), Some(3400));
        assert_eq!(processor.model_name(), Some("Imaginary 9000"));
    }

    #[test]
    fn ordered_by_id() {
        let lower = ProcessorImpl {
            id: 1,
            memory_region_id: 9,
            efficiency_class: EfficiencyClass::Efficiency,
            frequency_mhz: None,
            model_name: None,
        };

        let higher = ProcessorImpl {
            id: 4,
            memory_region_id: 0,
            efficiency_class: EfficiencyClass::Performance,
            frequency_mhz: None,
            model_name: None,
        };

        assert!(lower < higher);
        assert!(higher > lower);
    }
}
