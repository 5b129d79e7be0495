use derive_more::derive::Display;

use crate::pal::AbstractProcessor;
use crate::{EfficiencyClass, MemoryRegionId, ProcessorId};

/// A processor made of pure imagination, for tests that do not want to involve the PAL.
#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
#[display("FakeProcessor({index} in node {memory_region})")]
pub(crate) struct FakeProcessor {
    pub(crate) index: ProcessorId,
    pub(crate) memory_region: MemoryRegionId,
    pub(crate) efficiency_class: EfficiencyClass,
    pub(crate) frequency_mhz: Option<u32>,
    pub(crate) model_name: Option<String>,
}

impl FakeProcessor {
    pub(crate) fn with_index(index: ProcessorId) -> Self {
        Self {
            index,
            memory_region: 0,
            efficiency_class: EfficiencyClass::Performance,
            frequency_mhz: None,
            model_name: None,
        }
    }
}

impl AbstractProcessor for FakeProcessor {
    fn id(&self) -> ProcessorId {
        self.index
    }

    fn memory_region_id(&self) -> MemoryRegionId {
        self.memory_region
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
