use derive_more::derive::Display;

use crate::pal::AbstractProcessor;
use crate::{EfficiencyClass, MemoryRegionId, ProcessorId};

/// A simulated processor on a platform without native hardware inspection support.
///
/// All simulated processors are in memory region 0 and are performance class; frequency
/// and model name are unknown.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("processor {id}")]
pub(crate) struct ProcessorImpl {
    id: ProcessorId,
}

impl ProcessorImpl {
    pub(super) const fn new(id: ProcessorId) -> Self {
        Self { id }
    }
}

impl AbstractProcessor for ProcessorImpl {
    fn id(&self) -> ProcessorId {
        self.id
    }

    fn memory_region_id(&self) -> MemoryRegionId {
        0
    }

    fn efficiency_class(&self) -> EfficiencyClass {
        EfficiencyClass::Performance
    }

    fn frequency_mhz(&self) -> Option<u32> {
        None
    }

    fn model_name(&self) -> Option<&str> {
        None
    }
}
