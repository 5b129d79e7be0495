use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::{EfficiencyClass, MemoryRegionId, ProcessorId};

pub(crate) trait AbstractProcessor: Clone + Debug + Display + Eq + Hash + PartialEq + Send {
    fn id(&self) -> ProcessorId;
    fn memory_region_id(&self) -> MemoryRegionId;
    fn efficiency_class(&self) -> EfficiencyClass;

    /// The processor frequency in MHz, if the platform reports one.
    fn frequency_mhz(&self) -> Option<u32>;

    /// The human-readable model name of the processor, if the platform reports one.
    fn model_name(&self) -> Option<&str>;
}
