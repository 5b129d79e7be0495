use std::fmt::{Debug, Display};

#[cfg(test)]
use crate::pal::FakeProcessor;
use crate::pal::{AbstractProcessor, ProcessorImpl};

#[derive(Clone, Eq, Hash, PartialEq)]
pub(crate) enum ProcessorFacade {
    Target(ProcessorImpl),

    #[cfg(test)]
    Fake(FakeProcessor),
}

impl AbstractProcessor for ProcessorFacade {
    fn id(&self) -> crate::ProcessorId {
        match self {
            Self::Target(p) => p.id(),
            #[cfg(test)]
            Self::Fake(p) => p.id(),
        }
    }

    fn memory_region_id(&self) -> crate::MemoryRegionId {
        match self {
            Self::Target(p) => p.memory_region_id(),
            #[cfg(test)]
            Self::Fake(p) => p.memory_region_id(),
        }
    }

    fn efficiency_class(&self) -> crate::EfficiencyClass {
        match self {
            Self::Target(p) => p.efficiency_class(),
            #[cfg(test)]
            Self::Fake(p) => p.efficiency_class(),
        }
    }

    fn frequency_mhz(&self) -> Option<u32> {
        match self {
            Self::Target(p) => p.frequency_mhz(),
            #[cfg(test)]
            Self::Fake(p) => p.frequency_mhz(),
        }
    }

    fn model_name(&self) -> Option<&str> {
        match self {
            Self::Target(p) => p.model_name(),
            #[cfg(test)]
            Self::Fake(p) => p.model_name(),
        }
    }
}

impl From<ProcessorImpl> for ProcessorFacade {
    fn from(p: ProcessorImpl) -> Self {
        Self::Target(p)
    }
}

#[cfg(test)]
impl From<FakeProcessor> for ProcessorFacade {
    fn from(p: FakeProcessor) -> Self {
        Self::Fake(p)
    }
}

impl Display for ProcessorFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Target(inner) => Display::fmt(inner, f),
            #[cfg(test)]
            Self::Fake(inner) => Display::fmt(inner, f),
        }
    }
}

impl Debug for ProcessorFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Target(inner) => Debug::fmt(inner, f),
            #[cfg(test)]
            Self::Fake(inner) => Debug::fmt(inner, f),
        }
    }
}
