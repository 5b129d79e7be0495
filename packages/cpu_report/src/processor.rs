use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};

use crate::pal::{AbstractProcessor, ProcessorFacade};
use crate::{EfficiencyClass, MemoryRegionId, ProcessorId};

/// A processor present on the system and available to the current process.
#[derive(Clone)]
pub struct Processor {
    inner: ProcessorFacade,
}

impl Processor {
    #[must_use]
    pub(crate) fn new(inner: ProcessorFacade) -> Self {
        Self { inner }
    }

    /// The unique numeric ID of the processor, matching the ID used by operating system tools.
    ///
    /// # Example
    ///
    /// ```
    /// use cpu_report::SystemProcessors;
    ///
    /// for processor in SystemProcessors::current().processors() {
    ///     let id = processor.id();
    ///     println!("found processor {id}");
    /// }
    /// ```
    #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
    #[inline]
    #[must_use]
    pub fn id(&self) -> ProcessorId {
        self.inner.id()
    }

    /// The unique numeric ID of the memory region the processor belongs to, matching the
    /// ID used by operating system tools.
    #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
    #[inline]
    #[must_use]
    pub fn memory_region_id(&self) -> MemoryRegionId {
        self.inner.memory_region_id()
    }

    /// The [efficiency class][EfficiencyClass] of the processor.
    ///
    /// This is a relative measure - the fastest processors on any given system are always
    /// considered performance processors, while any that are slower are considered
    /// efficiency processors.
    #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
    #[inline]
    #[must_use]
    pub fn efficiency_class(&self) -> EfficiencyClass {
        self.inner.efficiency_class()
    }

    /// The processor frequency in MHz, if known.
    ///
    /// Not every platform reports frequencies (e.g. many ARM kernels omit them), so
    /// callers must be prepared for `None`.
    #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
    #[inline]
    #[must_use]
    pub fn frequency_mhz(&self) -> Option<u32> {
        self.inner.frequency_mhz()
    }

    /// The human-readable model name of the processor, if known.
    #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
    #[inline]
    #[must_use]
    pub fn model_name(&self) -> Option<&str> {
        self.inner.model_name()
    }
}

impl PartialEq for Processor {
    #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Processor {}

impl Hash for Processor {
    #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl Display for Processor {
    #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl Debug for Processor {
    #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.inner, f)
    }
}
