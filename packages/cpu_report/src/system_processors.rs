//! Public handle to a processor snapshot, supporting both real and mocked platforms.
//!
//! This module defines the `SystemProcessors` type that wraps the platform abstraction
//! layer. All hardware-aware APIs flow from a `SystemProcessors` instance, so tests can
//! substitute a mock platform while production code uses the real hardware singleton.

use std::any::type_name;
use std::sync::{Arc, OnceLock};

use itertools::Itertools;
use nonempty::NonEmpty;

use crate::pal::{Platform as _, PlatformFacade};
use crate::{MemoryRegionId, Processor, ProcessorId, ProcessorReport};

/// The real hardware snapshot singleton, initialized on first access.
static CURRENT_PROCESSORS: OnceLock<SystemProcessors> = OnceLock::new();

/// A snapshot of the processors available to the current process.
///
/// The snapshot excludes processors that are offline or that the operating system forbids
/// the current process from using. It is taken once and does not change afterwards, even
/// if hardware changes at runtime.
///
/// # Example
///
/// ```
/// use cpu_report::SystemProcessors;
///
/// let processors = SystemProcessors::current();
///
/// println!(
///     "found {} processors in {} memory regions",
///     processors.processor_count(),
///     processors.memory_region_count()
/// );
/// ```
#[derive(Clone)]
pub struct SystemProcessors {
    inner: Arc<Inner>,
}

/// Internal state of a `SystemProcessors` instance.
struct Inner {
    /// The platform abstraction layer implementation.
    platform: PlatformFacade,

    /// All processors in the snapshot, sorted by ID, ascending.
    processors: NonEmpty<Processor>,
}

impl SystemProcessors {
    /// Returns a handle to the snapshot of the real system hardware.
    ///
    /// The snapshot is taken on first access and reused thereafter. All clones are
    /// equivalent.
    ///
    /// # Example
    ///
    /// ```
    /// use cpu_report::SystemProcessors;
    ///
    /// let processors = SystemProcessors::current();
    /// println!("{}", processors.report());
    /// ```
    #[must_use]
    pub fn current() -> &'static Self {
        CURRENT_PROCESSORS.get_or_init(|| Self::from_platform(PlatformFacade::target()))
    }

    pub(crate) fn from_platform(platform: PlatformFacade) -> Self {
        let processors = platform.get_all_processors().map(Processor::new);

        Self {
            inner: Arc::new(Inner {
                platform,
                processors,
            }),
        }
    }

    /// Iterates over the processors in the snapshot, sorted by ID, ascending.
    pub fn processors(&self) -> impl Iterator<Item = &Processor> {
        self.inner.processors.iter()
    }

    /// The number of processors in the snapshot. Always at least one - this code is
    /// executing on one of them.
    #[must_use]
    pub fn processor_count(&self) -> usize {
        self.inner.processors.len()
    }

    /// The number of distinct memory regions the snapshot's processors belong to.
    #[must_use]
    pub fn memory_region_count(&self) -> usize {
        self.inner
            .processors
            .iter()
            .map(Processor::memory_region_id)
            .unique()
            .count()
    }

    /// The highest processor ID present in the snapshot.
    ///
    /// Processor IDs are not guaranteed to be contiguous, so this may exceed
    /// `processor_count() - 1`.
    #[must_use]
    pub fn max_processor_id(&self) -> ProcessorId {
        self.inner
            .processors
            .iter()
            .map(Processor::id)
            .max()
            .expect("NonEmpty always has at least one item")
    }

    /// The highest memory region ID present in the snapshot.
    #[must_use]
    pub fn max_memory_region_id(&self) -> MemoryRegionId {
        self.inner
            .processors
            .iter()
            .map(Processor::memory_region_id)
            .max()
            .expect("NonEmpty always has at least one item")
    }

    /// The ID of the processor currently executing this thread.
    ///
    /// The operating system may reschedule the thread onto another processor at any
    /// moment, so the returned value is merely a snapshot.
    ///
    /// # Example
    ///
    /// ```
    /// use cpu_report::SystemProcessors;
    ///
    /// let id = SystemProcessors::current().current_processor_id();
    /// println!("currently executing on processor {id}");
    /// ```
    #[must_use]
    #[inline]
    pub fn current_processor_id(&self) -> ProcessorId {
        self.inner.platform.current_processor_id()
    }

    /// Builds a diagnostic report about the snapshot, suitable for human consumption.
    ///
    /// # Example
    ///
    /// ```
    /// use cpu_report::SystemProcessors;
    ///
    /// println!("{}", SystemProcessors::current().report());
    /// ```
    #[must_use]
    pub fn report(&self) -> ProcessorReport {
        ProcessorReport::new(self.inner.processors.clone(), self.current_processor_id())
    }
}

// We have no API contract for the Debug output format.
#[cfg_attr(coverage_nightly, coverage(off))]
impl std::fmt::Debug for SystemProcessors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("processor_count", &self.processor_count())
            .field("max_processor_id", &self.max_processor_id())
            .field("max_memory_region_id", &self.max_memory_region_id())
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use nonempty::nonempty;

    use super::*;
    use crate::EfficiencyClass;
    use crate::pal::{FakeProcessor, MockPlatform, ProcessorFacade};

    fn fake_processors() -> NonEmpty<ProcessorFacade> {
        nonempty![
            FakeProcessor {
                index: 0,
                memory_region: 0,
                efficiency_class: EfficiencyClass::Performance,
                frequency_mhz: Some(3400),
                model_name: None,
            }
            .into(),
            FakeProcessor {
                index: 1,
                memory_region: 0,
                efficiency_class: EfficiencyClass::Performance,
                frequency_mhz: Some(3400),
                model_name: None,
            }
            .into(),
            FakeProcessor {
                index: 4,
                memory_region: 1,
                efficiency_class: EfficiencyClass::Efficiency,
                frequency_mhz: Some(2000),
                model_name: None,
            }
            .into(),
        ]
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Miri cannot call platform APIs.
    fn current_is_singleton() {
        let p1 = SystemProcessors::current();
        let p2 = SystemProcessors::current();

        // Both references should point to the same inner data.
        assert!(Arc::ptr_eq(&p1.inner, &p2.inner));
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Miri cannot call platform APIs.
    fn current_returns_valid_processor_id() {
        let processors = SystemProcessors::current();

        // The processor ID should be within the valid range.
        assert!(processors.current_processor_id() <= processors.max_processor_id());
    }

    #[test]
    fn counts_reflect_platform_data() {
        let mut platform = MockPlatform::new();
        platform
            .expect_get_all_processors()
            .times(1)
            .return_const(fake_processors());

        let processors = SystemProcessors::from_platform(PlatformFacade::from_mock(platform));

        assert_eq!(processors.processor_count(), 3);
        assert_eq!(processors.memory_region_count(), 2);
        assert_eq!(processors.max_processor_id(), 4);
        assert_eq!(processors.max_memory_region_id(), 1);
    }

    #[test]
    fn processors_are_exposed_in_order() {
        let mut platform = MockPlatform::new();
        platform
            .expect_get_all_processors()
            .times(1)
            .return_const(fake_processors());

        let processors = SystemProcessors::from_platform(PlatformFacade::from_mock(platform));

        let ids = processors.processors().map(Processor::id).collect::<Vec<_>>();
        assert_eq!(ids, vec![0, 1, 4]);
    }

    #[test]
    fn report_uses_platform_current_processor() {
        let mut platform = MockPlatform::new();
        platform
            .expect_get_all_processors()
            .times(1)
            .return_const(fake_processors());
        platform
            .expect_current_processor_id()
            .times(1)
            .return_const(4_u32);

        let processors = SystemProcessors::from_platform(PlatformFacade::from_mock(platform));

        let rendered = processors.report().to_string();
        assert!(rendered.contains("currently executing on processor 4"));
    }

    #[test]
    fn clones_share_state() {
        let mut platform = MockPlatform::new();
        platform
            .expect_get_all_processors()
            .times(1)
            .return_const(fake_processors());

        let processors = SystemProcessors::from_platform(PlatformFacade::from_mock(platform));
        let clone = processors.clone();

        assert!(Arc::ptr_eq(&processors.inner, &clone.inner));
    }
}
