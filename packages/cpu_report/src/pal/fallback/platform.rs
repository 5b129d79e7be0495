use std::cell::Cell;
use std::num::NonZeroUsize;
use std::sync::OnceLock;

use nonempty::NonEmpty;

use crate::ProcessorId;
use crate::pal::fallback::ProcessorImpl;
use crate::pal::{Platform, ProcessorFacade};

thread_local! {
    /// The processor ID assigned to the current thread.
    ///
    /// This is computed from the thread ID on first access and remains stable for the
    /// lifetime of the thread. This simulates a thread being scheduled on a specific
    /// processor, even though we have no way to observe real scheduling on unsupported
    /// platforms.
    static THREAD_PROCESSOR_ID: Cell<Option<ProcessorId>> = const { Cell::new(None) };
}

static PROCESSOR_COUNT: OnceLock<usize> = OnceLock::new();

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

/// Fallback platform implementation for operating systems without native support.
///
/// This implementation provides graceful degradation on unsupported platforms by:
/// - Using `std::thread::available_parallelism()` to determine processor count
/// - Simulating all processors as being in a single memory region (region 0)
/// - Marking all processors as Performance class
/// - Using stable thread-local processor IDs derived from thread IDs
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform;

impl BuildTargetPlatform {
    #[expect(clippy::unused_self, reason = "matches Platform trait signature")]
    fn processor_count(&self) -> usize {
        *PROCESSOR_COUNT.get_or_init(|| {
            std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)
        })
    }

    fn thread_processor_id(&self) -> ProcessorId {
        THREAD_PROCESSOR_ID.with(|cached| {
            if let Some(id) = cached.get() {
                return id;
            }

            // Compute a stable processor ID from the thread ID. We use a simple hash to
            // distribute threads across processors.
            let thread_id_hash = {
                use std::collections::hash_map::DefaultHasher;
                use std::hash::{Hash, Hasher};

                let mut hasher = DefaultHasher::new();
                std::thread::current().id().hash(&mut hasher);
                hasher.finish()
            };

            let processor_count = self.processor_count() as u64;

            #[expect(
                clippy::cast_possible_truncation,
                reason = "result of modulo is guaranteed to be less than processor_count"
            )]
            #[expect(clippy::arithmetic_side_effects, reason = "modulo cannot overflow")]
            let processor_id = (thread_id_hash % processor_count) as ProcessorId;

            cached.set(Some(processor_id));
            processor_id
        })
    }
}

impl Platform for BuildTargetPlatform {
    fn get_all_processors(&self) -> NonEmpty<ProcessorFacade> {
        let processors = (0..self.processor_count())
            .map(|id| {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "unrealistic to have more than u32::MAX processors"
                )]
                let id = id as ProcessorId;

                ProcessorFacade::Target(ProcessorImpl::new(id))
            })
            .collect::<Vec<_>>();

        NonEmpty::from_vec(processors).expect("processor count is at least 1, so this cannot fail")
    }

    fn current_processor_id(&self) -> ProcessorId {
        self.thread_processor_id()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::EfficiencyClass;
    use crate::pal::AbstractProcessor;

    #[test]
    fn has_at_least_one_processor() {
        assert!(!BUILD_TARGET_PLATFORM.get_all_processors().is_empty());
    }

    #[test]
    fn all_processors_are_uniform_simulations() {
        for processor in BUILD_TARGET_PLATFORM.get_all_processors() {
            assert_eq!(processor.memory_region_id(), 0);
            assert_eq!(processor.efficiency_class(), EfficiencyClass::Performance);
            assert_eq!(processor.frequency_mhz(), None);
            assert_eq!(processor.model_name(), None);
        }
    }

    #[test]
    fn current_processor_id_is_stable_within_thread() {
        let id1 = BUILD_TARGET_PLATFORM.current_processor_id();
        let id2 = BUILD_TARGET_PLATFORM.current_processor_id();

        assert_eq!(id1, id2);
    }

    #[test]
    fn current_processor_id_is_within_range() {
        let max_id = BUILD_TARGET_PLATFORM
            .get_all_processors()
            .iter()
            .map(AbstractProcessor::id)
            .max()
            .expect("NonEmpty always has at least one item");

        assert!(BUILD_TARGET_PLATFORM.current_processor_id() <= max_id);
    }
}
