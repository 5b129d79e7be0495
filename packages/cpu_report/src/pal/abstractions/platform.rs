use std::fmt::Debug;

use nonempty::NonEmpty;

use crate::ProcessorId;
use crate::pal::ProcessorFacade;

#[cfg_attr(test, mockall::automock)]
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Returns all processors available to the current process.
    ///
    /// The returned set will exclude processors that are not active or are forbidden from
    /// being used due to resource constraints enforced by the operating system.
    ///
    /// The returned collection of processors is sorted by the processor ID, ascending.
    #[must_use]
    fn get_all_processors(&self) -> NonEmpty<ProcessorFacade>;

    /// Gets the ID of the processor currently executing this thread.
    ///
    /// The returned value may be stale by the time the caller observes it - the operating
    /// system is free to reschedule the thread onto another processor at any moment.
    #[must_use]
    fn current_processor_id(&self) -> ProcessorId;
}
