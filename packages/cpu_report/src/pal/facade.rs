mod platform;
pub(crate) use platform::*;

mod processor;
pub(crate) use processor::*;
