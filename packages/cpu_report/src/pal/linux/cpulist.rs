//! Parsing for the `cpulist` format used by Linux virtual filesystem files that list
//! processors, NUMA nodes and similar numeric hardware identifiers.
//!
//! Example cpulist string: `0,1,2-4,5-9:2` where `5-9:2` is a range with a stride (step
//! size) and is equivalent to `5,7,9`.

use itertools::Itertools;
use thiserror::Error;

/// Errors that can occur when parsing cpulist strings.
#[derive(Debug, Error)]
pub(crate) enum CpulistError {
    /// A comma-separated element of the cpulist did not match the expected format.
    #[error("'{part}' is not a valid cpulist element: {problem}")]
    InvalidPart {
        /// The specific element that was invalid.
        part: String,

        /// A human-readable description of the problem.
        problem: &'static str,
    },
}

/// Parses a cpulist string and returns the numeric items in ascending order,
/// removing duplicates.
///
/// Surrounding whitespace is ignored, so file contents can be passed through without
/// trimming the trailing newline first. An empty string is valid input and returns an
/// empty result.
pub(crate) fn parse(cpulist: &str) -> Result<Vec<u32>, CpulistError> {
    let mut items = Vec::new();

    for part in cpulist.trim().split(',') {
        if part.is_empty() {
            continue;
        }

        let (range, stride) = match part.split_once(':') {
            Some((range, stride)) => {
                let stride = stride
                    .parse::<u32>()
                    .map_err(|_| invalid(part, "stride is not an integer"))?;

                if stride == 0 {
                    return Err(invalid(part, "stride must not be zero"));
                }

                (range, stride)
            }
            None => (part, 1),
        };

        let (first, last) = match range.split_once('-') {
            Some((first, last)) => (
                first
                    .parse::<u32>()
                    .map_err(|_| invalid(part, "range start is not an integer"))?,
                last.parse::<u32>()
                    .map_err(|_| invalid(part, "range end is not an integer"))?,
            ),
            None => {
                let single = range
                    .parse::<u32>()
                    .map_err(|_| invalid(part, "element is not an integer"))?;

                (single, single)
            }
        };

        if first > last {
            return Err(invalid(part, "range start must not be greater than range end"));
        }

        items.extend((first..=last).step_by(stride as usize));
    }

    Ok(items.into_iter().sorted_unstable().dedup().collect())
}

fn invalid(part: &str, problem: &'static str) -> CpulistError {
    CpulistError::InvalidPart {
        part: part.to_string(),
        problem,
    }
}
