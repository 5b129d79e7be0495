use std::sync::OnceLock;

use foldhash::HashMap;
use itertools::Itertools;
use nonempty::NonEmpty;

use crate::pal::linux::{
    Bindings, BindingsFacade, Filesystem, FilesystemFacade, ProcessorImpl, cpulist,
};
use crate::pal::{Platform, ProcessorFacade};
use crate::{EfficiencyClass, MemoryRegionId, ProcessorId};

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform =
    BuildTargetPlatform::new(BindingsFacade::real(), FilesystemFacade::real());

/// The platform that matches the crate's build target.
///
/// You would only use a different platform in unit tests that need to mock the platform.
/// Even then, whenever possible, unit tests should use the real platform for maximum realism.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform {
    bindings: BindingsFacade,
    fs: FilesystemFacade,

    processors: OnceLock<NonEmpty<ProcessorImpl>>,
}

impl Platform for BuildTargetPlatform {
    fn get_all_processors(&self) -> NonEmpty<ProcessorFacade> {
        self.processors().clone().map(ProcessorFacade::Target)
    }

    #[expect(
        clippy::cast_sign_loss,
        reason = "negative processor IDs are not valid regardless, we do not expect to receive them"
    )]
    fn current_processor_id(&self) -> ProcessorId {
        self.bindings.sched_getcpu() as ProcessorId
    }
}

impl BuildTargetPlatform {
    pub(super) const fn new(bindings: BindingsFacade, fs: FilesystemFacade) -> Self {
        Self {
            bindings,
            fs,
            processors: OnceLock::new(),
        }
    }

    fn processors(&self) -> &NonEmpty<ProcessorImpl> {
        self.processors.get_or_init(|| self.load_processors())
    }

    fn load_processors(&self) -> NonEmpty<ProcessorImpl> {
        // There are two main ways to get processor information on Linux:
        // 1. Use various APIs to get the information as objects.
        // 2. Parse files in the /sys and /proc virtual filesystem.
        //
        // The former is "nicer" but requires annoying FFI calls into native Linux libraries,
        // which often come with a klunky extra layer between the operating system and the app
        // (e.g. libnuma, libcpuset, ...). To keep things simple, we go with the latter.
        //
        // We combine multiple sources of information:
        // 1. /proc/cpuinfo gives us the set of processors, their frequency and model name.
        // 2. /sys/devices/system/node/node*/cpulist gives us the processors in each NUMA node.
        // 3. /sys/devices/system/cpu/cpu*/online says whether a processor is online.
        // 4. /proc/self/status gives us the set of processors allowed for the current process.
        // Note: /sys/devices/system/node may be missing if there is only one NUMA node.
        let records = self.parse_cpuinfo();
        let allowed = self.allowed_processors();
        let memory_regions = self.memory_regions();

        let records = records
            .into_iter()
            .filter(|record| {
                allowed
                    .as_ref()
                    .is_none_or(|allowed| allowed.contains(&record.index))
            })
            .filter(|record| self.is_online(record.index))
            .collect_vec();

        // Efficiency class is a relative measure, so it is only meaningful when the kernel
        // reports frequencies. The fastest processors are performance class; slower ones
        // are efficiency class.
        let max_frequency = records.iter().filter_map(|record| record.frequency_mhz).max();

        let mut processors = records
            .into_iter()
            .map(|record| {
                let memory_region_id = memory_regions
                    .as_ref()
                    .and_then(|regions| {
                        regions.iter().find_map(|(region, members)| {
                            members.contains(&record.index).then_some(*region)
                        })
                    })
                    // No NUMA information means everything is in one memory region.
                    .unwrap_or(0);

                let efficiency_class = match (record.frequency_mhz, max_frequency) {
                    (Some(frequency), Some(max)) if frequency < max => EfficiencyClass::Efficiency,
                    _ => EfficiencyClass::Performance,
                };

                ProcessorImpl {
                    id: record.index,
                    memory_region_id,
                    efficiency_class,
                    frequency_mhz: record.frequency_mhz,
                    model_name: record.model_name,
                }
            })
            .collect_vec();

        // We must return the processors sorted by ID. While the above logic may already
        // ensure this as a side-effect, we sort here explicitly to be sure.
        processors.sort();

        NonEmpty::from_vec(processors).expect(
            "no usable processors remained after filtering - impossible because this code is executing on one",
        )
    }

    fn parse_cpuinfo(&self) -> Vec<CpuRecord> {
        let contents = self.fs.get_cpuinfo_contents();

        // Process groups of lines delimited by empty lines.
        contents
            .lines()
            .map(str::trim)
            .chunk_by(|line| line.is_empty())
            .into_iter()
            .filter_map(|(is_empty, lines)| {
                if is_empty {
                    return None;
                }

                Self::parse_cpuinfo_block(lines)
            })
            .collect_vec()
    }

    /// Parses one block of /proc/cpuinfo, describing a single processor.
    ///
    /// Returns `None` for blocks that do not describe a processor (no "processor" line).
    fn parse_cpuinfo_block<'a>(lines: impl Iterator<Item = &'a str>) -> Option<CpuRecord> {
        let mut index = None;
        let mut frequency_mhz = None;
        let mut model_name = None;

        for line in lines {
            let Some((key, value)) = line
                .split_once(':')
                .map(|(key, value)| (key.trim(), value.trim()))
            else {
                // Some kernels emit lines without a separator; they carry nothing we need.
                continue;
            };

            #[expect(
                clippy::cast_sign_loss,
                clippy::cast_possible_truncation,
                reason = "we expect small positive numbers for frequency, which can have their integer part losslessly converted to u32"
            )]
            match key {
                "processor" => index = value.parse::<ProcessorId>().ok(),
                "cpu MHz" => {
                    frequency_mhz = value.parse::<f64>().map(|mhz| mhz.round() as u32).ok();
                }
                "model name" => model_name = Some(value.to_string()),
                _ => {}
            }
        }

        index.map(|index| CpuRecord {
            index,
            frequency_mhz,
            model_name,
        })
    }

    /// The set of processors the current process is allowed to use, or `None` if the
    /// platform does not constrain us (or does not report the constraint).
    fn allowed_processors(&self) -> Option<Vec<ProcessorId>> {
        // On Linux, mechanisms like cgroups may limit what processors we are allowed to use.
        // We want to avoid even showing such processors, so we filter them out. The allowed
        // list is in /proc/self/status.
        //
        // Example content:
        // Cpus_allowed:   ffffffff
        // Cpus_allowed_list:      0-31
        // Mems_allowed:   1
        let status = self.fs.get_proc_self_status_contents();

        let allowed_list = status.lines().find_map(|line| {
            let (key, value) = line.split_once(':')?;

            (key.trim() == "Cpus_allowed_list").then(|| value.trim().to_string())
        })?;

        Some(
            cpulist::parse(&allowed_list)
                .expect("platform provided invalid cpulist in Cpus_allowed_list"),
        )
    }

    // May return None if everything is in a single NUMA node.
    //
    // Otherwise, returns the NUMA nodes of the system, where each entry is the list of
    // processor indexes that belong to that node.
    fn memory_regions(&self) -> Option<HashMap<MemoryRegionId, Vec<ProcessorId>>> {
        let possible = self.fs.get_numa_node_possible_contents()?;

        let node_indexes = cpulist::parse(&possible)
            .expect("platform provided invalid cpulist for list of NUMA nodes");

        Some(
            node_indexes
                .into_iter()
                .map(|node| {
                    let members = cpulist::parse(&self.fs.get_numa_node_cpulist_contents(node))
                        .expect("platform provided invalid cpulist for NUMA node members");

                    (node, members)
                })
                .collect(),
        )
    }

    fn is_online(&self, cpu_index: ProcessorId) -> bool {
        // Some Linux flavors do not report this, so just assume online by default.
        // Sometimes this is also omitted for a specific processor because... it just is.
        self.fs
            .get_cpu_online_contents(cpu_index)
            .is_none_or(|contents| contents.trim() == "1")
    }
}

// One block from /proc/cpuinfo.
#[derive(Clone, Debug)]
struct CpuRecord {
    index: ProcessorId,

    /// Frequency rounded to the nearest integer, when reported by the kernel.
    frequency_mhz: Option<u32>,

    model_name: Option<String>,
}

#[allow(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    reason = "we need not worry in tests"
)]
