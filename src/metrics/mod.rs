pub mod system;
pub mod disk;
pub mod network;

pub use system::{SystemMetrics, MemoryInfo};
pub use disk::{DiskMetrics, DiskInfo, ROOT_MOUNT};
pub use network::{NetworkMetrics, NetworkTotals};

use std::path::Path;
use crate::error::Result;

/// Source of the four per-tick host readings.
///
/// Each query is synchronous and reports its own failure through the matching
/// `Error` variant (`Cpu`, `Memory`, `Disk`, `Network`).
pub trait MetricsProvider {
    /// Utilization in percent across all cores since the previous call.
    fn cpu_percent(&mut self) -> Result<f64>;
    fn memory(&mut self) -> Result<MemoryInfo>;
    fn disk(&mut self, mount_point: &Path) -> Result<DiskInfo>;
    fn network(&mut self) -> Result<NetworkTotals>;
}

/// Production provider reading live OS state through sysinfo.
pub struct SysinfoProvider {
    system: SystemMetrics,
    disks: DiskMetrics,
    networks: NetworkMetrics,
}

impl SysinfoProvider {
    pub fn new() -> Self {
        let mut provider = Self {
            system: SystemMetrics::new(),
            disks: DiskMetrics::new(),
            networks: NetworkMetrics::new(),
        };
        // Seed the CPU counters so the first tick has a baseline to diff against.
        // The first tick follows well within MINIMUM_CPU_UPDATE_INTERVAL and
        // mostly reflects startup work.
        provider.system.refresh_cpu();
        log::debug!(
            "Metrics provider ready ({} CPUs); first CPU reading covers process startup only",
            provider.system.cpu_count()
        );
        provider
    }
}

impl Default for SysinfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for SysinfoProvider {
    fn cpu_percent(&mut self) -> Result<f64> {
        self.system.global_cpu_usage()
    }

    fn memory(&mut self) -> Result<MemoryInfo> {
        self.system.memory()
    }

    fn disk(&mut self, mount_point: &Path) -> Result<DiskInfo> {
        self.disks.usage(mount_point)
    }

    fn network(&mut self) -> Result<NetworkTotals> {
        self.networks.totals()
    }
}
