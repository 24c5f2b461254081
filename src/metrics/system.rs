use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};
use crate::error::{Error, Result};

/// CPU and memory readings backed by a long-lived `sysinfo::System`.
///
/// CPU usage is computed by sysinfo from the counter delta between two
/// refreshes, so the struct must outlive individual samples.
pub struct SystemMetrics {
    system: System,
}

impl SystemMetrics {
    pub fn new() -> Self {
        let system = System::new_with_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::new().with_cpu_usage())
                .with_memory(MemoryRefreshKind::new().with_ram()),
        );
        Self { system }
    }

    pub fn refresh_cpu(&mut self) {
        self.system.refresh_cpu_usage();
    }

    pub fn refresh_memory(&mut self) {
        self.system.refresh_memory_specifics(MemoryRefreshKind::new().with_ram());
    }

    pub fn cpu_count(&self) -> usize {
        self.system.cpus().len()
    }

    /// Utilization across all cores since the previous CPU refresh.
    pub fn global_cpu_usage(&mut self) -> Result<f64> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(Error::Cpu("platform not supported".to_string()));
        }

        self.refresh_cpu();

        if self.cpu_count() == 0 {
            return Err(Error::Cpu("no CPUs reported".to_string()));
        }

        let usage = f64::from(self.system.global_cpu_usage());
        if !usage.is_finite() {
            return Err(Error::Cpu(format!("unusable reading {}", usage)));
        }
        Ok(usage.clamp(0.0, 100.0))
    }

    pub fn memory(&mut self) -> Result<MemoryInfo> {
        self.refresh_memory();

        let total = self.system.total_memory();
        if total == 0 {
            return Err(Error::Memory("total memory reported as 0".to_string()));
        }

        Ok(MemoryInfo {
            total,
            free: self.system.free_memory(),
            used: self.system.used_memory(),
        })
    }
}

impl Default for SystemMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryInfo {
    pub total: u64,
    pub free: u64,
    pub used: u64,
}

impl MemoryInfo {
    pub fn usage_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.used as f64 / self.total as f64) * 100.0
    }
}
