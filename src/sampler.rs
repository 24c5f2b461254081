use std::path::{Path, PathBuf};
use crate::error::Result;
use crate::metrics::{MetricsProvider, ROOT_MOUNT};
use crate::snapshot::SystemSnapshot;

/// Produces one `SystemSnapshot` per call from a `MetricsProvider`.
pub struct Sampler<P> {
    provider: P,
    mount_point: PathBuf,
}

impl<P: MetricsProvider> Sampler<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            mount_point: PathBuf::from(ROOT_MOUNT),
        }
    }

    pub fn mount_point(&self) -> &Path {
        &self.mount_point
    }

    /// Queries CPU, memory, disk and network in that order.
    ///
    /// The first failing query aborts the snapshot; no partial readings are
    /// returned.
    pub fn sample(&mut self) -> Result<SystemSnapshot> {
        let cpu_percent = self.provider.cpu_percent()?;
        let memory = self.provider.memory()?;
        let disk = self.provider.disk(&self.mount_point)?;
        let network = self.provider.network()?;

        Ok(SystemSnapshot {
            cpu_percent,
            mem_used_percent: memory.usage_percent(),
            mem_total_bytes: memory.total,
            mem_free_bytes: memory.free,
            disk_used_percent: disk.usage_percent(),
            disk_total_bytes: disk.total,
            disk_free_bytes: disk.free,
            net_bytes_sent: network.bytes_sent,
            net_bytes_recv: network.bytes_recv,
        })
    }
}
