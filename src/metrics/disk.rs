use std::path::Path;
use crate::error::{Error, Result};

pub const ROOT_MOUNT: &str = "/";

/// Filesystem usage read straight from `statvfs`, so blocks reserved for root
/// count neither as used nor as free, matching `df`.
#[derive(Debug, Default)]
pub struct DiskMetrics;

impl DiskMetrics {
    pub fn new() -> Self {
        Self
    }

    /// Usage of the filesystem holding `mount_point`.
    #[cfg(unix)]
    pub fn usage(&mut self, mount_point: &Path) -> Result<DiskInfo> {
        use nix::sys::statvfs::statvfs;

        let stat = statvfs(mount_point)
            .map_err(|e| Error::Disk(format!("statvfs {}: {}", mount_point.display(), e)))?;

        let info = DiskInfo::from_blocks(
            u64::from(stat.blocks()),
            u64::from(stat.blocks_free()),
            u64::from(stat.blocks_available()),
            u64::from(stat.fragment_size()),
        );
        log::debug!(
            "{}: total {} used {} free {}",
            mount_point.display(),
            info.total,
            info.used,
            info.free
        );
        Ok(info)
    }

    #[cfg(not(unix))]
    pub fn usage(&mut self, mount_point: &Path) -> Result<DiskInfo> {
        Err(Error::Disk(format!(
            "{}: filesystem statistics not supported on this platform",
            mount_point.display()
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskInfo {
    pub total: u64,
    /// Space in use, excluding blocks reserved for root.
    pub used: u64,
    /// Space available to unprivileged users.
    pub free: u64,
}

impl DiskInfo {
    /// Builds usage from raw `statvfs` block counts.
    pub fn from_blocks(blocks: u64, blocks_free: u64, blocks_available: u64, fragment_size: u64) -> Self {
        Self {
            total: blocks.saturating_mul(fragment_size),
            used: blocks.saturating_sub(blocks_free).saturating_mul(fragment_size),
            free: blocks_available.saturating_mul(fragment_size),
        }
    }

    /// `used / (used + free)`, the figure `df` reports.
    pub fn usage_percent(&self) -> f64 {
        let usable = self.used.saturating_add(self.free);
        if usable == 0 {
            return 0.0;
        }
        (self.used as f64 / usable as f64) * 100.0
    }
}
