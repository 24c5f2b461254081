use std::fmt;

/// Readings captured during a single tick.
///
/// The four groups come from separate queries issued one after another, so the
/// values are close in time but not taken atomically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemSnapshot {
    pub cpu_percent: f64,
    pub mem_used_percent: f64,
    pub mem_total_bytes: u64,
    pub mem_free_bytes: u64,
    pub disk_used_percent: f64,
    pub disk_total_bytes: u64,
    pub disk_free_bytes: u64,
    pub net_bytes_sent: u64,
    pub net_bytes_recv: u64,
}

pub const REPORT_HEADER: &str = "--- System Information ---";

impl fmt::Display for SystemSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", REPORT_HEADER)?;
        writeln!(f, "CPU Usage: {:.2}%", self.cpu_percent)?;
        writeln!(
            f,
            "Memory Usage: {:.2}% (Total: {}, Free: {})",
            self.mem_used_percent, self.mem_total_bytes, self.mem_free_bytes
        )?;
        writeln!(
            f,
            "Disk Usage: {:.2}% (Total: {}, Free: {})",
            self.disk_used_percent, self.disk_total_bytes, self.disk_free_bytes
        )?;
        writeln!(
            f,
            "Network Sent: {}, Received: {}",
            self.net_bytes_sent, self.net_bytes_recv
        )
    }
}

/// Renders the fixed text report for one snapshot.
pub fn render(snapshot: &SystemSnapshot) -> String {
    snapshot.to_string()
}
