use sysinfo::Networks;
use crate::error::Result;

pub struct NetworkMetrics {
    networks: Networks,
}

impl NetworkMetrics {
    pub fn new() -> Self {
        Self {
            networks: Networks::new_with_refreshed_list(),
        }
    }

    pub fn refresh(&mut self) {
        self.networks.refresh_list();
    }

    /// Cumulative byte counters summed over every interface.
    pub fn totals(&mut self) -> Result<NetworkTotals> {
        self.refresh();

        let totals = self.networks.iter()
            .fold(NetworkTotals::default(), |acc, (name, data)| {
                log::trace!(
                    "{}: sent {} received {}",
                    name,
                    data.total_transmitted(),
                    data.total_received()
                );
                NetworkTotals {
                    bytes_sent: acc.bytes_sent.saturating_add(data.total_transmitted()),
                    bytes_recv: acc.bytes_recv.saturating_add(data.total_received()),
                }
            });

        Ok(totals)
    }
}

impl Default for NetworkMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkTotals {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
}
