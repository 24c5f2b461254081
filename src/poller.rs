use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use crate::error::Result;
use crate::metrics::MetricsProvider;
use crate::sampler::Sampler;
use crate::snapshot::render;

/// What to do when one of the per-tick metric queries fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FailurePolicy {
    /// Stop the loop and hand the error back to the caller.
    #[value(name = "fatal")]
    Fatal,
    /// Log the error, skip the tick and keep going.
    #[default]
    #[value(name = "continue")]
    ContinueOnError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Printed,
    Skipped,
}

/// Sample, print, sleep loop with a fixed interval.
pub struct Poller<P, W> {
    sampler: Sampler<P>,
    out: W,
    interval: Duration,
    policy: FailurePolicy,
    stop: Arc<AtomicBool>,
}

impl<P: MetricsProvider, W: Write> Poller<P, W> {
    pub fn new(sampler: Sampler<P>, out: W, interval: Duration, policy: FailurePolicy) -> Self {
        Self {
            sampler,
            out,
            interval,
            policy,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Token that ends the loop before its next tick once set.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Runs until the stop handle is set. The first tick fires immediately.
    pub fn run(&mut self) -> Result<()> {
        log::info!(
            "Starting monitoring loop (interval: {}s, on error: {:?})",
            self.interval.as_secs(),
            self.policy
        );

        loop {
            if self.should_stop() {
                log::info!("Stop requested, leaving monitoring loop");
                break;
            }

            self.tick()?;

            if self.should_stop() {
                break;
            }
            std::thread::sleep(self.interval);
        }

        Ok(())
    }

    /// Runs at most `count` ticks, without sleeping after the last one.
    pub fn run_ticks(&mut self, count: usize) -> Result<()> {
        for n in 1..=count {
            if self.should_stop() {
                break;
            }

            self.tick()?;

            if n < count {
                std::thread::sleep(self.interval);
            }
        }
        Ok(())
    }

    /// Takes one snapshot and prints it.
    ///
    /// A failed query prints nothing. Under `ContinueOnError` it is logged and
    /// reported as `Skipped`; under `Fatal` the error is returned.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        match self.sampler.sample() {
            Ok(snapshot) => {
                write!(self.out, "\n{}", render(&snapshot))?;
                self.out.flush()?;
                Ok(TickOutcome::Printed)
            }
            Err(e) if e.is_metric_query() && self.policy == FailurePolicy::ContinueOnError => {
                log::warn!("{}; skipping this tick", e);
                Ok(TickOutcome::Skipped)
            }
            Err(e) => Err(e),
        }
    }
}
