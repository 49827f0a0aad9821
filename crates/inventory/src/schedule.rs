//! Daily maintenance scheduling seam.
//!
//! Nothing here reads a clock. "Day" is a logical counter advanced once per
//! `run_daily` call; the external trigger (cron, test, CLI script) decides
//! when that happens.

use tracing::debug;

use fridge_events::Notifier;

use crate::fridge::{Fridge, SweepReport};

/// Something that needs a maintenance pass once per logical day.
pub trait DailyRunnable {
    fn daily_update(&mut self) -> SweepReport;
}

impl<N: Notifier> DailyRunnable for Fridge<N> {
    fn daily_update(&mut self) -> SweepReport {
        self.daily_sweep()
    }
}

/// Drives [`DailyRunnable`]s.
pub trait DailyScheduler {
    /// Logical days elapsed so far.
    fn day(&self) -> u64;

    /// Run one day of maintenance.
    fn run_daily<R: DailyRunnable + ?Sized>(&mut self, runnable: &mut R) -> SweepReport;

    /// Run `days` consecutive days, returning one report per day.
    fn run_days<R: DailyRunnable + ?Sized>(&mut self, runnable: &mut R, days: u64) -> Vec<SweepReport> {
        (0..days).map(|_| self.run_daily(runnable)).collect()
    }
}

/// Simple synchronous scheduler that runs maintenance immediately in-process.
#[derive(Debug, Default, Copy, Clone)]
pub struct LocalDailyScheduler {
    day: u64,
}

impl LocalDailyScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from an arbitrary logical day.
    pub fn starting_at(day: u64) -> Self {
        Self { day }
    }
}

impl DailyScheduler for LocalDailyScheduler {
    fn day(&self) -> u64 {
        self.day
    }

    fn run_daily<R: DailyRunnable + ?Sized>(&mut self, runnable: &mut R) -> SweepReport {
        self.day += 1;
        debug!(day = self.day, "running daily maintenance");
        runnable.daily_update()
    }
}
