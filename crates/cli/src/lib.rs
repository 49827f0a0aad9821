//! `fridge-cli` — scripted harness around the fridge engine.
//!
//! The binary only parses arguments; everything it does goes through
//! [`Session`], so scripts can be exercised in tests against any writer.

pub mod script;

use std::io::Write;

use anyhow::{Context, Result};

use fridge_events::Notifier;
use fridge_inventory::{DailyScheduler, Fridge, LocalDailyScheduler};

use crate::script::Command;

/// A fridge plus the logical-day scheduler driving its sweeps.
pub struct Session<N: Notifier, W: Write> {
    fridge: Fridge<N>,
    scheduler: LocalDailyScheduler,
    out: W,
}

impl<N: Notifier, W: Write> Session<N, W> {
    pub fn new(fridge: Fridge<N>, out: W) -> Self {
        Self {
            fridge,
            scheduler: LocalDailyScheduler::new(),
            out,
        }
    }

    pub fn fridge(&self) -> &Fridge<N> {
        &self.fridge
    }

    pub fn day(&self) -> u64 {
        self.scheduler.day()
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Parse and run a whole script, stopping at the first failing line.
    pub fn run_script(&mut self, source: &str) -> Result<()> {
        for (line, command) in script::parse(source)? {
            self.execute(&command)
                .with_context(|| format!("line {line}: {command:?} failed"))?;
        }
        Ok(())
    }

    pub fn execute(&mut self, command: &Command) -> Result<()> {
        match command {
            Command::Put { name, quantity } => self.fridge.stock_in(name, *quantity)?,
            Command::Exit { name, quantity } => self.fridge.stock_out(name, *quantity)?,
            Command::Sweep { days } => {
                for report in self.scheduler.run_days(&mut self.fridge, *days) {
                    tracing::debug!(
                        pruned = report.pruned.len(),
                        spoiled = report.spoiled_units(),
                        "sweep finished"
                    );
                }
            }
            Command::Show { freshness } => {
                let text = self.fridge.summary(*freshness);
                self.out.write_all(text.as_bytes())?;
            }
            Command::Export => {
                let json = serde_json::to_string_pretty(&self.fridge.to_record())?;
                writeln!(self.out, "{json}")?;
            }
        }
        Ok(())
    }
}
