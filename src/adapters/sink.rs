use crate::core::{BrewEvent, NotificationSink, Step};
use crate::utils::error::Result;
use std::io::Write;

/// Routes every notification into the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, event: &BrewEvent) -> Result<()> {
        tracing::info!(step = %event.step, "{}", event.message);
        Ok(())
    }
}

/// Writes one line per notification, e.g. to stdout.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> NotificationSink for ConsoleSink<W> {
    fn notify(&mut self, event: &BrewEvent) -> Result<()> {
        writeln!(self.writer, "{}", event.message)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps every notification in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Vec<BrewEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[BrewEvent] {
        &self.events
    }

    pub fn steps(&self) -> Vec<Step> {
        self.events.iter().map(|event| event.step).collect()
    }

    pub fn count(&self, step: Step) -> usize {
        self.events.iter().filter(|event| event.step == step).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl NotificationSink for MemorySink {
    fn notify(&mut self, event: &BrewEvent) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
