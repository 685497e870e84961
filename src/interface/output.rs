use anyhow::{Context, Result};
use std::io::Write;

use crate::kernel::action::Action;

/// Writes one protocol line per action and flushes so the referee sees it
/// before its turn timer runs out.
pub struct ActionWriter<W> {
    out: W,
}

impl<W: Write> ActionWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn emit(&mut self, action: &Action) -> Result<()> {
        writeln!(self.out, "{}", action).context("writing action")?;
        self.out.flush().context("flushing stdout")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
