use std::io::{self, Write};

use super::render::SinkCommand;

/// Receives rendered output. Append-only: commands are never retracted.
pub trait PresentationSink {
    fn apply(&mut self, command: SinkCommand) -> io::Result<()>;
}

/// Collects commands in memory.
impl PresentationSink for Vec<SinkCommand> {
    fn apply(&mut self, command: SinkCommand) -> io::Result<()> {
        self.push(command);
        Ok(())
    }
}

/// Writes counters and timeline entries as plain text.
pub struct TerminalSink<W: Write> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PresentationSink for TerminalSink<W> {
    fn apply(&mut self, command: SinkCommand) -> io::Result<()> {
        match command {
            SinkCommand::SetCounter { slot, value } => {
                writeln!(self.out, "{:<12}{}", format!("{}:", slot.label()), value)
            }
            SinkCommand::AppendEntry(row) => {
                writeln!(self.out, "{} {}", row.name, row.handle)?;
                writeln!(self.out, "    {}", row.message)
            }
        }
    }
}
