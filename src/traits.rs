use crate::decoder::TraceUnit;
use crate::errors::TraceResult;
use std::io::Write;

/// Anything that renders itself as text lines
pub trait TextDump {
    fn write_text<W: Write>(self, out: &mut W) -> TraceResult<()>
    where
        Self: Sized;
}

impl TextDump for TraceUnit {
    fn write_text<W: Write>(self, out: &mut W) -> TraceResult<()> {
        write!(out, "{}{}", self, self.terminator())?;
        Ok(())
    }
}
