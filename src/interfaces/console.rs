use crate::domain::payment::Receipt;
use crate::error::Result;
use std::io::Write;

/// Writes receipt lines to any `Write` sink (e.g. stdout).
pub struct ReceiptWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_receipt(&mut self, receipt: &Receipt) -> Result<()> {
        writeln!(self.writer, "{receipt}")?;
        Ok(())
    }
}
