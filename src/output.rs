//! Output formatting for the command-line lookups.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(mut writer: W, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
