//! JSON output for scorecards and rejected throws.

use serde::Serialize;
use std::io::Write;
use strictly_bowling::BowlingError;

/// A throw the engine refused, as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// The input as typed.
    pub input: String,
    /// Why it was refused.
    pub error: String,
}

impl Rejection {
    /// Rejection for a line that is not a number.
    pub fn unparsable(input: &str) -> Self {
        Self {
            input: input.to_string(),
            error: format!("'{}' is not a pin count", input),
        }
    }

    /// Rejection carrying an engine error.
    pub fn from_error(input: &str, error: &BowlingError) -> Self {
        Self {
            input: input.to_string(),
            error: error.to_string(),
        }
    }
}

/// Writes `value` as one JSON document followed by a newline.
pub fn write_json<W: Write, T: Serialize>(
    writer: &mut W,
    value: &T,
    pretty: bool,
) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
