//! Shared output helpers

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

use semv::Number;

/// Write a value as pretty-printed JSON followed by a newline
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// JSON number when it fits in a u64, otherwise the digit string
pub fn number_value(number: &Number) -> Value {
    match number.to_u64() {
        Some(n) => Value::from(n),
        None => Value::from(number.as_str()),
    }
}
