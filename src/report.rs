use crate::types::{Outcome, ResponseRecord, TestCase};
use anyhow::Result;
use serde_json::Value;
use std::io::Write;

const SEPARATOR_WIDTH: usize = 50;

pub fn case_header<W: Write>(out: &mut W, case: &TestCase) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "🧪 Testing: {}", case.name)?;
    writeln!(
        out,
        "📤 Payload: {}",
        serde_json::to_string_pretty(&case.payload)?
    )?;
    Ok(())
}

pub fn response<W: Write>(out: &mut W, record: &ResponseRecord) -> Result<()> {
    writeln!(out, "📊 Status: {}", record.status)?;
    writeln!(out, "📋 Headers: {}", serde_json::to_string(&record.headers)?)?;
    writeln!(out, "📄 Raw Response: \"{}\"", record.body)?;
    outcome(out, &record.outcome())
}

pub fn outcome<W: Write>(out: &mut W, outcome: &Outcome) -> Result<()> {
    match outcome {
        Outcome::Success(data) => writeln!(out, "✅ Success: {}", data)?,
        Outcome::SuccessNonJson => writeln!(out, "⚠️ Non-JSON response but status OK")?,
        Outcome::ErrorDetails(data) => writeln!(out, "❌ Error Details: {}", pretty(data)?)?,
        Outcome::RawError(text) => writeln!(out, "❌ Raw Error: \"{}\"", text)?,
        Outcome::NetworkError(message) => writeln!(out, "🚫 Network Error: {}", message)?,
    }
    Ok(())
}

pub fn separator<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", "─".repeat(SEPARATOR_WIDTH))?;
    Ok(())
}

fn pretty(v: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(v)?)
}
