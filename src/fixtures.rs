use crate::types::TestCase;
use anyhow::{bail, Context, Result};
use std::{fs, path::Path};

pub const DEFAULT_WEBHOOK_URL: &str =
    "https://sanju14151.app.n8n.cloud/webhook/70551e0c-8eff-434d-8c1a-e4107e5e8a43/chat";

pub fn builtin() -> Vec<TestCase> {
    vec![
        TestCase::new(
            "Basic Message",
            &[
                ("chatInput", "Hello test message"),
                ("sessionId", "test-123"),
                ("action", "sendMessage"),
            ],
        ),
        TestCase::new(
            "Email Request",
            &[
                ("chatInput", "Send a thank you email to john@example.com"),
                ("sessionId", "test-456"),
                ("action", "sendMessage"),
            ],
        ),
        TestCase::new(
            "Alternative Fields",
            &[
                ("message", "Help me write an email"),
                ("session_id", "test-789"),
                ("action", "sendMessage"),
            ],
        ),
    ]
}

/// Accepts either an array of cases or a single case.
pub fn open_file<P: AsRef<Path>>(path: P) -> Result<Vec<TestCase>>
where
    P: std::fmt::Debug,
{
    let file = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to open fixture file: {:?}", path))?;
    let cases = match serde_json::from_str::<Vec<TestCase>>(&file) {
        Ok(c) => c,
        Err(_) => match serde_json::from_str::<TestCase>(&file) {
            Ok(c) => vec![c],
            Err(e) => bail!("Failed to parse fixtures in {:?}: {}", path, e),
        },
    };
    if cases.is_empty() {
        bail!("No fixtures in {:?}", path);
    }
    if let Some(pos) = cases.iter().position(|c| c.name.trim().is_empty()) {
        bail!("Fixture #{} in {:?} has an empty name", pos + 1, path);
    }
    Ok(cases)
}
