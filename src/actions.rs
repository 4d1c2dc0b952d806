use crate::{
    client::WebhookClient,
    fixtures::{self, DEFAULT_WEBHOOK_URL},
    runner,
    types::{CaseReport, TestCase},
};
use anyhow::Result;
use log::error;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub url: String,
    pub file: Option<String>,
}

impl Settings {
    pub fn from_flags(url: Option<String>, file: Option<String>) -> Self {
        Self {
            url: url.unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string()),
            file,
        }
    }

    pub fn cases(&self) -> Result<Vec<TestCase>> {
        match &self.file {
            Some(path) => fixtures::open_file(path),
            None => Ok(fixtures::builtin()),
        }
    }
}

pub fn action_probe(c: &seahorse::Context) {
    let settings = Settings::from_flags(c.string_flag("url").ok(), c.string_flag("file").ok());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = probe(&settings, &mut out) {
        error!("{:#}", e);
    }
}

fn probe<W: Write>(settings: &Settings, out: &mut W) -> Result<Vec<CaseReport>> {
    let cases = settings.cases()?;
    let client = WebhookClient::new(settings.url.as_str())?;
    runner::run(&client, &cases, out)
}
