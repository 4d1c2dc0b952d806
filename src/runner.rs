use crate::{
    client::Webhook,
    report,
    types::{CaseReport, Outcome, TestCase},
};
use anyhow::Result;
use log::{debug, info, warn};
use std::io::Write;

/// Posts every case in order, one at a time. Only a failure to write the
/// report stops the run.
pub fn run<H, W>(webhook: &H, cases: &[TestCase], out: &mut W) -> Result<Vec<CaseReport>>
where
    H: Webhook + ?Sized,
    W: Write,
{
    let mut reports = Vec::with_capacity(cases.len());
    for case in cases {
        report::case_header(out, case)?;
        debug!("case {:?} -> {}", case.name, webhook.url());
        let outcome = match webhook.post(&case.payload) {
            Ok(record) => {
                report::response(out, &record)?;
                record.outcome()
            }
            Err(e) => {
                let message = format!("{:#}", e);
                warn!("case {:?} failed: {}", case.name, message);
                let outcome = Outcome::NetworkError(message);
                report::outcome(out, &outcome)?;
                outcome
            }
        };
        report::separator(out)?;
        out.flush()?;
        reports.push(CaseReport {
            name: case.name.clone(),
            outcome,
        });
    }
    let ok = reports.iter().filter(|r| r.outcome.is_success()).count();
    info!(
        "{} cases run against {}: {} ok, {} failed",
        reports.len(),
        webhook.url(),
        ok,
        reports.len() - ok
    );
    Ok(reports)
}
