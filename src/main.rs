mod actions;
mod client;
mod fixtures;
mod report;
mod runner;
#[cfg(test)]
mod test_support;
mod types;
use actions::action_probe;
use anyhow::Result;
use seahorse::{App, Flag, FlagType};
use std::env;

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage("webhook-probe [--url <webhook url>] [--file <fixtures.json>]")
        .flag(
            Flag::new("url", FlagType::String)
                .description("Webhook to POST to (defaults to the built-in one)")
                .alias("u"),
        )
        .flag(
            Flag::new("file", FlagType::String)
                .description("Json file with one or many {name, payload} fixtures")
                .alias("f"),
        )
        .action(action_probe);
    app.run(args);
    Ok(())
}
