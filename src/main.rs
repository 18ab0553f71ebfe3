//! Lunara: menstrual-health analytics core.
//!
//! Thin CLI caller for the two analysis boundaries: reads a JSON body from
//! stdin and prints the response envelope to stdout.

use std::io::Read;

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lunara::application::{assessment, prediction};

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean JSON channel.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mode = std::env::args().nth(1).unwrap_or_default();

    let mut body = String::new();
    std::io::stdin()
        .read_to_string(&mut body)
        .context("reading request body from stdin")?;

    let output = match mode.as_str() {
        "analyze" => serde_json::to_string_pretty(&assessment::analyze(&body))?,
        "predict" => serde_json::to_string_pretty(&prediction::predict(&body))?,
        _ => bail!("usage: lunara <analyze|predict> < body.json"),
    };

    println!("{output}");
    Ok(())
}
