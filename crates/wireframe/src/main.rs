use anyhow::{Context as _, Result, bail};
use css::{WireframeOptions, process_css};
use log::info;
use std::env;
use std::fs;
use std::io::{self, Write as _};

/// Expand `@wireframe` in every stylesheet named on the command line and
/// write the results to stdout, in argument order.
pub fn main() -> Result<()> {
    env_logger::init();

    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        bail!("usage: wireframe <input.css>...");
    }

    let options = WireframeOptions::default();
    let mut stdout = io::stdout().lock();
    for path in &paths {
        let source = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
        let output =
            process_css(&source, &options).with_context(|| format!("failed to process {path}"))?;
        info!("processed {path}");
        stdout.write_all(output.as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}
