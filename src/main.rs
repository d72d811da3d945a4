// Entrypoint for the uploader.
// - Keeps `main` small: load the bundled resources, post them, print results.
// - Returns `anyhow::Result` so any failure ends the run with its cause chain.

use anyhow::Context;
use fhir_uploader::{config::UploadConfig, logging, pipeline, ui};
use indicatif::MultiProgress;
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    // Log lines go through the progress display so they don't tear the spinner.
    let progress = MultiProgress::new();
    logging::initialize_with_progress(LevelFilter::Info, &progress);

    let config = UploadConfig::default();

    let spinner = ui::upload_spinner(&progress);
    let results = pipeline::run_with(&config, |item| {
        spinner.set_message(format!("Uploading {}...", item.resource_type));
    });
    spinner.finish_and_clear();
    let results = results.context("Uploading resources")?;

    ui::print_results(&results).context("Writing results")?;
    Ok(())
}
