use fhir_uploader::logging::initialize_with_progress;
use fhir_uploader::ui::upload_spinner;
use indicatif::{MultiProgress, ProgressDrawTarget};
use log::LevelFilter;

// Own test binary: the global logger can only be installed once per process.
#[test]
fn logger_runs_behind_progress_display() {
    let progress = MultiProgress::with_draw_target(ProgressDrawTarget::hidden());
    initialize_with_progress(LevelFilter::Info, &progress);

    assert_eq!(log::max_level(), LevelFilter::Info);
    assert!(log::log_enabled!(log::Level::Info));
    assert!(!log::log_enabled!(log::Level::Debug));

    let spinner = upload_spinner(&progress);
    spinner.set_message("Uploading Patient...");
    log::info!("uploading Patient to http://localhost/fhir/Patient");
    log::warn!("server rejected Patient: 400 Bad Request");
    spinner.finish_and_clear();
    assert!(spinner.is_finished());
}
