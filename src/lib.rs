// Library root
// -----------
// This crate exposes a small library surface for the uploader binary.
// `main.rs` wires these modules together to push the bundled FHIR
// example resources to a server and print what came back.
//
// Module responsibilities:
// - `config`: Fixed base URL and resource file list.
// - `resources`: Loads the JSON documents from disk and derives the
//   resource type from each filename.
// - `api`: Blocking HTTP client that POSTs resources and interprets the
//   server's JSON responses.
// - `pipeline`: Loads every file, then uploads them; nothing is sent if
//   any file fails to load.
// - `ui`: Console rendering of upload results and the progress spinner.
// - `logging`: Terminal logger setup, optionally routed around the
//   progress spinner.
// - `error`: The error type shared by the modules above.
pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod resources;
pub mod ui;
