// Error type for loading and uploading resources. Every variant aborts the
// run; server rejections are results, not errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a load or upload run.
///
/// Server-side rejections of a resource are not represented here; those are
/// recorded as an [`Outcome`](crate::api::Outcome) in the result list.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to read resource file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("resource file '{}' is not valid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("failed to send {resource_type} upload request")]
    Request {
        resource_type: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to decode {resource_type} upload response")]
    Decode {
        resource_type: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("server accepted {resource_type} but returned no id")]
    MissingId { resource_type: String },
}

pub type Result<T> = std::result::Result<T, UploadError>;
