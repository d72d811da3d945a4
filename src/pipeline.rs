// Upload run: load every configured file first, then post them in order.
// Nothing is sent unless all files load.

use crate::api::{FhirClient, UploadResult};
use crate::config::UploadConfig;
use crate::error::Result;
use crate::resources::{self, UploadItem};

/// Load the configured files and upload them to the configured server.
pub fn run(config: &UploadConfig) -> Result<Vec<UploadResult>> {
    run_with(config, |_| {})
}

/// Like [`run`], calling `on_start` before each upload.
pub fn run_with<F>(config: &UploadConfig, on_start: F) -> Result<Vec<UploadResult>>
where
    F: FnMut(&UploadItem),
{
    let items = resources::load_items(&config.files)?;
    let client = FhirClient::new(config.base_url.as_str())?;
    client.upload_all_with(&items, on_start)
}
