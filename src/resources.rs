// Resource loading: reads the JSON documents from disk and pairs each one
// with the resource type encoded in its filename (`Patient-f001.json`).

use std::fs;
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::error::{Result, UploadError};

/// One resource ready to be posted: its FHIR type and the parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadItem {
    pub resource_type: String,
    pub payload: Value,
}

/// Text before the first hyphen of the file's basename. A name without a
/// hyphen yields the whole basename, extension included.
pub fn resource_type_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name.split('-').next().unwrap_or_default().to_string()
}

/// Read and parse every file in order. Stops at the first file that is
/// missing or malformed.
pub fn load_items<P: AsRef<Path>>(files: &[P]) -> Result<Vec<UploadItem>> {
    files.iter().map(|f| load_item(f.as_ref())).collect()
}

fn load_item(path: &Path) -> Result<UploadItem> {
    let text = fs::read_to_string(path).map_err(|source| UploadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let payload = serde_json::from_str(&text).map_err(|source| UploadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let resource_type = resource_type_from_path(path);
    debug!("loaded {} from {}", resource_type, path.display());
    Ok(UploadItem {
        resource_type,
        payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_is_prefix_before_first_hyphen() {
        assert_eq!(
            resource_type_from_path(Path::new("resource-examples/Patient-f001.json")),
            "Patient"
        );
        assert_eq!(
            resource_type_from_path(Path::new("DiagnosticReport-f001-extra.json")),
            "DiagnosticReport"
        );
    }

    #[test]
    fn type_without_hyphen_is_whole_name() {
        assert_eq!(
            resource_type_from_path(Path::new("dir-with-hyphen/Bundle.json")),
            "Bundle.json"
        );
    }
}
