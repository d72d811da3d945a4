// Upload configuration: where resources are sent and which files are sent.
// Both are fixed; there are no flags or environment overrides.

use std::path::PathBuf;

/// Public STU3 test server the bundled examples are posted to.
pub const DEFAULT_BASE_URL: &str = "https://stu3.test.pyrohealth.net/fhir";

/// Bundled example resources, in upload order.
pub const RESOURCE_FILES: &[&str] = &[
    "resource-examples/Patient-f001.json",
    "resource-examples/Encounter-f001.json",
    "resource-examples/ProcedureRequest-f001.json",
    "resource-examples/Observation-f001.json",
    "resource-examples/Observation-f002.json",
    "resource-examples/DiagnosticReport-f001.json",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    pub base_url: String,
    pub files: Vec<PathBuf>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            files: RESOURCE_FILES.iter().map(PathBuf::from).collect(),
        }
    }
}
