// API client module: a small blocking HTTP client that posts FHIR resources
// to a server, one request per resource, and records what the server said.

use log::{debug, info, warn};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_CHARSET};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, UploadError};
use crate::resources::UploadItem;

/// Media type requested for server responses.
pub const FHIR_JSON_MIME: &str = "application/fhir+json";

/// What the server returned for one upload.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Server-assigned id of the created resource.
    Id(String),
    /// `issue[0].details` of a rejected upload, as the server sent it.
    /// STU3 servers put a CodeableConcept here, so the raw JSON is kept.
    Issue(Value),
    /// Rejected upload whose body is not an operation outcome.
    Raw { status: u16, body: String },
}

impl Outcome {
    /// The value shown to the user: the id, the issue details, or the body.
    pub fn to_value(&self) -> Value {
        match self {
            Outcome::Id(id) => Value::String(id.clone()),
            Outcome::Issue(details) => details.clone(),
            Outcome::Raw { body, .. } => Value::String(body.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadResult {
    pub resource_type: String,
    pub outcome: Outcome,
}

/// Body of a successful create. Only the id is of interest.
#[derive(Deserialize)]
struct Created {
    id: Option<String>,
}

/// Minimal view of a FHIR OperationOutcome.
#[derive(Deserialize)]
struct OperationOutcome {
    #[serde(default)]
    issue: Vec<Issue>,
}

#[derive(Deserialize)]
struct Issue {
    details: Option<Value>,
}

/// Blocking client bound to a single FHIR base URL.
pub struct FhirClient {
    client: Client,
    base_url: String,
}

impl FhirClient {
    /// Build a client for `base_url`. Every request asks for FHIR JSON in
    /// UTF-8.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .default_headers(Self::fhir_headers())
            .build()
            .map_err(UploadError::Client)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(FhirClient { client, base_url })
    }

    fn fhir_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(FHIR_JSON_MIME));
        headers.insert(ACCEPT_CHARSET, HeaderValue::from_static("UTF-8"));
        headers
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint for a resource type, e.g. `<base>/Patient`.
    pub fn resource_url(&self, resource_type: &str) -> String {
        format!("{}/{}", self.base_url, resource_type)
    }

    /// POST one resource and interpret the response.
    pub fn upload(&self, item: &UploadItem) -> Result<UploadResult> {
        let url = self.resource_url(&item.resource_type);
        info!("uploading {} to {}", item.resource_type, url);
        let res = self
            .client
            .post(&url)
            .json(&item.payload)
            .send()
            .map_err(|source| UploadError::Request {
                resource_type: item.resource_type.clone(),
                source,
            })?;
        debug!("{} upload returned {}", item.resource_type, res.status());

        let outcome = if res.status().is_success() {
            Self::created_id(&item.resource_type, res)?
        } else {
            Self::rejection(&item.resource_type, res)?
        };
        Ok(UploadResult {
            resource_type: item.resource_type.clone(),
            outcome,
        })
    }

    /// Upload every item in order, stopping at the first transport failure.
    pub fn upload_all(&self, items: &[UploadItem]) -> Result<Vec<UploadResult>> {
        self.upload_all_with(items, |_| {})
    }

    /// Like [`upload_all`](Self::upload_all), calling `on_start` before each
    /// request so callers can report progress.
    pub fn upload_all_with<F>(&self, items: &[UploadItem], mut on_start: F) -> Result<Vec<UploadResult>>
    where
        F: FnMut(&UploadItem),
    {
        let mut results = Vec::with_capacity(items.len());
        for item in items {
            on_start(item);
            results.push(self.upload(item)?);
        }
        Ok(results)
    }

    fn created_id(resource_type: &str, res: Response) -> Result<Outcome> {
        let created: Created = res.json().map_err(|source| UploadError::Decode {
            resource_type: resource_type.to_string(),
            source,
        })?;
        created
            .id
            .map(Outcome::Id)
            .ok_or_else(|| UploadError::MissingId {
                resource_type: resource_type.to_string(),
            })
    }

    fn rejection(resource_type: &str, res: Response) -> Result<Outcome> {
        let status = res.status();
        let body = res.text().map_err(|source| UploadError::Decode {
            resource_type: resource_type.to_string(),
            source,
        })?;
        warn!("server rejected {}: {}", resource_type, status);
        Ok(issue_details(&body).map(Outcome::Issue).unwrap_or(Outcome::Raw {
            status: status.as_u16(),
            body,
        }))
    }
}

/// `issue[0].details` of an OperationOutcome body, if the body is one.
fn issue_details(body: &str) -> Option<Value> {
    let outcome: OperationOutcome = serde_json::from_str(body).ok()?;
    outcome.issue.into_iter().next()?.details
}

/// Upload `items` to `base_url` with a fresh client.
pub fn upload_all(items: &[UploadItem], base_url: &str) -> Result<Vec<UploadResult>> {
    FhirClient::new(base_url)?.upload_all(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn issue_details_takes_first_issue() {
        let body = r#"{"resourceType":"OperationOutcome","issue":[{"details":"invalid"},{"details":"other"}]}"#;
        assert_eq!(issue_details(body), Some(json!("invalid")));
    }

    #[test]
    fn issue_details_keeps_codeable_concept() {
        let body = r#"{"issue":[{"severity":"error","details":{"text":"bad reference"}}]}"#;
        assert_eq!(issue_details(body), Some(json!({"text": "bad reference"})));
    }

    #[test]
    fn issue_details_absent_for_other_bodies() {
        assert_eq!(issue_details("<html>502 Bad Gateway</html>"), None);
        assert_eq!(issue_details(r#"{"issue":[]}"#), None);
        assert_eq!(issue_details(r#"{"issue":[{"severity":"error"}]}"#), None);
    }

    #[test]
    fn outcome_value_is_the_plain_payload() {
        assert_eq!(Outcome::Id("123".into()).to_value(), json!("123"));
        assert_eq!(
            Outcome::Raw {
                status: 500,
                body: "oops".into()
            }
            .to_value(),
            json!("oops")
        );
    }

    #[test]
    fn resource_url_trims_trailing_slash() {
        let client = FhirClient::new("http://localhost:8080/fhir/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/fhir");
        assert_eq!(client.resource_url("Patient"), "http://localhost:8080/fhir/Patient");
    }
}
