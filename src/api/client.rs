use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use super::{AnalysisRequest, ApiError};
use crate::resource::DriftReport;

const API_VERSION_PATH: &str = "/api/v1";
const ERROR_BODY_CHARS: usize = 500;

#[derive(Clone)]
pub struct CasedClient {
    client: reqwest::Client,
    base_url: String,
}

impl CasedClient {
    /// `api_key` may be absent for dry runs, which never hit the network.
    pub fn new(api_key: Option<String>, base_url: &str) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(key) = api_key {
            let header_value = HeaderValue::from_str(&format!("Bearer {}", key)).map_err(|_| {
                ApiError::Auth {
                    message: "Invalid API key format".to_string(),
                }
            })?;
            headers.insert(AUTHORIZATION, header_value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
        })
    }

    pub fn analysis_url(&self, project: &str) -> String {
        format!(
            "{}{}/projects/{}/infra/local",
            self.base_url, API_VERSION_PATH, project
        )
    }

    /// Describes the request `analyze` would send, with credentials redacted.
    pub fn dry_run_preview(
        &self,
        project: &str,
        request: &AnalysisRequest,
    ) -> Result<String, ApiError> {
        let payload = serde_json::to_string_pretty(request)?;

        Ok(format!(
            "URL: {url}\n\
             \n\
             Headers:\n  \
             Authorization: Bearer [REDACTED]\n  \
             Content-Type: application/json\n\
             \n\
             Payload:\n\
             {payload}\n\
             \n\
             No API call will be made in dry-run mode.",
            url = self.analysis_url(project),
        ))
    }

    /// Sends the captured state for analysis. An empty JSON object in the
    /// response means there is nothing to report.
    pub async fn analyze(
        &self,
        project: &str,
        request: &AnalysisRequest,
    ) -> Result<Option<DriftReport>, ApiError> {
        let url = self.analysis_url(project);
        tracing::debug!(url = %url, environment = %request.environment, "posting terraform state");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body.chars().take(ERROR_BODY_CHARS).collect(),
            });
        }

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse {
                message: format!("Failed to parse response: {}", e),
            })?;

        if value.as_object().is_some_and(|obj| obj.is_empty()) {
            tracing::debug!("API returned an empty result");
            return Ok(None);
        }

        let report: DriftReport =
            serde_json::from_value(value).map_err(|e| ApiError::InvalidReport {
                message: e.to_string(),
            })?;

        tracing::debug!(
            managed = report.managed_resources.len(),
            unmanaged = report.unmanaged_resources.len(),
            missing = report.missing_resources.len(),
            "drift report received"
        );

        Ok(Some(report))
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').replace(API_VERSION_PATH, "")
}

impl std::fmt::Debug for CasedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CasedClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
