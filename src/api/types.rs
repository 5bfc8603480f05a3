use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/projects/{project}/infra/local`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub terraform_show_output: serde_json::Value,
    pub environment: String,
}

impl AnalysisRequest {
    pub fn new(terraform_show_output: serde_json::Value, environment: impl Into<String>) -> Self {
        Self {
            terraform_show_output,
            environment: environment.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_field_names() {
        let request = AnalysisRequest::new(json!({"format_version": "1.0"}), "staging");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["environment"], "staging");
        assert_eq!(value["terraform_show_output"]["format_version"], "1.0");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
