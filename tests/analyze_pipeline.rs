use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cased_tf::{CasedError, CommandOutput, Settings, ShowCommand, StateError, analyze};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct FakeShow {
    stdout: String,
}

#[async_trait]
impl ShowCommand for FakeShow {
    async fn show_json(&self, _working_dir: &Path) -> Result<CommandOutput, StateError> {
        Ok(CommandOutput {
            success: true,
            stdout: self.stdout.clone(),
            stderr: String::new(),
        })
    }
}

fn fake_show() -> Box<dyn ShowCommand> {
    Box::new(FakeShow {
        stdout: serde_json::json!({
            "format_version": "1.0",
            "values": {
                "root_module": {
                    "resources": [
                        {"type": "aws_s3_bucket", "name": "logs", "values": {"id": "logs-bucket"}}
                    ],
                    "child_modules": [
                        {
                            "address": "module.network",
                            "resources": [
                                {"type": "aws_vpc", "name": "main", "values": {"id": "vpc-123"}}
                            ]
                        }
                    ]
                }
            }
        })
        .to_string(),
    })
}

fn terraform_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.tf"), "").unwrap();
    fs::create_dir(dir.path().join(".terraform")).unwrap();
    dir
}

fn settings(working_dir: PathBuf, api_url: String, dry_run: bool) -> Settings {
    Settings {
        api_key: if dry_run {
            None
        } else {
            Some("test_key".to_string())
        },
        api_url,
        project: "acme/infra".to_string(),
        environment: "staging".to_string(),
        working_dir,
        dry_run,
        provider_prefix: "aws_".to_string(),
        terraform_bin: PathBuf::from("terraform"),
    }
}

#[tokio::test]
async fn test_dry_run_never_calls_api() {
    colored::control::set_override(false);
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = terraform_dir();
    let settings = settings(dir.path().to_path_buf(), mock_server.uri(), true);

    let mut out = Vec::new();
    let report = analyze::run(&settings, fake_show(), &mut out).await.unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(report.is_none());
    assert!(output.contains("Running terraform show..."));
    assert!(output.contains("aws_s3_bucket: logs (logs-bucket)"));
    assert!(output.contains("module.network (1 resources)"));
    assert!(output.contains("=== Dry Run - API Request Details ==="));
    assert!(output.contains("/api/v1/projects/acme/infra/infra/local"));
    assert!(output.contains("Authorization: Bearer [REDACTED]"));
    assert!(output.contains(r#""environment": "staging""#));
    assert!(!output.contains("Infrastructure Drift Report"));
}

#[tokio::test]
async fn test_live_run_prints_report() {
    colored::control::set_override(false);
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/projects/acme/infra/infra/local"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "managed_resources": [
                {
                    "service_name": "VPC",
                    "service_type": "aws_vpc",
                    "name": "main",
                    "id": "vpc-123",
                    "status": "drifted",
                    "drift": [
                        {"field": "cidr_block", "expected": "10.0.0.0/16", "actual": "10.1.0.0/16"}
                    ]
                }
            ],
            "unmanaged_resources": [
                {
                    "service_name": "S3",
                    "service_type": "aws_s3_bucket",
                    "name": "stray",
                    "id": "stray-bucket",
                    "status": "unmanaged"
                }
            ],
            "missing_resources": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = terraform_dir();
    let settings = settings(dir.path().to_path_buf(), mock_server.uri(), false);

    let mut out = Vec::new();
    let report = analyze::run(&settings, fake_show(), &mut out)
        .await
        .unwrap()
        .unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(report.managed_resources.len(), 1);
    assert!(output.contains("Analyzing infrastructure..."));
    assert!(output.contains("=== Infrastructure Drift Report ==="));
    assert!(output.contains("• VPC - main (vpc-123)"));
    assert!(output.contains("    - cidr_block: expected 10.0.0.0/16, got 10.1.0.0/16"));
    assert!(output.contains("• S3 - stray (stray-bucket)"));
    assert!(!output.contains("Missing Resources"));
}

#[tokio::test]
async fn test_uninitialized_directory_stops_before_api() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.tf"), "").unwrap();
    let settings = settings(dir.path().to_path_buf(), mock_server.uri(), false);

    let mut out = Vec::new();
    let err = analyze::run(&settings, fake_show(), &mut out)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CasedError::State(StateError::NotInitialized { .. })
    ));
}

#[tokio::test]
async fn test_api_failure_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("project not found"))
        .mount(&mock_server)
        .await;

    let dir = terraform_dir();
    let settings = settings(dir.path().to_path_buf(), mock_server.uri(), false);

    let mut out = Vec::new();
    let err = analyze::run(&settings, fake_show(), &mut out)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), cased_tf::ErrorKind::Usage);
    assert!(err.to_string().contains("API error (404): project not found"));
}
