//! `aws` CLI backed provider client
//!
//! Binds the capability traits to the `aws` command line tool so the export
//! tool does not carry a full SDK. Every call is one CLI invocation with
//! `--output json`; the export body is routed through a temporary file, the
//! way the CLI itself delivers it.

use crate::api::{ExportApi, StackApi};
use crate::types::{DescribeStacksRequest, DescribeStacksResponse, ExportedDocument, GetExportRequest};
use apigw_swagger_export_common::{DownloadError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use tokio::process::Command;

/// Provider client driving the `aws` executable
///
/// The client is region-scoped; an optional named profile is forwarded to
/// every invocation.
pub struct AwsCliClient {
    region: String,
    profile: Option<String>,
}

/// JSON the CLI prints on stdout for a get-export call; the body itself
/// goes to the outfile argument.
#[derive(Debug, Default, Deserialize)]
struct GetExportMeta {
    #[serde(rename = "contentType", default)]
    content_type: Option<String>,
}

impl AwsCliClient {
    /// Create a client for one region
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            profile: None,
        }
    }

    /// Forward a named profile to every CLI invocation
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    fn base_args(&self) -> Vec<String> {
        let mut args = vec![
            "--region".to_string(),
            self.region.clone(),
            "--output".to_string(),
            "json".to_string(),
        ];
        if let Some(profile) = &self.profile {
            args.push("--profile".to_string());
            args.push(profile.clone());
        }
        args
    }

    fn describe_stacks_args(&self, request: &DescribeStacksRequest) -> Vec<String> {
        let mut args = vec![
            "cloudformation".to_string(),
            "describe-stacks".to_string(),
            "--stack-name".to_string(),
            request.stack_name.clone(),
        ];
        args.extend(self.base_args());
        args
    }

    fn get_export_args(&self, request: &GetExportRequest, body_path: &Path) -> Vec<String> {
        let mut args = vec![
            "apigateway".to_string(),
            "get-export".to_string(),
            "--rest-api-id".to_string(),
            request.rest_api_id.clone(),
            "--stage-name".to_string(),
            request.stage_name.clone(),
            "--export-type".to_string(),
            request.export_type.clone(),
            "--parameters".to_string(),
            format!("extensions={}", request.extensions),
            "--accepts".to_string(),
            request.accepts.to_string(),
        ];
        args.extend(self.base_args());
        args.push(body_path.display().to_string());
        args
    }

    async fn run(&self, args: Vec<String>) -> Result<Vec<u8>> {
        let output = Command::new("aws").args(&args).output().await?;

        if !output.status.success() {
            let call = args
                .first()
                .map(String::as_str)
                .unwrap_or("aws")
                .to_string();
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DownloadError::Provider(format!(
                "aws {} failed: {}",
                call,
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl StackApi for AwsCliClient {
    async fn describe_stacks(
        &self,
        request: DescribeStacksRequest,
    ) -> Result<DescribeStacksResponse> {
        let stdout = self.run(self.describe_stacks_args(&request)).await?;

        serde_json::from_slice(&stdout).map_err(|e| {
            DownloadError::Provider(format!("describe-stacks returned malformed JSON: {}", e))
        })
    }
}

#[async_trait]
impl ExportApi for AwsCliClient {
    async fn get_export(&self, request: GetExportRequest) -> Result<ExportedDocument> {
        let body_file = tempfile::NamedTempFile::new()?;
        let args = self.get_export_args(&request, body_file.path());

        let stdout = self.run(args).await?;
        let meta: GetExportMeta = serde_json::from_slice(&stdout).map_err(|e| {
            DownloadError::Provider(format!("get-export returned malformed JSON: {}", e))
        })?;

        let body = tokio::fs::read_to_string(body_file.path()).await?;

        Ok(ExportedDocument {
            body: Some(body),
            content_type: meta.content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigw_swagger_export_common::{ContentType, ExtensionType};

    #[test]
    fn test_describe_stacks_args() {
        let client = AwsCliClient::new("eu-west-1");
        let args = client.describe_stacks_args(&DescribeStacksRequest {
            stack_name: "my-service-dev".to_string(),
        });

        assert_eq!(
            args,
            vec![
                "cloudformation",
                "describe-stacks",
                "--stack-name",
                "my-service-dev",
                "--region",
                "eu-west-1",
                "--output",
                "json",
            ]
        );
    }

    #[test]
    fn test_profile_is_forwarded() {
        let client = AwsCliClient::new("us-east-1").with_profile("ci");
        let args = client.describe_stacks_args(&DescribeStacksRequest {
            stack_name: "svc-prod".to_string(),
        });

        assert!(args.windows(2).any(|w| w == ["--profile", "ci"]));
    }

    #[test]
    fn test_get_export_args() {
        let client = AwsCliClient::new("eu-west-1");
        let request = GetExportRequest::swagger(
            "abc123",
            "dev",
            ExtensionType::Integrations,
            ContentType::Yaml,
        );
        let args = client.get_export_args(&request, Path::new("/tmp/export-body"));

        assert_eq!(args[0], "apigateway");
        assert_eq!(args[1], "get-export");
        assert!(args.windows(2).any(|w| w == ["--rest-api-id", "abc123"]));
        assert!(args.windows(2).any(|w| w == ["--stage-name", "dev"]));
        assert!(args.windows(2).any(|w| w == ["--export-type", "swagger"]));
        assert!(args
            .windows(2)
            .any(|w| w == ["--parameters", "extensions=integrations"]));
        assert!(args
            .windows(2)
            .any(|w| w == ["--accepts", "application/yaml"]));
        assert_eq!(args.last().map(String::as_str), Some("/tmp/export-body"));
    }
}
