//! Provider request and response types
//!
//! Wire-shaped representations of the stack-description and export calls.
//! Field renames follow the provider's PascalCase JSON.

use apigw_swagger_export_common::{ContentType, ExtensionType};
use serde::{Deserialize, Serialize};

/// Stack-description request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescribeStacksRequest {
    /// Name of the deployed stack
    #[serde(rename = "StackName")]
    pub stack_name: String,
}

/// Stack-description response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescribeStacksResponse {
    #[serde(rename = "Stacks", default)]
    pub stacks: Vec<Stack>,
}

/// One deployed stack record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stack {
    /// Key/value outputs exported by the stack
    #[serde(rename = "Outputs", default)]
    pub outputs: Vec<StackOutput>,
}

/// One stack output entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackOutput {
    #[serde(rename = "OutputKey")]
    pub output_key: String,

    #[serde(rename = "OutputValue")]
    pub output_value: String,
}

/// Export request for a deployed API stage
#[derive(Debug, Clone)]
pub struct GetExportRequest {
    /// Identifier of the deployed REST API
    pub rest_api_id: String,

    /// Deployment stage the export is taken from
    pub stage_name: String,

    /// Export document type; always `"swagger"` here
    pub export_type: String,

    /// Extensions variant included in the export
    pub extensions: ExtensionType,

    /// Accept content type the provider serializes the export into
    pub accepts: ContentType,
}

impl GetExportRequest {
    /// Build a swagger export request
    pub fn swagger(
        rest_api_id: &str,
        stage_name: &str,
        extensions: ExtensionType,
        accepts: ContentType,
    ) -> Self {
        Self {
            rest_api_id: rest_api_id.to_string(),
            stage_name: stage_name.to_string(),
            export_type: "swagger".to_string(),
            extensions,
            accepts,
        }
    }
}

/// Exported document as returned by the provider
///
/// The provider is expected to serialize the body in the requested accept
/// content type; the returned content type is reported but not validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportedDocument {
    /// Serialized document text
    #[serde(default)]
    pub body: Option<String>,

    /// Content type the provider reports for the body
    #[serde(rename = "contentType", default)]
    pub content_type: Option<String>,
}
