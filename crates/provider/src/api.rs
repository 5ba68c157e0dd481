//! Provider capability traits
//!
//! Each trait covers one provider call. Implementations must not retry or
//! reorder requests; the download sequence relies on every call mapping to
//! exactly one provider request.

use crate::types::{DescribeStacksRequest, DescribeStacksResponse, ExportedDocument, GetExportRequest};
use apigw_swagger_export_common::Result;
use async_trait::async_trait;

/// Capability to describe deployed infrastructure stacks
#[async_trait]
pub trait StackApi: Send + Sync {
    /// Fetch the stack records, including their key/value outputs
    async fn describe_stacks(
        &self,
        request: DescribeStacksRequest,
    ) -> Result<DescribeStacksResponse>;
}

/// Capability to export the definition of a deployed API
#[async_trait]
pub trait ExportApi: Send + Sync {
    /// Fetch the serialized export for one API stage
    async fn get_export(&self, request: GetExportRequest) -> Result<ExportedDocument>;
}
