//! Provider API capabilities for the swagger export tool
//!
//! The stack-description and export calls are modelled as explicit
//! capabilities so the download flow never reaches into ambient provider
//! state. An implementation issues exactly one request per call and returns
//! the provider response unchanged; `AwsCliClient` binds both capabilities
//! to the `aws` command line tool.

mod api;
mod aws_cli;
mod types;

pub use api::{ExportApi, StackApi};
pub use aws_cli::AwsCliClient;
pub use types::{
    DescribeStacksRequest, DescribeStacksResponse, ExportedDocument, GetExportRequest, Stack,
    StackOutput,
};
