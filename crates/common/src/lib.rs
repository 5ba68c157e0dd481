//! Common types and utilities for the API Gateway swagger export tool
//!
//! This crate contains the shared error type, the project configuration
//! loader, and the content-type and export-extension resolution used across
//! the provider, download, and CLI components.

pub mod config;
pub mod content;

pub use config::{CustomVars, DocumentationConfig, DocumentationSection, ProjectConfig, ProviderSettings};
pub use content::{ContentType, ExtensionType};

use thiserror::Error;

/// Errors that can occur while downloading API documentation
#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("no AwsDocApiId output found on stack {0}")]
    ApiIdNotFound(String),

    #[error("export request returned no body")]
    EmptyResponse,

    #[error("no documentation version configured")]
    MissingVersionConfig,

    #[error("parse error: {0}")]
    Parse(String),

    #[error("provider request failed: {0}")]
    Provider(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for download operations
pub type Result<T> = std::result::Result<T, DownloadError>;
