//! Documentation download flow
//!
//! This crate implements the export operation end to end: resolve the
//! documentation API id from the deployed stack's outputs, fetch the
//! swagger export for the stage, optionally rewrite its `info.version`
//! to the configured value, and write the result to a file.

pub mod downloader;
pub mod export;
pub mod patch;
pub mod stack;

pub use downloader::{DocumentationDownloader, DownloadOptions, DownloadReport};
pub use export::fetch_export;
pub use patch::patch_version;
pub use stack::{resolve_api_id, API_ID_OUTPUT_KEY};
