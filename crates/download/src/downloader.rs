//! Download orchestration
//!
//! Sequences the stack lookup, the export request, the optional version
//! rewrite, and the file write. Every step either succeeds or aborts the
//! whole download; nothing is retried and no partial result is written.

use crate::export::fetch_export;
use crate::patch::patch_version;
use crate::stack::resolve_api_id;
use apigw_swagger_export_common::{
    ContentType, DownloadError, ExtensionType, ProjectConfig, Result,
};
use apigw_swagger_export_provider::{ExportApi, StackApi};
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

/// Options for one download invocation
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Path the export is written to; its extension selects JSON or YAML
    pub output_file: PathBuf,

    /// Overwrite `info.version` with the configured documentation version
    pub fix_version: bool,

    /// Requested export extensions variant; unknown values fall back to
    /// `integrations`
    pub extensions: Option<String>,
}

/// What one completed download did
#[derive(Debug, Clone)]
pub struct DownloadReport {
    pub stack_name: String,
    pub rest_api_id: String,
    pub content_type: ContentType,
    pub extensions: ExtensionType,
    pub patched: bool,
    pub bytes_written: usize,
}

/// Orchestrates one documentation download over explicit provider
/// capabilities
pub struct DocumentationDownloader<'a> {
    stacks: &'a dyn StackApi,
    exports: &'a dyn ExportApi,
}

impl<'a> DocumentationDownloader<'a> {
    /// Create a downloader over the given provider capabilities
    pub fn new(stacks: &'a dyn StackApi, exports: &'a dyn ExportApi) -> Self {
        Self { stacks, exports }
    }

    /// Run the full download sequence and write the export to disk.
    ///
    /// Steps run strictly in order, each awaited before the next: resolve
    /// the API id from the stack outputs, fetch the export in the content
    /// type implied by the output file name, patch the version when
    /// requested, then write the file in one operation.
    pub async fn run(
        &self,
        config: &ProjectConfig,
        options: &DownloadOptions,
    ) -> Result<DownloadReport> {
        let stack_name = config.stack_name();

        let rest_api_id = resolve_api_id(self.stacks, &stack_name)
            .await?
            .ok_or_else(|| DownloadError::ApiIdNotFound(stack_name.clone()))?;

        let file_name = options
            .output_file
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or("");
        let content_type = ContentType::for_file_name(file_name);
        let extensions = ExtensionType::resolve(options.extensions.as_deref());

        let export = fetch_export(
            self.exports,
            &rest_api_id,
            &config.provider.stage,
            extensions,
            content_type,
        )
        .await?;

        let raw = export.body.ok_or(DownloadError::EmptyResponse)?;
        let body = if options.fix_version {
            patch_version(&raw, config.custom.documentation.as_ref(), content_type)?
        } else {
            raw
        };

        fs::write(&options.output_file, &body)?;

        Ok(DownloadReport {
            stack_name,
            rest_api_id,
            content_type,
            extensions,
            patched: options.fix_version,
            bytes_written: body.len(),
        })
    }
}
