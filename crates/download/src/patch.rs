//! Version patching for exported documents
//!
//! The provider stamps its own deployment timestamp into the export's
//! `info.version`; this module rewrites that field to the version
//! configured for the project, leaving the rest of the document untouched.
//! Parsing and re-serializing a document that was just downloaded is not
//! free, but this runs once per invocation of a deployment command.

use apigw_swagger_export_common::{ContentType, DocumentationConfig, DownloadError, Result};
use serde::Serialize;

/// Rewrite `info.version` in an exported document.
///
/// The document is parsed according to `content_type`, the version field
/// is replaced with the configured value, and the document is serialized
/// back in the same format. The call never panics: a missing version
/// configuration, a malformed document, or a document without an `info`
/// object all come back as typed errors, and nothing is written anywhere.
pub fn patch_version(
    raw: &str,
    documentation: Option<&DocumentationConfig>,
    content_type: ContentType,
) -> Result<String> {
    let version = documentation
        .and_then(|config| config.resolved_version())
        .ok_or(DownloadError::MissingVersionConfig)?;

    match content_type {
        ContentType::Json => patch_json(raw, version),
        ContentType::Yaml => patch_yaml(raw, version),
    }
}

fn patch_json(raw: &str, version: &str) -> Result<String> {
    let mut document: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| DownloadError::Parse(format!("invalid JSON export: {}", e)))?;

    let info = document
        .get_mut("info")
        .and_then(|info| info.as_object_mut())
        .ok_or_else(|| DownloadError::Parse("export has no info object".to_string()))?;
    info.insert(
        "version".to_string(),
        serde_json::Value::String(version.to_string()),
    );

    // Swagger exports are conventionally pretty-printed with four spaces
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    document
        .serialize(&mut serializer)
        .map_err(|e| DownloadError::Parse(format!("failed to serialize JSON export: {}", e)))?;

    String::from_utf8(out)
        .map_err(|e| DownloadError::Parse(format!("serialized export is not UTF-8: {}", e)))
}

fn patch_yaml(raw: &str, version: &str) -> Result<String> {
    let mut document: serde_yaml::Value = serde_yaml::from_str(raw)
        .map_err(|e| DownloadError::Parse(format!("invalid YAML export: {}", e)))?;

    let info = document
        .get_mut("info")
        .and_then(|info| info.as_mapping_mut())
        .ok_or_else(|| DownloadError::Parse("export has no info object".to_string()))?;
    info.insert(
        serde_yaml::Value::String("version".to_string()),
        serde_yaml::Value::String(version.to_string()),
    );

    serde_yaml::to_string(&document)
        .map_err(|e| DownloadError::Parse(format!("failed to serialize YAML export: {}", e)))
}
