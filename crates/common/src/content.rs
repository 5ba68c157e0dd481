//! Content-type and export-extension resolution
//!
//! The accept content type follows the output file's extension, and the
//! export extensions parameter falls back to a fixed default when the
//! requested value is not one the provider understands.

use serde::{Deserialize, Serialize};

/// Serialization format of an exported document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    /// `application/json`
    Json,
    /// `application/yaml`
    Yaml,
}

impl ContentType {
    /// Pick the accept content type from the output file name.
    ///
    /// The extension is the substring after the last `'.'` (empty when the
    /// name has none). `yml` and `yaml` select YAML; anything else,
    /// including a missing or unknown extension, selects JSON. The match is
    /// case-sensitive, so `API.YML` still downloads as JSON.
    pub fn for_file_name(file_name: &str) -> Self {
        match file_extension(file_name) {
            "yml" | "yaml" => ContentType::Yaml,
            _ => ContentType::Json,
        }
    }

    /// MIME string sent as the export accept header
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Yaml => "application/yaml",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extensions variant of an API Gateway export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExtensionType {
    #[default]
    Integrations,
    Apigateway,
    Authorizers,
    Postman,
}

impl ExtensionType {
    /// Map the requested extensions argument onto a supported variant.
    ///
    /// Unknown or absent values fall back to `integrations`.
    pub fn resolve(requested: Option<&str>) -> Self {
        match requested {
            Some("integrations") => ExtensionType::Integrations,
            Some("apigateway") => ExtensionType::Apigateway,
            Some("authorizers") => ExtensionType::Authorizers,
            Some("postman") => ExtensionType::Postman,
            _ => ExtensionType::Integrations,
        }
    }

    /// Value passed in the export request parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtensionType::Integrations => "integrations",
            ExtensionType::Apigateway => "apigateway",
            ExtensionType::Authorizers => "authorizers",
            ExtensionType::Postman => "postman",
        }
    }
}

impl std::fmt::Display for ExtensionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn file_extension(file_name: &str) -> &str {
    file_name
        .rfind('.')
        .map(|dot| &file_name[dot + 1..])
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_extensions_select_yaml() {
        assert_eq!(ContentType::for_file_name("api.yml"), ContentType::Yaml);
        assert_eq!(ContentType::for_file_name("api.yaml"), ContentType::Yaml);
        assert_eq!(
            ContentType::for_file_name("docs.export.yaml"),
            ContentType::Yaml
        );
    }

    #[test]
    fn test_everything_else_selects_json() {
        assert_eq!(ContentType::for_file_name("api.json"), ContentType::Json);
        assert_eq!(ContentType::for_file_name("api.txt"), ContentType::Json);
        assert_eq!(ContentType::for_file_name("api"), ContentType::Json);
        assert_eq!(ContentType::for_file_name(""), ContentType::Json);
        // Case-sensitive: upper-case extensions are not recognized
        assert_eq!(ContentType::for_file_name("api.YAML"), ContentType::Json);
    }

    #[test]
    fn test_content_type_strings() {
        assert_eq!(ContentType::Json.as_str(), "application/json");
        assert_eq!(ContentType::Yaml.to_string(), "application/yaml");
    }

    #[test]
    fn test_known_extension_types_pass_through() {
        for (arg, expected) in [
            ("integrations", ExtensionType::Integrations),
            ("apigateway", ExtensionType::Apigateway),
            ("authorizers", ExtensionType::Authorizers),
            ("postman", ExtensionType::Postman),
        ] {
            assert_eq!(ExtensionType::resolve(Some(arg)), expected);
        }
    }

    #[test]
    fn test_unknown_extension_types_default_to_integrations() {
        assert_eq!(
            ExtensionType::resolve(Some("swagger")),
            ExtensionType::Integrations
        );
        assert_eq!(ExtensionType::resolve(Some("")), ExtensionType::Integrations);
        assert_eq!(ExtensionType::resolve(None), ExtensionType::Integrations);
    }
}
