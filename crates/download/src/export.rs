//! Export retrieval

use apigw_swagger_export_common::{ContentType, ExtensionType, Result};
use apigw_swagger_export_provider::{ExportApi, ExportedDocument, GetExportRequest};

/// Request the swagger export of a deployed API stage.
///
/// The provider is asked to serialize the document in `accepts`; the
/// content type it actually returns is reported on the document but not
/// validated here.
pub async fn fetch_export(
    exports: &dyn ExportApi,
    rest_api_id: &str,
    stage: &str,
    extensions: ExtensionType,
    accepts: ContentType,
) -> Result<ExportedDocument> {
    exports
        .get_export(GetExportRequest::swagger(
            rest_api_id,
            stage,
            extensions,
            accepts,
        ))
        .await
}
