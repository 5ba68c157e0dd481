//! Stack output resolution

use apigw_swagger_export_common::Result;
use apigw_swagger_export_provider::{DescribeStacksRequest, StackApi};

/// Key of the stack output that carries the documentation API id
pub const API_ID_OUTPUT_KEY: &str = "AwsDocApiId";

/// Look up the exported API id on a deployed stack.
///
/// Reads the first stack record's outputs and returns the value of the
/// first `AwsDocApiId` entry. `Ok(None)` means the stack exists but does
/// not export the id (or the description returned no stacks at all);
/// callers decide whether that is fatal.
pub async fn resolve_api_id(stacks: &dyn StackApi, stack_name: &str) -> Result<Option<String>> {
    let response = stacks
        .describe_stacks(DescribeStacksRequest {
            stack_name: stack_name.to_string(),
        })
        .await?;

    Ok(response.stacks.first().and_then(|stack| {
        stack
            .outputs
            .iter()
            .find(|output| output.output_key == API_ID_OUTPUT_KEY)
            .map(|output| output.output_value.clone())
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigw_swagger_export_provider::{DescribeStacksResponse, Stack, StackOutput};
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        Stacks {}

        #[async_trait]
        impl StackApi for Stacks {
            async fn describe_stacks(
                &self,
                request: DescribeStacksRequest,
            ) -> Result<DescribeStacksResponse>;
        }
    }

    fn stack_with_outputs(outputs: Vec<StackOutput>) -> DescribeStacksResponse {
        DescribeStacksResponse {
            stacks: vec![Stack { outputs }],
        }
    }

    #[tokio::test]
    async fn test_resolves_the_doc_api_id_output() {
        let mut stacks = MockStacks::new();
        stacks
            .expect_describe_stacks()
            .withf(|request| request.stack_name == "my-service-dev")
            .returning(|_| {
                Ok(stack_with_outputs(vec![
                    StackOutput {
                        output_key: "ServiceEndpoint".to_string(),
                        output_value: "https://abc123.example.com".to_string(),
                    },
                    StackOutput {
                        output_key: API_ID_OUTPUT_KEY.to_string(),
                        output_value: "abc123".to_string(),
                    },
                ]))
            });

        let api_id = resolve_api_id(&stacks, "my-service-dev").await.unwrap();
        assert_eq!(api_id.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_no_stacks_resolves_to_none() {
        let mut stacks = MockStacks::new();
        stacks
            .expect_describe_stacks()
            .returning(|_| Ok(DescribeStacksResponse::default()));

        let api_id = resolve_api_id(&stacks, "gone").await.unwrap();
        assert!(api_id.is_none());
    }

    #[tokio::test]
    async fn test_missing_output_key_resolves_to_none() {
        let mut stacks = MockStacks::new();
        stacks.expect_describe_stacks().returning(|_| {
            Ok(stack_with_outputs(vec![StackOutput {
                output_key: "SomethingElse".to_string(),
                output_value: "nope".to_string(),
            }]))
        });

        let api_id = resolve_api_id(&stacks, "my-service-dev").await.unwrap();
        assert!(api_id.is_none());
    }
}
