use crate::invocation::InvocationResponse;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

/// Reports which HTTP method the gateway saw. Never fails: events without a
/// method are answered with `N/A`.
#[tracing::instrument(skip(event), fields(request_id = %event.context.request_id))]
pub(crate) async fn function_handler(
    event: LambdaEvent<Value>,
) -> Result<InvocationResponse, Error> {
    let response = InvocationResponse::for_event(&event.payload);
    tracing::debug!(body = %response.body, "reporting invocation method");

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::function_handler;
    use lambda_runtime::{Context, LambdaEvent};
    use serde_json::{json, Value};

    #[tokio::test]
    async fn when_gateway_event_received_should_report_method() {
        let event = LambdaEvent::new(
            json!({ "requestContext": { "http": { "method": "POST" } } }),
            Context::default(),
        );

        let response = function_handler(event).await.unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"service":"orders","method":"POST"}"#);
    }

    #[tokio::test]
    async fn when_event_is_not_from_gateway_should_still_succeed() {
        let payloads = [
            Value::Null,
            json!({}),
            json!({ "Records": [] }),
            json!("ping"),
        ];

        for payload in payloads {
            let result = function_handler(LambdaEvent::new(payload, Context::default())).await;

            assert!(result.is_ok());
            let response = result.unwrap();
            assert_eq!(response.status_code, 200);
            assert_eq!(response.body, r#"{"service":"orders","method":"N/A"}"#);
        }
    }

    #[tokio::test]
    async fn when_payload_is_array_should_serialize_fixed_document() {
        let event = LambdaEvent::new(json!([1]), Context::default());

        let response = function_handler(event).await.unwrap();
        let serialized = serde_json::to_value(response).unwrap();

        assert_eq!(
            serialized,
            json!({
                "statusCode": 200,
                "headers": { "content-type": "application/json" },
                "body": "{\"service\":\"orders\",\"method\":\"N/A\"}"
            })
        );
    }

    #[tokio::test]
    async fn when_method_has_quotes_and_unicode_should_be_escaped_in_body() {
        let event = LambdaEvent::new(
            json!({ "requestContext": { "http": { "method": "G\"\u{c9}\n" } } }),
            Context::default(),
        );

        let response = function_handler(event).await.unwrap();
        let body: Value = serde_json::from_str(&response.body).unwrap();

        assert_eq!(body["method"], "G\"\u{c9}\n");
        assert_eq!(body["service"], "orders");
    }
}
