use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;

pub(crate) const SERVICE_NAME: &str = "orders";
pub(crate) const METHOD_UNAVAILABLE: &str = "N/A";

/// The only part of a gateway invocation event this function reads.
///
/// Events come from an uncontrolled source, so every level is optional and
/// narrowing from the raw JSON never fails: a level that is missing or has
/// the wrong type is simply `None`.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct InvocationEvent {
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct RequestContext {
    pub http: Option<HttpDescription>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct HttpDescription {
    pub method: Option<String>,
}

impl InvocationEvent {
    pub fn from_value(value: &Value) -> Self {
        Self {
            request_context: value.get("requestContext").map(RequestContext::from_value),
        }
    }

    /// The invoked HTTP method, or `N/A` when the event doesn't carry one.
    pub fn method(&self) -> &str {
        self.request_context
            .as_ref()
            .and_then(|context| context.http.as_ref())
            .and_then(|http| http.method.as_deref())
            .filter(|method| !method.is_empty())
            .unwrap_or(METHOD_UNAVAILABLE)
    }
}

impl RequestContext {
    fn from_value(value: &Value) -> Self {
        Self {
            http: value.get("http").map(HttpDescription::from_value),
        }
    }
}

impl HttpDescription {
    fn from_value(value: &Value) -> Self {
        Self {
            method: value.get("method").and_then(Value::as_str).map(str::to_owned),
        }
    }
}

/// Gateway response document. The runtime serializes it, so `body` holds
/// JSON encoded a second time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InvocationResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl InvocationResponse {
    pub fn for_event(event: &Value) -> Self {
        let invocation = InvocationEvent::from_value(event);
        Self::method_report(invocation.method())
    }

    fn method_report(method: &str) -> Self {
        // service first, then method
        let body = json!({
            "service": SERVICE_NAME,
            "method": method,
        });

        Self {
            status_code: 200,
            headers: HashMap::from([("content-type".to_string(), "application/json".to_string())]),
            body: body.to_string(),
        }
    }
}
