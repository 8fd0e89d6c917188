use lambda_runtime::tracing::{debug, warn};
use lambda_runtime::{Diagnostic, LambdaEvent};
use serde_json::Value;
use std::collections::HashMap;

use crate::config::GreetingConfig;
use crate::greeting::handle;
use crate::models::{InvocationEvent, InvocationResponse};

/// Converts the raw platform payload into an `InvocationEvent`.
///
/// Each field is read on its own so a malformed field only disables its own
/// resolution step: query values that are not strings are skipped, and a
/// `body` that is not a string is ignored.
#[must_use]
pub fn parse_event(payload: &Value) -> InvocationEvent {
    let query_string_parameters = match payload.get("queryStringParameters") {
        None | Some(Value::Null) => None,
        Some(Value::Object(params)) => Some(
            params
                .iter()
                .filter_map(|(key, value)| value.as_str().map(|v| (key.clone(), v.to_string())))
                .collect::<HashMap<_, _>>(),
        ),
        Some(other) => {
            warn!(value = %other, "Query string parameters are not an object, ignoring them");
            None
        }
    };

    let body = match payload.get("body") {
        None | Some(Value::Null) => None,
        Some(Value::String(body)) => Some(body.clone()),
        Some(other) => {
            warn!(value = %other, "Request body is not a string, ignoring it");
            None
        }
    };

    InvocationEvent {
        query_string_parameters,
        body,
    }
}

/// Lambda event handler. Greets the `name` found in the query string or the
/// JSON body. Logs the full event when `RUST_LOG=debug/trace`.
///
/// # Errors
///
/// Never returns an error: every invocation yields a `200` response. The
/// `Diagnostic` error type only satisfies `lambda_runtime::run`.
#[allow(clippy::unused_async)]
pub async fn function_handler(
    event: LambdaEvent<Value>,
    config: &GreetingConfig,
) -> Result<InvocationResponse, Diagnostic> {
    let (payload, context) = event.into_parts();
    debug!(request_id = %context.request_id, payload = ?payload, "Received event");

    let invocation = parse_event(&payload);

    Ok(handle(&invocation, config))
}
