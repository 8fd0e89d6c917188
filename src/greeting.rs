use lambda_runtime::tracing::{debug, error, info, warn};
use serde_json::Value;
use std::collections::HashMap;

use crate::config::GreetingConfig;
use crate::models::{AppError, GreetingBody, InvocationEvent, InvocationResponse};

pub const CHALLENGE: &str = "Göreviniz Başarıyla Tamamlandı!";
pub const INFO: &str = "Parametreyi URL’den `?name=YeniIsim` şeklinde değiştirebilirsiniz.";

const CONTENT_TYPE: &str = "Content-Type";
const CORS_ORIGIN_HEADER: &str = "Access-Control-Allow-Origin";
const APPLICATION_JSON: &str = "application/json";

// Only used if serializing `GreetingBody` ever fails
const FALLBACK_BODY: &str = r#"{"message":"Merhaba Serverless Öğrenci, bu fonksiyon bulutta (AWS Lambda) çalışıyor ve ödevimi tamamlıyor!","challenge":"Göreviniz Başarıyla Tamamlandı!","info":"Parametreyi URL’den `?name=YeniIsim` şeklinde değiştirebilirsiniz."}"#;

/// Reads the `name` field of a JSON request body.
///
/// Strings are returned verbatim, numbers and booleans as their JSON text.
/// A missing or `null` field yields `Ok(None)`.
///
/// # Errors
///
/// Returns `AppError::ParameterRead` if the body is not valid JSON, is not a
/// JSON object, or carries an array or object as `name`.
pub fn name_from_body(body: &str) -> Result<Option<String>, AppError> {
    let fields = match serde_json::from_str::<Value>(body)? {
        Value::Object(fields) => fields,
        other => {
            return Err(AppError::ParameterRead(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )));
        }
    };

    match fields.get("name") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(name)) => Ok(Some(name.clone())),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(value.to_string())),
        Some(other) => Err(AppError::ParameterRead(format!(
            "`name` must be a scalar, got {}",
            json_kind(other)
        ))),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Resolves the name to greet.
///
/// The query string wins over the body; when neither yields a name the
/// default is used. Body read failures are logged and never propagated.
/// A body `name` of `null` counts as absent.
#[must_use]
pub fn resolve_name(event: &InvocationEvent, default_name: &str) -> String {
    if let Some(name) = event.query_name() {
        debug!(source = "query", "Found name parameter");
        return name.to_string();
    }

    if let Some(body) = event.non_empty_body() {
        match name_from_body(body) {
            Ok(Some(name)) => {
                debug!(source = "body", "Found name parameter");
                return name;
            }
            Ok(None) => debug!("Request body has no name field"),
            Err(e) => warn!(error = %e, "Failed to read name parameter, using default"),
        }
    }

    default_name.to_string()
}

/// Builds the greeting document for `name`
#[must_use]
pub fn greeting_body(name: &str) -> GreetingBody {
    GreetingBody {
        message: format!(
            "Merhaba {name}, bu fonksiyon bulutta (AWS Lambda) çalışıyor ve ödevimi tamamlıyor!"
        ),
        challenge: CHALLENGE.to_string(),
        info: INFO.to_string(),
    }
}

/// Wraps a greeting into a `200 application/json` response
#[must_use]
pub fn build_response(greeting: &GreetingBody, config: &GreetingConfig) -> InvocationResponse {
    let body = serde_json::to_string(greeting).unwrap_or_else(|e| {
        error!(error = %e, "Failed to serialize greeting body");
        FALLBACK_BODY.to_string()
    });

    let mut headers = HashMap::from([(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())]);
    if let Some(origin) = &config.cors_allow_origin {
        headers.insert(CORS_ORIGIN_HEADER.to_string(), origin.clone());
    }

    InvocationResponse {
        status_code: 200,
        headers,
        body,
    }
}

/// Produces the response for one invocation event
#[must_use]
pub fn handle(event: &InvocationEvent, config: &GreetingConfig) -> InvocationResponse {
    let name = resolve_name(event, &config.default_name);
    info!(name = %name, "Function triggered");

    build_response(&greeting_body(&name), config)
}
