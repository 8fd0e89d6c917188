//! API Gateway proxy shaped invocation models.
//!
//! Only the fields the greeting handler reads are modelled; everything else
//! the platform sends along (headers, request context, ...) is ignored on
//! deserialization.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Incoming HTTP-triggered invocation event
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    #[serde(default)]
    #[schemars(description = "Query string parameters of the HTTP request")]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    #[schemars(description = "Raw request body, expected to be a JSON object")]
    pub body: Option<String>,
}

impl InvocationEvent {
    /// Returns the `name` query parameter if the request carried one
    #[must_use]
    pub fn query_name(&self) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get("name"))
            .map(String::as_str)
    }

    /// Returns the request body unless it is missing or empty
    #[must_use]
    pub fn non_empty_body(&self) -> Option<&str> {
        self.body.as_deref().filter(|body| !body.is_empty())
    }
}

/// HTTP reply handed back to the platform
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}
