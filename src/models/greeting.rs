use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// JSON document carried in the response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GreetingBody {
    #[schemars(description = "Greeting that embeds the resolved name")]
    pub message: String,
    #[schemars(description = "Fixed completion marker")]
    pub challenge: String,
    #[schemars(description = "Hint on how to pass a different name")]
    pub info: String,
}
