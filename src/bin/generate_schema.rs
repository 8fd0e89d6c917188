//! Schema generator for the greeting function's contract.
//!
//! This binary writes `event_schema.json` describing the invocation event the
//! function accepts and the JSON document carried in the response body.

use schemars::{JsonSchema, schema_for};
use serde_json::{Value, json};
use std::fs;

use serverless_greeting::models::{GreetingBody, InvocationEvent};

const OUTPUT_FILE: &str = "event_schema.json";

fn main() {
    let schema = json!({
        "name": "greeting",
        "description": "Greets the `name` taken from the query string or the JSON body. Always answers 200 with a JSON document.",
        "inputSchema": generate_schema::<InvocationEvent>(),
        "outputSchema": generate_schema::<GreetingBody>(),
    });

    let json = serde_json::to_string_pretty(&schema).unwrap_or_else(|e| {
        eprintln!("Failed to serialize schema: {e}");
        std::process::exit(1);
    });

    fs::write(OUTPUT_FILE, json).unwrap_or_else(|e| {
        eprintln!("Failed to write {OUTPUT_FILE}: {e}");
        std::process::exit(1);
    });

    println!("✅ Generated {OUTPUT_FILE}");
}

// Generates a schema for the given type, without the meta fields
fn generate_schema<T: JsonSchema>() -> Value {
    let mut schema = serde_json::to_value(schema_for!(T)).unwrap_or_else(|e| {
        eprintln!("Failed to serialize schema: {e}");
        std::process::exit(1);
    });

    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
        obj.remove("title");
    }

    schema
}
