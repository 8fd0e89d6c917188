use anyhow::Context;
use lambda_runtime::{Error, service_fn};
use serverless_greeting::config::GreetingConfig;
use serverless_greeting::handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Use Lambda runtime's built-in tracing subscriber for CloudWatch Logs
    lambda_runtime::tracing::init_default_subscriber();

    let config = GreetingConfig::from_env().context("Failed to load configuration")?;
    let config = &config;

    lambda_runtime::run(service_fn(move |event| async move {
        function_handler(event, config).await
    }))
    .await
}
