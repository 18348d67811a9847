//! Seldon Deploy Lambda - Resolves model deploy requests.
//!
//! Loads configuration from the environment at cold start and fails startup if
//! a required variable is missing. Each event names the model file selected in
//! the repository, a model name and a pre-packaged server; the response carries
//! the S3 URI of the file and the Seldon endpoint it will be served on.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use shared::{Config, DeployRequest, DeployResponse};
use std::sync::Arc;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

async fn handler(
    config: Arc<Config>,
    event: LambdaEvent<DeployRequest>,
) -> Result<DeployResponse, Error> {
    let request = event.payload;

    match config.deployment_target(&request) {
        Ok(target) => Ok(DeployResponse::success(target)),
        Err(e) if e.status_code() == 400 => {
            warn!(error = %e, "Rejected deploy request");
            Ok(DeployResponse::error(e.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            error!(error = %e, var = e.config_var(), "Failed to load configuration");
            return Err(e.into());
        }
    };

    run(service_fn(move |event| {
        let config = Arc::clone(&config);
        async move { handler(config, event).await }
    }))
    .await
}
