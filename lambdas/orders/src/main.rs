use event_handler::function_handler;
use lambda_runtime::{run, service_fn, Error};
use shared::configuration::Configuration;
use shared::error::StartupError;

mod event_handler;
mod invocation;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::load().map_err(StartupError::from)?;
    shared::observability::init_tracing(&config)?;

    run(service_fn(function_handler)).await
}
