use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures that stop a function before it starts polling for invocations.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to load configuration: {0}")]
    Configuration(#[source] Box<figment::Error>),
    #[error("failed to install tracing subscriber: {0}")]
    Tracing(BoxError),
}

impl From<figment::Error> for StartupError {
    fn from(err: figment::Error) -> Self {
        StartupError::Configuration(Box::new(err))
    }
}
