use crate::configuration::{Configuration, LogFormat};
use crate::error::StartupError;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber for a function.
///
/// Lines are written to stdout for the Lambda log agent, without timestamps
/// since CloudWatch stamps every line on ingestion. `RUST_LOG` directives are
/// layered over the configured level.
pub fn init_tracing(config: &Configuration) -> Result<(), StartupError> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(config.log_level).into())
        .from_env_lossy();

    let installed = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .with_current_span(false)
            .without_time()
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .without_time()
            .try_init(),
    };

    installed.map_err(StartupError::Tracing)
}

#[cfg(test)]
mod tests {
    use super::init_tracing;
    use crate::configuration::Configuration;
    use crate::error::StartupError;

    #[test]
    fn when_subscriber_already_installed_should_report_error() {
        let config = Configuration::default();

        let first = init_tracing(&config);
        let second = init_tracing(&config);

        assert!(first.is_ok());
        assert!(matches!(second, Err(StartupError::Tracing(_))));
    }
}
