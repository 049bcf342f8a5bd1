use miao_config::ConfigError;
use miao_core::CoreError;
use thiserror::Error;

/// Failures coming out of the ledger, storage and configuration layers.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Ledger not found: {0}")]
    LedgerNotFound(String),
    #[error("Record not found: {0}")]
    TransactionNotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LedgerNotFound(id) => AppError::LedgerNotFound(id),
            CoreError::TransactionNotFound(id) => AppError::TransactionNotFound(id),
            CoreError::Validation(message) => AppError::InvalidInput(message),
            CoreError::Storage(message) | CoreError::Serde(message) => {
                AppError::StorageError(message)
            }
            CoreError::Io(err) => AppError::StorageError(err.to_string()),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::App(err.into())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::App(err.into())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_invalid_input() {
        let err: AppError = CoreError::Validation("amount must be positive".into()).into();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Invalid input: amount must be positive");
    }

    #[test]
    fn io_errors_become_storage_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CliError = CoreError::Io(io).into();
        assert!(matches!(err, CliError::App(AppError::StorageError(_))));
    }
}
