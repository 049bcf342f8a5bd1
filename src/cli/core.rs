//! Loop control, command errors and argument parsing shared by handlers.

use std::io;

use chrono::NaiveDate;
use miao_core::{CoreError, YearMonth};

pub use crate::errors::CliError;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        CommandError::App(err.into())
    }
}

impl From<CliError> for CommandError {
    fn from(err: CliError) -> Self {
        match err {
            CliError::App(inner) => CommandError::App(inner),
            CliError::Input(message) | CliError::Command(message) => {
                CommandError::InvalidArguments(message)
            }
        }
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}

/// A month argument is either a signed offset (`-1`, `+2`) or `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MonthArg {
    Offset(i32),
    Absolute(YearMonth),
}

pub(crate) fn parse_month_arg(input: &str) -> Result<MonthArg, CommandError> {
    let trimmed = input.trim();
    if let Ok(offset) = trimmed.parse::<i32>() {
        return Ok(MonthArg::Offset(offset));
    }
    trimmed
        .parse::<YearMonth>()
        .map(MonthArg::Absolute)
        .map_err(|_| {
            CommandError::InvalidArguments(format!(
                "invalid month `{}` (use an offset like -1 or YYYY-MM)",
                input
            ))
        })
}

/// 1-based list position.
pub(crate) fn parse_index(input: &str, len: usize) -> Option<usize> {
    let index = input.trim().parse::<usize>().ok()?;
    (1..=len).contains(&index).then(|| index - 1)
}
