//! Shared traits and enums for ledger entities.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Exposes a stable identifier for stored entities.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Direction of a money movement. Categories are scoped to one of these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[default]
    Expense,
    Income,
}

impl TransactionType {
    /// Returns the other direction, used by the entry form toggle.
    pub fn toggled(self) -> Self {
        match self {
            TransactionType::Expense => TransactionType::Income,
            TransactionType::Income => TransactionType::Expense,
        }
    }

    /// Sign prefix used when rendering amounts of this type.
    pub fn sign(self) -> char {
        match self {
            TransactionType::Expense => '-',
            TransactionType::Income => '+',
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        };
        f.write_str(label)
    }
}

/// Error returned when a transaction type label cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTransactionTypeError(pub String);

impl fmt::Display for ParseTransactionTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown transaction type `{}` (expected expense or income)", self.0)
    }
}

impl std::error::Error for ParseTransactionTypeError {}

impl FromStr for TransactionType {
    type Err = ParseTransactionTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "expense" | "exp" | "out" => Ok(TransactionType::Expense),
            "income" | "inc" | "in" => Ok(TransactionType::Income),
            other => Err(ParseTransactionTypeError(other.to_string())),
        }
    }
}

/// Top-level screens of the application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    #[default]
    Home,
    Stats,
    Ledgers,
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ViewState::Home => "home",
            ViewState::Stats => "stats",
            ViewState::Ledgers => "ledgers",
        };
        f.write_str(label)
    }
}
