//! miao-domain
//!
//! Pure domain models (Transaction, Ledger, Category, DailyGroup) and the
//! built-in seed data. No I/O, no CLI, no storage.

pub mod category;
pub mod common;
pub mod daily_group;
pub mod ledger;
pub mod seed;
pub mod transaction;

pub use category::*;
pub use common::*;
pub use daily_group::*;
pub use ledger::*;
pub use transaction::*;
