//! miao-core
//!
//! Business logic for the expense ledger: persistence repository, monthly
//! aggregation, transaction mutations, navigation and the session controller.
//! Depends on miao-domain only and performs no terminal or filesystem I/O.

pub mod category_service;
pub mod entry_form;
pub mod error;
pub mod format;
pub mod ledger_service;
pub mod month;
pub mod navigation;
pub mod session;
pub mod storage;
pub mod summary_service;
pub mod transaction_service;


pub use category_service::*;
pub use entry_form::*;
pub use error::CoreError;
pub use format::*;
pub use ledger_service::*;
pub use month::*;
pub use navigation::*;
pub use session::*;
pub use storage::*;
pub use summary_service::*;
pub use transaction_service::*;
