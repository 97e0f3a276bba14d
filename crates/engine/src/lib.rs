//! Core of the expense tracker: the expense list and its persisted form.
//!
//! ```rust
//! use engine::{Expenses, Money};
//!
//! let mut expenses = Expenses::new();
//! expenses.add("Coffee", "3.50".parse::<Money>().unwrap());
//! assert_eq!(expenses.total().to_string(), "3.50");
//! ```
pub use error::EngineError;
pub use expense::Expense;
pub use money::Money;
pub use store::Expenses;

mod error;
mod expense;
mod money;
mod store;

/// Default name of the data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "Expenses.dat";

pub type ResultEngine<T> = Result<T, EngineError>;
