//! The module contains the `Expense` type, a single record of the list.
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::Money;

/// One expense: a free-form name and an amount.
///
/// Names are not unique and may be empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub name: String,
    pub amount: Money,
}

impl Expense {
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// Case-insensitive name comparison used by removal.
    pub(crate) fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expense: {} | Amount: ${}", self.name, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_listing_format() {
        let expense = Expense::new("Coffee", Money::new(350));
        assert_eq!(expense.to_string(), "Expense: Coffee | Amount: $3.50");
    }

    #[test]
    fn is_named_ignores_case() {
        let expense = Expense::new("Café", Money::new(100));
        assert!(expense.is_named("CAFÉ"));
        assert!(expense.is_named("café"));
        assert!(!expense.is_named("cafe"));
    }
}
