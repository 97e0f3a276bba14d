//! The module contains `Expenses`, the ordered in-memory list and its
//! persisted form.
//!
//! The list is the whole state of the tracker. It is loaded once at start-up,
//! mutated in memory, and written back only when [`Expenses::save`] is called.
use std::{fs, io::ErrorKind, path::Path};

use serde::{Deserialize, Serialize};

use crate::{EngineError, Expense, Money, ResultEngine};

/// Ordered list of expenses, insertion order preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expenses {
    records: Vec<Expense>,
}

impl Expenses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the list stored at `path`.
    ///
    /// A missing file is not an error: the list starts empty. Any other read
    /// or decode failure is returned.
    pub fn load(path: impl AsRef<Path>) -> ResultEngine<Self> {
        Ok(Self::try_load(path)?.unwrap_or_default())
    }

    /// Like [`Expenses::load`], but returns `None` when the file does not
    /// exist so the caller can tell the user there was nothing to load.
    pub fn try_load(path: impl AsRef<Path>) -> ResultEngine<Option<Self>> {
        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!("no data file at {}, starting empty", path.display());
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let expenses: Self = bincode::deserialize(&bytes)?;
        tracing::info!(
            "loaded {} expenses from {}",
            expenses.len(),
            path.display()
        );
        Ok(Some(expenses))
    }

    /// Writes the whole list to `path`, replacing whatever was there.
    pub fn save(&self, path: impl AsRef<Path>) -> ResultEngine<&Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let payload = bincode::serialize(self)?;
        fs::write(path, payload)?;
        tracing::info!("saved {} expenses to {}", self.len(), path.display());
        Ok(self)
    }

    /// Appends a record at the end of the list.
    pub fn add(&mut self, name: impl Into<String>, amount: Money) -> &mut Self {
        let expense = Expense::new(name, amount);
        tracing::debug!("adding {expense}");
        self.records.push(expense);
        self
    }

    /// Removes every record named `name`, ignoring case, and returns how many
    /// were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|expense| !expense.is_named(name));
        let removed = before - self.records.len();
        tracing::debug!("removed {removed} expenses named {name:?}");
        removed
    }

    /// Sum of all amounts, `Money::ZERO` when empty.
    ///
    /// Saturates on overflow; see [`Expenses::checked_total`].
    pub fn total(&self) -> Money {
        self.records.iter().map(|expense| expense.amount).sum()
    }

    /// Sum of all amounts, failing if it does not fit in `i64` cents.
    pub fn checked_total(&self) -> ResultEngine<Money> {
        self.records
            .iter()
            .try_fold(Money::ZERO, |acc, expense| acc.checked_add(expense.amount))
            .ok_or_else(|| EngineError::InvalidAmount("total too large".to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Expenses {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Expense> for Expenses {
    fn from_iter<T: IntoIterator<Item = Expense>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
