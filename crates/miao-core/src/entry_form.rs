//! State of the add-transaction form: keypad amount entry, type toggle and
//! category selection.

use chrono::NaiveDate;
use miao_domain::{Category, TransactionDraft, TransactionType};

use crate::{category_service::CategoryService, CoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadKey {
    Digit(u8),
    Dot,
    Backspace,
}

impl KeypadKey {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => ch.to_digit(10).map(|d| KeypadKey::Digit(d as u8)),
            '.' => Some(KeypadKey::Dot),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    amount_input: String,
    kind: TransactionType,
    category_id: Option<String>,
    note: String,
    date: NaiveDate,
}

impl EntryForm {
    /// A fresh expense form dated `today`, with the first expense category selected.
    pub fn new(categories: &[Category], today: NaiveDate) -> Self {
        let kind = TransactionType::Expense;
        Self {
            amount_input: "0".into(),
            kind,
            category_id: CategoryService::first_of_kind(categories, kind).map(|c| c.id.clone()),
            note: String::new(),
            date: today,
        }
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn category_id(&self) -> Option<&str> {
        self.category_id.as_deref()
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Amount as shown on the form, e.g. `-12.5`.
    pub fn display_amount(&self) -> String {
        format!("{}{}", self.kind.sign(), self.amount_input)
    }

    pub fn press(&mut self, key: KeypadKey) {
        match key {
            KeypadKey::Digit(digit) => {
                let digit = char::from(b'0' + digit.min(9));
                if self.amount_input == "0" {
                    self.amount_input = digit.to_string();
                } else {
                    self.amount_input.push(digit);
                }
            }
            KeypadKey::Dot => {
                if !self.amount_input.contains('.') {
                    self.amount_input.push('.');
                }
            }
            KeypadKey::Backspace => {
                if self.amount_input.len() > 1 {
                    self.amount_input.pop();
                } else {
                    self.amount_input = "0".into();
                }
            }
        }
    }

    /// Replaces the amount by replaying `input` on a cleared keypad.
    pub fn set_amount(&mut self, input: &str) -> Result<(), CoreError> {
        let keys = input
            .trim()
            .chars()
            .map(|ch| {
                KeypadKey::from_char(ch).ok_or_else(|| {
                    CoreError::Validation(format!("`{input}` is not a valid amount"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.amount_input = "0".into();
        for key in keys {
            self.press(key);
        }
        Ok(())
    }

    /// Switches type and re-selects the first matching category, or nothing
    /// when the type has no categories.
    pub fn set_kind(&mut self, kind: TransactionType, categories: &[Category]) {
        if self.kind == kind && self.category_id.is_some() {
            return;
        }
        self.kind = kind;
        self.category_id = CategoryService::first_of_kind(categories, kind).map(|c| c.id.clone());
    }

    pub fn select_category(&mut self, id: &str, categories: &[Category]) -> Result<(), CoreError> {
        let category = CategoryService::find(categories, id)
            .ok_or_else(|| CoreError::Validation(format!("unknown category `{id}`")))?;
        if category.kind != self.kind {
            return Err(CoreError::Validation(format!(
                "category `{}` is for {}, not {}",
                category.name, category.kind, self.kind
            )));
        }
        self.category_id = Some(category.id.clone());
        Ok(())
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn amount(&self) -> Option<f64> {
        self.amount_input.parse().ok()
    }

    /// Builds the draft to save. Fails without a positive amount or a category.
    pub fn to_draft(&self) -> Result<TransactionDraft, CoreError> {
        let amount = self
            .amount()
            .filter(|amount| *amount > 0.0)
            .ok_or_else(|| CoreError::Validation("enter an amount greater than zero".into()))?;
        let category_id = self
            .category_id
            .clone()
            .ok_or_else(|| CoreError::Validation("choose a category first".into()))?;
        Ok(TransactionDraft {
            amount,
            kind: self.kind,
            category_id,
            date: self.date,
            note: self.note.clone(),
        })
    }
}
