//! Inline keyboard layout, independent of the transport.

use serde::{Deserialize, Serialize};

/// A button that sends `data` back as a callback when pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineButton {
    pub text: String,
    pub data: String,
}

impl InlineButton {
    pub fn new(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            data: data.into(),
        }
    }
}

/// Rows of inline buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboard {
    pub rows: Vec<Vec<InlineButton>>,
}

impl InlineKeyboard {
    pub fn new(rows: Vec<Vec<InlineButton>>) -> Self {
        Self { rows }
    }

    /// Appends a row.
    pub fn row(mut self, row: Vec<InlineButton>) -> Self {
        self.rows.push(row);
        self
    }

    /// All callback payloads, row by row.
    pub fn callback_data(&self) -> Vec<&str> {
        self.rows
            .iter()
            .flat_map(|r| r.iter().map(|b| b.data.as_str()))
            .collect()
    }
}
