//! Digit-group edit session

use super::Field;

/// Number of digits that completes a pending entry
pub const MAX_PENDING_DIGITS: usize = 2;

/// A pending entry ready to be written into the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    pub field: Field,
    /// Parsed value before clamping
    pub raw: u32,
}

/// Tracks the selected digit group and the digits typed into it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    active_field: Option<Field>,
    pending: String,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_field(&self) -> Option<Field> {
        self.active_field
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn is_editing(&self) -> bool {
        self.active_field.is_some()
    }

    /// Put a field into edit mode, discarding any pending digits
    pub fn select(&mut self, field: Field) {
        self.active_field = Some(field);
        self.pending.clear();
    }

    /// Leave edit mode without committing
    pub fn clear(&mut self) {
        self.active_field = None;
        self.pending.clear();
    }

    /// Append a digit. Returns the commit once the buffer is full.
    ///
    /// Non-digit characters and input with no active field are ignored.
    pub fn push_digit(&mut self, digit: char) -> Option<Commit> {
        if self.active_field.is_none() || !digit.is_ascii_digit() {
            return None;
        }
        self.pending.push(digit);
        if self.pending.len() >= MAX_PENDING_DIGITS {
            self.take_commit()
        } else {
            None
        }
    }

    /// Drain the pending buffer into a commit, keeping the field selected.
    ///
    /// Returns `None` when nothing is selected or nothing was typed.
    pub fn take_commit(&mut self) -> Option<Commit> {
        let field = self.active_field?;
        if self.pending.is_empty() {
            return None;
        }
        let raw = self.pending.parse().unwrap_or(0);
        self.pending.clear();
        Some(Commit { field, raw })
    }

    /// Pending digits padded to two characters, if any were typed
    pub fn pending_display(&self) -> Option<String> {
        if self.pending.is_empty() {
            None
        } else {
            Some(format!("{:0>2}", self.pending))
        }
    }
}
