//! Digit-group editing

use tracing::{debug, info};

use super::TimerController;
use crate::{
    events::KeyInput,
    state::{Commit, Field},
};

impl TimerController {
    /// Editing is locked while the countdown is actively ticking
    fn editing_locked(&self) -> bool {
        self.timer.is_ticking()
    }

    pub(super) fn handle_key(&mut self, key: KeyInput) {
        if self.editing_locked() {
            debug!("Ignoring {:?} while the countdown is running", key);
            return;
        }

        match key {
            KeyInput::Tab { reverse } => self.navigate(reverse),
            KeyInput::Enter => {
                if self.edit.is_editing() {
                    self.finish_editing();
                }
            }
            KeyInput::Digit(digit) => {
                if let Some(commit) = self.edit.push_digit(digit) {
                    self.apply_commit(commit);
                }
            }
        }
    }

    /// Put a digit group into edit mode
    pub(super) fn select_field(&mut self, field: Field) {
        if self.editing_locked() {
            return;
        }
        self.edit.select(field);
        debug!("Editing {}", field.name());
    }

    /// A click outside every interactive element ends the edit session
    pub(super) fn handle_focus_loss(&mut self) {
        if self.edit.is_editing() {
            self.finish_editing();
        }
    }

    /// Commit pending digits and leave edit mode
    pub(super) fn finish_editing(&mut self) {
        self.commit_pending();
        self.edit.clear();
    }

    fn commit_pending(&mut self) {
        if let Some(commit) = self.edit.take_commit() {
            self.apply_commit(commit);
        }
    }

    fn apply_commit(&mut self, commit: Commit) {
        let stored = self.timer.set(commit.field, commit.raw);
        info!("Set {} to {:02}", commit.field.name(), stored);
    }

    fn navigate(&mut self, reverse: bool) {
        let next = match self.edit.active_field() {
            None => Field::Hours,
            Some(current) => {
                self.commit_pending();
                if reverse {
                    current.previous()
                } else {
                    current.next()
                }
            }
        };
        self.select_field(next);
    }
}
