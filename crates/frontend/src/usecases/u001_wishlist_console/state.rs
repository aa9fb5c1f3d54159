use std::cell::RefCell;
use std::rc::Rc;

use super::form_state::FormState;
use super::results::ResultTable;

/// Everything the console shows: the two selected entities, the single
/// status line and the last search results
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsoleState {
    pub form: FormState,
    pub status: String,
    pub results: ResultTable,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the status line
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    pub fn clear_status(&mut self) {
        self.status.clear();
    }

    /// Copy a result row into the form; unknown rows are ignored
    pub fn select_row(&mut self, index: usize) -> bool {
        match self.results.row(index).map(|row| row.entity.clone()) {
            Some(entity) => {
                self.form.write(&entity);
                true
            }
            None => false,
        }
    }
}

/// Mutable access to the console state from an action controller
pub trait StateStore {
    fn update_state(&self, f: impl FnOnce(&mut ConsoleState));
}

impl StateStore for Rc<RefCell<ConsoleState>> {
    fn update_state(&self, f: impl FnOnce(&mut ConsoleState)) {
        f(&mut self.borrow_mut());
    }
}
