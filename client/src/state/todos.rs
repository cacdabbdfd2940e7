//! Local projection of the signed-in user's to-do list.
//!
//! DESIGN
//! ======
//! The server stays the source of truth; this state mirrors the last fetched
//! page plus the local multi-selection. Each fetch takes a sequence number so a
//! slow response for old filters cannot overwrite a newer page.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use crate::net::types::{Todo, TodoPage};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoState {
    pub items: Vec<Todo>,
    /// Selected item ids, in selection order.
    pub selected: Vec<String>,
    pub total_items: u64,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
    load_seq: u64,
}

impl TodoState {
    /// Mark a fetch as started and return its sequence number.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.loading = true;
        self.error = None;
        self.load_seq
    }

    /// Install a fetched page unless a newer fetch has started since.
    pub fn finish_load(&mut self, seq: u64, page: TodoPage) -> bool {
        if seq != self.load_seq {
            return false;
        }
        self.set_page(page);
        true
    }

    /// Record a fetch failure unless a newer fetch has started since.
    pub fn fail_load(&mut self, seq: u64, message: String) -> bool {
        if seq != self.load_seq {
            return false;
        }
        self.loading = false;
        self.error = Some(message);
        true
    }

    pub fn set_page(&mut self, page: TodoPage) {
        self.items = page.entries;
        self.total_items = page.total_data;
        self.total_pages = page.total_page;
        self.loading = false;
        self.error = None;
        let items = &self.items;
        self.selected.retain(|id| items.iter().any(|t| &t.id == id));
    }

    pub fn add(&mut self, todo: Todo) {
        self.items.push(todo);
    }

    /// Replace the item with the same id, if present.
    pub fn update(&mut self, todo: Todo) {
        if let Some(existing) = self.items.iter_mut().find(|t| t.id == todo.id) {
            *existing = todo;
        }
    }

    /// Drop an item and its selection.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
        self.selected.retain(|s| s != id);
    }

    pub fn toggle_selection(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.to_owned());
        }
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Drop every selected item and clear the selection.
    pub fn remove_selected(&mut self) {
        let selected = std::mem::take(&mut self.selected);
        self.items.retain(|t| !selected.contains(&t.id));
    }

    /// Forget everything (used on logout).
    pub fn reset(&mut self) {
        *self = Self { load_seq: self.load_seq, ..Self::default() };
    }
}
