//! List filters shared by the user dashboard and the admin panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `query_pairs` produces the exact query parameters the `/todos` endpoint
//! expects; URL encoding is left to the HTTP layer.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use crate::config::{MAX_PAGE_SIZE, client_config};

/// Completion filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Done,
    Undone,
}

impl StatusFilter {
    /// Value used in `<select>` options.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Done => "done",
            Self::Undone => "undone",
        }
    }

    /// Parse a `<select>` value; unknown values mean "all".
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "done" => Self::Done,
            "undone" => Self::Undone,
            _ => Self::All,
        }
    }

    fn is_done(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Done => Some(true),
            Self::Undone => Some(false),
        }
    }
}

/// A single user edit to the filter bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterChange {
    Status(StatusFilter),
    Search(String),
    UserId(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoFilters {
    pub status: StatusFilter,
    pub search: String,
    /// Admin-only owner filter.
    pub user_id: String,
    /// 1-based page number.
    pub page: u32,
    /// Rows per page.
    pub limit: u32,
}

impl Default for TodoFilters {
    fn default() -> Self {
        Self::with_limit(client_config().page_size)
    }
}

impl TodoFilters {
    #[must_use]
    pub fn with_limit(limit: u32) -> Self {
        Self {
            status: StatusFilter::All,
            search: String::new(),
            user_id: String::new(),
            page: 1,
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Apply a filter edit. Any filter change returns to the first page.
    pub fn apply(&mut self, change: FilterChange) {
        match change {
            FilterChange::Status(status) => self.status = status,
            FilterChange::Search(search) => self.search = search,
            FilterChange::UserId(user_id) => self.user_id = user_id,
        }
        self.page = 1;
    }

    /// Jump to `page`, never below 1.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Restore defaults while keeping the page size.
    pub fn clear(&mut self) {
        *self = Self::with_limit(self.limit);
    }

    /// Query parameters for `GET /todos`, in a stable order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        let mut filter = serde_json::Map::new();
        if let Some(done) = self.status.is_done() {
            filter.insert("isDone".to_owned(), serde_json::Value::Bool(done));
        }
        let user_id = self.user_id.trim();
        if !user_id.is_empty() {
            filter.insert("userId".to_owned(), serde_json::Value::String(user_id.to_owned()));
        }
        if !filter.is_empty() {
            pairs.push(("filters", serde_json::Value::Object(filter).to_string()));
        }

        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("searchFilters", serde_json::json!({ "item": search }).to_string()));
        }

        pairs.push(("page", self.page.max(1).to_string()));
        pairs.push(("rows", self.limit.clamp(1, MAX_PAGE_SIZE).to_string()));
        pairs.push(("orderKey", "createdAt".to_owned()));
        pairs.push(("orderRule", "desc".to_owned()));
        pairs
    }
}
