use crate::domain::content::{ContentIndex, ContentRecord};
use crate::domain::search;

pub const NO_RESULTS: &str = "No results found.";

/// Search palette overlay. Results are derived from `query` on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteState {
    pub open: bool,
    pub query: String,
    pub selected_index: usize,
}

impl PaletteState {
    /// Flips `open`. Either way the palette starts over from an empty query.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.reset_query();
    }

    pub fn close(&mut self) {
        self.open = false;
        self.reset_query();
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
        self.selected_index = 0;
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.selected_index = 0;
    }

    pub fn results<'a>(&self, index: &'a ContentIndex) -> Vec<&'a ContentRecord> {
        search::filter(&self.query, index.records())
    }

    pub fn selected<'a>(&self, index: &'a ContentIndex) -> Option<&'a ContentRecord> {
        self.results(index).get(self.selected_index).copied()
    }

    pub fn select_next(&mut self, count: usize) {
        if count > 0 {
            self.selected_index = (self.selected_index + 1) % count;
        }
    }

    pub fn select_prev(&mut self, count: usize) {
        if count > 0 {
            self.selected_index = if self.selected_index == 0 {
                count - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    /// Only a query that was actually typed gets an empty-state line.
    #[must_use]
    pub fn empty_state(&self, result_count: usize) -> Option<&'static str> {
        (!self.query.is_empty() && result_count == 0).then_some(NO_RESULTS)
    }

    fn reset_query(&mut self) {
        self.query.clear();
        self.selected_index = 0;
    }
}
