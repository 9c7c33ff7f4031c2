//! Bounded log of completed computations

use calc_spec::Operator;
use std::collections::VecDeque;
use std::fmt;

/// One completed computation, rendered in the base active at the time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub lhs: String,
    pub operator: Operator,
    pub rhs: String,
    pub result: String,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.lhs, self.operator, self.rhs, self.result)
    }
}

/// Computation history, oldest first; drops the oldest entry when full
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.min(64)),
            limit: limit.max(1),
        }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Rendered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.to_string()).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
