//! Page-level click dismissal
//!
//! One registry per page tracks which bindings currently show suggestions.
//! A click dismisses every open binding except the one whose input was the
//! click target.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct DismissRegistry {
    open: BTreeSet<usize>,
}

impl DismissRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, binding: usize) {
        self.open.insert(binding);
    }

    pub fn close(&mut self, binding: usize) {
        self.open.remove(&binding);
    }

    /// Track a binding's visibility
    pub fn set_open(&mut self, binding: usize, is_open: bool) {
        if is_open {
            self.open(binding);
        } else {
            self.close(binding);
        }
    }

    pub fn is_open(&self, binding: usize) -> bool {
        self.open.contains(&binding)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Resolve a click: returns the bindings to dismiss and forgets them
    ///
    /// `target` is the binding whose input received the click, if any.
    pub fn dispatch_click(&mut self, target: Option<usize>) -> Vec<usize> {
        let dismissed: Vec<usize> = self
            .open
            .iter()
            .copied()
            .filter(|binding| Some(*binding) != target)
            .collect();
        for binding in &dismissed {
            self.open.remove(binding);
        }
        dismissed
    }
}
