//! Expand/collapse state
//!
//! Presentation state keyed by node path. Lives outside the tree so it
//! survives rebuilds (for example after the search query changes).

use crate::tree::{walk, TreeNode};
use std::collections::HashSet;

/// Set of expanded folder paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with every folder of `root` expanded.
    pub fn all_expanded<R>(root: &TreeNode<'_, R>) -> Self {
        let mut state = Self::new();
        state.expand_all(root);
        state
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    pub fn expand(&mut self, path: &str) {
        self.expanded.insert(path.to_string());
    }

    /// Expand `path` and every prefix of it, so the node becomes visible.
    pub fn expand_with_ancestors(&mut self, path: &str, delimiter: char) {
        let mut prefix = String::new();
        for (index, token) in path.split(delimiter).enumerate() {
            if index > 0 {
                prefix.push(delimiter);
            }
            prefix.push_str(token);
            self.expanded.insert(prefix.clone());
        }
    }

    pub fn collapse(&mut self, path: &str) {
        self.expanded.remove(path);
    }

    /// Flip a path; returns the new expanded state.
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.expanded.remove(path) {
            false
        } else {
            self.expanded.insert(path.to_string());
            true
        }
    }

    pub fn expand_all<R>(&mut self, root: &TreeNode<'_, R>) {
        for visit in walk(root) {
            if visit.node.has_children() {
                self.expanded.insert(visit.node.path.clone());
            }
        }
    }

    /// Drop paths that no longer name a folder in `root`.
    pub fn retain_present<R>(&mut self, root: &TreeNode<'_, R>) {
        let folders: HashSet<&str> = walk(root)
            .filter(|visit| visit.node.has_children())
            .map(|visit| visit.node.path.as_str())
            .collect();
        self.expanded.retain(|path| folders.contains(path.as_str()));
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
