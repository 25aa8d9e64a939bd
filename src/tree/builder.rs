//! Hierarchy builder
//!
//! Turns a flat sequence of named records into a tree by splitting each name
//! on a delimiter. Runs in two passes: trie insertion, then disambiguation of
//! nodes that ended up being both a folder and a record.

use crate::tree::node::{ChildKey, Named, TreeNode};
use crate::types::DELIMITER;
use indexmap::IndexMap;

/// Result of a build: the tree plus records that lost a duplicate-path tie.
#[derive(Debug)]
pub struct Hierarchy<'a, R> {
    pub root: TreeNode<'a, R>,
    pub shadowed: Vec<&'a R>,
}

impl<'a, R> Hierarchy<'a, R> {
    pub fn into_root(self) -> TreeNode<'a, R> {
        self.root
    }
}

/// Builds name-derived hierarchies. Stateless; reuse freely.
#[derive(Debug, Clone, Copy)]
pub struct HierarchyBuilder {
    delimiter: char,
}

impl Default for HierarchyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self {
            delimiter: DELIMITER,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Build a fresh tree from `records`.
    ///
    /// When two records share a full name the first one keeps the node and the
    /// later one is reported in [`Hierarchy::shadowed`].
    pub fn build<'a, R, I>(&self, records: I) -> Hierarchy<'a, R>
    where
        R: Named + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let mut root = TreeNode::root();
        let mut shadowed = Vec::new();

        for record in records {
            if !self.insert(&mut root, record) {
                shadowed.push(record);
            }
        }

        disambiguate(&mut root);

        Hierarchy { root, shadowed }
    }

    /// Returns false when the record's path already held a record.
    fn insert<'a, R: Named>(&self, root: &mut TreeNode<'a, R>, record: &'a R) -> bool {
        let tokens: Vec<&str> = record.name().split(self.delimiter).collect();
        let last = tokens.len() - 1;
        let mut path = String::new();
        let mut current = root;

        for (index, token) in tokens.into_iter().enumerate() {
            if index > 0 {
                path.push(self.delimiter);
            }
            path.push_str(token);

            current = current
                .children
                .entry(ChildKey::token(token))
                .or_insert_with(|| TreeNode::new(token, path.clone()));

            if index == last {
                if current.record.is_some() {
                    return false;
                }
                current.record = Some(record);
            }
        }

        true
    }
}

/// Move the record of every folder-and-record child into a leading self node.
fn disambiguate<R>(node: &mut TreeNode<'_, R>) {
    for child in node.children.values_mut() {
        if child.has_children() {
            if let Some(record) = child.record.take() {
                let self_node = TreeNode {
                    name: child.name.clone(),
                    path: child.path.clone(),
                    children: IndexMap::new(),
                    record: Some(record),
                };
                child.children.shift_insert(0, ChildKey::SelfRecord, self_node);
            }
        }
        disambiguate(child);
    }
}

/// Build a hierarchy with the default `-` delimiter.
pub fn build_hierarchy<'a, R, I>(records: I) -> TreeNode<'a, R>
where
    R: Named + 'a,
    I: IntoIterator<Item = &'a R>,
{
    HierarchyBuilder::new().build(records).into_root()
}
