//! Pre-order traversal over a built hierarchy.

use crate::tree::node::{ChildKey, TreeNode};

/// One visited node along with its parent and position.
pub struct Visit<'t, 'a, R> {
    /// 0 for top-level nodes (children of the root).
    pub depth: usize,
    pub parent: &'t TreeNode<'a, R>,
    pub key: &'t ChildKey,
    pub node: &'t TreeNode<'a, R>,
}

/// Pre-order walk that never yields the root itself.
///
/// An optional `descend` predicate decides whether a node's children are
/// visited; the renderer uses it to skip collapsed folders.
pub struct Walk<'t, 'a, R> {
    stack: Vec<Visit<'t, 'a, R>>,
    descend: Option<&'t dyn Fn(&TreeNode<'a, R>) -> bool>,
}

impl<'t, 'a, R> Walk<'t, 'a, R> {
    fn new(
        root: &'t TreeNode<'a, R>,
        descend: Option<&'t dyn Fn(&TreeNode<'a, R>) -> bool>,
    ) -> Self {
        let mut walk = Self {
            stack: Vec::new(),
            descend,
        };
        walk.push_children(root, 0);
        walk
    }

    fn push_children(&mut self, parent: &'t TreeNode<'a, R>, depth: usize) {
        for (key, node) in parent.children.iter().rev() {
            self.stack.push(Visit {
                depth,
                parent,
                key,
                node,
            });
        }
    }
}

impl<'t, 'a, R> Iterator for Walk<'t, 'a, R> {
    type Item = Visit<'t, 'a, R>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.stack.pop()?;
        let enter = match self.descend {
            Some(descend) => descend(visit.node),
            None => true,
        };
        if enter {
            self.push_children(visit.node, visit.depth + 1);
        }
        Some(visit)
    }
}

/// Visit every node below `root`.
pub fn walk<'t, 'a, R>(root: &'t TreeNode<'a, R>) -> Walk<'t, 'a, R> {
    Walk::new(root, None)
}

/// Visit nodes below `root`, entering a node's children only when `descend`
/// returns true for it.
pub fn walk_where<'t, 'a, R>(
    root: &'t TreeNode<'a, R>,
    descend: &'t dyn Fn(&TreeNode<'a, R>) -> bool,
) -> Walk<'t, 'a, R> {
    Walk::new(root, Some(descend))
}
