//! Tree node types produced by the hierarchy builder.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Anything with a delimited name can be arranged into a hierarchy.
pub trait Named {
    fn name(&self) -> &str;
}

/// Key of a child within its parent.
///
/// Regular children are keyed by their token. A node that was both a folder
/// and a record gets its record moved into a `SelfRecord` child, which sits
/// first and cannot collide with any token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChildKey {
    SelfRecord,
    Token(String),
}

impl ChildKey {
    pub fn token(token: &str) -> Self {
        ChildKey::Token(token.to_string())
    }

    pub fn is_self_record(&self) -> bool {
        matches!(self, ChildKey::SelfRecord)
    }
}

/// A node of the name-derived hierarchy.
///
/// `record` is `None` for pure folders. After a build no node carries both
/// children and a record.
#[derive(Debug)]
pub struct TreeNode<'a, R> {
    pub name: String,
    pub path: String,
    pub children: IndexMap<ChildKey, TreeNode<'a, R>>,
    pub record: Option<&'a R>,
}

impl<'a, R> Clone for TreeNode<'a, R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            path: self.path.clone(),
            children: self.children.clone(),
            record: self.record,
        }
    }
}

impl<'a, R> TreeNode<'a, R> {
    /// Synthetic root: empty name and path, no record.
    pub fn root() -> Self {
        Self::new("", String::new())
    }

    pub fn new(name: &str, path: String) -> Self {
        Self {
            name: name.to_string(),
            path,
            children: IndexMap::new(),
            record: None,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.record.is_none()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &TreeNode<'a, R>> {
        self.children.values()
    }

    /// Regular child for `token`, ignoring any self-record entry.
    pub fn child(&self, token: &str) -> Option<&TreeNode<'a, R>> {
        self.children.get(&ChildKey::token(token))
    }

    /// Self-record child, present only on disambiguated folders.
    pub fn self_record(&self) -> Option<&TreeNode<'a, R>> {
        self.children.get(&ChildKey::SelfRecord)
    }

    /// Follow a sequence of tokens from this node.
    pub fn descend<'t, I>(&self, tokens: I) -> Option<&TreeNode<'a, R>>
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut current = self;
        for token in tokens {
            current = current.child(token)?;
        }
        Some(current)
    }

    /// Number of descendants, excluding this node.
    pub fn len(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of descendants that carry a record.
    pub fn record_count(&self) -> usize {
        self.children
            .values()
            .map(|child| usize::from(child.record.is_some()) + child.record_count())
            .sum()
    }
}

struct ChildrenSeq<'n, 'a, R>(&'n IndexMap<ChildKey, TreeNode<'a, R>>);

impl<'n, 'a, R: Serialize> Serialize for ChildrenSeq<'n, 'a, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.values())
    }
}

impl<'a, R: Serialize> Serialize for TreeNode<'a, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let field_count = if self.record.is_some() { 5 } else { 4 };
        let mut state = serializer.serialize_struct("TreeNode", field_count)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("kind", if self.is_folder() { "folder" } else { "group" })?;
        if let Some(record) = self.record {
            state.serialize_field("record", record)?;
        }
        state.serialize_field("children", &ChildrenSeq(&self.children))?;
        state.end()
    }
}
