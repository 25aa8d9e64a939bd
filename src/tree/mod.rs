//! Name-derived hierarchy: node types, builder, and traversal.

pub mod builder;
pub mod node;
pub mod walker;

pub use builder::{build_hierarchy, Hierarchy, HierarchyBuilder};
pub use node::{ChildKey, Named, TreeNode};
pub use walker::{walk, walk_where, Visit, Walk};
