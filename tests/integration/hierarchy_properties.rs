use std::collections::HashSet;

use proptest::prelude::*;
use vgtree::record::VariableGroup;
use vgtree::tree::{walk, ChildKey, HierarchyBuilder, TreeNode};
use vgtree::types::GroupId;

fn name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[ab]{0,2}", 1..4).prop_map(|tokens| tokens.join("-"))
}

fn groups_strategy() -> impl Strategy<Value = Vec<VariableGroup>> {
    prop::collection::vec(name_strategy(), 0..24).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| VariableGroup::new(i as i64, name))
            .collect()
    })
}

/// Path rule for token children; self nodes mirror their parent.
fn assert_paths_consistent(root: &TreeNode<'_, VariableGroup>) {
    for visit in walk(root) {
        let node = visit.node;
        match visit.key {
            ChildKey::SelfRecord => {
                assert_eq!(node.path, visit.parent.path);
                assert_eq!(node.name, visit.parent.name);
                assert!(node.children.is_empty());
                assert!(node.record.is_some());
                let (first_key, _) = visit.parent.children.get_index(0).unwrap();
                assert!(first_key.is_self_record());
            }
            ChildKey::Token(token) => {
                assert_eq!(&node.name, token);
                let expected = if std::ptr::eq(visit.parent, root) {
                    node.name.clone()
                } else {
                    format!("{}-{}", visit.parent.path, node.name)
                };
                assert_eq!(node.path, expected);
            }
        }
    }
}

fn assert_no_folder_record_conflict(root: &TreeNode<'_, VariableGroup>) {
    assert!(root.record.is_none());
    for visit in walk(root) {
        assert!(
            !(visit.node.has_children() && visit.node.record.is_some()),
            "node {:?} is both folder and record",
            visit.node.path
        );
    }
}

/// Ids of the first record per distinct name, in input order.
fn first_occurrences<'a>(groups: impl IntoIterator<Item = &'a VariableGroup>) -> Vec<GroupId> {
    let mut seen = HashSet::new();
    groups
        .into_iter()
        .filter(|g| seen.insert(g.name.clone()))
        .map(|g| g.id.clone())
        .collect()
}

fn assert_coverage(root: &TreeNode<'_, VariableGroup>, expected: Vec<GroupId>) {
    let mut attached: Vec<GroupId> = walk(root)
        .filter_map(|visit| visit.node.record.map(|r| r.id.clone()))
        .collect();
    let unique: HashSet<GroupId> = attached.iter().cloned().collect();
    assert_eq!(unique.len(), attached.len(), "a record appears twice");

    let mut expected = expected;
    let key = |id: &GroupId| id.to_string().parse::<i64>().unwrap_or(-1);
    attached.sort_by_key(key);
    expected.sort_by_key(key);
    assert_eq!(attached, expected);

    for visit in walk(root) {
        if let Some(record) = visit.node.record {
            assert_eq!(record.name, visit.node.path);
        }
    }
}

type Shape = Vec<(usize, ChildKey, String, Option<GroupId>)>;

fn shape(root: &TreeNode<'_, VariableGroup>) -> Shape {
    walk(root)
        .map(|visit| {
            (
                visit.depth,
                visit.key.clone(),
                visit.node.path.clone(),
                visit.node.record.map(|r| r.id.clone()),
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn built_trees_satisfy_invariants(groups in groups_strategy()) {
        let hierarchy = HierarchyBuilder::new().build(&groups);

        assert_paths_consistent(&hierarchy.root);
        assert_no_folder_record_conflict(&hierarchy.root);
        assert_coverage(&hierarchy.root, first_occurrences(&groups));
        prop_assert_eq!(
            hierarchy.root.record_count() + hierarchy.shadowed.len(),
            groups.len()
        );
    }

    #[test]
    fn builds_are_deterministic(groups in groups_strategy()) {
        let builder = HierarchyBuilder::new();
        let first = builder.build(&groups);
        let second = builder.build(&groups);
        prop_assert_eq!(shape(&first.root), shape(&second.root));
    }

    #[test]
    fn subsets_build_valid_trees(
        groups in groups_strategy(),
        mask in prop::collection::vec(any::<bool>(), 24),
    ) {
        let subset: Vec<&VariableGroup> = groups
            .iter()
            .zip(mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(g, _)| g)
            .collect();
        let hierarchy = HierarchyBuilder::new().build(subset.iter().copied());

        assert_paths_consistent(&hierarchy.root);
        assert_no_folder_record_conflict(&hierarchy.root);
        assert_coverage(&hierarchy.root, first_occurrences(subset.iter().copied()));
    }
}

#[test]
fn documented_scenarios() {
    let groups = vec![
        VariableGroup::new(1, "A"),
        VariableGroup::new(2, "A-B"),
        VariableGroup::new(3, "C-D"),
        VariableGroup::new(4, "C-E"),
        VariableGroup::new(5, "F-G-H"),
        VariableGroup::new(6, "A"),
    ];
    let hierarchy = HierarchyBuilder::new().build(&groups);
    let root = &hierarchy.root;

    let a = root.child("A").unwrap();
    assert!(a.is_folder());
    assert_eq!(a.self_record().and_then(|n| n.record).map(|r| r.id.clone()), Some(GroupId::Number(1)));
    assert_eq!(a.child("B").unwrap().path, "A-B");

    let c = root.child("C").unwrap();
    let tokens: Vec<&ChildKey> = c.children.keys().collect();
    assert_eq!(tokens, vec![&ChildKey::token("D"), &ChildKey::token("E")]);

    assert_eq!(root.descend(["F", "G", "H"]).unwrap().path, "F-G-H");
    assert_eq!(hierarchy.shadowed.len(), 1);
    assert_eq!(hierarchy.shadowed[0].id, GroupId::Number(6));

    assert_paths_consistent(root);
    assert_no_folder_record_conflict(root);
}
