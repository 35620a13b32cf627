use std::{cmp::Ordering, collections::HashMap, hash::Hash};

/// A node that hangs under a parent and is displayed in a fixed order.
pub trait TreeNode: Sized {
    /// Type of the parent reference
    type Id: Eq + Hash + Clone;

    /// Get node's parent ID
    fn parent_id(&self) -> Self::Id;

    /// Get sort key for sorting
    fn sort_key(&self) -> i32;

    /// Compare this node with another for sorting
    fn compare(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

/// Sorts siblings in place. Ties keep their incoming order.
pub fn sort_nodes<T: TreeNode>(nodes: &mut [T]) {
    nodes.sort_by(|a, b| a.compare(b));
}

/// Buckets nodes by parent id, each bucket sorted with [`sort_nodes`].
pub fn group_by_parent<T: TreeNode>(nodes: Vec<T>) -> HashMap<T::Id, Vec<T>> {
    let mut children: HashMap<T::Id, Vec<T>> = HashMap::with_capacity(nodes.len());
    for node in nodes {
        children.entry(node.parent_id()).or_default().push(node);
    }
    for siblings in children.values_mut() {
        sort_nodes(siblings);
    }
    children
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Node {
        name: &'static str,
        parent: u8,
        order: i32,
    }

    impl TreeNode for Node {
        type Id = u8;

        fn parent_id(&self) -> u8 {
            self.parent
        }

        fn sort_key(&self) -> i32 {
            self.order
        }
    }

    fn node(name: &'static str, parent: u8, order: i32) -> Node {
        Node {
            name,
            parent,
            order,
        }
    }

    #[test]
    fn groups_and_sorts_children() {
        let grouped = group_by_parent(vec![
            node("c", 1, 3),
            node("a", 1, 1),
            node("x", 2, 0),
            node("b", 1, 2),
        ]);

        let names: Vec<_> = grouped[&1].iter().map(|n| n.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(grouped[&2].len(), 1);
        assert!(!grouped.contains_key(&3));
    }

    #[test]
    fn ties_keep_input_order() {
        let mut nodes = vec![node("first", 0, 1), node("second", 0, 1), node("zero", 0, 0)];
        sort_nodes(&mut nodes);
        let names: Vec<_> = nodes.iter().map(|n| n.name).collect();
        assert_eq!(names, vec!["zero", "first", "second"]);
    }
}
