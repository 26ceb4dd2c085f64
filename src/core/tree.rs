//! Decision tree nodes
//!
//! A tree is either a question with yes/no branches or a leaf holding the
//! objects that could not be (or did not need to be) split further. A node is
//! never both; the enum makes the mixed state unrepresentable.

/// A node in a discriminating decision tree
///
/// A branch of a `Question` may be absent when no candidate object falls on
/// that side of the split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// Asks about a binary feature and branches on the answer
    Question {
        feature: String,
        yes: Option<Box<TreeNode>>,
        no: Option<Box<TreeNode>>,
    },
    /// Holds one or more object names, sorted alphabetically
    ///
    /// Length is 1 for a fully discriminated object, greater when the
    /// features ran out while several objects remained indistinguishable.
    Leaf { objects: Vec<String> },
}

impl TreeNode {
    /// Whether this node is a leaf
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Number of nodes in the subtree rooted here
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Question { yes, no, .. } => {
                1 + yes.as_ref().map_or(0, |n| n.node_count())
                    + no.as_ref().map_or(0, |n| n.node_count())
            }
        }
    }

    /// Length of the longest root-to-leaf path, counting question nodes
    ///
    /// A lone leaf has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Question { yes, no, .. } => {
                let yes_depth = yes.as_ref().map_or(0, |n| n.depth());
                let no_depth = no.as_ref().map_or(0, |n| n.depth());
                1 + yes_depth.max(no_depth)
            }
        }
    }

    /// All leaf object lists, left (yes) branches first
    #[must_use]
    pub fn leaves(&self) -> Vec<&[String]> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a [String]>) {
        match self {
            Self::Leaf { objects } => out.push(objects),
            Self::Question { yes, no, .. } => {
                if let Some(node) = yes {
                    node.collect_leaves(out);
                }
                if let Some(node) = no {
                    node.collect_leaves(out);
                }
            }
        }
    }

    /// Every object name stored in the subtree's leaves
    #[must_use]
    pub fn leaf_objects(&self) -> Vec<String> {
        self.leaves().into_iter().flatten().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(names: &[&str]) -> Option<Box<TreeNode>> {
        Some(Box::new(TreeNode::Leaf {
            objects: names.iter().map(ToString::to_string).collect(),
        }))
    }

    fn sample_tree() -> TreeNode {
        TreeNode::Question {
            feature: "red".to_string(),
            yes: Some(Box::new(TreeNode::Question {
                feature: "sweet".to_string(),
                yes: leaf(&["apple"]),
                no: leaf(&["tomato"]),
            })),
            no: leaf(&["banana", "lemon"]),
        }
    }

    #[test]
    fn leaf_is_leaf() {
        let node = TreeNode::Leaf {
            objects: vec!["apple".to_string()],
        };
        assert!(node.is_leaf());
        assert!(!sample_tree().is_leaf());
    }

    #[test]
    fn node_count_includes_questions_and_leaves() {
        assert_eq!(sample_tree().node_count(), 5);
    }

    #[test]
    fn depth_counts_questions_on_longest_path() {
        assert_eq!(sample_tree().depth(), 2);

        let lone = TreeNode::Leaf {
            objects: vec!["apple".to_string()],
        };
        assert_eq!(lone.depth(), 0);
    }

    #[test]
    fn depth_with_missing_branch() {
        let node = TreeNode::Question {
            feature: "red".to_string(),
            yes: leaf(&["apple"]),
            no: None,
        };
        assert_eq!(node.depth(), 1);
        assert_eq!(node.node_count(), 2);
    }

    #[test]
    fn leaves_visit_yes_branch_first() {
        let tree = sample_tree();
        let leaves = tree.leaves();
        assert_eq!(leaves.len(), 3);
        assert_eq!(leaves[0], ["apple"]);
        assert_eq!(leaves[1], ["tomato"]);
        assert_eq!(leaves[2], ["banana", "lemon"]);
    }

    #[test]
    fn leaf_objects_flattens_all_leaves() {
        let mut objects = sample_tree().leaf_objects();
        objects.sort_unstable();
        assert_eq!(objects, ["apple", "banana", "lemon", "tomato"]);
    }
}
