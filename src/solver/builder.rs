//! Decision tree construction
//!
//! Recursively partitions a candidate object set, always asking about the
//! feature whose split is most balanced over the candidates still in play.

use super::entropy::select_feature;
use crate::core::{Dataset, TreeNode};

/// Build a decision tree over a candidate set
///
/// The candidates are sorted alphabetically before anything else, so the
/// result is independent of the order they were supplied in. The chosen
/// feature is removed from the set handed to both branches; each branch gets
/// its own copy, so siblings never observe each other's removals.
///
/// Returns `None` for an empty candidate set. A single candidate becomes a
/// one-object leaf; when the features run out first, every remaining
/// candidate is merged into one alphabetically sorted leaf.
///
/// # Examples
/// ```
/// use twenty_questions::core::{Dataset, TreeNode};
/// use twenty_questions::solver::build_tree;
///
/// let dataset = Dataset::parse("object,red\napple,1\nlemon,0\n").unwrap();
/// let tree = build_tree(&dataset, &dataset.sorted_object_names(), dataset.features());
///
/// match tree.unwrap() {
///     TreeNode::Question { feature, .. } => assert_eq!(feature, "red"),
///     TreeNode::Leaf { .. } => panic!("two distinguishable objects need a question"),
/// }
/// ```
#[must_use]
pub fn build_tree(dataset: &Dataset, objects: &[String], features: &[String]) -> Option<TreeNode> {
    if objects.is_empty() {
        return None;
    }

    let mut objects = objects.to_vec();
    objects.sort_unstable();

    if objects.len() == 1 || features.is_empty() {
        return Some(TreeNode::Leaf { objects });
    }

    let (feature, _) = select_feature(dataset, &objects, features)?;

    let (yes, no): (Vec<String>, Vec<String>) = objects
        .into_iter()
        .partition(|object| dataset.has_feature(object, feature));

    let remaining: Vec<String> = features
        .iter()
        .filter(|f| f.as_str() != feature)
        .cloned()
        .collect();

    Some(TreeNode::Question {
        feature: feature.to_string(),
        yes: build_tree(dataset, &yes, &remaining).map(Box::new),
        no: build_tree(dataset, &no, &remaining).map(Box::new),
    })
}

/// Build the tree for a whole dataset
///
/// Convenience wrapper over [`build_tree`] starting from every object and
/// every feature.
#[must_use]
pub fn build_full_tree(dataset: &Dataset) -> Option<TreeNode> {
    build_tree(dataset, &dataset.sorted_object_names(), dataset.features())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> Dataset {
        Dataset::parse(
            "object,red,round,sweet\n\
             apple,1,1,1\n\
             banana,0,0,1\n\
             tomato,1,1,0\n\
             lemon,0,1,0\n",
        )
        .unwrap()
    }

    #[test]
    fn empty_candidates_build_nothing() {
        let dataset = fruits();
        assert!(build_tree(&dataset, &[], dataset.features()).is_none());
    }

    #[test]
    fn single_candidate_is_a_leaf() {
        let dataset = fruits();
        let tree = build_tree(&dataset, &["apple".to_string()], dataset.features()).unwrap();

        assert_eq!(
            tree,
            TreeNode::Leaf {
                objects: vec!["apple".to_string()],
            }
        );
    }

    #[test]
    fn no_features_merges_candidates_sorted() {
        let dataset = fruits();
        let objects = vec!["tomato".to_string(), "apple".to_string()];
        let tree = build_tree(&dataset, &objects, &[]).unwrap();

        // Merged leaf is alphabetical regardless of input order
        assert_eq!(
            tree,
            TreeNode::Leaf {
                objects: vec!["apple".to_string(), "tomato".to_string()],
            }
        );
    }

    #[test]
    fn root_feature_is_red_for_fruits() {
        // red and sweet both split 2/2; red wins on declaration order
        let dataset = fruits();
        let tree = build_full_tree(&dataset).unwrap();

        match &tree {
            TreeNode::Question { feature, .. } => assert_eq!(feature, "red"),
            TreeNode::Leaf { .. } => panic!("expected a question at the root"),
        }
    }

    #[test]
    fn leaves_partition_the_object_set() {
        let dataset = fruits();
        let tree = build_full_tree(&dataset).unwrap();

        let mut objects = tree.leaf_objects();
        objects.sort_unstable();

        // Exactly the initial object set: nothing missing, nothing duplicated
        assert_eq!(objects, dataset.sorted_object_names());
    }

    #[test]
    fn leaves_partition_a_larger_table_too() {
        let dataset = Dataset::parse(crate::datasets::ANIMALS).unwrap();
        let tree = build_full_tree(&dataset).unwrap();

        let mut objects = tree.leaf_objects();
        objects.sort_unstable();
        assert_eq!(objects, dataset.sorted_object_names());
    }

    #[test]
    fn build_is_deterministic() {
        let dataset = fruits();

        let first = build_full_tree(&dataset);
        let second = build_full_tree(&dataset);
        assert_eq!(first, second);

        // Supplying candidates in reverse order changes nothing
        let mut reversed = dataset.sorted_object_names();
        reversed.reverse();
        let third = build_tree(&dataset, &reversed, dataset.features());
        assert_eq!(first, third);
    }

    #[test]
    fn chosen_feature_is_dropped_from_both_branches() {
        let dataset = fruits();
        let tree = build_full_tree(&dataset).unwrap();

        let TreeNode::Question { feature, yes, no } = &tree else {
            panic!("expected a question at the root");
        };

        fn features_below(node: &TreeNode, out: &mut Vec<String>) {
            if let TreeNode::Question { feature, yes, no } = node {
                out.push(feature.clone());
                if let Some(n) = yes {
                    features_below(n, out);
                }
                if let Some(n) = no {
                    features_below(n, out);
                }
            }
        }

        let mut below = Vec::new();
        if let Some(n) = yes {
            features_below(n, &mut below);
        }
        if let Some(n) = no {
            features_below(n, &mut below);
        }
        assert!(!below.contains(feature));
    }

    #[test]
    fn indistinguishable_objects_share_a_leaf() {
        let dataset = Dataset::parse(
            "object,red\n\
             apple,1\n\
             cherry,1\n\
             lemon,0\n",
        )
        .unwrap();
        let tree = build_full_tree(&dataset).unwrap();

        let leaves = tree.leaves();
        assert!(
            leaves
                .iter()
                .any(|leaf| *leaf == ["apple".to_string(), "cherry".to_string()])
        );
    }

    #[test]
    fn one_sided_feature_leaves_a_branch_absent() {
        // The only feature puts every object on the yes side
        let dataset = Dataset::parse(
            "object,alive\n\
             cat,1\n\
             dog,1\n",
        )
        .unwrap();
        let tree = build_full_tree(&dataset).unwrap();

        let TreeNode::Question { yes, no, .. } = &tree else {
            panic!("expected a question at the root");
        };
        assert!(yes.is_some());
        assert!(no.is_none());
    }

    #[test]
    fn fully_discriminating_tree_has_singleton_leaves() {
        let dataset = fruits();
        let tree = build_full_tree(&dataset).unwrap();

        for leaf in tree.leaves() {
            assert_eq!(leaf.len(), 1);
        }
        assert_eq!(tree.depth(), 2);
    }
}
