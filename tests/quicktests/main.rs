//! Property tests run against the public API of both trees.

use quickcheck_macros::quickcheck;

mod avl;
mod unbalanced;

/// Returns `xs` sorted with duplicates removed, which is what an in-order
/// traversal of a tree built from `xs` must yield.
fn sorted_distinct(xs: &[i8]) -> Vec<i8> {
    let mut xs = xs.to_vec();
    xs.sort_unstable();
    xs.dedup();
    xs
}

#[quickcheck]
fn both_trees_agree(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut plain: ordtree::unbalanced::Tree<_> = xs.iter().copied().collect();
    let mut balanced: ordtree::avl::Tree<_> = xs.iter().copied().collect();

    for delete in &deletes {
        if plain.remove(delete) != balanced.remove(delete) {
            return false;
        }
    }

    plain.inorder() == balanced.inorder() && plain.size() == balanced.size()
}
