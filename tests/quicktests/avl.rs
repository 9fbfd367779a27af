use ordtree::avl::{Node, Tree};
use ordtree::Error;

use quickcheck_macros::quickcheck;

use crate::sorted_distinct;

/// Recomputes the height of a subtree by walking all of it.
fn walk_height(node: Option<&Node<i8>>) -> isize {
    node.map_or(-1, |n| walk_height(n.left()).max(walk_height(n.right())) + 1)
}

fn is_balanced(node: Option<&Node<i8>>) -> bool {
    node.map_or(true, |n| {
        n.balance_factor() == walk_height(n.left()) - walk_height(n.right())
            && n.balance_factor().abs() <= 1
            && is_balanced(n.left())
            && is_balanced(n.right())
    })
}

fn build(xs: &[i8], deletes: &[i8]) -> Tree<i8> {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in deletes {
        let _ = tree.remove(delete);
    }
    tree
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i8>) -> bool {
    let tree = build(&xs, &[]);

    tree.inorder().into_iter().copied().eq(sorted_distinct(&xs))
}

#[quickcheck]
fn stays_balanced(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in xs {
        tree.add(x);
        if !is_balanced(tree.root()) {
            return false;
        }
    }
    for delete in &deletes {
        let _ = tree.remove(delete);
        if !is_balanced(tree.root()) {
            return false;
        }
    }
    true
}

#[quickcheck]
fn cached_height_is_correct(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let tree = build(&xs, &deletes);

    tree.height() == walk_height(tree.root())
}

#[quickcheck]
fn size_matches_inorder(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let tree = build(&xs, &deletes);

    tree.size() == tree.inorder().len()
}

#[quickcheck]
fn duplicate_add_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs, &[]);
    let inorder: Vec<i8> = tree.inorder().into_iter().copied().collect();
    let size = tree.size();

    tree.extend(xs);

    tree.size() == size && tree.inorder().into_iter().copied().eq(inorder)
}

#[quickcheck]
fn add_then_remove_restores_inorder(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().filter(|&k| k != x).collect();
    let inorder: Vec<i8> = tree.inorder().into_iter().copied().collect();

    tree.add(x);
    tree.remove(&x) == Ok(x) && tree.inorder().into_iter().copied().eq(inorder)
}

#[quickcheck]
fn deepest_branches_end_at_deepest_leaves(xs: Vec<i8>) -> bool {
    let tree = build(&xs, &[]);
    let deepest = tree.deepest_branches();

    // The first listed branch runs from the root down to a leaf at the
    // tree's full height.
    let mut node = tree.root();
    let mut depth = 0;
    for data in &deepest {
        match node {
            Some(n) if n.data() == *data => {
                node = if n.balance_factor() < 0 { n.right() } else { n.left() };
                depth += 1;
            }
            _ => break,
        }
    }

    depth - 1 == tree.height() && deepest.first().copied() == tree.root().map(|n| n.data())
}

#[test]
fn scenario_sorted_in_between() {
    let tree: Tree<_> = [0, 10, -10, -15, 5, -5, 15].into_iter().collect();

    assert_eq!(tree.sorted_in_between(&-5, &5), Ok(vec![&0]));
    assert_eq!(
        tree.sorted_in_between(&-16, &16),
        Ok(vec![&-15, &-10, &-5, &0, &5, &10, &15])
    );
    assert_eq!(
        tree.deepest_branches(),
        [&0, &-10, &-15, &-5, &10, &5, &15]
    );
    assert!(matches!(
        tree.sorted_in_between(&5, &3),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn scenario_rotations() {
    let tree: Tree<_> = [10, 5, 15].into_iter().collect();
    assert_eq!(tree.inorder(), [&5, &10, &15]);
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.root().map(Node::data), Some(&10));

    let tree: Tree<_> = [10, 20, 30].into_iter().collect();
    assert_eq!(tree.inorder(), [&10, &20, &30]);
    assert_eq!(tree.root().map(Node::data), Some(&20));
    assert_eq!(tree.root().map(Node::balance_factor), Some(0));
}

#[test]
fn scenario_failed_operations_change_nothing() {
    let mut tree = Tree::<i32>::new();
    assert_eq!(tree.remove(&1), Err(Error::NotFound));

    tree.extend([1, 2, 3]);
    assert_eq!(tree.remove(&4), Err(Error::NotFound));
    assert_eq!(tree.get(&4), Err(Error::NotFound));
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.preorder(), [&2, &1, &3]);

    assert!(matches!(
        Tree::try_from_options([Some(1), None]),
        Err(Error::InvalidArgument(_))
    ));
}
