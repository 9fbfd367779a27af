use ordtree::unbalanced::Tree;
use ordtree::Error;

use quickcheck_macros::quickcheck;

use crate::sorted_distinct;

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.inorder().into_iter().copied().eq(sorted_distinct(&xs))
}

#[quickcheck]
fn size_matches_inorder(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    for delete in &deletes {
        let _ = tree.remove(delete);
    }

    tree.size() == tree.inorder().len()
}

#[quickcheck]
fn duplicate_add_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let preorder: Vec<i8> = tree.preorder().into_iter().copied().collect();
    let size = tree.size();

    tree.extend(xs);

    tree.size() == size && tree.preorder().into_iter().copied().eq(preorder)
}

#[quickcheck]
fn add_then_remove_restores_tree(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().filter(|&k| k != x).collect();
    let inorder: Vec<i8> = tree.inorder().into_iter().copied().collect();

    tree.add(x);
    tree.remove(&x) == Ok(x) && tree.inorder().into_iter().copied().eq(inorder)
}

#[quickcheck]
fn removed_keys_are_gone(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        let _ = tree.remove(delete);
    }

    deletes.iter().all(|x| tree.get(x) == Err(Error::NotFound))
        && xs
            .iter()
            .filter(|x| !deletes.contains(*x))
            .all(|x| tree.contains(x))
}

#[quickcheck]
fn levelorder_is_a_permutation(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let mut levelorder = tree.levelorder();
    levelorder.sort();

    levelorder == tree.inorder() && tree.levelorder().first() == tree.preorder().first()
}

#[test]
fn remove_from_empty_tree() {
    let mut tree = Tree::<i8>::new();

    assert_eq!(tree.remove(&1), Err(Error::NotFound));
    assert_eq!(tree.size(), 0);
}
