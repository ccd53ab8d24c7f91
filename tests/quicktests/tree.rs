use balanced_bst::{Order, Tree, TreeError};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                assert_eq!(bst.insert(x.clone()), set.insert(x.clone()));
            }
            Op::Delete(x) => {
                assert_eq!(bst.delete(x), set.take(x));
            }
            Op::Rebalance => {
                bst.rebalance();
                assert!(bst.is_balanced());
            }
            Op::Traverse(order) => {
                let values = bst.traverse(*order);
                assert_eq!(values.len(), set.len());
                if *order == Order::In {
                    assert_eq!(values, set.iter().collect::<Vec<_>>());
                }
            }
        }
    }
}

/// Builds a tree by inserting the values one at a time, in the order given.
fn insert_all(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }

    tree
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    set.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
        && tree.inorder() == set.iter().collect::<Vec<_>>()
}

#[quickcheck]
fn build_round_trips(xs: Vec<i16>) -> bool {
    let sorted: Vec<i16> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    let tree = Tree::build(sorted.clone());

    tree.inorder().into_iter().copied().collect::<Vec<_>>() == sorted && tree.is_balanced()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = insert_all(&xs);

    xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = insert_all(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| {
        tree.find(x).is_none()
            && tree.height(x) == Err(TreeError::ValueNotFound)
            && tree.depth(x) == Err(TreeError::ValueNotFound)
    })
}

#[quickcheck]
fn insert_keeps_values_sorted_and_unique(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = insert_all(&xs);
    let was_present = tree.contains(&x);
    let len = tree.len();

    let inserted = tree.insert(x);
    let values = tree.inorder();

    inserted != was_present
        && tree.len() == if was_present { len } else { len + 1 }
        && values.windows(2).all(|pair| pair[0] < pair[1])
        && values.iter().filter(|v| ***v == x).count() == 1
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = insert_all(&xs);
    for delete in &deletes {
        let len = tree.len();
        let deleted = tree.delete(delete);
        let shrunk = tree.len() == if deleted.is_some() { len - 1 } else { len };
        if !shrunk || tree.contains(delete) {
            return false;
        }
    }

    let values = tree.inorder();
    values.windows(2).all(|pair| pair[0] < pair[1])
        && xs
            .iter()
            .filter(|x| !deletes.contains(x))
            .all(|x| tree.contains(x))
}

#[quickcheck]
fn rebalance_always_balances(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = insert_all(&xs);
    for delete in &deletes {
        tree.delete(delete);
    }
    let before: Vec<i8> = tree.inorder().into_iter().copied().collect();

    tree.rebalance();
    tree.is_balanced() && tree.inorder().into_iter().copied().collect::<Vec<_>>() == before
}

#[quickcheck]
fn traversals_visit_every_value_once(xs: Vec<i8>) -> bool {
    let tree = insert_all(&xs);
    let expected: BTreeSet<_> = xs.iter().collect();

    [Order::Level, Order::Pre, Order::In, Order::Post]
        .into_iter()
        .all(|order| {
            let values = tree.traverse(order);
            values.len() == expected.len()
                && values.into_iter().collect::<BTreeSet<_>>() == expected
        })
}

#[quickcheck]
fn depth_and_height_fit_in_the_tree(xs: Vec<i8>) -> bool {
    let tree = insert_all(&xs);
    let Some(root) = tree.root() else {
        return xs.is_empty();
    };
    let tree_height = root.height();

    xs.iter().all(|x| match (tree.depth(x), tree.height(x)) {
        (Ok(depth), Ok(height)) => depth + height <= tree_height,
        _ => false,
    })
}

#[test]
fn delete_two_children_promotes_successor() {
    let mut tree = Tree::build(1..=7);

    assert!(tree.is_balanced());
    assert_eq!(tree.height(&4), Ok(2));
    assert_eq!(tree.depth(&4), Ok(0));
    assert_eq!(tree.depth(&1), Ok(2));

    assert_eq!(tree.delete(&4), Some(4));
    assert_eq!(tree.root().map(|n| *n.value()), Some(5));
    assert_eq!(tree.inorder(), vec![&1, &2, &3, &5, &6, &7]);
}

#[test]
fn repeated_inserts_then_rebalance() {
    let mut tree = Tree::build(1..=7);
    for x in 100..104 {
        tree.insert(x);
    }
    assert!(!tree.is_balanced());

    tree.rebalance();

    assert!(tree.is_balanced());
    assert_eq!(
        tree.inorder(),
        vec![&1, &2, &3, &4, &5, &6, &7, &100, &101, &102, &103]
    );
}
