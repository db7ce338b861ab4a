use ordered_tree::OrderedTree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

fn build<K: Ord + Clone>(xs: &[K]) -> OrderedTree<K> {
    xs.iter().cloned().collect()
}

/// Applies a set of operations to a tree and a `BTreeSet`, checking after every step that
/// both agree on what each operation did and, for `Op::Iter`, on the sorted keys.
fn do_ops<K>(ops: &[Op<K>], tree: &mut OrderedTree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(k) => tree.insert(k.clone()) == set.insert(k.clone()),
            Op::Remove(k) => tree.remove(k) == set.remove(k),
            Op::Iter => tree.traverse().eq(set.iter()),
        };
        if !agrees || tree.len() != set.len() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.traverse().eq(set.iter())
        && set.iter().all(|key| tree.search(key))
}

#[quickcheck]
fn traversal_is_strictly_ascending(xs: Vec<i16>) -> bool {
    let tree = build(&xs);
    let keys: Vec<_> = tree.traverse().collect();

    keys.windows(2).all(|pair| pair[0] < pair[1]) && keys.len() == tree.len()
}

#[quickcheck]
fn traversal_restarts(xs: Vec<i16>) -> bool {
    let tree = build(&xs);

    tree.traverse().eq(tree.traverse())
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut once = build(&xs);
    once.insert(x);
    let mut twice = once.clone();

    !twice.insert(x) && once == twice
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.search(x)) && still_present.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn remove_drops_only_that_key(xs: Vec<i16>, pick: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let key = xs[pick % xs.len()];
    let mut tree = build(&xs);
    let expected: Vec<i16> = tree.traverse().copied().filter(|k| *k != key).collect();

    tree.remove(&key)
        && !tree.search(&key)
        && tree.traverse().copied().eq(expected)
        && tree.len() == xs.iter().collect::<HashSet<_>>().len() - 1
}

#[quickcheck]
fn remove_missing_is_noop(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree = build(&xs);
    tree.remove(&missing);
    let before = tree.clone();

    !tree.remove(&missing) && tree == before
}

#[quickcheck]
fn min_max_match_traversal(xs: Vec<i16>) -> bool {
    let tree = build(&xs);

    tree.min() == tree.traverse().next() && tree.max() == tree.traverse().last()
}

#[quickcheck]
fn owned_iteration_matches_borrowed(xs: Vec<i16>) -> bool {
    let tree = build(&xs);
    let borrowed: Vec<i16> = tree.traverse().copied().collect();

    tree.into_iter().eq(borrowed)
}
