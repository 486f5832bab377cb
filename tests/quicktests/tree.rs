use std::collections::{BTreeMap, HashSet};

use ordered_tree::{FnComparator, OrderedTree, TraversalOrder};

use crate::Op;

fn build(xs: &[i8]) -> OrderedTree<i8> {
    xs.iter().copied().collect()
}

fn in_order(tree: &OrderedTree<i8>) -> Vec<i8> {
    tree.iter().copied().collect()
}

/// Applies a set of operations to a tree and a multiset model
/// (value -> occurrence count). This way we can ensure that after a random
/// smattering of inserts and deletes we have the same multiset of values in
/// the tree.
fn do_ops(ops: &[Op<i8>], tree: &mut OrderedTree<i8>, model: &mut BTreeMap<i8, usize>) {
    for op in ops {
        match *op {
            Op::Insert(x) => {
                tree.insert(x);
                *model.entry(x).or_insert(0) += 1;
            }
            Op::Remove(x) => {
                let expected = match model.get_mut(&x) {
                    Some(count) => {
                        *count -= 1;
                        if *count == 0 {
                            model.remove(&x);
                        }
                        true
                    }
                    None => false,
                };
                assert_eq!(tree.remove(&x), expected);
            }
        }
    }
}

fn model_contents(model: &BTreeMap<i8, usize>) -> Vec<i8> {
    model
        .iter()
        .flat_map(|(&x, &count)| std::iter::repeat(x).take(count))
        .collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut model = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut model);

    in_order(&tree) == model_contents(&model) && tree.len() == model.values().sum::<usize>()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);

    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);

    // Each successful remove takes exactly one occurrence; mirror that in
    // the model.
    let mut still_present = xs;
    for delete in &deletes {
        let removed = tree.remove(delete);
        match still_present.iter().position(|x| x == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                if !removed {
                    return false;
                }
            }
            None => {
                if removed {
                    return false;
                }
            }
        }
    }

    still_present.sort_unstable();
    in_order(&tree) == still_present && tree.len() == still_present.len()
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    let mut expected = xs;
    expected.sort_unstable();

    in_order(&tree) == expected
}

#[quickcheck]
fn every_traversal_visits_every_value_once(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    let mut expected = xs;
    expected.sort_unstable();

    [
        TraversalOrder::InOrder,
        TraversalOrder::PreOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::LevelOrder,
    ]
    .into_iter()
    .all(|order| {
        let mut visited: Vec<i8> = tree.traverse(order).copied().collect();
        visited.sort_unstable();
        visited == expected
    })
}

#[quickcheck]
fn height_is_within_bounds(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    match tree.len() {
        0 => tree.height() == -1,
        len => (0..len as isize).contains(&tree.height()),
    }
}

#[quickcheck]
fn min_max_match_in_order_endpoints(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let sorted = in_order(&tree);

    match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) => tree.min() == Ok(first) && tree.max() == Ok(last),
        (None, None) => tree.min().is_err() && tree.max().is_err(),
        _ => false,
    }
}

#[quickcheck]
fn reversed_comparator_iterates_descending(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::with_comparator(FnComparator(|a: &i8, b: &i8| b.cmp(a)));
    tree.extend(xs.iter().copied());

    let mut expected = xs;
    expected.sort_unstable_by(|a, b| b.cmp(a));

    tree.iter().copied().collect::<Vec<_>>() == expected
}

#[quickcheck]
fn owning_iteration_matches_borrowed(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let borrowed = in_order(&tree);
    let owned: Vec<i8> = tree.into_iter().collect();

    owned == borrowed
}
