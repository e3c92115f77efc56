use assert_matches::assert_matches;
use ordtree::{Error, Order, Tree};

/// The tree built by inserting 5, 3, 8, 1, 4, 7, 9 in that order.
fn scenario() -> Tree<i32> {
    let mut tree = Tree::new(5);
    for x in [3, 8, 1, 4, 7, 9] {
        assert!(tree.insert(x));
    }
    tree
}

#[test]
fn scenario_traversals() {
    let tree = scenario();

    assert_eq!(
        tree.in_order().copied().collect::<Vec<_>>(),
        [1, 3, 4, 5, 7, 8, 9]
    );
    assert_eq!(
        tree.pre_order().copied().collect::<Vec<_>>(),
        [5, 3, 1, 4, 8, 7, 9]
    );
    assert_eq!(
        tree.post_order().copied().collect::<Vec<_>>(),
        [1, 4, 3, 7, 9, 8, 5]
    );
    assert!(tree.contains(&4));
    assert!(!tree.contains(&6));
}

#[test]
fn single_node_scenario() {
    let tree = Tree::new(10);

    for order in [Order::InOrder, Order::PreOrder, Order::PostOrder] {
        assert_eq!(tree.traverse(order).copied().collect::<Vec<_>>(), [10]);
    }
    assert!(tree.contains(&10));
    assert!(!tree.contains(&0));
    assert!(!tree.contains(&i32::MAX));
}

#[test]
fn duplicate_insert_leaves_everything_unchanged() {
    let mut tree = scenario();
    let before: Vec<Vec<i32>> = [Order::InOrder, Order::PreOrder, Order::PostOrder]
        .into_iter()
        .map(|order| tree.traverse(order).copied().collect())
        .collect();

    for x in [5, 3, 8, 1, 4, 7, 9] {
        assert!(!tree.insert(x));
    }

    let after: Vec<Vec<i32>> = [Order::InOrder, Order::PreOrder, Order::PostOrder]
        .into_iter()
        .map(|order| tree.traverse(order).copied().collect())
        .collect();
    assert_eq!(before, after);
    assert!(!tree.contains(&6));
}

#[test]
fn hand_driven_consumption() {
    let tree = scenario();
    let mut traversal = tree.pre_order();
    let mut seen = Vec::new();

    while traversal.has_next() {
        seen.push(*traversal.next_value().unwrap());
    }

    assert_eq!(seen.first(), Some(tree.value()));
    assert_eq!(seen.len(), tree.len());
    assert_matches!(traversal.next_value(), Err(Error::EmptyState));
    assert_matches!(traversal.remove(), Err(Error::Unsupported));
}

#[test]
fn errors_render_readably() {
    assert_eq!(Error::EmptyState.to_string(), "traversal is exhausted");
    assert_eq!(
        Error::Unsupported.to_string(),
        "removing values through a traversal is not supported"
    );
}

#[test]
fn works_with_non_copy_values() {
    let mut tree = Tree::new(String::from("m"));
    tree.extend(["q", "b", "z", "a"].map(String::from));

    assert!(tree.contains(&"z".to_string()));
    let words: Vec<&str> = tree.in_order().map(String::as_str).collect();
    assert_eq!(words, ["a", "b", "m", "q", "z"]);
}
