use ordgraph::{Edge, Graph};

fn sample() -> Graph<i32, String> {
    let mut g: Graph<i32, String> = Graph::from([1, 2, 3, 4]);
    g.insert_edge(&1, &2, "a".to_string()).unwrap();
    g.insert_edge(&1, &3, "b".to_string()).unwrap();
    g.insert_edge(&2, &3, "c".to_string()).unwrap();
    g.insert_edge(&4, &3, "d".to_string()).unwrap();
    g
}

const SAMPLE_TEXT: &str = "1 (\n  2 | a\n  3 | b\n)\n2 (\n  3 | c\n)\n3 (\n)\n4 (\n  3 | d\n)\n";

#[test]
fn default_graph_is_empty() {
    let g: Graph<i32, String> = Graph::new();
    assert!(g.is_empty());
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g, Graph::default());
}

#[test]
fn from_array_inserts_every_value() {
    let g: Graph<i32, String> = Graph::from([4, 1, 3, 2]);
    for v in 1..=4 {
        assert!(g.is_node(&v));
    }
    assert_eq!(g.nodes(), vec![1, 2, 3, 4]);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn from_iterator_collapses_duplicates() {
    let values = vec![3, 1, 3, 2, 1];
    let g: Graph<i32, i32> = values.iter().copied().collect();
    assert_eq!(g.nodes(), vec![1, 2, 3]);

    let g2 = Graph::<i32, i32>::from_nodes(values);
    assert_eq!(g, g2);
}

#[test]
fn extend_adds_only_new_nodes() {
    let mut g: Graph<char, u8> = Graph::from(['b']);
    g.extend(['a', 'b', 'c']);
    assert_eq!(g.nodes(), vec!['a', 'b', 'c']);
}

#[test]
fn clone_is_a_deep_independent_copy() {
    let g = sample();
    let mut copy = g.clone();
    assert_eq!(copy, g);
    assert_eq!(copy.to_string(), SAMPLE_TEXT);

    copy.erase_node(&3);
    copy.insert_node(9);
    assert_eq!(g.to_string(), SAMPLE_TEXT);
    assert_ne!(copy, g);
}

#[test]
fn clone_has_its_own_identity() {
    let g = sample();
    let copy = g.clone();
    assert_ne!(g.begin(), copy.begin());
    assert_ne!(g.end(), copy.end());
    assert_eq!(copy.edge_at(g.begin()), None);
}

#[test]
fn take_leaves_an_empty_graph_and_keeps_cursors_valid() {
    let mut g = sample();
    let it = g.begin();

    let moved = g.take();
    assert!(g.is_empty());
    assert_eq!(moved.to_string(), SAMPLE_TEXT);

    let it = moved.next_edge(it);
    assert_eq!(
        moved.edge_at(it),
        Some(Edge::new(1, 3, "b".to_string()))
    );
    assert_eq!(g.edge_at(it), None);
}

#[test]
fn mem_take_matches_take() {
    let mut g = sample();
    let first = g.begin();
    let moved = std::mem::take(&mut g);
    assert!(g.is_empty());
    assert_eq!(moved.edge_at(first), Some(Edge::new(1, 2, "a".to_string())));
    assert_eq!(moved.begin(), first);
}

#[test]
fn assignment_replaces_previous_contents() {
    let mut target: Graph<i32, String> = Graph::from([7, 8]);
    let source = sample();
    assert!(target.is_node(&7));
    target.clone_from(&source);
    assert_eq!(target, source);
    assert!(!target.is_node(&7));
}
