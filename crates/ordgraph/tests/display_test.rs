use ordgraph::{Edge, Graph};

#[test]
fn display_lists_nodes_and_edges_in_order() {
    let mut g: Graph<i32, i32> = Graph::from([4, 2, 3]);
    g.insert_edge(&4, &2, 1).unwrap();
    g.insert_edge(&4, &2, -1).unwrap();
    g.insert_edge(&2, &3, 0).unwrap();
    assert_eq!(
        g.to_string(),
        "2 (\n  3 | 0\n)\n3 (\n)\n4 (\n  2 | -1\n  2 | 1\n)\n"
    );
}

#[test]
fn empty_graph_displays_as_empty_string() {
    let g: Graph<i32, i32> = Graph::new();
    assert_eq!(g.to_string(), "");
}

#[test]
fn debug_lists_nodes_and_edges() {
    let mut g: Graph<i32, char> = Graph::from([1, 2]);
    g.insert_edge(&1, &2, 'x').unwrap();
    let text = format!("{g:?}");
    assert!(text.starts_with("Graph { nodes: [1, 2], edges: ["));
    assert!(text.contains("Edge { from: 1, to: 2, weight: 'x' }"));
}

#[test]
fn equality_ignores_insertion_order_and_identity() {
    let mut a: Graph<&str, i32> = Graph::from(["x", "y"]);
    a.insert_edge(&"x", &"y", 1).unwrap();
    a.insert_edge(&"y", &"x", 2).unwrap();

    let mut b: Graph<&str, i32> = Graph::new();
    b.insert_node("y");
    b.insert_node("x");
    b.insert_edge(&"y", &"x", 2).unwrap();
    b.insert_edge(&"x", &"y", 1).unwrap();

    assert_eq!(a, b);
    b.erase_edge(&"x", &"y", &1).unwrap();
    assert_ne!(a, b);
}

#[test]
fn equality_sees_isolated_nodes() {
    let a: Graph<i32, i32> = Graph::from([1, 2]);
    let b: Graph<i32, i32> = Graph::from([1, 3]);
    assert_ne!(a, b);
    assert_ne!(a, Graph::from([1]));
}

#[test]
fn edges_order_like_the_graph() {
    let mut edges = vec![
        Edge::new(2, 1, 'a'),
        Edge::new(1, 3, 'a'),
        Edge::new(1, 2, 'b'),
        Edge::new(1, 2, 'a'),
    ];
    edges.sort();
    assert_eq!(
        edges,
        vec![
            Edge::from((1, 2, 'a')),
            Edge::from((1, 2, 'b')),
            Edge::from((1, 3, 'a')),
            Edge::from((2, 1, 'a')),
        ]
    );
}

#[test]
fn graph_iterates_by_reference() {
    let mut g: Graph<i32, i32> = Graph::from([1, 2]);
    g.insert_edge(&1, &2, 7).unwrap();
    g.insert_edge(&2, &1, 8).unwrap();
    let mut total = 0;
    for edge in &g {
        total += *edge.weight;
    }
    assert_eq!(total, 15);
}
