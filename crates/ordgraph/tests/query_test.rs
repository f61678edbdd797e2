use ordgraph::{Error, Graph, Operation};

fn sample() -> Graph<String, i32> {
    let mut g = Graph::from(["how", "are", "you?"].map(String::from));
    g.insert_edge("how", "you?", 1).unwrap();
    g.insert_edge("how", "are", 5).unwrap();
    g.insert_edge("how", "you?", -3).unwrap();
    g.insert_edge("you?", "how", 1).unwrap();
    g
}

#[test]
fn nodes_are_sorted() {
    let g = sample();
    assert_eq!(g.nodes(), vec!["are", "how", "you?"]);
    assert!(g.is_node("are"));
    assert!(!g.is_node("who"));
}

#[test]
fn is_connected_checks_direction() {
    let g = sample();
    assert!(g.is_connected("how", "you?").unwrap());
    assert!(g.is_connected("you?", "how").unwrap());
    assert!(!g.is_connected("are", "how").unwrap());

    let err = g.is_connected("how", "who").unwrap_err();
    assert_eq!(
        err,
        Error::MissingEndpoint {
            op: Operation::IsConnected
        }
    );
    assert_eq!(
        err.to_string(),
        "cannot call Graph::is_connected when either src or dst node does not exist in the graph"
    );
}

#[test]
fn weights_are_sorted_and_scoped_to_one_pair() {
    let g = sample();
    assert_eq!(g.weights("how", "you?").unwrap(), vec![-3, 1]);
    assert_eq!(g.weights("how", "are").unwrap(), vec![5]);
    assert!(g.weights("are", "how").unwrap().is_empty());
    assert_eq!(
        g.weights("who", "how").unwrap_err().operation(),
        Operation::Weights
    );
}

#[test]
fn connections_are_distinct_and_sorted() {
    let g = sample();
    assert_eq!(g.connections("how").unwrap(), vec!["are", "you?"]);
    assert!(g.connections("are").unwrap().is_empty());

    let err = g.connections("who").unwrap_err();
    assert_eq!(
        err,
        Error::MissingNode {
            op: Operation::Connections
        }
    );
    assert_eq!(
        err.to_string(),
        "cannot call Graph::connections on a node that does not exist in the graph"
    );
}

#[test]
fn find_locates_exact_edges() {
    let g = sample();
    let it = g.find("how", "you?", &1);
    assert_ne!(it, g.end());
    let edge = g.edge_at(it).unwrap();
    assert_eq!(
        (edge.from.as_str(), edge.to.as_str(), edge.weight),
        ("how", "you?", 1)
    );

    assert_eq!(g.find("how", "you?", &2), g.end());
    assert_eq!(g.find("who", "you?", &1), g.end());
    assert_eq!(g.find("how", "who", &1), g.end());
}

#[test]
fn empty_graph_queries() {
    let g: Graph<i32, i32> = Graph::new();
    assert!(g.nodes().is_empty());
    assert_eq!(g.iter().count(), 0);
    assert_eq!(g.find(&1, &1, &1), g.end());
    assert!(g.connections(&1).is_err());
}
