use condition_mst::{ConditionState, Edge, Graph, GraphError, MSTAlgorithms, MinHeap};

use ConditionState::{Cracked, Open};

/// Sample network of eight inspection points, every connection open.
fn sample_table() -> Vec<(char, char, Edge)> {
    [
        ('a', 'b', 5.0, 20.0),
        ('b', 'c', 12.0, 35.0),
        ('c', 'd', 8.0, 25.0),
        ('d', 'e', 15.0, 40.0),
        ('e', 'f', 3.0, 18.0),
        ('f', 'g', 10.0, 30.0),
        ('g', 'h', 7.0, 22.0),
        ('h', 'a', 20.0, 45.0),
        ('a', 'c', 6.0, 28.0),
        ('b', 'd', 11.0, 33.0),
        ('c', 'e', 9.0, 27.0),
        ('d', 'f', 14.0, 38.0),
        ('e', 'g', 4.0, 19.0),
        ('f', 'h', 13.0, 36.0),
    ]
    .into_iter()
    .map(|(u, v, min, max)| (u, v, Edge::new(min, max, Open)))
    .collect()
}

#[test]
fn test_four_point_network() {
    let graph = Graph::from_adjacency([
        (
            "A",
            vec![
                ("B", Edge::new(2.0, 4.0, Open)),
                ("C", Edge::new(1.0, 6.0, Cracked)),
            ],
        ),
        (
            "B",
            vec![
                ("A", Edge::new(2.0, 4.0, Open)),
                ("D", Edge::new(2.0, 5.0, Cracked)),
            ],
        ),
        (
            "C",
            vec![
                ("A", Edge::new(1.0, 6.0, Cracked)),
                ("D", Edge::new(1.0, 3.0, Open)),
            ],
        ),
        (
            "D",
            vec![
                ("B", Edge::new(2.0, 5.0, Cracked)),
                ("C", Edge::new(1.0, 3.0, Open)),
            ],
        ),
    ]);

    let mst = graph.prim(&"A").unwrap();
    let admitted: Vec<_> = mst.iter().map(|e| (e.start, e.end)).collect();
    assert_eq!(admitted, vec![("A", "B"), ("B", "D"), ("D", "C")]);
    assert!((mst.total_weight - 9.75).abs() < 1e-10);
}

#[test]
fn test_sample_network_directed() {
    // Only the listed direction of each row is traversable
    let graph = Graph::from_edge_list(&sample_table(), true);
    let mst = graph.prim(&'a').unwrap();

    let admitted: Vec<_> = mst.iter().map(|e| (e.start, e.end)).collect();
    assert_eq!(
        admitted,
        vec![
            ('a', 'b'),
            ('a', 'c'),
            ('c', 'd'),
            ('c', 'e'),
            ('e', 'f'),
            ('e', 'g'),
            ('g', 'h'),
        ]
    );
    assert!((mst.total_weight - 65.4).abs() < 1e-9);
}

#[test]
fn test_sample_network_undirected() {
    let graph = Graph::from_edge_list(&sample_table(), false);

    for start in graph.nodes().copied().collect::<Vec<_>>() {
        let mst = graph.prim(&start).unwrap();
        assert_eq!(mst.len(), graph.num_nodes() - 1);
        assert!((mst.total_weight - 65.4).abs() < 1e-9);
    }
}

#[test]
fn test_disconnected_network() {
    let mut graph = Graph::from_edge_list(&sample_table(), false);
    graph.add_node('z');

    let mst = graph.prim(&'a').unwrap();
    assert_eq!(mst.len(), 7);
    assert!(!mst.nodes().contains(&'z'));
}

#[test]
fn test_missing_start() {
    let graph = Graph::from_edge_list(&sample_table(), false);
    assert!(matches!(
        graph.prim(&'q'),
        Err(GraphError::NodeNotFound { .. })
    ));
}

#[test]
fn test_heap_outside_traversal() {
    let mut heap: MinHeap<char> = MinHeap::new();
    assert_eq!(heap.size(), 0);
    assert!(matches!(heap.pop_min(), Err(GraphError::EmptyQueue)));

    for (u, v, edge) in sample_table() {
        heap.push(u, v, edge);
    }
    let first = heap.pop_min().unwrap();
    assert_eq!((first.start, first.end), ('e', 'f'));
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    #[test]
    fn test_state_as_code() {
        assert_eq!(serde_json::to_string(&Cracked).unwrap(), "3");
        let state: ConditionState = serde_json::from_str("2").unwrap();
        assert_eq!(state, ConditionState::Closed);
    }

    #[test]
    fn test_unmapped_state_rejected() {
        let err = serde_json::from_str::<ConditionState>("9").unwrap_err();
        assert!(err.to_string().contains("unmapped condition state code 9"));

        let err = serde_json::from_str::<Edge>(r#"{"min":1.0,"max":2.0,"state":0}"#).unwrap_err();
        assert!(err.to_string().contains("unmapped"));
    }

    #[test]
    fn test_edge_round_trip() {
        let edge = Edge::new(1.0, 6.0, Cracked);
        let json = serde_json::to_string(&edge).unwrap();
        let back: Edge = serde_json::from_str(&json).unwrap();
        assert_eq!(back, edge);
        assert!((back.effective_weight() - 6.25).abs() < 1e-10);
    }
}
