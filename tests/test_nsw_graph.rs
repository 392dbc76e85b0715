//! Integration tests for the NSW graph

use proxima_ann::{AnnError, IndexError, NodeId, NswGraph};

fn three_node_graph() -> (NswGraph, NodeId, NodeId, NodeId) {
    let mut graph = NswGraph::new();
    let node1 = graph.insert(vec![1.0, 2.0, 3.0]);
    let node2 = graph.insert(vec![4.0, 5.0, 6.0]);
    let node3 = graph.insert(vec![7.0, 8.0, 9.0]);
    (graph, node1, node2, node3)
}

#[test]
fn test_add_first_node() {
    let mut graph = NswGraph::new();
    let value = vec![1.0, 2.0, 3.0];

    let node = graph.insert(value.clone());

    assert_eq!(graph.len(), 1);
    assert_eq!(graph.node(node).unwrap().vector(), value.as_slice());
    assert_eq!(graph.node(node).unwrap().degree(), 0);
    assert_eq!(graph.search(&value, 1).unwrap(), vec![value]);
}

#[test]
fn test_chain_wiring() {
    let (graph, node1, node2, node3) = three_node_graph();

    assert_eq!(graph.neighbors(node1), vec![node2]);
    assert_eq!(graph.neighbors(node3), vec![node2]);

    let mut middle = graph.neighbors(node2);
    middle.sort();
    assert_eq!(middle, vec![node1, node3]);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_search_two_nearest() {
    let (graph, _, _, _) = three_node_graph();

    let results = graph.search(&[3.5, 5.5, 6.5], 2).unwrap();
    assert_eq!(results, vec![vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]]);
}

#[test]
fn test_k_is_clamped_to_node_count() {
    let (graph, _, _, _) = three_node_graph();

    let results = graph.search(&[0.0, 0.0, 0.0], 10).unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0], vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_search_keeps_duplicates_from_expansion() {
    let (graph, _, _, _) = three_node_graph();

    // node1 is reached again through node2 before node3 is ever appended.
    let results = graph.search(&[0.0, 0.0, 0.0], 3).unwrap();
    assert_eq!(
        results,
        vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![1.0, 2.0, 3.0],
        ]
    );
    assert!(!results.contains(&vec![7.0, 8.0, 9.0]));
}

#[test]
fn test_nearest_follows_greedy_walk() {
    let (graph, _, node2, _) = three_node_graph();

    assert_eq!(graph.find_closest(&[6.0, 6.0, 6.0]).unwrap(), node2);
    assert_eq!(graph.nearest(&[100.0, 100.0, 100.0]).unwrap(), vec![7.0, 8.0, 9.0]);
}

#[test]
fn test_query_is_not_inserted() {
    let (graph, _, _, _) = three_node_graph();

    graph.search(&[3.5, 5.5, 6.5], 2).unwrap();
    assert_eq!(graph.len(), 3);
}

#[test]
fn test_search_on_empty_graph() {
    let graph = NswGraph::new();

    let err = graph.search(&[1.0, 2.0], 3).unwrap_err();
    assert!(matches!(err, AnnError::Index(IndexError::EmptyIndex { .. })));
    assert!(err.to_string().contains("empty"));
}

#[test]
fn test_entry_point_is_first_insert() {
    let (graph, node1, _, _) = three_node_graph();

    assert_eq!(graph.entry_point(), Some(node1));
    assert_eq!(
        graph.nodes().map(|n| n.id().index()).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
}

#[test]
fn test_line_of_points_finds_exact_match() {
    let mut graph = NswGraph::new();
    for i in 0..100 {
        graph.insert(vec![i as f32, 0.0]);
    }

    assert_eq!(graph.nearest(&[42.0, 0.0]).unwrap(), vec![42.0, 0.0]);
    let results = graph.search(&[42.2, 0.0], 3).unwrap();
    assert_eq!(results[0], vec![42.0, 0.0]);
    assert_eq!(results.len(), 3);
}
