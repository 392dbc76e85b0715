//! Property tests for the ANN primitives
//!
//! proptest generates random insert sequences and checks:
//! 1. The skip list keeps its values sorted and returns min(k, n) results
//! 2. Skip list results are ordered by distance to the query
//! 3. The NSW graph stays symmetric and irreflexive
//! 4. NSW search returns min(k, n) vectors, starting with a stored one

use proptest::prelude::*;
use proxima_ann::{NearestNeighborIndex, NswGraph, SkipList1D, SkipListConfig};

fn finite_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1_000.0f64..1_000.0, 0..200)
}

fn vectors(dim: usize) -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(-100.0f32..100.0, dim), 1..80)
}

/// Cardinality must hold for any index driven through the common trait.
fn assert_cardinality<I>(index: &I, query: &I::Point, k: usize)
where
    I: NearestNeighborIndex,
{
    let results = index.search(query, k).unwrap();
    assert_eq!(results.len(), k.min(index.size()));
}

proptest! {
    #[test]
    fn skip_list_level_zero_is_sorted(values in finite_values(), seed in any::<u64>()) {
        let mut list = SkipList1D::new(SkipListConfig { seed: Some(seed), ..Default::default() }).unwrap();
        for &v in &values {
            list.insert(v);
        }

        let stored: Vec<f64> = list.iter().collect();
        prop_assert_eq!(stored.len(), values.len());
        prop_assert!(stored.windows(2).all(|w| w[0] <= w[1]));

        let mut expected = values.clone();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        prop_assert_eq!(stored, expected);
    }

    #[test]
    fn skip_list_returns_nearest_first(
        values in finite_values(),
        query in -1_200.0f64..1_200.0,
        k in 0usize..250,
    ) {
        let mut list = SkipList1D::new(SkipListConfig::default()).unwrap();
        for &v in &values {
            list.insert(v);
        }

        let results = list.search(query, k);
        prop_assert_eq!(results.len(), k.min(values.len()));
        prop_assert!(results
            .windows(2)
            .all(|w| (w[0] - query).abs() <= (w[1] - query).abs()));

        // The scan is exact in one dimension.
        let mut by_distance = values.clone();
        by_distance.sort_by(|a, b| (a - query).abs().partial_cmp(&(b - query).abs()).unwrap());
        let expected: Vec<f64> = by_distance.iter().take(k).map(|v| (v - query).abs()).collect();
        let got: Vec<f64> = results.iter().map(|v| (v - query).abs()).collect();
        prop_assert_eq!(got, expected);

        assert_cardinality(&list, &query, k);
    }

    #[test]
    fn nsw_edges_are_symmetric(points in vectors(3)) {
        let mut graph = NswGraph::new();
        for p in points {
            graph.insert(p);
        }

        for node in graph.nodes() {
            prop_assert!(!node.is_neighbor(node.id()));
            for neighbor in node.neighbors() {
                prop_assert!(graph.node(neighbor).unwrap().is_neighbor(node.id()));
            }
        }
        prop_assert!(graph.edge_count() >= graph.len() - 1);
    }

    #[test]
    fn nsw_search_cardinality(points in vectors(4), query in prop::collection::vec(-100.0f32..100.0, 4), k in 0usize..100) {
        let mut graph = NswGraph::new();
        for p in &points {
            graph.insert(p.clone());
        }

        let results = graph.search(&query, k).unwrap();
        prop_assert_eq!(results.len(), k.min(points.len()));
        prop_assert!(results.iter().all(|r| points.contains(r)));

        assert_cardinality(&graph, &query, k);
    }
}
