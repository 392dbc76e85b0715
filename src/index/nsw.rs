/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Navigable Small World (NSW) graph
//!
//! A single-layer proximity graph. Every traversal starts from the first
//! node ever inserted and greedily walks toward the target. New nodes are
//! wired to the closest node found that way, then to every neighbor that is
//! at least as close to the new node as the node it was reached through.
//! There is no degree cap; the admission test keeps fan-out local.
//!
//! Ranking uses squared L2 distance. The admission test needs a real metric
//! and uses the square-rooted distance.

use indexmap::IndexSet;
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, trace};

use crate::compute::{DistanceCompute, EuclideanDistance, SquaredEuclideanDistance};
use crate::core::errors::IndexError;
use crate::index::NearestNeighborIndex;
use crate::Result;

/// Handle of a node inside one [`NswGraph`]. Ids are assigned in insertion
/// order starting at zero and are only meaningful for the graph that issued
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct NswNode {
    id: NodeId,
    vector: Vec<f32>,
    /// Kept in the order edges were created.
    neighbors: IndexSet<NodeId>,
}

impl NswNode {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn vector(&self) -> &[f32] {
        &self.vector
    }

    pub fn neighbors(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.neighbors.iter().copied()
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_neighbor(&self, other: NodeId) -> bool {
        self.neighbors.contains(&other)
    }
}

/// Undirected proximity graph over vectors
#[derive(Debug, Clone, Default)]
pub struct NswGraph {
    /// Insertion order; `nodes[i].id == NodeId(i)`.
    nodes: Vec<NswNode>,
}

impl NswGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The first node ever inserted; every traversal starts here.
    pub fn entry_point(&self) -> Option<NodeId> {
        self.nodes.first().map(|node| node.id)
    }

    pub fn node(&self, id: NodeId) -> Option<&NswNode> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &NswNode> + '_ {
        self.nodes.iter()
    }

    /// Neighbors of `id`, empty for an unknown id
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.node(id)
            .map(|node| node.neighbors().collect())
            .unwrap_or_default()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(NswNode::degree).sum::<usize>() / 2
    }

    /// Add `vector` to the graph and wire it into its local neighborhood.
    pub fn insert(&mut self, vector: Vec<f32>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let closest = self
            .entry_point()
            .map(|entry| self.find_closest_from(entry, &vector));

        self.nodes.push(NswNode {
            id,
            vector,
            neighbors: IndexSet::new(),
        });

        let Some(closest) = closest else {
            debug!("NswGraph::insert: {} is the entry point", id);
            return id;
        };

        // Breadth-first over the frontier, growing it while we walk it.
        let mut frontier = vec![closest];
        let mut i = 0;
        while i < frontier.len() {
            let current = frontier[i];
            self.connect(id, current);

            let via_current = self.euclidean(id, current);
            let candidates: Vec<NodeId> = self.nodes[current.0]
                .neighbors
                .iter()
                .copied()
                .filter(|&candidate| candidate != id && !frontier.contains(&candidate))
                .filter(|&candidate| self.euclidean(id, candidate) <= via_current)
                .collect();
            frontier.extend(candidates);
            i += 1;
        }

        debug!(
            "NswGraph::insert: {} linked to {} neighbors starting from {}, nodes={}",
            id,
            self.nodes[id.0].degree(),
            closest,
            self.nodes.len()
        );
        id
    }

    /// Up to `k` stored vectors near `query`.
    ///
    /// Results are gathered breadth-first from the closest node found, each
    /// node's neighbors sorted by distance to the query. The list is not
    /// deduplicated, so a vector reachable from several visited nodes can
    /// appear more than once.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<Vec<f32>>> {
        let closest = self.find_closest(query)?;
        let k = k.min(self.nodes.len());

        let mut results = vec![closest];
        let mut i = 0;
        while results.len() < k && i < results.len() {
            let mut ranked: Vec<(NodeId, f32)> = self.nodes[results[i].0]
                .neighbors
                .iter()
                .map(|&neighbor| (neighbor, self.rank(neighbor, query)))
                .collect();
            ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
            results.extend(ranked.into_iter().map(|(neighbor, _)| neighbor));
            i += 1;
        }
        results.truncate(k);

        debug!(
            "NswGraph::search: k={}, closest={}, expanded={}, returned={}",
            k,
            closest,
            i,
            results.len()
        );
        Ok(results
            .into_iter()
            .map(|id| self.nodes[id.0].vector.clone())
            .collect())
    }

    /// The single nearest stored vector found by greedy search
    pub fn nearest(&self, query: &[f32]) -> Result<Vec<f32>> {
        let closest = self.find_closest(query)?;
        Ok(self.nodes[closest.0].vector.clone())
    }

    /// Greedy walk from the entry point toward `target`.
    pub fn find_closest(&self, target: &[f32]) -> Result<NodeId> {
        let entry = self.entry_point().ok_or_else(|| IndexError::EmptyIndex {
            index: "NswGraph".to_string(),
        })?;
        Ok(self.find_closest_from(entry, target))
    }

    fn find_closest_from(&self, entry: NodeId, target: &[f32]) -> NodeId {
        let mut best = entry;
        let mut best_distance = f32::INFINITY;

        let mut frontier = vec![entry];
        let mut i = 0;
        while i < frontier.len() {
            let current = frontier[i];
            let distance = self.rank(current, target);
            if distance < best_distance {
                best_distance = distance;
                best = current;
            }

            let mut next: Option<(NodeId, f32)> = None;
            for &neighbor in &self.nodes[current.0].neighbors {
                let d = self.rank(neighbor, target);
                if d < next.map_or(f32::INFINITY, |(_, nd)| nd) {
                    next = Some((neighbor, d));
                }
            }
            // Only follow the walk while it keeps improving.
            if let Some((neighbor, d)) = next {
                if d < best_distance {
                    frontier.push(neighbor);
                }
            }
            i += 1;
        }

        trace!(
            "NswGraph::find_closest: best={}, distance={}, visited={}",
            best,
            best_distance,
            frontier.len()
        );
        best
    }

    /// Symmetric edge; no-op for self-edges and existing edges.
    fn connect(&mut self, a: NodeId, b: NodeId) {
        if a == b || self.nodes[a.0].neighbors.contains(&b) {
            return;
        }
        self.nodes[a.0].neighbors.insert(b);
        self.nodes[b.0].neighbors.insert(a);
    }

    fn rank(&self, node: NodeId, target: &[f32]) -> f32 {
        SquaredEuclideanDistance.distance(&self.nodes[node.0].vector, target)
    }

    fn euclidean(&self, a: NodeId, b: NodeId) -> f32 {
        EuclideanDistance.distance(&self.nodes[a.0].vector, &self.nodes[b.0].vector)
    }
}

impl NearestNeighborIndex for NswGraph {
    type Point = Vec<f32>;
    type Handle = NodeId;

    fn insert(&mut self, point: Vec<f32>) -> NodeId {
        NswGraph::insert(self, point)
    }

    fn search(&self, query: &Vec<f32>, k: usize) -> Result<Vec<Vec<f32>>> {
        NswGraph::search(self, query, k)
    }

    fn size(&self) -> usize {
        self.len()
    }
}
