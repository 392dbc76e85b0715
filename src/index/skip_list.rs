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

//! One-dimensional skip list for nearest-value search
//!
//! Nodes live in an arena and link to each other by index. Slots 0 and 1 are
//! the head (-inf) and tail (+inf) sentinels; they span every level and are
//! never returned from a search. Level 0 holds every value in ascending
//! order; each higher level holds a random subset of the level below, which
//! keeps the expected descent logarithmic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::core::config::SkipListConfig;
use crate::index::NearestNeighborIndex;
use crate::Result;

const HEAD: usize = 0;
const TAIL: usize = 1;

#[derive(Debug, Clone)]
struct LevelNode {
    value: f64,
    /// One entry per level the node participates in, bottom first.
    forward: Vec<usize>,
    backward: Vec<usize>,
}

impl LevelNode {
    fn sentinel(value: f64, max_level: usize, peer: usize) -> Self {
        Self {
            value,
            forward: vec![peer; max_level],
            backward: vec![peer; max_level],
        }
    }
}

/// Skip list answering "k values nearest to x" queries
#[derive(Debug, Clone)]
pub struct SkipList1D {
    max_level: usize,
    level_increase_probability: f64,
    rng: StdRng,
    nodes: Vec<LevelNode>,
}

impl SkipList1D {
    pub fn new(config: SkipListConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        info!(
            "SkipList1D::new: max_level={}, level_increase_probability={}, seed={:?}",
            config.max_level, config.level_increase_probability, config.seed
        );

        Ok(Self {
            max_level: config.max_level,
            level_increase_probability: config.level_increase_probability,
            rng,
            nodes: vec![
                LevelNode::sentinel(f64::NEG_INFINITY, config.max_level, TAIL),
                LevelNode::sentinel(f64::INFINITY, config.max_level, HEAD),
            ],
        })
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Number of inserted values
    pub fn len(&self) -> usize {
        self.nodes.len() - 2
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert `value`. Duplicates are kept; NaN is ignored since it has no
    /// position in the ordering.
    pub fn insert(&mut self, value: f64) {
        if value.is_nan() {
            warn!("SkipList1D::insert: ignoring NaN value");
            return;
        }

        let mut update = vec![HEAD; self.max_level];
        let floor = self.descend(value, |level, node| update[level] = node);

        // The descent never steps onto the tail, so a value at or beyond the
        // current maximum ends up right before the tail on every level.
        if self.nodes[floor].forward[0] == TAIL {
            debug_assert!((0..self.max_level)
                .all(|level| update[level] == self.nodes[TAIL].backward[level]));
        }

        let id = self.nodes.len();
        self.nodes.push(LevelNode {
            value,
            forward: Vec::new(),
            backward: Vec::new(),
        });

        let mut level = 0;
        loop {
            let prev = update[level];
            let next = self.nodes[prev].forward[level];

            self.nodes[id].forward.push(next);
            self.nodes[id].backward.push(prev);
            self.nodes[prev].forward[level] = id;
            self.nodes[next].backward[level] = id;

            level += 1;
            if level == self.max_level || !self.rng.gen_bool(self.level_increase_probability) {
                break;
            }
        }

        debug!(
            "SkipList1D::insert: value={}, node={}, height={}, total={}",
            value,
            id,
            level,
            self.len()
        );
    }

    /// Up to `k` stored values ordered nearest-to-farthest from `value`.
    ///
    /// Scans outward from the floor position with one cursor per side. Ties
    /// go to the larger value.
    pub fn search(&self, value: f64, k: usize) -> Vec<f64> {
        let mut neighbours = Vec::with_capacity(k.min(self.len()));
        if k == 0 {
            return neighbours;
        }

        let floor = self.descend(value, |_, _| {});
        let mut left = self.live(floor);
        let mut right = self.live(self.nodes[floor].forward[0]);

        while neighbours.len() < k {
            match (left, right) {
                (Some(l), Some(r))
                    if value - self.nodes[l].value < self.nodes[r].value - value =>
                {
                    neighbours.push(self.nodes[l].value);
                    left = self.live(self.nodes[l].backward[0]);
                }
                (Some(l), None) => {
                    neighbours.push(self.nodes[l].value);
                    left = self.live(self.nodes[l].backward[0]);
                }
                (_, Some(r)) => {
                    neighbours.push(self.nodes[r].value);
                    right = self.live(self.nodes[r].forward[0]);
                }
                (None, None) => break,
            }
        }

        debug!(
            "SkipList1D::search: query={}, k={}, floor={}, returned={}",
            value,
            k,
            floor,
            neighbours.len()
        );
        neighbours
    }

    /// Stored values in ascending order
    pub fn iter(&self) -> Values<'_> {
        Values {
            list: self,
            cursor: self.nodes[HEAD].forward[0],
        }
    }

    /// Number of nodes linked at each level, bottom level first
    pub fn level_sizes(&self) -> Vec<usize> {
        (0..self.max_level)
            .map(|level| {
                let mut count = 0;
                let mut cursor = self.nodes[HEAD].forward[level];
                while cursor != TAIL {
                    count += 1;
                    cursor = self.nodes[cursor].forward[level];
                }
                count
            })
            .collect()
    }

    /// Top-down descent to the rightmost node whose value is <= `value`.
    /// `on_level` sees the node the walk stopped at on each level.
    fn descend(&self, value: f64, mut on_level: impl FnMut(usize, usize)) -> usize {
        let mut current = HEAD;
        for level in (0..self.max_level).rev() {
            let mut next = self.nodes[current].forward[level];
            while next != TAIL && self.nodes[next].value <= value {
                current = next;
                next = self.nodes[current].forward[level];
            }
            on_level(level, current);
        }
        current
    }

    fn live(&self, node: usize) -> Option<usize> {
        (node != HEAD && node != TAIL).then_some(node)
    }
}

/// Ascending iterator over the values of a [`SkipList1D`]
pub struct Values<'a> {
    list: &'a SkipList1D,
    cursor: usize,
}

impl Iterator for Values<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let node = self.list.live(self.cursor)?;
        self.cursor = self.list.nodes[node].forward[0];
        Some(self.list.nodes[node].value)
    }
}

impl NearestNeighborIndex for SkipList1D {
    type Point = f64;
    type Handle = ();

    fn insert(&mut self, point: f64) {
        SkipList1D::insert(self, point)
    }

    fn search(&self, query: &f64, k: usize) -> Result<Vec<f64>> {
        Ok(SkipList1D::search(self, *query, k))
    }

    fn size(&self) -> usize {
        self.len()
    }
}
