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

//! Approximate nearest-neighbor index structures
//!
//! - [`SkipList1D`]: multi-level ordered list over scalars
//! - [`NswGraph`]: navigable small world graph over vectors
//!
//! Both are single-writer structures. Wrap them in a lock if they must be
//! shared across threads.

pub mod nsw;
pub mod skip_list;

pub use nsw::{NodeId, NswGraph, NswNode};
pub use skip_list::SkipList1D;

use crate::Result;

/// Common surface of the ANN indexes
pub trait NearestNeighborIndex {
    /// Value stored in and queried against the index
    type Point: Clone;
    /// Whatever `insert` hands back to the caller
    type Handle;

    /// Add a point to the index
    fn insert(&mut self, point: Self::Point) -> Self::Handle;

    /// Return up to `k` stored points near `query`, nearest first
    fn search(&self, query: &Self::Point, k: usize) -> Result<Vec<Self::Point>>;

    /// Get total number of points in the index
    fn size(&self) -> usize;
}
