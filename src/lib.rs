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

//! # Proxima ANN - Approximate Nearest-Neighbor Primitives
//!
//! Building blocks for a hierarchical navigable small world index:
//!
//! - **[`SkipList1D`]**: probabilistic multi-level ordered list answering
//!   "k values nearest x" in expected logarithmic time
//! - **[`NswGraph`]**: navigable small world graph answering "k vectors
//!   nearest q" by greedy traversal
//!
//! Both structures are approximate, in-memory and single-writer.
//!
//! ```
//! use proxima_ann::{NswGraph, SkipList1D, SkipListConfig};
//!
//! let mut list = SkipList1D::new(SkipListConfig::default())?;
//! for v in [1.0, 2.0, 3.0] {
//!     list.insert(v);
//! }
//! assert_eq!(list.search(2.0, 10), vec![2.0, 3.0, 1.0]);
//!
//! let mut graph = NswGraph::new();
//! graph.insert(vec![1.0, 2.0, 3.0]);
//! graph.insert(vec![4.0, 5.0, 6.0]);
//! assert_eq!(graph.nearest(&[4.0, 4.0, 4.0])?, vec![4.0, 5.0, 6.0]);
//! # Ok::<(), proxima_ann::AnnError>(())
//! ```

pub mod compute;
pub mod core;
pub mod index;

pub use crate::core::*;
pub use index::{NearestNeighborIndex, NodeId, NswGraph, NswNode, SkipList1D};

pub type Result<T> = std::result::Result<T, AnnError>;
