/*
 * Copyright 2024 Vijaykumar Singh
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

//! Distance computation for graph traversal
//!
//! Two flavours of the L2 metric are provided:
//! - Squared Euclidean, used wherever only the ordering of distances matters
//! - Euclidean, used where a true metric is required (triangle-inequality tests)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DistanceMetric {
    /// Sum of squared per-coordinate differences
    SquaredEuclidean,
    /// Euclidean distance (L2 norm)
    Euclidean,
}

/// Distance computation trait
pub trait DistanceCompute: Send + Sync {
    /// Compute distance between two vectors
    fn distance(&self, a: &[f32], b: &[f32]) -> f32;

    /// Compute distances from query to multiple vectors (batched)
    fn distance_batch(&self, query: &[f32], vectors: &[&[f32]]) -> Vec<f32> {
        vectors.iter().map(|v| self.distance(query, v)).collect()
    }

    /// Get the metric type
    fn metric(&self) -> DistanceMetric;
}

/// Squared L2 distance; monotone in the true distance, so safe for ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredEuclideanDistance;

impl DistanceCompute for SquaredEuclideanDistance {
    #[inline]
    fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        squared_euclidean(a, b)
    }

    fn metric(&self) -> DistanceMetric {
        DistanceMetric::SquaredEuclidean
    }
}

/// Euclidean distance
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanDistance;

impl DistanceCompute for EuclideanDistance {
    #[inline]
    fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        squared_euclidean(a, b).sqrt()
    }

    fn metric(&self) -> DistanceMetric {
        DistanceMetric::Euclidean
    }
}

/// Scalar squared distance over the common prefix of `a` and `b`.
fn squared_euclidean(a: &[f32], b: &[f32]) -> f32 {
    let len = a.len().min(b.len());
    let chunks = len / 4;
    let mut sum = 0.0f32;

    for i in 0..chunks {
        let base = i * 4;

        let diff0 = a[base] - b[base];
        let diff1 = a[base + 1] - b[base + 1];
        let diff2 = a[base + 2] - b[base + 2];
        let diff3 = a[base + 3] - b[base + 3];

        sum += diff0 * diff0;
        sum += diff1 * diff1;
        sum += diff2 * diff2;
        sum += diff3 * diff3;
    }

    // Handle remainder
    for i in (chunks * 4)..len {
        let diff = a[i] - b[i];
        sum += diff * diff;
    }

    sum
}
