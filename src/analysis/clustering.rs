//! K-means clustering over RGB samples
//!
//! Initialization is farthest-point seeding from the middle sample, so the
//! result depends only on the samples and `k`. Clusters that lose all their
//! members keep their previous centroid.

/// A color cluster with its member count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cluster {
    /// Mean color of the members
    pub centroid: [f64; 3],
    /// Number of samples assigned to the cluster
    pub population: usize,
}

fn distance_squared(a: [f64; 3], b: [f64; 3]) -> f64 {
    a.iter().zip(&b).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Index of the centroid closest to a sample, earliest on ties
fn nearest(sample: [f64; 3], centroids: &[[f64; 3]]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (index, &centroid) in centroids.iter().enumerate() {
        let distance = distance_squared(sample, centroid);
        if distance < best_distance {
            best_distance = distance;
            best = index;
        }
    }
    best
}

fn seed_centroids(samples: &[[f64; 3]], k: usize) -> Vec<[f64; 3]> {
    let mut centroids = Vec::with_capacity(k);
    let Some(&first) = samples.get(samples.len() / 2) else {
        return centroids;
    };
    centroids.push(first);

    while centroids.len() < k {
        let mut best_distance = 0.0;
        let mut best_sample = first;
        for &sample in samples {
            let distance = centroids
                .iter()
                .map(|&c| distance_squared(sample, c))
                .fold(f64::INFINITY, f64::min);
            if distance > best_distance {
                best_distance = distance;
                best_sample = sample;
            }
        }
        centroids.push(best_sample);
    }

    centroids
}

/// Partition samples into `k` clusters
///
/// Returns clusters ordered by population, largest first; equal populations
/// keep seeding order. Returns an empty list when there are no samples or
/// `k` is zero.
pub fn kmeans(samples: &[[f64; 3]], k: usize, max_iterations: usize) -> Vec<Cluster> {
    if samples.is_empty() || k == 0 {
        return Vec::new();
    }

    let mut centroids = seed_centroids(samples, k);
    let mut assignments = vec![usize::MAX; samples.len()];
    let mut counts = vec![0usize; k];

    for _ in 0..max_iterations.max(1) {
        let mut changed = false;
        let mut sums = vec![[0.0f64; 3]; k];
        counts.fill(0);

        for (sample, assignment) in samples.iter().zip(assignments.iter_mut()) {
            let cluster = nearest(*sample, &centroids);
            if *assignment != cluster {
                *assignment = cluster;
                changed = true;
            }
            if let (Some(sum), Some(count)) = (sums.get_mut(cluster), counts.get_mut(cluster)) {
                for (total, value) in sum.iter_mut().zip(sample) {
                    *total += value;
                }
                *count += 1;
            }
        }

        for ((centroid, sum), &count) in centroids.iter_mut().zip(&sums).zip(&counts) {
            if count > 0 {
                *centroid = sum.map(|total| total / count as f64);
            }
        }

        if !changed {
            break;
        }
    }

    let mut clusters: Vec<Cluster> = centroids
        .into_iter()
        .zip(counts)
        .map(|(centroid, population)| Cluster {
            centroid,
            population,
        })
        .collect();
    clusters.sort_by(|a, b| b.population.cmp(&a.population));
    clusters
}
