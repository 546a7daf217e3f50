use crate::data_structures::DistanceQueue;
use crate::graph::Weight;

/// Dijkstra's algorithm over an adjacency list with non-negative weights.
///
/// Returns the distance from `source` to every vertex, `None` for unreachable
/// ones. Weights and distances are plain values here, so a distance equal to
/// the weight type's maximum is still a real distance. A path whose length
/// overflows the weight type is not followed.
///
/// Each vertex is settled at most once, so the loop terminates even if a
/// negative weight slips in; the distances are then unreliable.
pub(crate) fn dijkstra<W>(adjacency: &[Vec<(usize, W)>], source: usize) -> Vec<Option<W>>
where
    W: Weight,
{
    let n = adjacency.len();
    let mut distances: Vec<Option<W>> = vec![None; n];
    let mut settled = vec![false; n];

    distances[source] = Some(W::zero());

    let mut queue = DistanceQueue::with_capacity(n);
    queue.push(source, W::zero());

    while let Some((u, dist_u)) = queue.pop() {
        // Stale entry: u was already settled through a shorter path
        if settled[u] {
            continue;
        }
        settled[u] = true;

        for &(v, weight) in &adjacency[u] {
            if settled[v] {
                continue;
            }
            if let Some(new_dist) = dist_u.checked_sum(weight) {
                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    queue.push(v, new_dist);
                }
            }
        }
    }

    distances
}
