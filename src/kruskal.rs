use crate::disjoint_set::DisjointSet;
use crate::graph::Graph;
use crate::MstOutcome;

/// Kruskal over the flat edge list: stable sort by weight, then a greedy
/// union-find scan that skips cycle-closing edges.
///
/// The sort is stable so equal weights keep their input order, which makes
/// the accepted edge set deterministic. On a disconnected graph the scan
/// exhausts the edges with fewer than `V - 1` acceptances and the total is
/// a spanning forest weight; the remaining set roots are the components.
pub fn run(graph: &Graph) -> MstOutcome {
    let num_vertices = graph.num_vertices();

    let mut ordered: Vec<(usize, usize, f64)> = graph
        .edges()
        .iter()
        .filter_map(|edge| edge.endpoints.map(|(u, v)| (u, v, edge.weight)))
        .collect();
    ordered.sort_by(|a, b| a.2.total_cmp(&b.2));

    let mut sets = DisjointSet::new(num_vertices);
    let mut total_weight = 0.0;
    let mut accepted = 0;

    for (u, v, weight) in ordered {
        if accepted >= num_vertices - 1 {
            break;
        }
        if sets.is_same(u, v) {
            continue;
        }
        sets.unite(u, v);
        total_weight += weight;
        accepted += 1;
    }

    let components = sets.count_roots();
    let is_connected = components == 1;
    if !is_connected {
        tracing::warn!(components, "graph is disconnected, result is a spanning forest");
    }
    tracing::debug!(total_weight, accepted, "kruskal finished");

    MstOutcome { total_weight, components, is_connected }
}
