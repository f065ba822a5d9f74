use crate::connectivity;
use crate::graph::Graph;
use crate::heap::IndexedMinHeap;
use crate::MstOutcome;

/// Forest-aware Prim: partitions the graph into connected components first,
/// then grows one tree per component and sums the per-component costs.
///
/// Partitioning up front keeps each heap scoped to a single component, so a
/// neighbor in another component simply fails the membership test during
/// relaxation. On a connected graph this degenerates to one plain Prim run.
pub fn run(graph: &Graph) -> MstOutcome {
    let components = connectivity::components(graph);
    if !components.is_connected() {
        tracing::warn!(
            components = components.count,
            "graph is disconnected, spanning one tree per component"
        );
    }

    let mut total_weight = 0.0;
    for members in components.groups() {
        total_weight += span_component(graph, &members);
    }
    tracing::debug!(total_weight, components = components.count, "prim finished");

    MstOutcome {
        total_weight,
        components: components.count,
        is_connected: components.is_connected(),
    }
}

/// Plain Prim over one component, seeded at its first-listed vertex.
///
/// Only the component's vertices are pushed, each with an infinite key
/// except the seed at zero. Every extraction settles the cheapest frontier
/// vertex; its key is the weight of the tree edge recorded in `parent`.
fn span_component(graph: &Graph, members: &[usize]) -> f64 {
    if members.len() < 2 {
        return 0.0;
    }

    let mut heap = IndexedMinHeap::with_capacity(graph.num_vertices());
    let mut keys = vec![f64::INFINITY; graph.num_vertices()];
    let mut parent: Vec<Option<usize>> = vec![None; graph.num_vertices()];

    let seed = members[0];
    keys[seed] = 0.0;
    for &vertex in members {
        heap.push(vertex, keys[vertex]);
    }

    let mut cost = 0.0;
    while let Some((u, key)) = heap.extract_min() {
        // the seed enters the tree for free, everything else pays its key
        if parent[u].is_some() {
            cost += key;
        }

        for &(v, weight) in graph.neighbors(u) {
            if heap.contains(v) && weight < keys[v] {
                keys[v] = weight;
                parent[v] = Some(u);
                heap.decrease_key(v, weight);
            }
        }
    }

    cost
}
