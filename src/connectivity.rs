use crate::disjoint_set::DisjointSet;
use crate::graph::Graph;

const UNASSIGNED: usize = usize::MAX;

/// Partition of a graph's vertices into connected components.
///
/// Component ids are dense and assigned in the order their first vertex is
/// met while scanning `0..num_vertices`, so the numbering is deterministic
/// for a given input.
pub struct Components {
    pub count: usize,
    pub component_of: Vec<usize>,
}

impl Components {
    pub fn is_connected(&self) -> bool {
        self.count == 1
    }

    /// Vertex indices grouped by component id, each group in ascending order.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.count];
        for (vertex, &component) in self.component_of.iter().enumerate() {
            groups[component].push(vertex);
        }
        groups
    }
}

/// Unions the endpoints of every reachable edge, then labels each vertex
/// with a dense component id.
pub fn components(graph: &Graph) -> Components {
    let num_vertices = graph.num_vertices();
    let mut sets = DisjointSet::new(num_vertices);

    for edge in graph.edges() {
        if let Some((u, v)) = edge.endpoints {
            if !sets.is_same(u, v) {
                sets.unite(u, v);
            }
        }
    }

    let mut root_to_component = vec![UNASSIGNED; num_vertices];
    let mut component_of = vec![0; num_vertices];
    let mut count = 0;
    for vertex in 0..num_vertices {
        let root = sets.root(vertex);
        if root_to_component[root] == UNASSIGNED {
            root_to_component[root] = count;
            count += 1;
        }
        component_of[vertex] = root_to_component[root];
    }

    Components { count, component_of }
}
