use crate::error::GraphError;

/// A vertex: an external label plus its position in the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub id: i64,
    pub x: f64,
    pub y: f64,
}

/// One slot in the flat edge list.
///
/// `endpoints` is `None` when the input pair referenced a vertex outside the
/// graph; such edges keep their slot (so edge counts stay stable) but carry
/// the infinite sentinel weight and never reach the adjacency lists.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub endpoints: Option<(usize, usize)>,
    pub weight: f64,
}

/// Weighted undirected graph over 2-D points, immutable after construction.
///
/// Carries both representations the engines need: a flat edge list for the
/// sort-and-scan of Kruskal and per-vertex adjacency lists for Prim. Weights
/// are Euclidean distances, computed here and nowhere else.
pub struct Graph {
    points: Vec<Point>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl Graph {
    /// Builds the graph from loaded points and 0-indexed endpoint pairs.
    ///
    /// Pairs are taken as given by the loader, so an index may be negative or
    /// past the vertex count; those edges become unreachable slots with a
    /// warning rather than failing the build.
    pub fn build(points: Vec<Point>, endpoint_pairs: &[(i64, i64)]) -> Result<Self, GraphError> {
        if points.is_empty() {
            return Err(GraphError::NoVertices);
        }

        let mut adjacency = vec![Vec::new(); points.len()];
        let mut edges = Vec::with_capacity(endpoint_pairs.len());

        for &(source, dest) in endpoint_pairs {
            let edge = match (index_in(source, points.len()), index_in(dest, points.len())) {
                (Some(u), Some(v)) => {
                    let weight = euclidean_distance(&points[u], &points[v]);
                    adjacency[u].push((v, weight));
                    adjacency[v].push((u, weight));
                    Edge { endpoints: Some((u, v)), weight }
                }
                _ => {
                    tracing::warn!(source, dest, "edge references a vertex outside the graph");
                    Edge { endpoints: None, weight: f64::INFINITY }
                }
            };
            edges.push(edge);
        }

        Ok(Graph { points, edges, adjacency })
    }

    pub fn num_vertices(&self) -> usize {
        self.points.len()
    }

    /// Total edge slots, unreachable ones included.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn num_unreachable_edges(&self) -> usize {
        self.edges.iter().filter(|e| e.endpoints.is_none()).count()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Incident `(neighbor, weight)` pairs of `u`.
    pub fn neighbors(&self, u: usize) -> &[(usize, f64)] {
        &self.adjacency[u]
    }
}

fn index_in(raw: i64, num_vertices: usize) -> Option<usize> {
    (0..num_vertices as i64).contains(&raw).then_some(raw as usize)
}

pub fn euclidean_distance(a: &Point, b: &Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}
