use std::fs;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashSet;

use crate::error::LoadError;
use crate::graph::{Graph, Point};

/// What the loader observed beyond the graph itself. Per-row anomalies are
/// warnings, not failures, so callers get the graph plus these counts.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoadSummary {
    pub node_rows_skipped: usize,
    pub edge_rows_skipped: usize,
    pub unreachable_edges: usize,
}

/// Loads a graph from two CSV files: nodes as `id,x,y` and edges as
/// `source,dest`, both with a header row and 1-indexed ids.
///
/// The vertex count is fixed up front by counting data lines, node rows land
/// in slot `id - 1`, and edge endpoints are translated to 0-indexed. Rows
/// that fail to parse and ids outside the counted range are skipped with a
/// warning; edges naming missing vertices survive as unreachable slots.
pub fn load_graph(node_path: &Path, edge_path: &Path) -> Result<(Graph, LoadSummary), LoadError> {
    let num_vertices = data_line_count(node_path)?;
    let (points, node_rows_skipped) = read_points(node_path, num_vertices)?;

    let max_edges = data_line_count(edge_path)?;
    let (pairs, edge_rows_skipped) = read_endpoint_pairs(edge_path, max_edges)?;

    let graph = Graph::build(points, &pairs)?;
    let summary = LoadSummary {
        node_rows_skipped,
        edge_rows_skipped,
        unreachable_edges: graph.num_unreachable_edges(),
    };
    tracing::debug!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        unreachable = summary.unreachable_edges,
        "graph loaded"
    );

    Ok((graph, summary))
}

/// Data lines in `path`: total lines minus the header. A final line without
/// a trailing newline still counts.
fn data_line_count(path: &Path) -> Result<usize, LoadError> {
    let contents = fs::read(path).map_err(|source| LoadError::io(path, source))?;

    let mut lines = contents.iter().filter(|&&byte| byte == b'\n').count();
    if contents.last().is_some_and(|&byte| byte != b'\n') && lines > 0 {
        lines += 1;
    }

    Ok(lines.saturating_sub(1))
}

fn read_points(path: &Path, num_vertices: usize) -> Result<(Vec<Point>, usize), LoadError> {
    let mut lines = open_rows(path)?;

    let mut points: Vec<Point> = (0..num_vertices)
        .map(|i| Point { id: (i + 1) as i64, x: 0.0, y: 0.0 })
        .collect();
    let mut seen_ids: HashSet<i64> = HashSet::new();
    let mut skipped = 0;

    while let Some(line) = lines.next_row()? {
        let line_number = lines.line_number;
        let Some((id, x, y)) = parse_node_row(&line) else {
            tracing::warn!(line = line_number, "skipping malformed node row");
            skipped += 1;
            continue;
        };

        let slot = id - 1;
        if !(0..num_vertices as i64).contains(&slot) {
            tracing::warn!(line = line_number, id, "node id outside the counted vertex range");
            skipped += 1;
            continue;
        }
        if !seen_ids.insert(id) {
            tracing::warn!(line = line_number, id, "duplicate node id, later row wins");
        }
        points[slot as usize] = Point { id, x, y };
    }

    Ok((points, skipped))
}

fn read_endpoint_pairs(path: &Path, max_edges: usize) -> Result<(Vec<(i64, i64)>, usize), LoadError> {
    let mut lines = open_rows(path)?;

    let mut pairs = Vec::with_capacity(max_edges);
    let mut skipped = 0;

    while let Some(line) = lines.next_row()? {
        if pairs.len() >= max_edges {
            break;
        }
        let Some((source, dest)) = parse_edge_row(&line) else {
            tracing::warn!(line = lines.line_number, "skipping malformed edge row");
            skipped += 1;
            continue;
        };
        // external ids are 1-indexed
        pairs.push((source.saturating_sub(1), dest.saturating_sub(1)));
    }

    Ok((pairs, skipped))
}

/// Row reader positioned after the mandatory header line.
struct Rows<'a> {
    lines: std::io::Lines<BufReader<File>>,
    path: &'a Path,
    line_number: usize,
}

impl<'a> Rows<'a> {
    fn next_row(&mut self) -> Result<Option<String>, LoadError> {
        match self.lines.next() {
            Some(Ok(line)) => {
                self.line_number += 1;
                Ok(Some(line))
            }
            Some(Err(source)) => Err(LoadError::io(self.path, source)),
            None => Ok(None),
        }
    }
}

fn open_rows(path: &Path) -> Result<Rows<'_>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::io(path, source))?;
    let mut lines = BufReader::new(file).lines();

    match lines.next() {
        Some(Ok(_header)) => Ok(Rows { lines, path, line_number: 1 }),
        Some(Err(source)) => Err(LoadError::io(path, source)),
        None => Err(LoadError::Empty { path: path.to_path_buf() }),
    }
}

fn parse_node_row(row: &str) -> Option<(i64, f64, f64)> {
    let mut fields = row.split(',');
    let id = fields.next()?.trim().parse().ok()?;
    let x = fields.next()?.trim().parse().ok()?;
    let y = fields.next()?.trim().parse().ok()?;
    Some((id, x, y))
}

fn parse_edge_row(row: &str) -> Option<(i64, i64)> {
    let mut fields = row.split(',');
    let source = fields.next()?.trim().parse().ok()?;
    let dest = fields.next()?.trim().parse().ok()?;
    Some((source, dest))
}
