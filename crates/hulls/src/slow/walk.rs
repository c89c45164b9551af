use super::edges::EdgeSet;
use crate::types::Point;

/// Index of the rightmost point, lowest among equal x; first index on exact ties.
pub fn start_vertex(points: &[Point]) -> Option<usize> {
    if points.is_empty() {
        return None;
    }
    let mut start = 0usize;
    for (i, p) in points.iter().enumerate().skip(1) {
        let s = points[start];
        if p.x > s.x || (p.x == s.x && p.y < s.y) {
            start = i;
        }
    }
    Some(start)
}

/// Follow directed edges from the start vertex until the cycle closes.
///
/// At each vertex the first outgoing edge (ascending head index) that leads
/// back to the start or to a vertex not yet on the boundary is taken. The walk
/// stops early, returning what it has, when no such edge exists.
pub fn walk_edges(points: &[Point], edges: &EdgeSet) -> Vec<Point> {
    let Some(start) = start_vertex(points) else {
        return Vec::new();
    };
    let mut visited = vec![false; points.len()];
    visited[start] = true;
    let mut boundary = vec![points[start]];
    let mut cur = start;
    loop {
        let next = edges
            .outgoing(cur)
            .iter()
            .copied()
            .find(|&j| j != cur && (j == start || !visited[j]));
        match next {
            Some(j) if j != start => {
                visited[j] = true;
                boundary.push(points[j]);
                cur = j;
            }
            _ => break,
        }
    }
    boundary
}
