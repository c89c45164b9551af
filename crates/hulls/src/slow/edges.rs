use crate::geometry::orientation;
use crate::types::Point;

/// Directed hull edges over point indices.
///
/// `out[i]` lists the heads `j` of all edges `i → j`, in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeSet {
    out: Vec<Vec<usize>>,
}

impl EdgeSet {
    pub fn with_vertices(n: usize) -> Self {
        Self {
            out: vec![Vec::new(); n],
        }
    }
    /// Record `i → j`. Callers insert in ascending `j` per tail.
    #[inline]
    pub fn insert(&mut self, i: usize, j: usize) {
        self.out[i].push(j);
    }
    #[inline]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.out.get(i).is_some_and(|o| o.binary_search(&j).is_ok())
    }
    #[inline]
    pub fn outgoing(&self, i: usize) -> &[usize] {
        self.out.get(i).map(Vec::as_slice).unwrap_or(&[])
    }
    /// Total number of directed edges.
    pub fn len(&self) -> usize {
        self.out.iter().map(Vec::len).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.out.iter().all(Vec::is_empty)
    }
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.out
            .iter()
            .enumerate()
            .flat_map(|(i, o)| o.iter().map(move |&j| (i, j)))
    }
}

/// Enumerate every ordered pair and keep those with no point strictly to their right.
///
/// Returns the edge set and the number of point-vs-line tests performed.
pub fn hull_edges(points: &[Point]) -> (EdgeSet, usize) {
    let n = points.len();
    let mut edges = EdgeSet::with_vertices(n);
    let mut iterations = 0usize;
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let mut valid = true;
            for k in 0..n {
                if k == i || k == j {
                    continue;
                }
                iterations += 1;
                if orientation(points[i], points[j], points[k]) < 0.0 {
                    valid = false;
                    break;
                }
            }
            if valid {
                edges.insert(i, j);
            }
        }
    }
    (edges, iterations)
}
