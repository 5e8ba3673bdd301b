//! # Co-authorship Graph
//!
//! An undirected, unweighted graph derived on demand from the authorship
//! relation: one node per distinct author, one edge between every pair of
//! authors sharing at least one publication. Edge multiplicity is not
//! tracked. Shortest-path "degrees of separation" queries use plain
//! breadth-first search.

use crate::Database;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::collections::VecDeque;

/// Arena-of-authors plus adjacency-by-index representation.
///
/// Node indices coincide with [`crate::AuthorId`] values, so `names` follows
/// author-appearance order. Sole authors appear as isolated nodes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CoauthorGraph {
    names: Vec<String>,
    #[serde(skip)]
    index: FxHashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
}

/// Derive the co-authorship graph from the loaded model.
pub(crate) fn build(db: &Database) -> CoauthorGraph {
    let names = db.authors.names().to_vec();
    let index = names
        .iter()
        .enumerate()
        .map(|(position, name)| (name.clone(), position))
        .collect();

    let mut neighbours: Vec<FxHashSet<usize>> = vec![FxHashSet::default(); names.len()];
    for publication in &db.publications {
        let authors = &publication.authors;
        for i in 0..authors.len() {
            for j in i + 1..authors.len() {
                let a = authors[i].0 as usize;
                let b = authors[j].0 as usize;
                if a == b {
                    continue;
                }
                neighbours[a].insert(b);
                neighbours[b].insert(a);
            }
        }
    }

    let adjacency = neighbours
        .into_iter()
        .map(|set| {
            let mut sorted: Vec<usize> = set.into_iter().collect();
            sorted.sort_unstable();
            sorted
        })
        .collect();

    CoauthorGraph {
        names,
        index,
        adjacency,
    }
}

impl CoauthorGraph {
    /// Node names in author-appearance order.
    pub fn nodes(&self) -> &[String] {
        &self.names
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether two authors co-appear on at least one publication.
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&a), Some(&b)) => self.adjacency[a].binary_search(&b).is_ok(),
            _ => false,
        }
    }

    /// Undirected edges as name pairs, each reported once, ordered by node
    /// index.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut edges = Vec::new();
        for (a, neighbours) in self.adjacency.iter().enumerate() {
            for &b in neighbours {
                if b > a {
                    edges.push((self.names[a].as_str(), self.names[b].as_str()));
                }
            }
        }
        edges
    }

    /// Shortest-path edge count between two authors.
    ///
    /// `Some(0)` when both arguments name the same known author, `Some(1)`
    /// for direct co-authors, `None` when either author is unknown or no
    /// path exists. Symmetric in its arguments.
    pub fn degrees_of_separation(&self, a: &str, b: &str) -> Option<usize> {
        let start = *self.index.get(a)?;
        let goal = *self.index.get(b)?;
        if start == goal {
            return Some(0);
        }

        let mut distance = vec![usize::MAX; self.names.len()];
        let mut queue = VecDeque::new();
        distance[start] = 0;
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            for &next in &self.adjacency[node] {
                if distance[next] != usize::MAX {
                    continue;
                }
                distance[next] = distance[node] + 1;
                if next == goal {
                    return Some(distance[next]);
                }
                queue.push_back(next);
            }
        }
        None
    }
}
