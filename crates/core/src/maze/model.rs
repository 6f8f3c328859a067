//! Public data models for the boundary artifacts external consumers read.

use std::collections::BTreeMap;
use std::fmt;

/// Full-grid adjacency matrix plus the role lookup state recorded while it
/// was built. Entry `[i][j] == 1` is a directed unit-cost arc from `i` to `j`.
///
/// Indices `0..cell_count` are cell codes; the remaining indices are auxiliary
/// sink nodes, one reserved for the key and one per enemy cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    pub size: usize,
    pub entries: Vec<u32>,
    pub player_code: Option<usize>,
    pub door_code: Option<usize>,
    pub key_sink: Option<(usize, usize)>,
    pub enemy_sinks: Vec<(usize, usize)>,
}

impl AdjacencyMatrix {
    pub(crate) fn zeroed(size: usize) -> Self {
        Self {
            size,
            entries: vec![0; size * size],
            player_code: None,
            door_code: None,
            key_sink: None,
            enemy_sinks: Vec::new(),
        }
    }

    pub fn at(&self, from: usize, to: usize) -> u32 {
        self.entries[from * self.size + to]
    }

    pub(crate) fn set(&mut self, from: usize, to: usize, weight: u32) {
        self.entries[from * self.size + to] = weight;
    }
}

/// Vertex id in the reduced graph. Key and enemy cells split in two: reaching
/// the cell (`Entry`) and consuming what it holds (`Captured`) are distinct
/// states joined by a unit-cost edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeId {
    Entry(usize),
    Captured(usize),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Entry(code) => write!(f, "entry:{code}"),
            NodeId::Captured(code) => write!(f, "captured:{code}"),
        }
    }
}

/// One maximal corridor discovered by the reduction, as the cell codes it
/// traverses in order. Its weight is the inclusive cell count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorridorPath {
    pub cells: Vec<usize>,
}

impl CorridorPath {
    pub fn weight(&self) -> u32 {
        self.cells.len() as u32
    }

    pub fn endpoints(&self) -> Option<(usize, usize)> {
        Some((*self.cells.first()?, *self.cells.last()?))
    }

    pub fn reversed(&self) -> Self {
        Self { cells: self.cells.iter().rev().copied().collect() }
    }
}

/// Compact weighted graph of junctions, terminals, and role cells, keyed
/// through `index_of` (first-seen order over the discovered edges).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReducedGraph {
    pub size: usize,
    pub entries: Vec<u32>,
    pub index_of: BTreeMap<NodeId, usize>,
}

impl ReducedGraph {
    pub(crate) fn zeroed(size: usize) -> Self {
        Self { size, entries: vec![0; size * size], index_of: BTreeMap::new() }
    }

    pub fn at(&self, from: usize, to: usize) -> u32 {
        self.entries[from * self.size + to]
    }

    pub(crate) fn set(&mut self, from: usize, to: usize, weight: u32) {
        self.entries[from * self.size + to] = weight;
    }

    pub(crate) fn index_or_insert(&mut self, node: NodeId) -> usize {
        let next = self.index_of.len();
        *self.index_of.entry(node).or_insert(next)
    }
}
