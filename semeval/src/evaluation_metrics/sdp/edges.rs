use fnv::FnvHashSet;
use semgraph::prelude::*;

/// Relation of the synthetic edges that mark top nodes
pub const TOP: &str = "TOP";

/// A comparable edge. Two records are the same edge iff every field is equal.
///
/// `graph` is the position of the source graph in the evaluated passage, so that node ids of
/// different sentences never collide. A synthetic TOP record has the top node as dependent,
/// therefore two top nodes under the same root give two distinct records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeRecord {
    pub graph: usize,
    pub head: usize,
    pub dependent: usize,
    pub relation: Option<String>,
    pub remote: bool,
}

pub type EdgeSet = FnvHashSet<EdgeRecord>;

impl EdgeRecord {
    pub fn from_edge(graph_idx: usize, edge: &Edge) -> EdgeRecord {
        EdgeRecord {
            graph: graph_idx,
            head: edge.head_id,
            dependent: edge.dependent_id,
            relation: edge.relation.clone(),
            remote: edge.remote,
        }
    }

    pub fn top(graph_idx: usize, graph: &SemanticGraph, node: &Node) -> EdgeRecord {
        EdgeRecord {
            graph: graph_idx,
            head: graph.root_id,
            dependent: node.id,
            relation: Some(TOP.to_owned()),
            remote: false,
        }
    }

    #[inline]
    pub fn is_top(&self) -> bool {
        !self.remote && self.relation.as_ref().map(|r| r == TOP).unwrap_or(false)
    }
}

/// Collect the edges of every graph of a passage, plus one TOP record per top node.
///
/// The graphs are not validated: whatever ids they hold end up in the records.
pub fn extract_edges(graphs: &[SemanticGraph]) -> EdgeSet {
    let mut edges = EdgeSet::default();
    let mut n_tops = 0;

    for (graph_idx, g) in graphs.iter().enumerate() {
        for n in g.iter_nodes() {
            edges.extend(n.iter_outgoing_edges(g).map(|e| EdgeRecord::from_edge(graph_idx, e)));
            if n.is_top {
                edges.insert(EdgeRecord::top(graph_idx, g, n));
                n_tops += 1;
            }
        }
    }

    debug!("Extracted {} distinct edges ({} top nodes) from {} graphs", edges.len(), n_tops, graphs.len());
    edges
}

pub fn extract_graph_edges(graph: &SemanticGraph) -> EdgeSet {
    extract_edges(::std::slice::from_ref(graph))
}

/// Copy of `edges` where every relation is erased. Records that only differed by their relation
/// collapse into one.
pub fn unlabel(edges: &EdgeSet) -> EdgeSet {
    edges.iter()
        .map(|e| EdgeRecord { relation: None, ..e.clone() })
        .collect()
}
