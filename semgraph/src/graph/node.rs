use serde_json::Value;
use graph::graph::SemanticGraph;
use graph::graph_iter::IterEdge;
use graph::edge::Edge;

/// A token (or the virtual root) of a semantic dependency graph.
///
/// Edges are attached to their dependent: `outgoing_edges` holds the edges that go *up* from
/// this node to one of its heads, `incoming_edges` holds the edges for which this node is the head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: usize,
    pub label: String,
    pub is_top: bool,
    pub n_incoming_edges: usize,
    pub n_outgoing_edges: usize,
    pub incoming_edges: Vec<usize>,
    pub outgoing_edges: Vec<usize>,
}

impl Node {
    pub fn new(label: String) -> Node {
        Node {
            id: 0,
            label,
            is_top: false,
            n_incoming_edges: 0,
            n_outgoing_edges: 0,
            incoming_edges: Vec::new(),
            outgoing_edges: Vec::new(),
        }
    }

    pub fn new_top(label: String) -> Node {
        let mut node = Node::new(label);
        node.is_top = true;
        node
    }

    pub fn add_incoming_edge(&mut self, link: &Edge) {
        self.incoming_edges.push(link.id);
        self.n_incoming_edges += 1;
    }

    pub fn add_outgoing_edge(&mut self, link: &Edge) {
        self.outgoing_edges.push(link.id);
        self.n_outgoing_edges += 1;
    }

    pub fn first_outgoing_edge<'a>(&self, graph: &'a SemanticGraph) -> Option<&'a Edge> {
        if self.n_outgoing_edges == 0 {
            None
        } else {
            Some(graph.get_edge_by_id(self.outgoing_edges[0]))
        }
    }

    /// Edges going from this node up to its heads
    pub fn iter_outgoing_edges<'a>(&'a self, graph: &'a SemanticGraph) -> IterEdge<'a> {
        IterEdge::new(&self.outgoing_edges, graph)
    }

    /// Edges for which this node is the head
    pub fn iter_incoming_edges<'a>(&'a self, graph: &'a SemanticGraph) -> IterEdge<'a> {
        IterEdge::new(&self.incoming_edges, graph)
    }

    pub fn to_dict(&self) -> Value {
        json!({
            "id": self.id,
            "label": self.label,
            "top": self.is_top
        })
    }
}
