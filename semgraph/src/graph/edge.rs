use serde_json::Value;
use graph::graph::SemanticGraph;
use graph::node::Node;

/// A directed, labeled dependency between a head and a dependent.
///
/// `relation` is `None` for edges that carry no label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: usize,
    pub relation: Option<String>,
    pub remote: bool,
    pub head_id: usize,
    pub dependent_id: usize,
}

impl Edge {
    pub fn new(relation: Option<String>, remote: bool, head_id: usize, dependent_id: usize) -> Edge {
        Edge {
            id: 182731897,
            relation,
            remote,
            head_id,
            dependent_id,
        }
    }

    pub fn primary(relation: &str, head_id: usize, dependent_id: usize) -> Edge {
        Edge::new(Some(relation.to_owned()), false, head_id, dependent_id)
    }

    pub fn remote(relation: &str, head_id: usize, dependent_id: usize) -> Edge {
        Edge::new(Some(relation.to_owned()), true, head_id, dependent_id)
    }

    #[inline]
    pub fn get_head_node<'a>(&self, graph: &'a SemanticGraph) -> &'a Node {
        graph.get_node_by_id(self.head_id)
    }

    #[inline]
    pub fn get_dependent_node<'a>(&self, graph: &'a SemanticGraph) -> &'a Node {
        graph.get_node_by_id(self.dependent_id)
    }

    pub fn to_dict(&self) -> Value {
        json!({
            "id": self.id,
            "head": self.head_id,
            "dependent": self.dependent_id,
            "relation": self.relation,
            "remote": self.remote
        })
    }
}
