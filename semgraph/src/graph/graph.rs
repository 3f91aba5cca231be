use std::slice::Iter;
use std::fmt;
use serde_json::Value;
use serde::Serialize;
use serde::Serializer;
use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error as DeError;
use graph::node::Node;
use graph::edge::Edge;
use errors::*;

/// Label of the virtual root node created by `SemanticGraph::new`
pub const ROOT_LABEL: &str = "ROOT";

/// A semantic dependency graph over the tokens of one sentence.
///
/// Nodes and edges live in two arenas and refer to each other by position. Node 0 is normally
/// the virtual root and tokens are numbered from 1, so node ids line up with SDP token ids.
#[derive(Debug, Clone)]
pub struct SemanticGraph {
    pub id: String,
    pub n_nodes: usize,
    pub n_edges: usize,
    pub root_id: usize,
    pub(super) nodes: Vec<Node>,
    pub(super) edges: Vec<Edge>,
}

impl SemanticGraph {

    /// Create a graph that only contains the virtual root
    pub fn new(id: String) -> SemanticGraph {
        let mut graph = SemanticGraph::with_capacity(id, 32, 31);
        graph.root_id = graph.add_node(Node::new(ROOT_LABEL.to_owned()));
        graph
    }

    /// Create a graph without any node, the root must be added (and set) by the caller
    pub fn with_capacity(id: String, estimated_n_nodes: usize, estimated_n_edges: usize) -> SemanticGraph {
        SemanticGraph {
            id,
            n_nodes: 0,
            n_edges: 0,
            root_id: 0,
            nodes: Vec::with_capacity(estimated_n_nodes),
            edges: Vec::with_capacity(estimated_n_edges),
        }
    }

    /// Add new node to graph and return its id
    pub fn add_node(&mut self, mut node: Node) -> usize {
        node.id = self.n_nodes;
        self.n_nodes += 1;
        self.nodes.push(node);
        self.n_nodes - 1
    }

    /// Add new edge to graph and return its id. Both endpoints must already be in the graph.
    pub fn add_edge(&mut self, mut edge: Edge) -> usize {
        edge.id = self.n_edges;
        self.n_edges += 1;
        self.nodes[edge.dependent_id].add_outgoing_edge(&edge);
        self.nodes[edge.head_id].add_incoming_edge(&edge);

        self.edges.push(edge);
        self.n_edges - 1
    }

    #[inline]
    pub fn get_node_by_id(&self, idx: usize) -> &Node { &self.nodes[idx] }

    #[inline]
    pub fn get_edge_by_id(&self, idx: usize) -> &Edge { &self.edges[idx] }

    #[inline]
    pub fn get_mut_node_by_id(&mut self, idx: usize) -> &mut Node { &mut self.nodes[idx] }

    #[inline]
    pub fn has_node_with_id(&self, id: usize) -> bool { id < self.n_nodes }

    #[inline]
    pub fn has_edge_with_id(&self, id: usize) -> bool { id < self.n_edges }

    #[inline]
    pub fn get_root_node(&self) -> &Node { &self.nodes[self.root_id] }

    #[inline]
    pub fn iter_nodes(&self) -> Iter<Node> { self.nodes.iter() }

    #[inline]
    pub fn iter_edges(&self) -> Iter<Edge> { self.edges.iter() }

    pub fn iter_top_nodes<'a>(&'a self) -> impl Iterator<Item=&'a Node> + 'a {
        self.nodes.iter().filter(|n| n.is_top)
    }

    pub fn get_n_top_nodes(&self) -> usize {
        self.iter_top_nodes().count()
    }

    pub fn to_dict(&self) -> Value {
        json!({
            "id": self.id,
            "root": self.root_id,
            "nodes": Value::Array(self.nodes.iter().map(|n| n.to_dict()).collect()),
            "edges": Value::Array(self.edges.iter().map(|e| e.to_dict()).collect()),
        })
    }

    /// Load graph from json, rejecting documents whose ids do not refer to existing nodes
    pub fn from_dict(obj: &Value) -> Result<SemanticGraph> {
        if !obj.is_object() {
            bail!(ErrorKind::InvalidGraph("<unknown>".to_owned(), "expect a json object".to_owned()));
        }

        let graph_id = match obj.get("id") {
            None | Some(&Value::Null) => String::new(),
            Some(&Value::String(ref s)) => s.clone(),
            Some(v) => v.to_string(),
        };
        let invalid = |reason: String| -> Error {
            ErrorKind::InvalidGraph(graph_id.clone(), reason).into()
        };

        let nodes = obj["nodes"].as_array().ok_or_else(|| invalid("missing `nodes` array".to_owned()))?;
        let edges = match obj.get("edges") {
            None | Some(&Value::Null) => Vec::new(),
            Some(v) => v.as_array().ok_or_else(|| invalid("`edges` must be an array".to_owned()))?.clone(),
        };

        let mut graph = SemanticGraph::with_capacity(graph_id.clone(), nodes.len(), edges.len());
        for (i, node) in nodes.iter().enumerate() {
            let nid = as_index(&node["id"]).ok_or_else(|| invalid(format!("node at position {} has no valid `id`", i)))?;
            if nid != i {
                return Err(invalid(format!("node ids must follow their positions, found id {} at position {}", nid, i)));
            }

            let mut n = Node::new(node["label"].as_str().unwrap_or("").to_owned());
            n.is_top = node["top"].as_bool().unwrap_or(false);
            graph.add_node(n);
        }

        graph.root_id = match obj.get("root") {
            None | Some(&Value::Null) => 0,
            Some(v) => as_index(v).ok_or_else(|| invalid("`root` must be a node id".to_owned()))?,
        };
        if !graph.has_node_with_id(graph.root_id) {
            return Err(invalid(format!("root {} is not a node of the graph", graph.root_id)));
        }

        for (i, link) in edges.iter().enumerate() {
            let head_id = as_index(&link["head"]).ok_or_else(|| invalid(format!("edge {} has no valid `head`", i)))?;
            let dependent_id = as_index(&link["dependent"]).ok_or_else(|| invalid(format!("edge {} has no valid `dependent`", i)))?;
            if !graph.has_node_with_id(head_id) || !graph.has_node_with_id(dependent_id) {
                return Err(invalid(format!("edge {} ({} -> {}) refers to a missing node", i, head_id, dependent_id)));
            }

            let relation = match link.get("relation") {
                None | Some(&Value::Null) => None,
                Some(&Value::String(ref s)) => Some(s.clone()),
                Some(_) => return Err(invalid(format!("relation of edge {} must be a string", i))),
            };
            let remote = link["remote"].as_bool().unwrap_or(false);
            graph.add_edge(Edge::new(relation, remote, head_id, dependent_id));
        }

        Ok(graph)
    }
}

fn as_index(value: &Value) -> Option<usize> {
    value.as_u64().map(|v| v as usize)
}

impl fmt::Display for SemanticGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SemanticGraph(id={}\n", self.id)?;
        for n in self.iter_top_nodes() {
            write!(f, "\t* top: {}\n", n.label)?;
        }
        for e in self.iter_edges() {
            write!(f, "\t+ {}---{}{}---{}\n",
                   self.get_node_by_id(e.head_id).label,
                   e.relation.as_ref().map(|r| r.as_str()).unwrap_or("_"),
                   if e.remote { "*" } else { "" },
                   self.get_node_by_id(e.dependent_id).label)?;
        }

        write!(f, ")")
    }
}

impl Serialize for SemanticGraph {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
        where S: Serializer {

        let value: Value = self.to_dict();
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SemanticGraph {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<SemanticGraph, D::Error>
        where D: Deserializer<'de> {

        let val = Value::deserialize(deserializer)?;
        SemanticGraph::from_dict(&val).map_err(|e| D::Error::custom(e.to_string()))
    }
}

impl PartialEq for SemanticGraph {
    fn eq(&self, other: &SemanticGraph) -> bool {
        if self.n_nodes != other.n_nodes || self.n_edges != other.n_edges || self.root_id != other.root_id {
            return false;
        }

        self.nodes == other.nodes && self.edges == other.edges
    }
}
