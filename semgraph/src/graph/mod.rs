mod node;
mod edge;
mod graph;
mod graph_iter;
mod graph_util;

pub use self::graph::{SemanticGraph, ROOT_LABEL};
pub use self::node::Node;
pub use self::edge::Edge;
pub use self::graph_iter::*;
pub use self::graph_util::*;
