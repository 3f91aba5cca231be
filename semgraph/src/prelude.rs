pub use graph::{SemanticGraph, Node, Edge, IterEdge, quick_graph, ROOT_LABEL};
