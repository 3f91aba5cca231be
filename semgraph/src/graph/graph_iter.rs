use graph::graph::SemanticGraph;
use graph::Edge;

/// Iterate over a list of edge ids of a graph
pub struct IterEdge<'a> {
    current_idx: usize,
    pub(super) edges: &'a [usize],
    pub(super) graph: &'a SemanticGraph
}

impl<'a> IterEdge<'a> {
    pub fn new(edges: &'a [usize], graph: &'a SemanticGraph) -> IterEdge<'a> {
        IterEdge {
            current_idx: 0,
            edges,
            graph
        }
    }
}

impl<'a> Iterator for IterEdge<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<&'a Edge> {
        if self.current_idx < self.edges.len() {
            self.current_idx += 1;
            Some(self.graph.get_edge_by_id(self.edges[self.current_idx - 1]))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remain = self.edges.len() - self.current_idx;
        (remain, Some(remain))
    }
}
