pub use evaluation_metrics::*;
pub use evaluation_metrics::sdp::{evaluate, evaluate_graphs, evaluate_with, score_edges, EdgeRecord, EdgeSet, extract_edges, extract_graph_edges, unlabel};
pub use converter::{GraphConverter, JsonConverter};
pub use settings::Settings;
pub use semgraph::prelude::*;
