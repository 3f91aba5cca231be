use regex::Regex;
use graph::graph::SemanticGraph;
use graph::node::Node;
use graph::edge::Edge;
use errors::*;

/// Take a sequence of edges in form of: [<head_id>--<relation>--<dependent_id>, ...], convert
/// it into a graph whose node 0 is the virtual root.
///
/// Token nodes `1..=max_id` are always created (labeled by their id). Append `::top` to a node id
/// to mark it as a top node, append `::r` to a relation to make the edge remote, and use `_` as
/// relation for an unlabeled edge. A lone node id (e.g. `"2::top"`) only declares the node.
pub fn quick_graph<T: AsRef<str>>(edges: &[T]) -> Result<SemanticGraph> {
    let node_regex = Regex::new(r"^(\d+)(::top)?$")?;
    let relation_regex = Regex::new(r"^(.+?)(::r)?$")?;
    let invalid = |reason: String| -> Error {
        ErrorKind::InvalidGraph("quick_graph".to_owned(), reason).into()
    };

    let mut tops = Vec::new();
    let mut links = Vec::new();
    let mut max_id: usize = 0;

    {
        let mut parse_node = |s: &str| -> Result<usize> {
            let captures = node_regex.captures(s.trim()).ok_or_else(|| invalid(format!("invalid node `{}`", s)))?;
            let nid = captures[1].parse::<usize>().map_err(|e| invalid(e.to_string()))?;
            if captures.get(2).is_some() {
                tops.push(nid);
            }
            max_id = max_id.max(nid);
            Ok(nid)
        };

        for e in edges {
            let parts = e.as_ref().split("--").collect::<Vec<_>>();
            match parts.len() {
                1 => {
                    parse_node(parts[0])?;
                },
                3 => {
                    let head_id = parse_node(parts[0])?;
                    let dependent_id = parse_node(parts[2])?;
                    let captures = relation_regex.captures(parts[1].trim()).ok_or_else(|| invalid(format!("invalid relation in `{}`", e.as_ref())))?;
                    let relation = match &captures[1] {
                        "_" => None,
                        rel => Some(rel.to_owned()),
                    };
                    links.push(Edge::new(relation, captures.get(2).is_some(), head_id, dependent_id));
                },
                _ => return Err(invalid(format!("expect <head>--<relation>--<dependent>, got `{}`", e.as_ref())))
            }
        }
    }

    let mut g = SemanticGraph::new("quick_graph".to_owned());
    for nid in 1..(max_id + 1) {
        g.add_node(Node::new(nid.to_string()));
    }
    for nid in tops {
        g.get_mut_node_by_id(nid).is_top = true;
    }
    for link in links {
        g.add_edge(link);
    }

    Ok(g)
}
