use std::collections::BTreeSet;
use proptest::prelude::*;
use semeval::prelude::{evaluate_graphs, extract_graph_edges, EvalType, EVAL_TYPES, Scores, SummaryStatistics};
use semeval::prelude::{SemanticGraph, Node, Edge};

const RELATIONS: [&str; 3] = ["ARG1", "ARG2", "BV"];

fn build_graph(prefix: &str, tops: &[bool], links: &[(usize, usize, usize, bool)]) -> SemanticGraph {
    let mut g = SemanticGraph::new("prop".to_owned());
    for (i, &is_top) in tops.iter().enumerate() {
        let mut node = Node::new(format!("w{}", i + 1));
        node.is_top = is_top;
        g.add_node(node);
    }
    for &(head, dependent, rel, remote) in links {
        g.add_edge(Edge::new(Some(format!("{}{}", prefix, RELATIONS[rel])), remote, head, dependent));
    }
    g
}

fn arb_links(n_tokens: usize) -> impl Strategy<Value=Vec<(usize, usize, usize, bool)>> {
    prop::collection::vec((0..n_tokens + 1, 1..n_tokens + 1, 0..RELATIONS.len(), any::<bool>()), 0..8)
}

fn arb_graph() -> impl Strategy<Value=SemanticGraph> {
    (1usize..6)
        .prop_flat_map(|n_tokens| (prop::collection::vec(any::<bool>(), n_tokens), arb_links(n_tokens)))
        .prop_map(|(tops, links)| build_graph("", &tops, &links))
}

/// Keep one edge per (head, dependent, remote) and none from the root, so that erasing relations
/// never merges two records of the same graph
fn unmergeable(links: Vec<(usize, usize, usize, bool)>) -> Vec<(usize, usize, usize, bool)> {
    let mut seen = BTreeSet::new();
    links.into_iter()
        .filter(|&(head, dependent, _, remote)| head != 0 && seen.insert((head, dependent, remote)))
        .collect()
}

fn stats(scores: &Scores, eval_type: EvalType) -> SummaryStatistics {
    *scores.get(eval_type).unwrap().primary().unwrap()
}

proptest! {
    #[test]
    fn self_evaluation_is_perfect(g in arb_graph()) {
        let scores = evaluate_graphs(&g, &g, false, &EVAL_TYPES);
        let n_edges = extract_graph_edges(&g).len();

        let labeled = stats(&scores, EvalType::Labeled);
        prop_assert_eq!(labeled, SummaryStatistics::new(n_edges, 0, 0));
        for eval_type in EVAL_TYPES.iter() {
            let s = stats(&scores, *eval_type);
            prop_assert_eq!(s.num_only_guessed, 0);
            prop_assert_eq!(s.num_only_ref, 0);
            if n_edges > 0 {
                prop_assert_eq!((s.precision(), s.recall(), s.f1()), (1.0, 1.0, 1.0));
            }
        }
    }

    #[test]
    fn swapping_guessed_and_reference(a in arb_graph(), b in arb_graph()) {
        let ab = evaluate_graphs(&a, &b, false, &EVAL_TYPES);
        let ba = evaluate_graphs(&b, &a, false, &EVAL_TYPES);

        for eval_type in EVAL_TYPES.iter() {
            let (x, y) = (stats(&ab, *eval_type), stats(&ba, *eval_type));
            prop_assert_eq!(x.num_matches, y.num_matches);
            prop_assert_eq!(x.num_only_guessed, y.num_only_ref);
            prop_assert_eq!(x.num_only_ref, y.num_only_guessed);
            prop_assert!((x.f1() - y.f1()).abs() < 1e-12);
            prop_assert!((x.precision() - y.recall()).abs() < 1e-12);
        }
    }

    #[test]
    fn unlabeled_matches_at_least_labeled(
        tops in prop::collection::vec(any::<bool>(), 4),
        a in arb_links(4),
        b in arb_links(4)
    ) {
        // erasing labels must not merge edges inside one graph, otherwise fewer records remain to match
        let (a, b) = (unmergeable(a), unmergeable(b));
        let scores = evaluate_graphs(&build_graph("", &tops, &a), &build_graph("", &tops, &b), false, &EVAL_TYPES);
        prop_assert!(stats(&scores, EvalType::Unlabeled).num_matches >= stats(&scores, EvalType::Labeled).num_matches);
    }

    #[test]
    fn disjoint_labels_score_zero(
        n_tokens in 1usize..6,
        links in (1usize..6).prop_flat_map(arb_links)
    ) {
        // no top node and relation names that never overlap
        let links = links.into_iter().filter(|&(h, d, _, _)| h <= n_tokens && d <= n_tokens).collect::<Vec<_>>();
        let no_tops = vec![false; n_tokens];
        let guessed = build_graph("g:", &no_tops, &links);
        let reference = build_graph("r:", &no_tops, &links);

        let labeled = stats(&evaluate_graphs(&guessed, &reference, false, &[EvalType::Labeled]), EvalType::Labeled);
        prop_assert_eq!(labeled.num_matches, 0);
        prop_assert_eq!((labeled.precision(), labeled.recall(), labeled.f1()), (0.0, 0.0, 0.0));
    }

    #[test]
    fn graphs_without_tops_have_no_top_records(links in arb_links(4)) {
        let g = build_graph("", &[false; 4], &links);
        prop_assert!(extract_graph_edges(&g).iter().all(|e| !e.is_top()));
    }
}
