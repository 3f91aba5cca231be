pub mod edges;

use semgraph::prelude::SemanticGraph;
use converter::GraphConverter;
use errors::*;
use evaluation_metrics::constructions::Construction;
use evaluation_metrics::evaluator_results::EvaluatorResults;
use evaluation_metrics::summary_statistics::SummaryStatistics;
use evaluation_metrics::scores::Scores;

pub use evaluation_metrics::eval_type::{EvalType, EVAL_TYPES};
pub use self::edges::{EdgeRecord, EdgeSet, TOP, extract_edges, extract_graph_edges, unlabel};

pub const NAME: &str = "SDP";
pub const FORMAT: &str = "sdp";
/// number of decimals of the verbose report
pub const REPORT_PRECISION: usize = 3;

/// Compare a guessed edge set with a reference one
pub fn score_edges(guessed: &EdgeSet, reference: &EdgeSet) -> SummaryStatistics {
    let num_matches = guessed.intersection(reference).count();
    SummaryStatistics::new(num_matches, guessed.len() - num_matches, reference.len() - num_matches)
}

/// Score already extracted edges at one granularity
pub fn get_scores(guessed: &EdgeSet, reference: &EdgeSet, eval_type: EvalType, verbose: bool) -> EvaluatorResults {
    let stats = match eval_type {
        EvalType::Labeled => score_edges(guessed, reference),
        EvalType::Unlabeled => score_edges(&unlabel(guessed), &unlabel(reference)),
    };
    let res = EvaluatorResults::single(Construction::primary(), stats);

    if verbose {
        println!("Evaluation type: ({})", eval_type);
        res.print(REPORT_PRECISION);
    }

    res
}

/// Evaluate a guessed passage (one graph per sentence) against the reference passage
pub fn evaluate(guessed: &[SemanticGraph], reference: &[SemanticGraph], verbose: bool, eval_types: &[EvalType]) -> Scores {
    if guessed.len() != reference.len() {
        warn!("Guessed passage has {} graphs but reference passage has {}", guessed.len(), reference.len());
    }

    let guessed_edges = extract_edges(guessed);
    let reference_edges = extract_edges(reference);

    Scores::new(NAME, FORMAT, eval_types.iter()
        .map(|&eval_type| (eval_type, get_scores(&guessed_edges, &reference_edges, eval_type, verbose))))
}

pub fn evaluate_graphs(guessed: &SemanticGraph, reference: &SemanticGraph, verbose: bool, eval_types: &[EvalType]) -> Scores {
    evaluate(::std::slice::from_ref(guessed), ::std::slice::from_ref(reference), verbose, eval_types)
}

/// Convert raw inputs (guessed first) then evaluate them. Conversion errors are returned as is.
pub fn evaluate_with<R, C>(guessed: &R, reference: &R, converter: &C, verbose: bool, eval_types: &[EvalType]) -> Result<Scores>
    where R: ?Sized, C: GraphConverter<R> + ?Sized {
    let guessed = converter.convert(guessed)?;
    let reference = converter.convert(reference)?;

    Ok(evaluate(&guessed, &reference, verbose, eval_types))
}

#[cfg(test)]
mod tests {
    use super::*;
    use semgraph::prelude::quick_graph;

    #[test]
    pub fn test_scenario() {
        let a = quick_graph(&["1--ARG1--2", "1--ARG2--3", "1::top"]).unwrap();
        let b = quick_graph(&["1--ARG1--2", "1::top"]).unwrap();

        let scores = evaluate_graphs(&a, &b, false, &EVAL_TYPES);
        assert_eq!(scores.name, "SDP");
        assert_eq!(scores.format, "sdp");

        let labeled = scores.get(EvalType::Labeled).unwrap().primary().unwrap();
        assert_eq!(*labeled, SummaryStatistics::new(2, 1, 0));
        assert!((labeled.precision() - 2.0 / 3.0).abs() < 1e-9);
        assert!((labeled.recall() - 1.0).abs() < 1e-9);
        assert!((labeled.f1() - 0.8).abs() < 1e-9);
    }

    #[test]
    pub fn test_unlabeled_merges_label_variants() {
        // both edges of the guess attach 2 to 1, they merge once labels are gone
        let guessed = quick_graph(&["1--ARG1--2", "1--ARG2--2"]).unwrap();
        let reference = quick_graph(&["1--ARG3--2"]).unwrap();

        let scores = evaluate_graphs(&guessed, &reference, false, &EVAL_TYPES);
        assert_eq!(*scores.get(EvalType::Labeled).unwrap().primary().unwrap(), SummaryStatistics::new(0, 2, 1));
        assert_eq!(*scores.get(EvalType::Unlabeled).unwrap().primary().unwrap(), SummaryStatistics::new(1, 0, 0));
    }

    #[test]
    pub fn test_unlabeled_can_match_less_than_labeled() {
        // set semantics: the two labeled matches collapse into a single unlabeled one
        let g = quick_graph(&["1--ARG1--2", "1--ARG2--2"]).unwrap();

        let scores = evaluate_graphs(&g, &g, false, &EVAL_TYPES);
        assert_eq!(*scores.get(EvalType::Labeled).unwrap().primary().unwrap(), SummaryStatistics::new(2, 0, 0));
        assert_eq!(*scores.get(EvalType::Unlabeled).unwrap().primary().unwrap(), SummaryStatistics::new(1, 0, 0));
    }

    #[test]
    pub fn test_requested_eval_types_only() {
        let g = quick_graph(&["1--ARG1--2"]).unwrap();
        let scores = evaluate_graphs(&g, &g, false, &[EvalType::Unlabeled]);
        assert!(scores.get(EvalType::Labeled).is_none());
        assert_eq!(scores.evaluators.len(), 1);

        assert!(evaluate_graphs(&g, &g, false, &[]).evaluators.is_empty());
    }

    #[test]
    pub fn test_verbose_does_not_change_scores() {
        let a = quick_graph(&["1--ARG1--2", "1--ARG2--3", "1::top"]).unwrap();
        let b = quick_graph(&["1--ARG1--2", "2::top"]).unwrap();
        assert_eq!(evaluate_graphs(&a, &b, true, &EVAL_TYPES), evaluate_graphs(&a, &b, false, &EVAL_TYPES));
    }

    #[test]
    pub fn test_converter_errors_are_propagated() {
        let converter = |raw: &str| -> Result<Vec<SemanticGraph>> {
            if raw == "broken" {
                bail!(ErrorKind::Conversion("cannot read `broken`".to_owned()));
            }
            Ok(vec![quick_graph(&[raw]).unwrap()])
        };

        let scores = evaluate_with("1--ARG1--2", "1--ARG1--2", &converter, false, &EVAL_TYPES).unwrap();
        assert!((scores.average_f1(EvalType::Labeled) - 1.0).abs() < 1e-9);

        match evaluate_with("1--ARG1--2", "broken", &converter, false, &EVAL_TYPES) {
            Err(Error(ErrorKind::Conversion(reason), _)) => assert_eq!(reason, "cannot read `broken`"),
            other => panic!("expect the converter error, got {:?}", other),
        }
    }
}
