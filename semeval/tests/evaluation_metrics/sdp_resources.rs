use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use serde_json;
use semeval::prelude::*;

fn load_input(test_file: &PathBuf) -> (serde_json::Value, serde_json::Value, HashMap<EvalType, SummaryStatistics>) {
    let mut input: HashMap<String, serde_json::Value> = serde_json::from_reader(BufReader::new(File::open(test_file).unwrap())).unwrap();
    let guessed = input.remove("guessed").unwrap();
    let reference = input.remove("reference").unwrap();
    let raw_expected: HashMap<String, (usize, usize, usize)> = serde_json::from_value(input.remove("expected").unwrap()).unwrap();

    let expected = raw_expected.into_iter()
        .map(|(eval_type, (m, g, r))| (eval_type.parse::<EvalType>().unwrap(), SummaryStatistics::new(m, g, r)))
        .collect();
    (guessed, reference, expected)
}

#[test]
pub fn smoke_test() {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.push("resources/evaluation_metrics/sdp");

    let mut n_files = 0;
    for entry in dir.read_dir().unwrap() {
        let path = entry.unwrap().path();
        if path.extension().unwrap_or(OsStr::new("")) != "json" {
            continue;
        }

        let (guessed, reference, expected) = load_input(&path);
        let scores = evaluate_with(&guessed, &reference, &JsonConverter, false, &EVAL_TYPES).unwrap();
        for (eval_type, stats) in expected.iter() {
            assert_eq!(scores.get(*eval_type).unwrap().primary(), Some(stats), "{:?} of {:?}", eval_type, path);
        }
        n_files += 1;
    }

    assert!(n_files >= 2);
}

#[test]
pub fn test_malformed_reference_fails_the_evaluation() {
    let guessed = json_graph(r#"{"id": "s1", "nodes": [{"id": 0}, {"id": 1, "top": true}]}"#);
    let reference = json_graph(r#"{"id": "s1", "nodes": [{"id": 0}], "edges": [{"head": 0, "dependent": 4}]}"#);

    match evaluate_with(&guessed, &reference, &JsonConverter, false, &EVAL_TYPES) {
        Err(semeval::errors::Error(semeval::errors::ErrorKind::Conversion(_), _)) => (),
        other => panic!("expect a conversion error, got {:?}", other),
    }
}

fn json_graph(s: &str) -> serde_json::Value {
    serde_json::from_str(s).unwrap()
}
