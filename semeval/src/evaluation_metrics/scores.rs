use std::collections::BTreeMap;
use std::iter::FromIterator;
use serde::{Serialize, Serializer};
use serde_json::Value;
use super::eval_type::EvalType;
use super::evaluator_results::EvaluatorResults;

/// Results of every requested granularity of one evaluation, tagged with the evaluated format
#[derive(Debug, Clone, PartialEq)]
pub struct Scores {
    pub name: String,
    pub format: String,
    pub evaluators: BTreeMap<EvalType, EvaluatorResults>,
}

impl Scores {
    pub fn new<I>(name: &str, format: &str, evaluators: I) -> Scores
        where I: IntoIterator<Item=(EvalType, EvaluatorResults)> {
        Scores {
            name: name.to_owned(),
            format: format.to_owned(),
            evaluators: BTreeMap::from_iter(evaluators),
        }
    }

    pub fn get(&self, eval_type: EvalType) -> Option<&EvaluatorResults> {
        self.evaluators.get(&eval_type)
    }

    /// F1 of the primary construction, 0 if the granularity was not evaluated
    pub fn average_f1(&self, eval_type: EvalType) -> f64 {
        self.get(eval_type)
            .and_then(|res| res.primary())
            .map(|stats| stats.f1())
            .unwrap_or(0.0)
    }

    /// Micro-average over many evaluations. Name and format are taken from the first scores.
    pub fn aggregate<'a, I: IntoIterator<Item=&'a Scores>>(all_scores: I) -> Scores {
        let mut name = String::new();
        let mut format = String::new();
        let mut per_type: BTreeMap<EvalType, Vec<&'a EvaluatorResults>> = BTreeMap::new();

        for (i, scores) in all_scores.into_iter().enumerate() {
            if i == 0 {
                name = scores.name.clone();
                format = scores.format.clone();
            }
            for (eval_type, res) in &scores.evaluators {
                per_type.entry(*eval_type).or_insert_with(Vec::new).push(res);
            }
        }

        Scores {
            name,
            format,
            evaluators: per_type.into_iter()
                .map(|(eval_type, results)| (eval_type, EvaluatorResults::aggregate(results)))
                .collect(),
        }
    }

    pub fn titles(&self) -> Vec<String> {
        self.evaluators.iter()
            .flat_map(|(eval_type, res)| res.titles().into_iter().map(move |t| format!("{}_{}", eval_type, t)))
            .collect()
    }

    pub fn fields(&self, digits: usize) -> Vec<String> {
        self.evaluators.values()
            .flat_map(|res| res.fields(digits))
            .collect()
    }

    pub fn print(&self, digits: usize) {
        for (eval_type, res) in &self.evaluators {
            println!("Evaluation type: ({})", eval_type);
            res.print(digits);
        }
    }

    pub fn to_dict(&self) -> Value {
        let mut evaluators = ::serde_json::Map::new();
        for (eval_type, res) in &self.evaluators {
            evaluators.insert(eval_type.to_string(), res.to_dict());
        }

        json!({
            "name": self.name,
            "format": self.format,
            "evaluators": Value::Object(evaluators)
        })
    }
}

impl Serialize for Scores {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {

        self.to_dict().serialize(serializer)
    }
}
