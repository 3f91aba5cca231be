use std::collections::BTreeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use prettytable::Table;
use prettytable::format;
use super::constructions::{Construction, PRIMARY};
use super::summary_statistics::SummaryStatistics;

/// Statistics of one evaluation, keyed by construction.
///
/// `default` maps construction names to the constructions reported by `fields` and `print`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EvaluatorResults {
    pub results: BTreeMap<Construction, SummaryStatistics>,
    pub default: BTreeMap<String, Construction>,
}

impl EvaluatorResults {
    pub fn new(results: BTreeMap<Construction, SummaryStatistics>, default: BTreeMap<String, Construction>) -> EvaluatorResults {
        EvaluatorResults { results, default }
    }

    /// Results with a single construction, which is also the default one
    pub fn single(construction: Construction, stats: SummaryStatistics) -> EvaluatorResults {
        let mut default = BTreeMap::new();
        default.insert(construction.name.clone(), construction.clone());
        let mut results = BTreeMap::new();
        results.insert(construction, stats);

        EvaluatorResults { results, default }
    }

    pub fn get(&self, name: &str) -> Option<&SummaryStatistics> {
        match self.default.get(name) {
            Some(construction) => self.results.get(construction),
            None => self.results.iter().find(|&(c, _)| c.name == name).map(|(_, s)| s)
        }
    }

    pub fn primary(&self) -> Option<&SummaryStatistics> {
        self.get(PRIMARY)
    }

    /// Micro-average: sum the counts of every construction across all results
    pub fn aggregate<'a, I: IntoIterator<Item=&'a EvaluatorResults>>(all_results: I) -> EvaluatorResults {
        let mut aggregated = EvaluatorResults::default();
        for res in all_results {
            for (construction, stats) in &res.results {
                *aggregated.results.entry(construction.clone()).or_insert_with(SummaryStatistics::default) += *stats;
            }
            for (name, construction) in &res.default {
                aggregated.default.entry(name.clone()).or_insert_with(|| construction.clone());
            }
        }

        aggregated
    }

    fn iter_default<'a>(&'a self) -> impl Iterator<Item=(&'a Construction, SummaryStatistics)> + 'a {
        self.default.values()
            .map(move |c| (c, self.results.get(c).cloned().unwrap_or_default()))
    }

    pub fn titles(&self) -> Vec<String> {
        self.iter_default()
            .flat_map(|(c, _)| SummaryStatistics::titles().into_iter().map(move |t| format!("{}_{}", c.name, t)))
            .collect()
    }

    pub fn fields(&self, digits: usize) -> Vec<String> {
        self.iter_default()
            .flat_map(|(_, stats)| stats.fields(digits))
            .collect()
    }

    pub fn to_table(&self, digits: usize) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row!["construction", "precision", "recall", "f1", "matched", "guessed", "reference"]);
        for (construction, stats) in self.iter_default() {
            let fields = stats.fields(digits);
            table.add_row(row![construction.name, fields[0], fields[1], fields[2], stats.num_matches, stats.num_guessed(), stats.num_ref()]);
        }

        table
    }

    pub fn print(&self, digits: usize) {
        self.to_table(digits).printstd();
    }

    pub fn to_dict(&self) -> Value {
        let mut results = ::serde_json::Map::new();
        for (construction, stats) in &self.results {
            results.insert(construction.name.clone(), json!({
                "description": construction.description,
                "num_matches": stats.num_matches,
                "num_only_guessed": stats.num_only_guessed,
                "num_only_ref": stats.num_only_ref,
                "precision": stats.precision(),
                "recall": stats.recall(),
                "f1": stats.f1()
            }));
        }

        json!({
            "results": Value::Object(results),
            "default": self.default.keys().collect::<Vec<_>>()
        })
    }
}

impl Serialize for EvaluatorResults {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {

        self.to_dict().serialize(serializer)
    }
}
