use serde_json::Value;
use semgraph::prelude::SemanticGraph;
use errors::*;

/// Turn a raw annotation into the semantic graphs it contains (one per sentence).
///
/// Failures must be reported as errors, the evaluator passes them through untouched.
pub trait GraphConverter<R: ?Sized> {
    fn convert(&self, raw: &R) -> Result<Vec<SemanticGraph>>;
}

impl<R: ?Sized, F> GraphConverter<R> for F where F: Fn(&R) -> Result<Vec<SemanticGraph>> {
    fn convert(&self, raw: &R) -> Result<Vec<SemanticGraph>> {
        self(raw)
    }
}

/// Read graphs from their JSON form: either one graph object or an array of graph objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConverter;

impl GraphConverter<Value> for JsonConverter {
    fn convert(&self, raw: &Value) -> Result<Vec<SemanticGraph>> {
        match *raw {
            Value::Array(ref values) => {
                values.iter().enumerate()
                    .map(|(i, v)| {
                        SemanticGraph::from_dict(v)
                            .chain_err(|| ErrorKind::Conversion(format!("graph at position {} is malformed", i)))
                    })
                    .collect()
            },
            Value::Object(_) => {
                let graph = SemanticGraph::from_dict(raw)
                    .chain_err(|| ErrorKind::Conversion("graph is malformed".to_owned()))?;
                Ok(vec![graph])
            },
            _ => bail!(ErrorKind::Conversion(format!("expect a graph object or an array of graphs, got `{}`", raw)))
        }
    }
}

impl GraphConverter<str> for JsonConverter {
    fn convert(&self, raw: &str) -> Result<Vec<SemanticGraph>> {
        let value: Value = ::serde_json::from_str(raw)
            .chain_err(|| ErrorKind::Conversion("input is not valid json".to_owned()))?;
        GraphConverter::<Value>::convert(self, &value)
    }
}
