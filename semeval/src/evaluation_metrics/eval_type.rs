use std::fmt;
use std::str::FromStr;
use errors::*;

/// Granularity of an evaluation: whether relation labels take part in edge matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvalType {
    Labeled,
    Unlabeled,
}

/// Granularities evaluated when the caller does not ask for specific ones
pub const EVAL_TYPES: [EvalType; 2] = [EvalType::Labeled, EvalType::Unlabeled];

impl EvalType {
    pub fn as_str(&self) -> &'static str {
        match *self {
            EvalType::Labeled => "labeled",
            EvalType::Unlabeled => "unlabeled",
        }
    }
}

impl fmt::Display for EvalType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EvalType {
    type Err = Error;

    fn from_str(s: &str) -> Result<EvalType> {
        match s.trim() {
            "labeled" => Ok(EvalType::Labeled),
            "unlabeled" => Ok(EvalType::Unlabeled),
            _ => bail!("invalid evaluation type `{}`, expect `labeled` or `unlabeled`", s)
        }
    }
}
