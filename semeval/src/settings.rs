use std::fmt;
use evaluation_metrics::sdp::{EvalType, EVAL_TYPES};

#[derive(Clone, Deserialize, Debug)]
pub struct ReportConf {
    /// number of decimals used when scores are printed or exported
    #[serde(default = "ReportConf::default_precision")]
    pub precision: usize,
}

impl ReportConf {
    fn default_precision() -> usize {
        3
    }

    pub fn default() -> ReportConf {
        ReportConf {
            precision: ReportConf::default_precision()
        }
    }
}

#[derive(Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "Settings::default_eval_types")]
    pub eval_types: Vec<EvalType>,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "ReportConf::default")]
    pub report: ReportConf,
}

impl Settings {
    pub fn default() -> Settings {
        Settings {
            eval_types: Settings::default_eval_types(),
            verbose: false,
            report: ReportConf::default(),
        }
    }

    fn default_eval_types() -> Vec<EvalType> {
        EVAL_TYPES.to_vec()
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, r#"
****************************** SETTINGS ******************************
eval_types: {:?}
verbose: {}
report: {:?}
**********************************************************************
"#,
    self.eval_types,
    self.verbose,
    self.report)
    }
}
