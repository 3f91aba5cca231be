pub mod constructions;
pub mod summary_statistics;
pub mod evaluator_results;
pub mod eval_type;
pub mod scores;
pub mod sdp;

pub use self::constructions::{Construction, PRIMARY};
pub use self::summary_statistics::SummaryStatistics;
pub use self::evaluator_results::EvaluatorResults;
pub use self::eval_type::{EvalType, EVAL_TYPES};
pub use self::scores::Scores;
