use std::fmt;

/// A scoring category. Results are keyed by construction so that evaluators can report
/// several kinds of edges side by side, SDP evaluation only fills the primary one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Construction {
    pub name: String,
    pub description: String,
}

pub const PRIMARY: &str = "primary";

impl Construction {
    pub fn new(name: &str, description: &str) -> Construction {
        Construction { name: name.to_owned(), description: description.to_owned() }
    }

    pub fn primary() -> Construction {
        Construction::new(PRIMARY, "Regular edges")
    }
}

impl fmt::Display for Construction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
