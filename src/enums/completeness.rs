use std::fmt;

/// Whether a search walked every page it needed or stopped on a failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completeness {
    Complete,
    Partial {
        page: u32,
        reason: String,
    },
}

impl fmt::Display for Completeness {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Completeness::Complete => write!(f, "complete"),
            Completeness::Partial { page, reason } => write!(f, "partial (stopped at page {}: {})", page, reason),
        }
    }
}
