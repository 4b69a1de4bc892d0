/// Everything that can go wrong when building or combining intervals.
/// None of these are transient: the caller has to change its inputs.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("start {start} is greater than end {end}")]
    ReversedEdges { start: String, end: String },

    #[error("interval contains no value")]
    EmptyInterval,

    #[error("{left} and {right} are separated, the result is not contiguous")]
    SeparatedIntervals { left: String, right: String },

    #[error("removing {subtrahend} from {minuend} leaves two disjoint pieces")]
    InconsistentSubtraction { minuend: String, subtrahend: String },

    #[error("no interval given")]
    EmptyInput,

    #[error("malformed interval {text:?}: {reason}")]
    MalformedNotation { text: String, reason: &'static str },

    #[error("invalid bound {text:?}: {reason}")]
    InvalidBound { text: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(text: &str, reason: &'static str) -> Self {
        Error::MalformedNotation {
            text: text.to_string(),
            reason,
        }
    }

    pub(crate) fn invalid_bound(text: &str, reason: impl ToString) -> Self {
        Error::InvalidBound {
            text: text.to_string(),
            reason: reason.to_string(),
        }
    }
}
