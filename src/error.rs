use std::fmt::{self, Display};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Which required request of a detail aggregation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationStep {
    Pokemon,
    Species,
}

impl Display for AggregationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregationStep::Pokemon => f.write_str("pokemon record"),
            AggregationStep::Species => f.write_str("species record"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("upstream returned status {status} for {url}")]
    Fetch { url: String, status: u16 },

    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("failed to decode response from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("failed to load {step}: {source}")]
    Aggregation {
        step: AggregationStep,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn aggregation(step: AggregationStep) -> impl FnOnce(Error) -> Error {
        move |source| Error::Aggregation {
            step,
            source: Box::new(source),
        }
    }

    /// True when the upstream (or the wrapped upstream error) answered 404.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Fetch { status, .. } => *status == 404,
            Error::Aggregation { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// URL of the request that failed.
    pub fn url(&self) -> &str {
        match self {
            Error::Fetch { url, .. } | Error::Network { url, .. } | Error::Decode { url, .. } => {
                url
            }
            Error::Aggregation { source, .. } => source.url(),
        }
    }
}
