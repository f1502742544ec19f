pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Malformed {content_type} body: {source}")]
    Format {
        content_type: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read body stream: {0}")]
    Stream(#[from] std::io::Error),
}

/// Structural problems with a diagram's event log, detected when its model is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("no events are defined")]
    NoEvents,

    #[error("final event should be a response type")]
    FinalEventNotResponse,
}
