use thiserror::Error;

/// Errors that may occur when evaluating air properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The requested temperature is outside the model's valid domain.
    ///
    /// For example, a non-finite value or one at or below absolute zero.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// A fixed property set contains a non-physical value.
    #[error("invalid property: {context}")]
    InvalidProperty { context: String },
}
