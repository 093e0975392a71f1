use thiserror::Error;

/// Error types for the weight-algebra library.
#[derive(Error, Debug)]
pub enum WeightError {
    /// A parameter reference that no definition resolves.
    #[error("Unbound parameter: {name}")]
    UnboundParameter { name: String },

    /// A parameter whose definition eventually refers back to itself.
    #[error("Circular definition for parameter '{name}'")]
    CyclicDefinition { name: String },

    /// An operator tag outside the closed operator set.
    #[error("Unknown operator: {op}")]
    UnknownOperator { op: String },

    /// An operator node with the wrong number of children.
    #[error("Operator '{op}' expects {expected} operand(s), found {found}")]
    InvalidArity {
        op: String,
        expected: usize,
        found: usize,
    },

    /// Failure to read an expression from text.
    #[error("Failed to parse expression: {message}")]
    Parse { message: String },

    /// I/O error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for weight-algebra operations.
pub type Result<T> = std::result::Result<T, WeightError>;
